// Franchise domain model
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Franchise {
    pub franchise_id: u32,
    pub first_season_id: u32,
    pub most_recent_team_id: u32,
    pub team_name: String,
    pub location_name: String,
    #[allow(dead_code)]
    pub link: String,
    /// Only set for franchises that no longer play.
    pub last_season_id: Option<u32>,
}

impl Franchise {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.location_name, self.team_name)
    }
}

impl fmt::Display for Franchise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t(first season {}, most recent team {}",
            self.franchise_id,
            self.full_name(),
            self.first_season_id,
            self.most_recent_team_id
        )?;
        if let Some(last) = self.last_season_id {
            write!(f, ", last season {}", last)?;
        }
        write!(f, ")")
    }
}
