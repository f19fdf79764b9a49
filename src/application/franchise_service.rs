// Franchise service - Use case for franchise lookups
use crate::application::stats_repository::StatsRepository;
use crate::domain::franchise::Franchise;
use std::sync::Arc;

#[derive(Clone)]
pub struct FranchiseService {
    repository: Arc<dyn StatsRepository>,
}

impl FranchiseService {
    pub fn new(repository: Arc<dyn StatsRepository>) -> Self {
        Self { repository }
    }

    /// All franchises, or only `franchise_id` when given.
    pub async fn list_franchises(&self, franchise_id: Option<u32>) -> anyhow::Result<Vec<Franchise>> {
        let franchises = match franchise_id {
            Some(id) => vec![self.repository.get_franchise(id).await?],
            None => self.repository.get_franchises().await?,
        };
        tracing::debug!("Fetched {} franchises", franchises.len());
        Ok(franchises)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{StatsError, StatsResult};
    use crate::domain::game_log::GameLogEntry;
    use crate::domain::person::{Person, PersonId, RosterEntry};
    use async_trait::async_trait;

    struct FixedFranchises(Vec<Franchise>);

    #[async_trait]
    impl StatsRepository for FixedFranchises {
        async fn get_person(&self, id: PersonId) -> StatsResult<Person> {
            Err(StatsError::NotFound(format!("player {}", id)))
        }

        async fn get_game_log(&self, id: PersonId) -> StatsResult<Vec<GameLogEntry>> {
            Err(StatsError::NotFound(format!("game log for player {}", id)))
        }

        async fn get_team_roster(&self, team_id: u32) -> StatsResult<Vec<RosterEntry>> {
            Err(StatsError::NotFound(format!("team {}", team_id)))
        }

        async fn get_franchises(&self) -> StatsResult<Vec<Franchise>> {
            Ok(self.0.clone())
        }

        async fn get_franchise(&self, franchise_id: u32) -> StatsResult<Franchise> {
            self.0
                .iter()
                .find(|f| f.franchise_id == franchise_id)
                .cloned()
                .ok_or_else(|| StatsError::NotFound(format!("franchise {}", franchise_id)))
        }
    }

    fn franchise(id: u32, team_name: &str) -> Franchise {
        Franchise {
            franchise_id: id,
            first_season_id: 19171918,
            most_recent_team_id: id + 5,
            team_name: team_name.to_string(),
            location_name: "Somewhere".to_string(),
            link: format!("/api/v1/franchises/{}", id),
            last_season_id: None,
        }
    }

    fn service() -> FranchiseService {
        FranchiseService::new(Arc::new(FixedFranchises(vec![
            franchise(1, "Canadiens"),
            franchise(5, "Maple Leafs"),
        ])))
    }

    #[tokio::test]
    async fn test_list_all_franchises() {
        let franchises = service().list_franchises(None).await.unwrap();
        assert_eq!(franchises.len(), 2);
    }

    #[tokio::test]
    async fn test_single_franchise() {
        let franchises = service().list_franchises(Some(5)).await.unwrap();
        assert_eq!(franchises, vec![franchise(5, "Maple Leafs")]);

        assert!(service().list_franchises(Some(42)).await.is_err());
    }
}
