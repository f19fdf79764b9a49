// Repository trait for remote stats access
use crate::domain::error::StatsResult;
use crate::domain::franchise::Franchise;
use crate::domain::game_log::GameLogEntry;
use crate::domain::person::{Person, PersonId, RosterEntry};
use async_trait::async_trait;

#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Look up a single person
    async fn get_person(&self, id: PersonId) -> StatsResult<Person>;

    /// Regular season game log, most recent game first
    async fn get_game_log(&self, id: PersonId) -> StatsResult<Vec<GameLogEntry>>;

    /// Current roster of a team
    async fn get_team_roster(&self, team_id: u32) -> StatsResult<Vec<RosterEntry>>;

    async fn get_franchises(&self) -> StatsResult<Vec<Franchise>>;

    async fn get_franchise(&self, franchise_id: u32) -> StatsResult<Franchise>;

    /// Person ids on a team's roster, in roster order
    async fn get_team_player_ids(&self, team_id: u32) -> StatsResult<Vec<PersonId>> {
        let roster = self.get_team_roster(team_id).await?;
        Ok(roster.into_iter().map(|entry| entry.person.id).collect())
    }
}
