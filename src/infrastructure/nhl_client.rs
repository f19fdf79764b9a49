// NHL stats API client
use crate::application::stats_repository::StatsRepository;
use crate::domain::error::{StatsError, StatsResult};
use crate::domain::franchise::Franchise;
use crate::domain::game_log::{GameLogEntry, GameStats};
use crate::domain::person::{Person, PersonId, RosterEntry};
use crate::infrastructure::config::expand_endpoint;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

const PERSON_ENDPOINT: &str = "people/${id}";
const GAME_LOG_ENDPOINT: &str = "people/${id}/stats?stats=gameLog";
const ROSTER_ENDPOINT: &str = "teams/${team}/roster";
const FRANCHISES_ENDPOINT: &str = "franchises";
const FRANCHISE_ENDPOINT: &str = "franchises/${id}";

#[derive(Debug, Clone)]
pub struct NhlClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PeopleResponse {
    #[serde(default)]
    people: Vec<PersonRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonRecord {
    id: PersonId,
    // Roster entries only carry fullName
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
}

#[derive(Debug, Deserialize)]
struct StatsResponse {
    #[serde(default)]
    stats: Vec<StatsGroup>,
}

#[derive(Debug, Deserialize)]
struct StatsGroup {
    #[serde(default)]
    splits: Vec<Split>,
}

#[derive(Debug, Deserialize)]
struct Split {
    date: String,
    #[serde(default)]
    stat: StatRecord,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StatRecord {
    points: i64,
    goals: i64,
    assists: i64,
    plus_minus: i64,
    power_play_goals: i64,
    power_play_points: i64,
    short_handed_goals: i64,
    short_handed_points: i64,
    shots: i64,
    pim: i64,
    game_winning_goals: i64,
    #[serde(rename = "overTimeGoals")]
    overtime_goals: i64,
}

#[derive(Debug, Deserialize)]
struct RosterResponse {
    #[serde(default)]
    roster: Vec<RosterRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RosterRecord {
    person: PersonRecord,
    #[serde(default)]
    jersey_number: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FranchisesResponse {
    #[serde(default)]
    franchises: Vec<FranchiseRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FranchiseRecord {
    franchise_id: u32,
    first_season_id: u32,
    most_recent_team_id: u32,
    team_name: String,
    location_name: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    last_season_id: Option<u32>,
}

impl From<PersonRecord> for Person {
    fn from(record: PersonRecord) -> Self {
        Person::new(record.id, record.first_name, record.last_name)
    }
}

impl From<Split> for GameLogEntry {
    fn from(split: Split) -> Self {
        let stat = split.stat;
        GameLogEntry::new(
            split.date,
            GameStats {
                points: stat.points,
                goals: stat.goals,
                assists: stat.assists,
                plus_minus: stat.plus_minus,
                power_play_goals: stat.power_play_goals,
                power_play_points: stat.power_play_points,
                short_handed_goals: stat.short_handed_goals,
                short_handed_points: stat.short_handed_points,
                shots: stat.shots,
                pim: stat.pim,
                game_winning_goals: stat.game_winning_goals,
                overtime_goals: stat.overtime_goals,
            },
        )
    }
}

impl From<FranchiseRecord> for Franchise {
    fn from(record: FranchiseRecord) -> Self {
        Franchise {
            franchise_id: record.franchise_id,
            first_season_id: record.first_season_id,
            most_recent_team_id: record.most_recent_team_id,
            team_name: record.team_name,
            location_name: record.location_name,
            link: record.link,
            last_season_id: record.last_season_id,
        }
    }
}

impl NhlClient {
    pub fn new(base_url: &str, timeout: Duration) -> StatsResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| StatsError::Transport {
                url: base_url.clone(),
                source,
            })?;

        Ok(Self { client, base_url })
    }

    fn build_url(&self, template: &str, vars: &[(&'static str, String)]) -> String {
        let vars: HashMap<&str, String> = vars.iter().cloned().collect();
        format!("{}/{}", self.base_url, expand_endpoint(template, &vars))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> StatsResult<T> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| StatsError::Transport {
                url: url.to_string(),
                source,
            })?;

        if response.status() != StatusCode::OK {
            return Err(StatsError::RemoteStatus {
                url: url.to_string(),
                status: response.status().to_string(),
            });
        }

        let body = response.text().await.map_err(|source| StatsError::Transport {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| StatsError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl StatsRepository for NhlClient {
    async fn get_person(&self, id: PersonId) -> StatsResult<Person> {
        let url = self.build_url(PERSON_ENDPOINT, &[("id", id.to_string())]);
        let response: PeopleResponse = self.get_json(&url).await?;

        response
            .people
            .into_iter()
            .next()
            .map(Person::from)
            .ok_or_else(|| StatsError::NotFound(format!("player {}", id)))
    }

    async fn get_game_log(&self, id: PersonId) -> StatsResult<Vec<GameLogEntry>> {
        let url = self.build_url(GAME_LOG_ENDPOINT, &[("id", id.to_string())]);
        let response: StatsResponse = self.get_json(&url).await?;

        let group = response
            .stats
            .into_iter()
            .next()
            .ok_or_else(|| StatsError::NotFound(format!("game log for player {}", id)))?;

        Ok(group.splits.into_iter().map(GameLogEntry::from).collect())
    }

    async fn get_team_roster(&self, team_id: u32) -> StatsResult<Vec<RosterEntry>> {
        let url = self.build_url(ROSTER_ENDPOINT, &[("team", team_id.to_string())]);
        let response: RosterResponse = self.get_json(&url).await?;

        Ok(response
            .roster
            .into_iter()
            .map(|record| RosterEntry {
                person: record.person.into(),
                jersey_number: record.jersey_number,
            })
            .collect())
    }

    async fn get_franchises(&self) -> StatsResult<Vec<Franchise>> {
        let url = self.build_url(FRANCHISES_ENDPOINT, &[]);
        let response: FranchisesResponse = self.get_json(&url).await?;

        Ok(response.franchises.into_iter().map(Franchise::from).collect())
    }

    async fn get_franchise(&self, franchise_id: u32) -> StatsResult<Franchise> {
        let url = self.build_url(FRANCHISE_ENDPOINT, &[("id", franchise_id.to_string())]);
        let response: FranchisesResponse = self.get_json(&url).await?;

        // Exactly one franchise is expected for an id lookup
        let mut franchises = response.franchises;
        if franchises.len() != 1 {
            return Err(StatsError::NotFound(format!("franchise {}", franchise_id)));
        }
        Ok(franchises.remove(0).into())
    }
}
