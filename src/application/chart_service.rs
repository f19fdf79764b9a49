// Chart service - Resolves players, fans out one task per player and folds the results
use crate::application::stats_repository::StatsRepository;
use crate::domain::axis::AxisRange;
use crate::domain::error::StatsResult;
use crate::domain::person::PersonId;
use crate::domain::series::{build_series, PlayerSeries};
use crate::domain::stat::Stat;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

pub const DEFAULT_TICK_COUNT: usize = 8;

/// Everything the renderer needs for one image.
#[derive(Debug, Clone)]
pub struct Chart {
    pub y_title: String,
    pub series: Vec<PlayerSeries>,
    pub axis: AxisRange,
}

struct PlayerOutcome {
    index: usize,
    player_id: PersonId,
    result: StatsResult<PlayerSeries>,
}

#[derive(Clone)]
pub struct ChartService {
    repository: Arc<dyn StatsRepository>,
    tick_count: usize,
}

impl ChartService {
    pub fn new(repository: Arc<dyn StatsRepository>, tick_count: usize) -> Self {
        Self {
            repository,
            tick_count,
        }
    }

    /// Roster players first (when a team is given), then the explicit ids.
    /// Duplicates are kept. A roster failure aborts the run.
    pub async fn resolve_player_ids(
        &self,
        team_id: Option<u32>,
        explicit: &[PersonId],
    ) -> StatsResult<Vec<PersonId>> {
        let mut player_ids = Vec::new();

        if let Some(team_id) = team_id {
            let roster_ids = self.repository.get_team_player_ids(team_id).await?;
            tracing::info!("Team {} roster has {} players", team_id, roster_ids.len());
            player_ids.extend(roster_ids);
        }

        player_ids.extend_from_slice(explicit);
        Ok(player_ids)
    }

    pub async fn build_chart(
        &self,
        y_title: &str,
        stat: Stat,
        player_ids: Vec<PersonId>,
    ) -> StatsResult<Chart> {
        let start_time = Instant::now();
        let player_count = player_ids.len();
        let (tx, mut rx) = mpsc::channel(player_count.max(1));

        for (index, player_id) in player_ids.into_iter().enumerate() {
            let tx = tx.clone();
            let repo = self.repository.clone();

            tokio::spawn(async move {
                let result = fetch_player_series(repo, player_id, stat).await;
                let _ = tx
                    .send(PlayerOutcome {
                        index,
                        player_id,
                        result,
                    })
                    .await;
            });
        }
        // The reducer below stops once every task has dropped its sender
        drop(tx);

        let mut collected = Vec::with_capacity(player_count);
        let mut y_min = f64::INFINITY;
        let mut y_max = 0f64;

        while let Some(outcome) = rx.recv().await {
            match outcome.result {
                Ok(series) => {
                    if series.is_empty() {
                        tracing::debug!("Player {} has no games", outcome.player_id);
                    } else {
                        y_min = y_min.min(series.min);
                        y_max = y_max.max(series.max);
                    }
                    collected.push((outcome.index, series));
                }
                Err(e) => {
                    tracing::warn!("Dropping player {}: {}", outcome.player_id, e);
                }
            }
        }

        collected.sort_by_key(|(index, _)| *index);
        let series: Vec<PlayerSeries> = collected.into_iter().map(|(_, s)| s).collect();

        tracing::info!(
            "Built {} of {} series in {} ms",
            series.len(),
            player_count,
            start_time.elapsed().as_millis()
        );

        Ok(Chart {
            y_title: y_title.to_string(),
            series,
            axis: AxisRange::new(y_min, y_max, self.tick_count)?,
        })
    }
}

async fn fetch_player_series(
    repository: Arc<dyn StatsRepository>,
    player_id: PersonId,
    stat: Stat,
) -> StatsResult<PlayerSeries> {
    let (person, log) = futures::try_join!(
        repository.get_person(player_id),
        repository.get_game_log(player_id)
    )?;
    tracing::debug!("Fetched {} games for {}", log.len(), person.display_name());
    build_series(person.display_name(), &log, stat.selector())
}
