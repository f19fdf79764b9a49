// Cumulative series domain models and builder
use super::error::{StatsError, StatsResult};
use super::game_log::GameLogEntry;
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: i64,
}

impl SeriesPoint {
    pub fn new(date: NaiveDate, value: i64) -> Self {
        Self { date, value }
    }
}

/// One line on the chart. `min` starts at +inf and `max` at 0, so an empty
/// series keeps those sentinels and must not be folded into a global range.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSeries {
    pub label: String,
    pub points: Vec<SeriesPoint>,
    pub min: f64,
    pub max: f64,
}

impl PlayerSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }
}

/// Build the running total of `selector` over a game log received most recent first.
pub fn build_series<F>(label: String, log: &[GameLogEntry], selector: F) -> StatsResult<PlayerSeries>
where
    F: Fn(&GameLogEntry) -> i64,
{
    let mut points = Vec::with_capacity(log.len());
    let mut plot = 0i64;
    let mut min = f64::INFINITY;
    let mut max = 0f64;

    for entry in log.iter().rev() {
        let date = NaiveDate::parse_from_str(&entry.date, DATE_FORMAT).map_err(|source| {
            StatsError::InvalidDate {
                date: entry.date.clone(),
                source,
            }
        })?;

        plot += selector(entry);
        min = min.min(plot as f64);
        max = max.max(plot as f64);
        points.push(SeriesPoint::new(date, plot));
    }

    Ok(PlayerSeries {
        label,
        points,
        min,
        max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::game_log::GameStats;
    use crate::domain::stat::Stat;
    use pretty_assertions::assert_eq;

    fn game(date: &str, points: i64, plus_minus: i64) -> GameLogEntry {
        GameLogEntry::new(
            date,
            GameStats {
                points,
                plus_minus,
                ..GameStats::default()
            },
        )
    }

    // Most recent first, as the API sends it
    fn three_game_log() -> Vec<GameLogEntry> {
        vec![
            game("2019-01-10", 1, -2),
            game("2019-01-08", 0, 1),
            game("2019-01-05", 2, -1),
        ]
    }

    #[test]
    fn test_cumulative_points() {
        let series = build_series(
            "McDavid, Connor".to_string(),
            &three_game_log(),
            Stat::Points.selector(),
        )
        .unwrap();

        let values: Vec<i64> = series.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![2, 2, 3]);
        assert_eq!(series.min, 2.0);
        assert_eq!(series.max, 3.0);
        assert_eq!(series.label, "McDavid, Connor");
    }

    #[test]
    fn test_dates_are_chronological() {
        let series = build_series("x".to_string(), &three_game_log(), Stat::Points.selector()).unwrap();

        assert_eq!(series.points.len(), 3);
        assert!(series.points.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(series.first_date(), NaiveDate::from_ymd_opt(2019, 1, 5));
        assert_eq!(series.last_date(), NaiveDate::from_ymd_opt(2019, 1, 10));
    }

    #[test]
    fn test_plus_minus_can_go_down() {
        let series = build_series("x".to_string(), &three_game_log(), Stat::PlusMinus.selector()).unwrap();

        let values: Vec<i64> = series.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![-1, 0, -2]);
        assert_eq!(series.min, -2.0);
        // max starts at zero
        assert_eq!(series.max, 0.0);
    }

    #[test]
    fn test_single_game() {
        let log = vec![game("2019-01-05", 3, 0)];
        let series = build_series("x".to_string(), &log, Stat::Points.selector()).unwrap();
        assert_eq!(series.min, 3.0);
        assert_eq!(series.max, 3.0);
    }

    #[test]
    fn test_empty_log() {
        let series = build_series("x".to_string(), &[], Stat::Points.selector()).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.min, f64::INFINITY);
        assert_eq!(series.max, 0.0);
        assert_eq!(series.first_date(), None);
    }

    #[test]
    fn test_invalid_date() {
        let log = vec![game("2019-01-05", 1, 0), game("05/01/2019", 1, 0)];
        let err = build_series("x".to_string(), &log, Stat::Points.selector()).unwrap_err();
        match err {
            StatsError::InvalidDate { date, .. } => assert_eq!(date, "05/01/2019"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_build_is_repeatable() {
        let log = three_game_log();
        let first = build_series("x".to_string(), &log, Stat::Goals.selector()).unwrap();
        let second = build_series("x".to_string(), &log, Stat::Goals.selector()).unwrap();
        assert_eq!(first, second);
    }
}
