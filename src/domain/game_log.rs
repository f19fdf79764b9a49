// Game log domain models

/// Counting stats for a single game. Skater-only fields are zero in goalie logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameStats {
    pub points: i64,
    pub goals: i64,
    pub assists: i64,
    pub plus_minus: i64,
    pub power_play_goals: i64,
    pub power_play_points: i64,
    pub short_handed_goals: i64,
    pub short_handed_points: i64,
    pub shots: i64,
    pub pim: i64,
    pub game_winning_goals: i64,
    pub overtime_goals: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLogEntry {
    /// Calendar date as sent by the API (`YYYY-MM-DD`), parsed when the series is built.
    pub date: String,
    pub stats: GameStats,
}

impl GameLogEntry {
    pub fn new(date: impl Into<String>, stats: GameStats) -> Self {
        Self {
            date: date.into(),
            stats,
        }
    }
}
