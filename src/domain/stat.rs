// Stat selection - maps a user supplied token onto a game log field
use super::game_log::GameLogEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Points,
    Goals,
    Assists,
    PlusMinus,
    PowerPlayGoals,
    PowerPlayPoints,
    ShortHandedGoals,
    ShortHandedPoints,
    Shots,
    PenaltyMinutes,
    GameWinningGoals,
    OvertimeGoals,
}

/// Result of resolving a stat token. `matched` is false when the token was
/// not recognised and the selection fell back to points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatSelection {
    pub stat: Stat,
    pub matched: bool,
}

impl Stat {
    /// Resolve a token case-insensitively. Whitespace is significant.
    pub fn select(token: &str) -> StatSelection {
        let stat = match token.to_uppercase().as_str() {
            "POINTS" | "P" => Some(Stat::Points),
            "GOALS" | "G" => Some(Stat::Goals),
            "ASSISTS" | "A" => Some(Stat::Assists),
            "PLUSMINUS" => Some(Stat::PlusMinus),
            "PPG" => Some(Stat::PowerPlayGoals),
            "PPP" => Some(Stat::PowerPlayPoints),
            "SHG" => Some(Stat::ShortHandedGoals),
            "SHP" => Some(Stat::ShortHandedPoints),
            "SHOTS" => Some(Stat::Shots),
            "PIM" => Some(Stat::PenaltyMinutes),
            "GWG" => Some(Stat::GameWinningGoals),
            "OTG" => Some(Stat::OvertimeGoals),
            _ => None,
        };

        StatSelection {
            stat: stat.unwrap_or(Stat::Points),
            matched: stat.is_some(),
        }
    }

    pub fn value(self, entry: &GameLogEntry) -> i64 {
        let stats = &entry.stats;
        match self {
            Stat::Points => stats.points,
            Stat::Goals => stats.goals,
            Stat::Assists => stats.assists,
            Stat::PlusMinus => stats.plus_minus,
            Stat::PowerPlayGoals => stats.power_play_goals,
            Stat::PowerPlayPoints => stats.power_play_points,
            Stat::ShortHandedGoals => stats.short_handed_goals,
            Stat::ShortHandedPoints => stats.short_handed_points,
            Stat::Shots => stats.shots,
            Stat::PenaltyMinutes => stats.pim,
            Stat::GameWinningGoals => stats.game_winning_goals,
            Stat::OvertimeGoals => stats.overtime_goals,
        }
    }

    pub fn selector(self) -> impl Fn(&GameLogEntry) -> i64 + Copy {
        move |entry| self.value(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::game_log::GameStats;

    fn entry() -> GameLogEntry {
        GameLogEntry::new(
            "2019-01-05",
            GameStats {
                points: 1,
                goals: 2,
                assists: 3,
                plus_minus: -4,
                power_play_goals: 5,
                power_play_points: 6,
                short_handed_goals: 7,
                short_handed_points: 8,
                shots: 9,
                pim: 10,
                game_winning_goals: 11,
                overtime_goals: 12,
            },
        )
    }

    #[test]
    fn test_select_is_case_insensitive() {
        for token in ["goals", "GOALS", "Goals", "g", "G"] {
            let selection = Stat::select(token);
            assert_eq!(selection.stat, Stat::Goals, "token {token}");
            assert!(selection.matched);
        }
    }

    #[test]
    fn test_short_codes() {
        let entry = entry();
        let cases = [
            ("p", 1),
            ("a", 3),
            ("plusminus", -4),
            ("ppg", 5),
            ("PPP", 6),
            ("shg", 7),
            ("SHP", 8),
            ("shots", 9),
            ("pim", 10),
            ("gwg", 11),
            ("OTG", 12),
        ];
        for (token, expected) in cases {
            let selection = Stat::select(token);
            assert!(selection.matched, "token {token}");
            assert_eq!(selection.stat.value(&entry), expected, "token {token}");
        }
    }

    #[test]
    fn test_unknown_token_falls_back_to_points() {
        let selection = Stat::select("hits");
        assert_eq!(selection.stat, Stat::Points);
        assert!(!selection.matched);

        let selector = selection.stat.selector();
        assert_eq!(selector(&entry()), 1);
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let selection = Stat::select(" goals");
        assert_eq!(selection.stat, Stat::Points);
        assert!(!selection.matched);
    }
}
