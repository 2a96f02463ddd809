use serde::{Deserialize, Serialize};

/// Lifetime numbers shown on the profile's general tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub tournaments_played: u32,
    pub tournament_wins: u32,
    pub runner_up: u32,
    /// Rating earned in rated tournament play
    pub tournament_rating: u32,
    /// Positive for consecutive wins, negative for consecutive losses
    pub streak: i32,
    pub event_formats: Vec<FormatCount>,
}

/// Events played under one pairing format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatCount {
    pub format: String,
    pub events: u32,
}

impl ProfileStats {
    /// Whole-number percentage of matches won; zero before any game.
    pub fn win_rate(&self) -> u32 {
        if self.matches_played == 0 {
            return 0;
        }
        (self.wins * 100 + self.matches_played / 2) / self.matches_played
    }

    /// "4W", "2L", or "-" with no streak running
    pub fn streak_label(&self) -> String {
        match self.streak {
            0 => "-".to_string(),
            n if n > 0 => format!("{}W", n),
            n => format!("{}L", n.unsigned_abs()),
        }
    }
}

/// The signed-in player as shown on `/profile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub email: String,
    pub rating: u32,
    pub chessa_id: String,
    pub fide_id: Option<String>,
    pub club: String,
    pub member_since: String,
    pub address: String,
    pub stats: ProfileStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn stats(matches_played: u32, wins: u32) -> ProfileStats {
        ProfileStats {
            matches_played,
            wins,
            draws: 0,
            losses: matches_played - wins,
            tournaments_played: 0,
            tournament_wins: 0,
            runner_up: 0,
            tournament_rating: 0,
            streak: 0,
            event_formats: Vec::new(),
        }
    }

    #[test_case(0, 0 => 0 ; "no games")]
    #[test_case(47, 32 => 68)]
    #[test_case(3, 1 => 33)]
    #[test_case(2, 1 => 50)]
    fn test_win_rate(played: u32, wins: u32) -> u32 {
        stats(played, wins).win_rate()
    }

    #[test_case(4 => "4W")]
    #[test_case(-2 => "2L")]
    #[test_case(0 => "-")]
    fn test_streak_label(streak: i32) -> String {
        ProfileStats { streak, ..stats(1, 1) }.streak_label()
    }
}
