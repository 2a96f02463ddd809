use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter::{HasStatus, Searchable, StatusBucket};

/// Lifecycle of a league season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeagueStatus {
    Active,
    Upcoming,
    Completed,
    Archived,
}

impl LeagueStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LeagueStatus::Active => "Active",
            LeagueStatus::Upcoming => "Upcoming",
            LeagueStatus::Completed => "Completed",
            LeagueStatus::Archived => "Archived",
        }
    }
}

/// Dashboard tabs of the leagues view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeagueBucket {
    Active,
    Upcoming,
    Completed,
}

impl StatusBucket for LeagueBucket {
    type Status = LeagueStatus;

    const ALL: &'static [Self] = &[LeagueBucket::Active, LeagueBucket::Upcoming, LeagueBucket::Completed];

    fn of(status: LeagueStatus) -> Self {
        match status {
            LeagueStatus::Active => LeagueBucket::Active,
            LeagueStatus::Upcoming => LeagueBucket::Upcoming,
            LeagueStatus::Completed | LeagueStatus::Archived => LeagueBucket::Completed,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LeagueBucket::Active => "Active",
            LeagueBucket::Upcoming => "Upcoming",
            LeagueBucket::Completed => "Completed",
        }
    }
}

/// A rating band inside a league
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionDetail {
    pub name: String,
    /// Free text, e.g. "1800+" or "Team average 1500-1699"
    pub rating_range: String,
    pub players: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub player: String,
    /// Half points are stored doubled so the type stays `Eq`.
    pub half_points: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub rating: u32,
}

impl LeaderboardEntry {
    pub fn points(&self) -> f32 {
        self.half_points as f32 / 2.0
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }
}

/// A recurring multi-division competition with member registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub divisions: u32,
    pub players: u32,
    pub status: LeagueStatus,
    pub registration_open: bool,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub registration_close: NaiveDate,
    pub match_schedule: String,
    pub venue: String,
    pub format: String,
    /// Rand, whole units
    pub entry_fee: u32,
    pub prizes: String,
    pub division_details: Vec<DivisionDetail>,
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl HasStatus for League {
    type Status = LeagueStatus;

    fn status(&self) -> LeagueStatus {
        self.status
    }
}

impl Searchable for League {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&LeagueStatus::Archived).unwrap();
        assert_eq!(json, "\"archived\"");
        let status: LeagueStatus = serde_json::from_str("\"upcoming\"").unwrap();
        assert_eq!(status, LeagueStatus::Upcoming);
    }

    #[test]
    fn test_archived_lands_in_completed_tab() {
        assert_eq!(LeagueBucket::of(LeagueStatus::Archived), LeagueBucket::Completed);
        assert_eq!(LeagueBucket::of(LeagueStatus::Completed), LeagueBucket::Completed);
        assert_eq!(LeagueBucket::of(LeagueStatus::Active), LeagueBucket::Active);
    }

    #[test]
    fn test_leaderboard_points() {
        let entry = LeaderboardEntry {
            rank: 1,
            player: "Thandi M.".to_string(),
            half_points: 13,
            wins: 6,
            draws: 1,
            losses: 1,
            rating: 1912,
        };
        assert_eq!(entry.points(), 6.5);
        assert_eq!(entry.games_played(), 8);
    }
}
