use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::filter::{HasStatus, Searchable, StatusBucket};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    Pending,
    PendingConfirmation,
    PendingResult,
    Completed,
}

impl MatchStatus {
    /// Label of the call to action shown on a pending match card
    pub fn action_label(&self) -> Option<&'static str> {
        match self {
            MatchStatus::Pending => Some("Schedule"),
            MatchStatus::PendingConfirmation => Some("Confirm"),
            MatchStatus::PendingResult => Some("Confirm Result"),
            MatchStatus::Scheduled | MatchStatus::Completed => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "Scheduled",
            MatchStatus::Pending => "Awaiting scheduling",
            MatchStatus::PendingConfirmation => "Awaiting confirmation",
            MatchStatus::PendingResult => "Awaiting result",
            MatchStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBucket {
    Upcoming,
    Pending,
    Completed,
}

impl StatusBucket for MatchBucket {
    type Status = MatchStatus;

    const ALL: &'static [Self] = &[MatchBucket::Upcoming, MatchBucket::Pending, MatchBucket::Completed];

    fn of(status: MatchStatus) -> Self {
        match status {
            MatchStatus::Scheduled => MatchBucket::Upcoming,
            MatchStatus::Pending | MatchStatus::PendingConfirmation | MatchStatus::PendingResult => {
                MatchBucket::Pending
            }
            MatchStatus::Completed => MatchBucket::Completed,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            MatchBucket::Upcoming => "Upcoming",
            MatchBucket::Pending => "Pending",
            MatchBucket::Completed => "Completed",
        }
    }
}

impl MatchBucket {
    /// Shown in place of the list when the tab has nothing to show
    pub fn empty_message(&self) -> &'static str {
        match self {
            MatchBucket::Upcoming => "You don't have any upcoming matches scheduled.",
            MatchBucket::Pending => "You don't have any matches requiring action.",
            MatchBucket::Completed => "You don't have any completed matches yet.",
        }
    }
}

/// Score line of a finished game, from the signed-in player's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    #[serde(rename = "1-0")]
    Win,
    #[serde(rename = "0-1")]
    Loss,
}

impl MatchResult {
    pub fn score(&self) -> &'static str {
        match self {
            MatchResult::Win => "1-0",
            MatchResult::Loss => "0-1",
        }
    }
}

/// "Won" / "Lost" / "Draw"; only decisive games carry a result, so a missing
/// one reads as a draw.
pub fn outcome_label(result: Option<MatchResult>) -> &'static str {
    match result {
        Some(MatchResult::Win) => "Won",
        Some(MatchResult::Loss) => "Lost",
        None => "Draw",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opponent {
    pub name: String,
    pub rating: u32,
}

/// A league game between the signed-in player and one opponent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: u32,
    pub opponent: Opponent,
    pub league: String,
    pub division: String,
    pub status: MatchStatus,
    pub date: Option<NaiveDateTime>,
    pub venue: Option<String>,
    pub result: Option<MatchResult>,
    pub confirmed: bool,
}

impl HasStatus for Match {
    type Status = MatchStatus;

    fn status(&self) -> MatchStatus {
        self.status
    }
}

impl Searchable for Match {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.opponent.name.as_str(), self.league.as_str()];
        if let Some(venue) = &self.venue {
            fields.push(venue);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(MatchStatus::Scheduled, MatchBucket::Upcoming)]
    #[case(MatchStatus::Pending, MatchBucket::Pending)]
    #[case(MatchStatus::PendingConfirmation, MatchBucket::Pending)]
    #[case(MatchStatus::PendingResult, MatchBucket::Pending)]
    #[case(MatchStatus::Completed, MatchBucket::Completed)]
    fn test_match_buckets(#[case] status: MatchStatus, #[case] bucket: MatchBucket) {
        assert_eq!(MatchBucket::of(status), bucket);
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(MatchStatus::Pending.action_label(), Some("Schedule"));
        assert_eq!(MatchStatus::PendingConfirmation.action_label(), Some("Confirm"));
        assert_eq!(MatchStatus::PendingResult.action_label(), Some("Confirm Result"));
        assert_eq!(MatchStatus::Completed.action_label(), None);
    }

    #[test]
    fn test_result_wire_format() {
        let result: Option<MatchResult> = serde_json::from_str("\"0-1\"").unwrap();
        assert_eq!(result, Some(MatchResult::Loss));
        let none: Option<MatchResult> = serde_json::from_str("null").unwrap();
        assert_eq!(none, None);
        assert_eq!(serde_json::to_string(&MatchResult::Win).unwrap(), "\"1-0\"");
        assert!(serde_json::from_str::<MatchResult>("\"½-½\"").is_err());
    }

    #[test]
    fn test_outcome_label() {
        assert_eq!(outcome_label(Some(MatchResult::Win)), "Won");
        assert_eq!(outcome_label(Some(MatchResult::Loss)), "Lost");
        assert_eq!(outcome_label(None), "Draw");
    }

    #[test]
    fn test_empty_bucket_messages() {
        assert_eq!(MatchBucket::Upcoming.empty_message(), "You don't have any upcoming matches scheduled.");
        assert_eq!(MatchBucket::Pending.empty_message(), "You don't have any matches requiring action.");
        assert_eq!(MatchBucket::Completed.empty_message(), "You don't have any completed matches yet.");
    }
}
