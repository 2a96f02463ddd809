use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter::{HasStatus, Searchable, StatusBucket};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    Upcoming,
    Active,
    Completed,
    Archived,
}

impl TournamentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TournamentStatus::Upcoming => "Upcoming",
            TournamentStatus::Active => "Active",
            TournamentStatus::Completed => "Completed",
            TournamentStatus::Archived => "Archived",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentBucket {
    Upcoming,
    Active,
    Completed,
}

impl StatusBucket for TournamentBucket {
    type Status = TournamentStatus;

    const ALL: &'static [Self] = &[
        TournamentBucket::Upcoming,
        TournamentBucket::Active,
        TournamentBucket::Completed,
    ];

    fn of(status: TournamentStatus) -> Self {
        match status {
            TournamentStatus::Upcoming => TournamentBucket::Upcoming,
            TournamentStatus::Active => TournamentBucket::Active,
            TournamentStatus::Completed | TournamentStatus::Archived => TournamentBucket::Completed,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TournamentBucket::Upcoming => "Upcoming",
            TournamentBucket::Active => "Active",
            TournamentBucket::Completed => "Completed",
        }
    }
}

/// A rating-bounded bracket of a tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub rating_min: Option<u32>,
    pub rating_max: Option<u32>,
    pub entry_fee: u32,
}

impl Section {
    /// A zero floor counts as "no restriction", matching how the brackets
    /// are advertised.
    pub fn rating_label(&self) -> String {
        match (self.rating_min.filter(|min| *min > 0), self.rating_max) {
            (Some(min), Some(max)) => format!("Rating {}-{}", min, max),
            (Some(min), None) => format!("Rating {}+", min),
            (None, _) => "No rating restriction".to_string(),
        }
    }

    /// Entry fee in rand, e.g. `R250`
    pub fn fee_label(&self) -> String {
        format!("R{}", self.entry_fee)
    }
}

/// One day of a tournament programme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgrammeDay {
    pub date: NaiveDate,
    pub sessions: Vec<&'static str>,
}

const OPENING_DAY: [&str; 3] = ["08:30 - Registration", "09:00 - Round 1", "14:00 - Round 2"];
const MIDDLE_DAY: [&str; 2] = ["09:00 - Round 3", "14:00 - Round 4"];

/// A scheduled multi-section one-off event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub venue: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub registration_close: NaiveDate,
    pub sections: Vec<Section>,
    pub status: TournamentStatus,
}

impl Tournament {
    pub fn is_single_day(&self) -> bool {
        self.start_date == self.end_date
    }

    /// Days shown on the schedule tab: first, middle and last for a
    /// multi-day event.
    pub fn schedule_days(&self) -> Vec<NaiveDate> {
        if self.is_single_day() {
            return vec![self.start_date];
        }
        let span = (self.end_date - self.start_date).num_days();
        let middle = self.start_date + chrono::Duration::days(span / 2);
        let mut days = vec![self.start_date];
        if middle != self.start_date && middle != self.end_date {
            days.push(middle);
        }
        days.push(self.end_date);
        days
    }

    /// Session times per schedule day. Rounds are numbered across the whole
    /// event and the last day closes with prize giving.
    pub fn programme(&self) -> Vec<ProgrammeDay> {
        let days = self.schedule_days();
        let last = days.len() - 1;
        let mut next_round = 1;
        days.into_iter()
            .enumerate()
            .map(|(index, date)| {
                let sessions: Vec<&'static str> = match index {
                    0 => OPENING_DAY.to_vec(),
                    i if i == last && next_round == 3 => vec!["09:00 - Round 3", "14:00 - Round 4", "18:00 - Prize Giving"],
                    i if i == last => vec!["09:00 - Round 5", "14:00 - Round 6", "18:00 - Prize Giving"],
                    _ => MIDDLE_DAY.to_vec(),
                };
                next_round += sessions.iter().filter(|s| s.contains("Round")).count();
                ProgrammeDay { date, sessions }
            })
            .collect()
    }
}

impl HasStatus for Tournament {
    type Status = TournamentStatus;

    fn status(&self) -> TournamentStatus {
        self.status
    }
}

impl Searchable for Tournament {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str(), self.venue.as_str()]
    }
}
