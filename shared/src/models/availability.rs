use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::weekday_name;
use crate::schedule::SlotTime;

/// A recurring weekly slot an opponent has offered for games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeeklySlot {
    pub day: Weekday,
    pub time: SlotTime,
}

impl fmt::Display for WeeklySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", weekday_name(self.day), self.time)
    }
}

/// An opponent that can be booked from the matches tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAvailability {
    /// Key used by the booking form's opponent select
    pub id: String,
    pub name: String,
    pub rating: u32,
    pub available_slots: Vec<WeeklySlot>,
}

impl PlayerAvailability {
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_weekly_slot_display() {
        let slot = WeeklySlot {
            day: Weekday::Wed,
            time: "18:30".parse().unwrap(),
        };
        assert_eq!(slot.to_string(), "Wednesday at 18:30");
    }
}
