//! Local-only actions on the dashboard and profile: booking a match,
//! joining a league, saving availability. Each produces the text of the
//! toast the view shows; nothing is recorded anywhere.

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SharedError};
use crate::models::availability::PlayerAvailability;
use crate::models::league::League;
use crate::models::tournament::Tournament;
use crate::schedule::SlotSelector;

/// Title plus supporting line of a toast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Book Match dialog state. `player` is a [`PlayerAvailability::id`],
/// `time_slot` the display text of one of that player's weekly slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub player: String,
    pub time_slot: String,
    pub venue: String,
}

impl BookingForm {
    pub fn is_complete(&self) -> bool {
        !self.player.is_empty() && !self.time_slot.is_empty() && !self.venue.is_empty()
    }

    /// Changing opponent invalidates the chosen slot, which belonged to the
    /// previous opponent.
    pub fn set_player(&mut self, player: String) {
        if self.player != player {
            self.time_slot.clear();
        }
        self.player = player;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Empty form with the opponent already chosen
    pub fn for_player(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            ..Self::default()
        }
    }
}

/// A community post needs both a title and some content.
pub fn validate_post(title: &str, content: &str) -> Result<()> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(SharedError::MissingFields);
    }
    Ok(())
}

pub fn missing_fields_notice() -> Notice {
    Notice::new(
        SharedError::MissingFields.to_string(),
        "Player, time slot, and venue are required to book a match.",
    )
}

/// Validates the form against the opponents on offer and returns the
/// success toast.
pub fn book_match(form: &BookingForm, players: &[PlayerAvailability]) -> Result<Notice> {
    if !form.is_complete() {
        return Err(SharedError::MissingFields);
    }
    let player = players
        .iter()
        .find(|p| p.id == form.player)
        .ok_or_else(|| SharedError::NotFound(format!("player {}", form.player)))?;
    info!("Booked mock match with {} at {}", player.name, form.venue);
    Ok(Notice::new(
        "Match booked successfully",
        format!(
            "Your match with {} is scheduled for {} at {}.",
            player.name, form.time_slot, form.venue
        ),
    ))
}

pub fn join_league(league: &League) -> Notice {
    info!("Joined mock league {}", league.name);
    Notice::new(
        format!("Joined {}", league.name),
        "You've successfully joined the league. Your division will be assigned based on your rating.",
    )
}

pub fn enter_tournament(tournament: &Tournament) -> Notice {
    info!("Entered mock tournament {}", tournament.name);
    Notice::new(
        format!("Registered for {}", tournament.name),
        format!("Your entry is confirmed. Play starts {}.", crate::format::format_date(tournament.start_date)),
    )
}

pub fn save_availability(selector: &SlotSelector) -> Notice {
    let slots = selector.len();
    let days = selector.distinct_day_count();
    info!("Saved mock availability: {} slots over {} days", slots, days);
    Notice::new(
        "Availability saved",
        format!(
            "{} time slot{} across {} day{}.",
            slots,
            if slots == 1 { "" } else { "s" },
            days,
            if days == 1 { "" } else { "s" }
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::schedule::SlotTime;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn complete_form() -> BookingForm {
        BookingForm {
            player: "player1".to_string(),
            time_slot: "Monday at 18:00".to_string(),
            venue: "Wanderers Club".to_string(),
        }
    }

    #[rstest]
    #[case(BookingForm { player: String::new(), ..complete_form() })]
    #[case(BookingForm { time_slot: String::new(), ..complete_form() })]
    #[case(BookingForm { venue: String::new(), ..complete_form() })]
    #[case(BookingForm::default())]
    fn test_incomplete_booking_rejected(#[case] form: BookingForm) {
        let result = book_match(&form, &fixtures::player_availability());
        assert_eq!(result, Err(SharedError::MissingFields));
        assert_eq!(missing_fields_notice().title, "Please fill in all fields");
    }

    #[test]
    fn test_booking_success_message() {
        let notice = book_match(&complete_form(), &fixtures::player_availability()).unwrap();
        assert_eq!(notice.title, "Match booked successfully");
        assert_eq!(
            notice.description,
            "Your match with Daniel Smith is scheduled for Monday at 18:00 at Wanderers Club."
        );
    }

    #[test]
    fn test_booking_unknown_player() {
        let form = BookingForm {
            player: "player9".to_string(),
            ..complete_form()
        };
        assert!(matches!(
            book_match(&form, &fixtures::player_availability()),
            Err(SharedError::NotFound(_))
        ));
    }

    #[test]
    fn test_changing_player_clears_slot() {
        let mut form = complete_form();
        form.set_player("player1".to_string());
        assert_eq!(form.time_slot, "Monday at 18:00");
        form.set_player("player2".to_string());
        assert!(form.time_slot.is_empty());
        form.reset();
        assert_eq!(form, BookingForm::default());
    }

    #[test]
    fn test_form_for_player_preselects_opponent() {
        let form = BookingForm::for_player("player3");
        assert_eq!(form.player, "player3");
        assert!(!form.is_complete());
        assert_eq!(book_match(&form, &fixtures::player_availability()), Err(SharedError::MissingFields));
    }

    #[rstest]
    #[case("", "Some analysis")]
    #[case("Sicilian", "   ")]
    #[case(" ", "")]
    fn test_post_needs_title_and_content(#[case] title: &str, #[case] content: &str) {
        assert_eq!(validate_post(title, content), Err(SharedError::MissingFields));
    }

    #[test]
    fn test_complete_post_accepted() {
        assert_eq!(validate_post("Sicilian study group", "Who is in?"), Ok(()));
    }

    #[test]
    fn test_join_league_notice() {
        let league = fixtures::leagues().remove(0);
        let notice = join_league(&league);
        assert_eq!(notice.title, "Joined Wanderers Chess Club League");
    }

    #[test]
    fn test_enter_tournament_notice() {
        let tournament = fixtures::tournaments().remove(0);
        let notice = enter_tournament(&tournament);
        assert!(notice.title.starts_with("Registered for "));
        assert!(notice.description.contains(&crate::format::format_date(tournament.start_date)));
    }

    #[test]
    fn test_save_availability_notice() {
        let mut selector = SlotSelector::new();
        selector.select_day(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
        selector.toggle_slot(SlotTime::new(9, 0).unwrap()).unwrap();
        let notice = save_availability(&selector);
        assert_eq!(notice.description, "1 time slot across 1 day.");
    }
}
