//! Availability scheduling for the profile page: a week strip of days, a
//! grid of half-hour slots, and the selection state tying them together.

use chrono::{Datelike, Duration, NaiveDate};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SharedError};
use crate::models::availability::{PlayerAvailability, WeeklySlot};

lazy_static! {
    static ref TIME_REGEX: Regex = Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").unwrap();
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wall-clock start of a slot, `HH:MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotTime {
    hour: u8,
    minute: u8,
}

impl SlotTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(SharedError::InvalidTime(format!("{:02}:{:02}", hour, minute)));
        }
        Ok(Self { hour, minute })
    }

    /// Out-of-range parts wrap; for literals known to be valid.
    pub(crate) const fn from_hm(hour: u8, minute: u8) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for SlotTime {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self> {
        let captures = TIME_REGEX
            .captures(s)
            .ok_or_else(|| SharedError::InvalidTime(s.to_string()))?;
        let hour = captures[1]
            .parse()
            .map_err(|_| SharedError::InvalidTime(s.to_string()))?;
        let minute = captures[2]
            .parse()
            .map_err(|_| SharedError::InvalidTime(s.to_string()))?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for SlotTime {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SlotTime> for String {
    fn from(time: SlotTime) -> Self {
        time.to_string()
    }
}

/// A half-hour slot on a calendar day. Renders as `YYYY-MM-DD-HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId {
    pub date: NaiveDate,
    pub time: SlotTime,
}

impl SlotId {
    pub fn new(date: NaiveDate, time: SlotTime) -> Self {
        Self { date, time }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.date.format(DATE_FORMAT), self.time)
    }
}

impl FromStr for SlotId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self> {
        let (date, time) = s
            .rsplit_once('-')
            .ok_or_else(|| SharedError::InvalidSlotId(s.to_string()))?;
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| SharedError::InvalidSlotId(s.to_string()))?;
        let time = time
            .parse()
            .map_err(|_| SharedError::InvalidSlotId(s.to_string()))?;
        Ok(Self { date, time })
    }
}

/// Range of hours offered in the slot grid, end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotWindow {
    pub start_hour: u8,
    pub end_hour: u8,
}

impl Default for SlotWindow {
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 22,
        }
    }
}

impl SlotWindow {
    /// Half-hour slots from `start_hour:00` up to `end_hour - 1:30`.
    pub fn slots(&self) -> Vec<SlotTime> {
        (self.start_hour..self.end_hour.min(24))
            .flat_map(|hour| [SlotTime { hour, minute: 0 }, SlotTime { hour, minute: 30 }])
            .collect()
    }
}

/// Slots of the default 08:00-22:00 window
pub fn time_slots() -> Vec<SlotTime> {
    SlotWindow::default().slots()
}

/// One cell of the week strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDay {
    pub date: NaiveDate,
    /// `Mon`
    pub day_name: String,
    pub day_number: u32,
    /// `Jan`
    pub month: String,
}

/// Monday to Sunday of the week containing `today`.
pub fn current_week(today: NaiveDate) -> Vec<WeekDay> {
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    (0..7)
        .map(|offset| {
            let date = monday + Duration::days(offset);
            WeekDay {
                date,
                day_name: date.format("%a").to_string(),
                day_number: date.day(),
                month: date.format("%b").to_string(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    NoDaySelected,
    DaySelected(NaiveDate),
}

/// Day and slot selection of the availability editor.
///
/// Selecting a day only changes which day the slot grid edits; slots
/// toggled on other days stay in the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotSelector {
    selected_day: Option<NaiveDate>,
    selected: BTreeSet<SlotId>,
}

impl SlotSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectorState {
        match self.selected_day {
            Some(day) => SelectorState::DaySelected(day),
            None => SelectorState::NoDaySelected,
        }
    }

    pub fn selected_day(&self) -> Option<NaiveDate> {
        self.selected_day
    }

    pub fn select_day(&mut self, day: NaiveDate) {
        debug!("Selecting availability day {}", day);
        self.selected_day = Some(day);
    }

    /// Flips `time` on the selected day. Returns whether the slot is now
    /// selected.
    pub fn toggle_slot(&mut self, time: SlotTime) -> Result<bool> {
        let day = self.selected_day.ok_or(SharedError::NoDaySelected)?;
        let id = SlotId::new(day, time);
        if self.selected.remove(&id) {
            debug!("Deselected slot {}", id);
            Ok(false)
        } else {
            debug!("Selected slot {}", id);
            self.selected.insert(id);
            Ok(true)
        }
    }

    pub fn is_slot_selected(&self, time: SlotTime) -> bool {
        self.selected_day
            .map(|day| self.selected.contains(&SlotId::new(day, time)))
            .unwrap_or(false)
    }

    /// Number of different days with at least one selected slot.
    pub fn distinct_day_count(&self) -> usize {
        self.selected
            .iter()
            .map(|id| id.date)
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn selected_slots(&self) -> impl Iterator<Item = &SlotId> {
        self.selected.iter()
    }

    pub fn slot_ids(&self) -> Vec<String> {
        self.selected.iter().map(ToString::to_string).collect()
    }

    pub fn slots_for_day(&self, day: NaiveDate) -> Vec<SlotTime> {
        self.selected
            .iter()
            .filter(|id| id.date == day)
            .map(|id| id.time)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Selection projected onto the recurring week.
    pub fn weekly_pattern(&self) -> HashSet<WeeklySlot> {
        self.selected
            .iter()
            .map(|id| WeeklySlot {
                day: id.date.weekday(),
                time: id.time,
            })
            .collect()
    }
}

/// An opponent whose weekly availability overlaps the selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerSuggestion {
    pub player: PlayerAvailability,
    pub shared_slots: Vec<WeeklySlot>,
}

/// Opponents sharing at least one weekly slot with `selector`, most shared
/// slots first, then by name.
pub fn suggest_partners(selector: &SlotSelector, players: &[PlayerAvailability]) -> Vec<PartnerSuggestion> {
    let pattern = selector.weekly_pattern();
    let mut suggestions: Vec<PartnerSuggestion> = players
        .iter()
        .filter_map(|player| {
            let shared_slots: Vec<WeeklySlot> = player
                .available_slots
                .iter()
                .filter(|slot| pattern.contains(slot))
                .copied()
                .collect();
            if shared_slots.is_empty() {
                None
            } else {
                Some(PartnerSuggestion {
                    player: player.clone(),
                    shared_slots,
                })
            }
        })
        .collect();
    suggestions.sort_by(|a, b| {
        b.shared_slots
            .len()
            .cmp(&a.shared_slots.len())
            .then_with(|| a.player.name.cmp(&b.player.name))
    });
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(s: &str) -> SlotTime {
        s.parse().unwrap()
    }

    #[fixture]
    fn selector() -> SlotSelector {
        SlotSelector::new()
    }

    #[rstest]
    fn test_first_toggle_scenario(mut selector: SlotSelector) {
        assert_eq!(selector.state(), SelectorState::NoDaySelected);
        selector.select_day(date(2024, 1, 8));
        assert_eq!(selector.toggle_slot(time("09:00")), Ok(true));
        assert_eq!(selector.slot_ids(), vec!["2024-01-08-09:00".to_string()]);
        assert_eq!(selector.distinct_day_count(), 1);
    }

    #[rstest]
    fn test_toggle_without_day_is_rejected(mut selector: SlotSelector) {
        assert_eq!(selector.toggle_slot(time("09:00")), Err(SharedError::NoDaySelected));
        assert!(selector.is_empty());
        assert!(!selector.is_slot_selected(time("09:00")));
    }

    #[rstest]
    fn test_toggle_twice_restores(mut selector: SlotSelector) {
        selector.select_day(date(2024, 1, 8));
        selector.toggle_slot(time("10:30")).unwrap();
        let before = selector.clone();
        selector.toggle_slot(time("18:00")).unwrap();
        assert_eq!(selector.toggle_slot(time("18:00")), Ok(false));
        assert_eq!(selector, before);
    }

    #[rstest]
    fn test_switching_days_keeps_slots(mut selector: SlotSelector) {
        let a = date(2024, 1, 8);
        let b = date(2024, 1, 9);
        selector.select_day(a);
        selector.toggle_slot(time("09:00")).unwrap();
        selector.select_day(b);
        assert!(!selector.is_slot_selected(time("09:00")));
        selector.toggle_slot(time("20:00")).unwrap();
        selector.select_day(a);
        assert!(selector.is_slot_selected(time("09:00")));
        assert!(!selector.is_slot_selected(time("20:00")));
        assert_eq!(selector.distinct_day_count(), 2);
        assert_eq!(selector.slots_for_day(b), vec![time("20:00")]);
    }

    #[rstest]
    fn test_distinct_days_counts_dates_not_years(mut selector: SlotSelector) {
        for day in [8, 9, 10] {
            selector.select_day(date(2024, 1, day));
            selector.toggle_slot(time("12:00")).unwrap();
            selector.toggle_slot(time("12:30")).unwrap();
        }
        assert_eq!(selector.len(), 6);
        assert_eq!(selector.distinct_day_count(), 3);
        selector.clear();
        assert_eq!(selector.distinct_day_count(), 0);
    }

    #[test]
    fn test_slot_id_round_trip() {
        let id: SlotId = "2024-01-08-09:00".parse().unwrap();
        assert_eq!(id, SlotId::new(date(2024, 1, 8), time("09:00")));
        assert_eq!(id.to_string(), "2024-01-08-09:00");
    }

    #[rstest]
    #[case("2024-01-08")]
    #[case("2024-13-08-09:00")]
    #[case("2024-01-08-9am")]
    #[case("")]
    fn test_slot_id_rejects_malformed(#[case] raw: &str) {
        assert!(matches!(raw.parse::<SlotId>(), Err(SharedError::InvalidSlotId(_))));
    }

    #[rstest]
    #[case("24:00")]
    #[case("12:60")]
    #[case("7:30")]
    fn test_slot_time_rejects_malformed(#[case] raw: &str) {
        assert!(raw.parse::<SlotTime>().is_err());
    }

    #[test]
    fn test_default_slot_grid() {
        let slots = time_slots();
        assert_eq!(slots.len(), 28);
        assert_eq!(slots.first().unwrap().to_string(), "08:00");
        assert_eq!(slots.last().unwrap().to_string(), "21:30");
    }

    #[test]
    fn test_custom_window() {
        let window = SlotWindow {
            start_hour: 18,
            end_hour: 20,
        };
        let labels: Vec<String> = window.slots().iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["18:00", "18:30", "19:00", "19:30"]);
    }

    #[rstest]
    #[case(date(2024, 1, 10))]
    #[case(date(2024, 1, 8))]
    #[case(date(2024, 1, 14))]
    fn test_current_week_starts_monday(#[case] today: NaiveDate) {
        let week = current_week(today);
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, date(2024, 1, 8));
        assert_eq!(week[0].day_name, "Mon");
        assert_eq!(week[6].date, date(2024, 1, 14));
        assert_eq!(week[6].day_name, "Sun");
        assert_eq!(week[0].month, "Jan");
    }

    #[test]
    fn test_current_week_crosses_month() {
        let week = current_week(date(2024, 2, 1));
        assert_eq!(week[0].date, date(2024, 1, 29));
        assert_eq!(week[0].month, "Jan");
        assert_eq!(week[3].month, "Feb");
        assert_eq!(week[3].day_number, 1);
    }

    #[rstest]
    fn test_suggest_partners_ranks_overlap(mut selector: SlotSelector) {
        // 2024-01-08 is a Monday
        selector.select_day(date(2024, 1, 8));
        selector.toggle_slot(time("18:00")).unwrap();
        selector.toggle_slot(time("19:00")).unwrap();
        selector.toggle_slot(time("19:30")).unwrap();

        let suggestions = suggest_partners(&selector, &fixtures::player_availability());
        let names: Vec<&str> = suggestions.iter().map(|s| s.player.name.as_str()).collect();
        assert_eq!(names, vec!["Daniel Smith", "Michael Brown"]);
        assert_eq!(suggestions[0].shared_slots.len(), 2);
    }

    #[rstest]
    fn test_no_selection_no_suggestions(selector: SlotSelector) {
        assert!(suggest_partners(&selector, &fixtures::player_availability()).is_empty());
    }

    proptest! {
        #[test]
        fn prop_toggle_is_involution(
            day in 1u32..28,
            seed in prop::collection::vec((0u8..24, prop::bool::ANY), 0..10),
            hour in 0u8..24,
            half in prop::bool::ANY,
        ) {
            let mut selector = SlotSelector::new();
            selector.select_day(date(2024, 1, day));
            for (h, half_hour) in seed {
                let _ = selector.toggle_slot(SlotTime::new(h, if half_hour { 30 } else { 0 }).unwrap());
            }
            let before = selector.clone();
            let slot = SlotTime::new(hour, if half { 30 } else { 0 }).unwrap();
            selector.toggle_slot(slot).unwrap();
            selector.toggle_slot(slot).unwrap();
            prop_assert_eq!(selector, before);
        }

        #[test]
        fn prop_slot_id_display_parses_back(day in 1u32..28, hour in 0u8..24, minute in 0u8..60) {
            let id = SlotId::new(date(2023, 6, day), SlotTime::new(hour, minute).unwrap());
            prop_assert_eq!(id.to_string().parse::<SlotId>().unwrap(), id);
        }
    }
}
