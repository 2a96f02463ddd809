//! Display formatting for dates shown across the dashboard.

use chrono::{NaiveDate, NaiveDateTime, Weekday};

/// `Jun 1, 2023`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Aug 15, 2023, 06:00 PM`, or `Not scheduled` for a match without a date
pub fn format_date_time(date_time: Option<NaiveDateTime>) -> String {
    match date_time {
        Some(date_time) => date_time.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => "Not scheduled".to_string(),
    }
}

/// `Monday, January 8`
pub fn format_long_day(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        assert_eq!(format_date(date), "Jun 1, 2023");
    }

    #[test]
    fn test_format_date_time() {
        let date_time = NaiveDate::from_ymd_opt(2023, 8, 15)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        assert_eq!(format_date_time(Some(date_time)), "Aug 15, 2023, 06:00 PM");
        assert_eq!(format_date_time(None), "Not scheduled");
    }

    #[test]
    fn test_format_long_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert_eq!(format_long_day(date), "Monday, January 8");
    }
}
