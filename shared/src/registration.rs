//! Whether a league or tournament still takes entries.
//!
//! This only drives what the dashboard shows. It reads the player's own
//! clock, so it must never gate anything that matters.

use chrono::{Local, NaiveDate};

/// `today <= close_date`, compared by calendar day.
pub fn is_open_on(close_date: NaiveDate, today: NaiveDate) -> bool {
    today <= close_date
}

/// [`is_open_on`] against the local clock.
pub fn is_open(close_date: NaiveDate) -> bool {
    is_open_on(close_date, today())
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `Open` / `Closed`
pub fn registration_label(close_date: NaiveDate) -> &'static str {
    if is_open(close_date) {
        "Open"
    } else {
        "Closed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(date(2023, 10, 9), true ; "day before close")]
    #[test_case(date(2023, 10, 10), true ; "close day itself")]
    #[test_case(date(2023, 10, 11), false ; "day after close")]
    fn test_is_open_on(today: NaiveDate, expected: bool) {
        assert_eq!(is_open_on(date(2023, 10, 10), today), expected);
    }

    #[test]
    fn test_far_future_is_open() {
        assert!(is_open(date(2099, 1, 1)));
        assert_eq!(registration_label(date(2099, 1, 1)), "Open");
    }

    #[test]
    fn test_distant_past_is_closed() {
        assert!(!is_open(date(2000, 1, 1)));
        assert_eq!(registration_label(date(2000, 1, 1)), "Closed");
    }
}
