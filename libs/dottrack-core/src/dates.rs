//! Date helpers for due-date arithmetic.

use chrono::{Duration, Local, NaiveDate};

/// Today's calendar date in the local zone.
///
/// Attempts and review items are stamped with local dates, so a question
/// answered late at night counts for the day the learner experienced.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Add a number of days to a date.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn add_days_crosses_month_boundary() {
        assert_eq!(add_days(date("2024-01-30"), 2), date("2024-02-01"));
    }

    #[test]
    fn add_days_handles_leap_year() {
        assert_eq!(add_days(date("2024-02-28"), 1), date("2024-02-29"));
    }

    #[test]
    fn today_is_a_plain_date() {
        let today = today_local();
        assert_eq!(today.format("%Y-%m-%d").to_string().len(), 10);
    }
}
