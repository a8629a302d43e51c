//! Default values for date inputs.

use chrono::{NaiveDate, Utc};

/// Wire format of date input values.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Returns the current calendar date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Returns the value a date input should hold.
///
/// A non-empty `current` value is kept as typed, even if it does not parse.
/// An empty value is filled with `today` as `YYYY-MM-DD`.
pub fn default_date_value(current: &str, today: NaiveDate) -> String {
    if current.is_empty() {
        today.format(DATE_INPUT_FORMAT).to_string()
    } else {
        current.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::default_date_value;
    use chrono::NaiveDate;

    #[test]
    fn empty_input_gets_today() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 3).expect("valid date");
        assert_eq!(default_date_value("", today), "2026-02-03");
    }

    #[test]
    fn existing_value_is_kept() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 3).expect("valid date");
        assert_eq!(default_date_value("2025-12-31", today), "2025-12-31");
    }
}
