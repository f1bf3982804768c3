use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_date_strict(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Monday..=Sunday of the week containing `d`.
pub fn week_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = d.weekday().num_days_from_monday() as u64;
    let start = d - Days::new(offset);
    (start, start + Days::new(6))
}

/// `None` past the last representable date.
pub fn add_days(d: NaiveDate, n: u32) -> Option<NaiveDate> {
    d.checked_add_days(Days::new(n as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_starts_on_monday() {
        // 2025-06-18 is a Wednesday
        let d = parse_date("2025-06-18").unwrap();
        let (start, end) = week_bounds(d);
        assert_eq!(format_date(start), "2025-06-16");
        assert_eq!(format_date(end), "2025-06-22");
    }

    #[test]
    fn sunday_belongs_to_previous_monday() {
        let d = parse_date("2025-06-22").unwrap();
        assert_eq!(format_date(week_bounds(d).0), "2025-06-16");
    }

    #[test]
    fn add_days_stops_at_max_date() {
        let d = parse_date("2025-06-16").unwrap();
        assert_eq!(add_days(d, 16).map(format_date).as_deref(), Some("2025-07-02"));
        assert_eq!(add_days(NaiveDate::MAX, 1), None);
        assert_eq!(add_days(d, u32::MAX), None);
    }
}
