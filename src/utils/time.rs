//! Time utilities: strict HH:MM parsing, minutes-since-midnight conversions.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::OnceLock;

fn hhmm_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("valid HH:MM regex"))
}

/// Parse a 24-hour "HH:MM" string. Single-digit hours ("9:00") are refused so
/// stored values always compare and display the same way.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    if !hhmm_re().is_match(t) {
        return None;
    }
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_time_strict(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    match input.map(|s| s.trim()) {
        Some("") | None => Ok(None),
        Some(s) => parse_time_strict(s).map(Some),
    }
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

pub fn minutes_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// Inverse of `minutes_of_day`; `None` once the value reaches midnight.
pub fn time_from_minutes(mins: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(mins / 60, mins % 60, 0)
}
