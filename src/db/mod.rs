//! Local adapter for the entity store: one module per entity, each exposing
//! list / filter / create / update / delete over SQLite.

pub mod appointments;
pub mod hours;
pub mod initialize;
pub mod log;
pub mod outbox;
pub mod pool;
pub mod professionals;
pub mod services;

use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use crate::utils::time::parse_time;
use chrono::{Local, NaiveDate, NaiveTime};

/// Stored "HH:MM" column → NaiveTime; a bad value is reported, never guessed.
pub(crate) fn col_time(raw: &str) -> AppResult<NaiveTime> {
    parse_time(raw).ok_or_else(|| AppError::InvalidTime(format!("stored value '{raw}'")))
}

pub(crate) fn col_opt_time(raw: Option<String>) -> AppResult<Option<NaiveTime>> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => col_time(s).map(Some),
    }
}

pub(crate) fn col_date(raw: &str) -> AppResult<NaiveDate> {
    parse_date(raw).ok_or_else(|| AppError::InvalidDate(format!("stored value '{raw}'")))
}

pub(crate) fn now_iso() -> String {
    Local::now().to_rfc3339()
}
