//! Which dates a customer may pick in the booking calendar.

use crate::models::day_hours::{DayHours, hours_for};
use crate::models::weekday::Weekday;
use crate::utils::date::add_days;
use chrono::{Datelike, NaiveDate};

pub const DEFAULT_HORIZON_DAYS: u32 = 30;
pub const MAX_HORIZON_DAYS: u32 = 366;

/// A date is disabled when it is before `today`, more than `horizon_days`
/// after `today`, or its weekday is configured as closed. A weekday without
/// any record stays selectable (it simply yields no slots).
///
/// A horizon that runs past the last representable date disables everything.
pub fn is_date_disabled(
    date: NaiveDate,
    today: NaiveDate,
    hours: &[DayHours],
    horizon_days: u32,
) -> bool {
    let Some(last) = add_days(today, horizon_days) else {
        return true;
    };
    if date < today || date > last {
        return true;
    }
    matches!(hours_for(hours, Weekday::from(date.weekday())), Some(h) if !h.is_open)
}

/// Every selectable date from `today` to the end of the horizon.
pub fn bookable_dates(today: NaiveDate, hours: &[DayHours], horizon_days: u32) -> Vec<NaiveDate> {
    if add_days(today, horizon_days).is_none() {
        return Vec::new();
    }
    (0..=horizon_days)
        .map_while(|n| add_days(today, n))
        .filter(|d| !is_date_disabled(*d, today, hours, horizon_days))
        .collect()
}
