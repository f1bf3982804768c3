//! Bookable slot generation for one date and one professional.
//!
//! Slots start at `open_time` and advance by a fixed interval while the
//! candidate start is strictly before `close_time`. A candidate is dropped
//! when it falls in `[break_start, break_end)` or when a confirmed
//! appointment of the same professional starts at exactly that time.
//!
//! Known limitations kept on purpose:
//! - a slot may start before closing and run past it (service length is not
//!   checked against `close_time`);
//! - only identical start times conflict, so a 60-minute appointment at 10:00
//!   does not hide the 10:30 slot;
//! - pending appointments never block a slot, only confirmed ones do.

use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::models::day_hours::{DayHours, hours_for};
use crate::models::weekday::Weekday;
use crate::utils::time::{format_time, minutes_of_day, time_from_minutes};
use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Serialize, Serializer};
use std::fmt;

pub const DEFAULT_SLOT_INTERVAL: u32 = 30;

/// A bookable start time, displayed as "HH:MM".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(pub NaiveTime);

impl Slot {
    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_time(self.0))
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

/// Inputs of one availability computation.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityQuery<'a> {
    pub date: NaiveDate,
    pub professional_id: i64,
    /// Record for the weekday of `date`, if one is configured.
    pub day_hours: Option<&'a DayHours>,
    pub appointments: &'a [Appointment],
    pub interval_minutes: u32,
}

impl<'a> AvailabilityQuery<'a> {
    /// Pick the record matching the weekday of `date` out of the week.
    pub fn for_week(
        date: NaiveDate,
        professional_id: i64,
        week: &'a [DayHours],
        appointments: &'a [Appointment],
        interval_minutes: u32,
    ) -> Self {
        Self {
            date,
            professional_id,
            day_hours: hours_for(week, Weekday::from(date.weekday())),
            appointments,
            interval_minutes,
        }
    }

    pub fn slots(&self) -> Vec<Slot> {
        available_slots(self)
    }
}

/// True when a confirmed appointment of `professional_id` on `date` starts at `time`.
fn is_booked(q: &AvailabilityQuery<'_>, time: NaiveTime) -> bool {
    q.appointments.iter().any(|a| {
        a.status == AppointmentStatus::Confirmed
            && a.date == q.date
            && a.professional_id == q.professional_id
            && a.time == time
    })
}

/// Ordered bookable slots. Empty when the day is closed, not configured or
/// fully booked; callers cannot tell these cases apart from the result.
pub fn available_slots(q: &AvailabilityQuery<'_>) -> Vec<Slot> {
    let Some(hours) = q.day_hours.filter(|h| h.is_open) else {
        return Vec::new();
    };
    // a zero step would never reach closing time
    if q.interval_minutes == 0 {
        return Vec::new();
    }

    let close = minutes_of_day(hours.close_time);
    let window = hours
        .break_window()
        .map(|(s, e)| (minutes_of_day(s), minutes_of_day(e)));

    let mut slots = Vec::new();
    let mut current = minutes_of_day(hours.open_time);

    while current < close {
        let Some(time) = time_from_minutes(current) else {
            break;
        };

        let in_break = window.is_some_and(|(bs, be)| bs <= current && current < be);

        if !in_break && !is_booked(q, time) {
            slots.push(Slot(time));
        }

        current += q.interval_minutes;
    }

    slots
}
