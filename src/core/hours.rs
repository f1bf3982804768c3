//! Weekly business-hours administration.

use crate::db::{hours, log};
use crate::errors::AppResult;
use crate::models::day_hours::{DayHours, merge_with_defaults};
use crate::models::session::Session;
use crate::models::weekday::Weekday;
use chrono::NaiveTime;
use rusqlite::Connection;

/// Changes for one day; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct DayPatch {
    pub is_open: Option<bool>,
    pub open_time: Option<NaiveTime>,
    pub close_time: Option<NaiveTime>,
    /// `Some(None)` clears the break
    pub break_window: Option<Option<(NaiveTime, NaiveTime)>>,
}

impl DayPatch {
    pub fn apply(&self, day: &mut DayHours) {
        if let Some(v) = self.is_open {
            day.is_open = v;
        }
        if let Some(v) = self.open_time {
            day.open_time = v;
        }
        if let Some(v) = self.close_time {
            day.close_time = v;
        }
        if let Some(w) = self.break_window {
            day.break_start = w.map(|(s, _)| s);
            day.break_end = w.map(|(_, e)| e);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.is_open.is_none()
            && self.open_time.is_none()
            && self.close_time.is_none()
            && self.break_window.is_none()
    }
}

pub struct HoursLogic;

impl HoursLogic {
    /// The 7-day week as configured, defaults filling unconfigured days.
    pub fn load_week(conn: &Connection) -> AppResult<Vec<DayHours>> {
        Ok(merge_with_defaults(&hours::list(conn)?))
    }

    /// Replace the whole stored week in one transaction.
    pub fn save_week(conn: &Connection, session: &Session, week: &[DayHours]) -> AppResult<()> {
        let admin = session.require_admin()?;
        let tx = conn.unchecked_transaction()?;
        hours::replace_week(&tx, week)?;
        log::audit(&tx, "hours", "business_hours", &format!("week saved by {}", admin.email))?;
        tx.commit()?;
        Ok(())
    }

    /// Patch one day and save the week; returns the updated day.
    pub fn update_day(
        conn: &Connection,
        session: &Session,
        day: Weekday,
        patch: &DayPatch,
    ) -> AppResult<DayHours> {
        let mut week = Self::load_week(conn)?;
        let slot = &mut week[day.index() as usize];
        patch.apply(slot);
        slot.validate()?;
        let updated = slot.clone();
        Self::save_week(conn, session, &week)?;
        Ok(updated)
    }

    pub fn reset(conn: &Connection, session: &Session) -> AppResult<()> {
        Self::save_week(conn, session, &DayHours::default_week())
    }
}
