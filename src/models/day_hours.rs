use super::weekday::Weekday;
use crate::errors::{AppError, AppResult};
use crate::utils::time::format_time;
use chrono::NaiveTime;
use serde::Serialize;

/// Opening configuration for one day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayHours {
    pub day_of_week: Weekday,
    pub is_open: bool,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub break_start: Option<NaiveTime>,
    pub break_end: Option<NaiveTime>,
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
}

impl DayHours {
    /// Default record for a day: 09:00–20:00 without break, closed on Sunday.
    pub fn default_for(day: Weekday) -> Self {
        Self {
            day_of_week: day,
            is_open: day != Weekday::Sunday,
            open_time: hm(9, 0),
            close_time: hm(20, 0),
            break_start: None,
            break_end: None,
        }
    }

    pub fn default_week() -> Vec<DayHours> {
        Weekday::ALL.iter().map(|d| Self::default_for(*d)).collect()
    }

    /// Break window, only when both ends are set.
    pub fn break_window(&self) -> Option<(NaiveTime, NaiveTime)> {
        match (self.break_start, self.break_end) {
            (Some(s), Some(e)) => Some((s, e)),
            _ => None,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        let invalid = |reason: &str| AppError::InvalidHours {
            day: self.day_of_week.name().to_string(),
            reason: reason.to_string(),
        };

        match (self.break_start, self.break_end) {
            (Some(s), Some(e)) if e <= s => {
                return Err(invalid("break end must be after break start"));
            }
            (Some(_), None) | (None, Some(_)) => {
                return Err(invalid("break start and break end must be set together"));
            }
            _ => {}
        }

        if self.is_open && self.open_time >= self.close_time {
            return Err(invalid("open time must be before close time"));
        }

        Ok(())
    }

    pub fn summary(&self) -> String {
        if !self.is_open {
            return "closed".to_string();
        }
        let mut s = format!(
            "{}-{}",
            format_time(self.open_time),
            format_time(self.close_time)
        );
        if let Some((bs, be)) = self.break_window() {
            s.push_str(&format!(" (break {}-{})", format_time(bs), format_time(be)));
        }
        s
    }
}

/// Validate a full week: every record valid, no weekday twice.
pub fn validate_week(hours: &[DayHours]) -> AppResult<()> {
    let mut seen = [false; 7];
    for h in hours {
        h.validate()?;
        let i = h.day_of_week.index() as usize;
        if seen[i] {
            return Err(AppError::InvalidHours {
                day: h.day_of_week.name().to_string(),
                reason: "configured more than once".to_string(),
            });
        }
        seen[i] = true;
    }
    Ok(())
}

/// Overlay stored rows on the default week, so the result always has 7 days.
pub fn merge_with_defaults(stored: &[DayHours]) -> Vec<DayHours> {
    DayHours::default_week()
        .into_iter()
        .map(|def| {
            stored
                .iter()
                .find(|s| s.day_of_week == def.day_of_week)
                .cloned()
                .unwrap_or(def)
        })
        .collect()
}

pub fn hours_for(hours: &[DayHours], day: Weekday) -> Option<&DayHours> {
    hours.iter().find(|h| h.day_of_week == day)
}
