use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::hours::{DayPatch, HoursLogic};
use crate::db::hours;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::day_hours::DayHours;
use crate::models::session::Session;
use crate::models::weekday::Weekday;
use crate::ui::messages::{header, success, warning};
use crate::utils::colors::{GREEN, GREY};
use crate::utils::table::{Cell, Table};
use crate::utils::time::{format_time, parse_optional_time, parse_time_strict};
use chrono::NaiveTime;

/// "13:00-14:00" → (13:00, 14:00)
fn parse_break(s: &str) -> AppResult<(NaiveTime, NaiveTime)> {
    let (a, b) = s
        .split_once('-')
        .ok_or_else(|| AppError::InvalidTime(format!("break window '{s}' (use HH:MM-HH:MM)")))?;
    Ok((parse_time_strict(a)?, parse_time_strict(b)?))
}

pub fn render_week(week: &[DayHours]) -> String {
    let mut t = Table::new(&["Day", "Status", "Open", "Close", "Break"]);
    for d in week {
        let (status, color) = if d.is_open {
            ("open", GREEN)
        } else {
            ("closed", GREY)
        };
        let brk = d
            .break_window()
            .map(|(s, e)| format!("{}-{}", format_time(s), format_time(e)))
            .unwrap_or_else(|| "-".to_string());
        t.add_row(vec![
            Cell::plain(format!("{} ({})", d.day_of_week.name(), d.day_of_week.index())),
            Cell::colored(status, color),
            Cell::plain(format_time(d.open_time)),
            Cell::plain(format_time(d.close_time)),
            Cell::plain(brk),
        ]);
    }
    t.render()
}

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Hours {
        day,
        open,
        close,
        break_window,
        no_break,
        closed,
        opened,
        reset,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *reset {
            HoursLogic::reset(&pool.conn, session)?;
            success("Business hours reset to the default week.");
        } else if let Some(code) = day {
            let weekday = Weekday::from_code(code)?;
            let patch = DayPatch {
                is_open: match (*closed, *opened) {
                    (true, _) => Some(false),
                    (_, true) => Some(true),
                    _ => None,
                },
                open_time: parse_optional_time(open.as_ref())?,
                close_time: parse_optional_time(close.as_ref())?,
                break_window: if *no_break {
                    Some(None)
                } else {
                    break_window.as_deref().map(parse_break).transpose()?.map(Some)
                },
            };

            if patch.is_empty() {
                return Err(AppError::MissingField(
                    "--open, --close, --break, --no-break, --closed or --opened",
                ));
            }

            let updated = HoursLogic::update_day(&pool.conn, session, weekday, &patch)?;
            success(format!(
                "{} ({}) updated: {}",
                weekday.name(),
                weekday.name_es(),
                updated.summary()
            ));
        }

        if hours::list(&pool.conn)?.is_empty() {
            warning("Business hours are not stored yet: showing the default week, no date has slots.");
        }
        let week = HoursLogic::load_week(&pool.conn)?;
        header("🕐 Business hours");
        print!("{}", render_week(&week));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn break_window_parsing() {
        let (s, e) = parse_break("13:00-14:30").unwrap();
        assert_eq!(format_time(s), "13:00");
        assert_eq!(format_time(e), "14:30");
        assert!(parse_break("13:00").is_err());
        assert!(parse_break("1pm-2pm").is_err());
    }
}
