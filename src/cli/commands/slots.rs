use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::booking::BookingLogic;
use crate::core::calendar::bookable_dates;
use crate::db::pool::DbPool;
use crate::db::{hours, professionals};
use crate::errors::AppResult;
use crate::models::weekday::Weekday;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{CYAN, paint};
use crate::utils::date::{format_date, parse_date_strict, today};
use chrono::Datelike;
use serde::Serialize;

#[derive(Serialize)]
struct SlotsOutput<'a> {
    date: String,
    professional_id: i64,
    professional: &'a str,
    slots: Vec<String>,
}

/// Handle `dates` and `slots`
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let conn = &pool.conn;

    match cmd {
        Commands::Dates => {
            let week = hours::list(conn)?;
            let dates = bookable_dates(today(), &week, cfg.booking_horizon_days);
            if dates.is_empty() {
                info("No dates open for booking.");
                return Ok(());
            }
            header(format!(
                "📅 Dates open for booking (next {} days)",
                cfg.booking_horizon_days
            ));
            for d in dates {
                let wd = Weekday::from(d.weekday());
                println!("{}  {}", format_date(d), paint(wd.name(), CYAN));
            }
        }
        Commands::Slots { date, pro, json } => {
            let date = parse_date_strict(date)?;
            let professional = professionals::get(conn, *pro)?;
            let slots = BookingLogic::available(conn, date, professional.id, cfg)?;

            if *json {
                let out = SlotsOutput {
                    date: format_date(date),
                    professional_id: professional.id,
                    professional: &professional.name,
                    slots: slots.iter().map(ToString::to_string).collect(),
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
                return Ok(());
            }

            if slots.is_empty() {
                warning(format!(
                    "No available slots on {} with {}.",
                    format_date(date),
                    professional.name
                ));
                return Ok(());
            }

            header(format!(
                "🕐 Available slots on {} with {}",
                format_date(date),
                professional.name
            ));
            let line: Vec<String> = slots.iter().map(ToString::to_string).collect();
            for row in line.chunks(8) {
                println!("{}", row.join("  "));
            }
        }
        _ => {}
    }

    Ok(())
}
