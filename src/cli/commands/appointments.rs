use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::appointments::{AppointmentBuckets, AppointmentLogic};
use crate::db::appointments::{self, AppointmentFilter, Sort};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::appointment::{Appointment, AppointmentStatus, PaymentStatus};
use crate::models::session::{Role, Session};
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{color_for_payment, color_for_status};
use crate::utils::date::{parse_date_strict, today};
use crate::utils::formatting::money;
use crate::utils::table::{Cell, Table};

fn render(list: &[Appointment], cfg: &Config) -> String {
    let mut t = Table::new(&[
        "ID", "Date", "Time", "Client", "Service", "Professional", "Price", "Status", "Payment",
    ]);
    for a in list {
        t.add_row(vec![
            Cell::plain(a.id.to_string()),
            Cell::plain(a.date_str()),
            Cell::plain(a.time_str()),
            Cell::plain(format!("{} <{}>", a.client_name, a.client_email)),
            Cell::plain(a.service_name.clone()),
            Cell::plain(a.professional_name.clone()),
            Cell::plain(money(&cfg.currency_symbol, a.price)),
            Cell::colored(a.status.label(), color_for_status(a.status)),
            Cell::colored(a.payment_status.label(), color_for_payment(a.payment_status)),
        ]);
    }
    t.render()
}

fn print_section(title: &str, list: &[Appointment], cfg: &Config) {
    header(format!("{} ({})", title, list.len()));
    if list.is_empty() {
        info("None.");
    } else {
        print!("{}", render(list, cfg));
    }
}

fn list(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    let Commands::Appointments {
        mine,
        status,
        date,
        pro,
        limit,
        json,
    } = cmd
    else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;
    let user = session.require_user()?;

    if *mine || user.role != Role::Admin {
        let own = AppointmentLogic::mine(&pool.conn, session)?;
        if *json {
            println!("{}", serde_json::to_string_pretty(&own)?);
            return Ok(());
        }
        let buckets = AppointmentBuckets::split(&own, today());
        print_section("⏭️  Upcoming", &buckets.upcoming, cfg);
        print_section("⏮️  Past", &buckets.past, cfg);
        print_section("🚫 Cancelled", &buckets.cancelled, cfg);
        return Ok(());
    }

    let filter = AppointmentFilter {
        date: date.as_deref().map(parse_date_strict).transpose()?,
        status: status.as_deref().map(AppointmentStatus::from_code).transpose()?,
        professional_id: *pro,
        client_email: None,
    };
    let rows = appointments::filter(&pool.conn, &filter, Sort::DateDesc, *limit)?;

    if *json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if rows.is_empty() {
        info("No appointments found.");
    } else {
        print!("{}", render(&rows, cfg));
    }
    Ok(())
}

/// Handle `appointments`, `cancel`, `status` and `pay`
pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    match cmd {
        Commands::Appointments { .. } => list(cmd, cfg, session),
        Commands::Cancel { id } => {
            let pool = DbPool::new(&cfg.database)?;
            let a = AppointmentLogic::cancel_own(&pool.conn, session, *id, today())?;
            success(format!(
                "Appointment #{} on {} at {} cancelled.",
                a.id,
                a.date_str(),
                a.time_str()
            ));
            Ok(())
        }
        Commands::Status { id, status } => {
            let to = AppointmentStatus::from_code(status)?;
            let pool = DbPool::new(&cfg.database)?;
            let a = AppointmentLogic::set_status(&pool.conn, session, *id, to, today())?;
            success(format!("Appointment #{} is now {}.", a.id, a.status.label()));
            Ok(())
        }
        Commands::Pay { id, status } => {
            let to = PaymentStatus::from_code(status)?;
            let pool = DbPool::new(&cfg.database)?;
            let a = AppointmentLogic::set_payment(&pool.conn, session, *id, to)?;
            success(format!(
                "Appointment #{} payment: {}.",
                a.id,
                a.payment_status.label()
            ));
            Ok(())
        }
        _ => Ok(()),
    }
}
