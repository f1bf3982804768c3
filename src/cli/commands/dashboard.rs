use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clients::client_stats;
use crate::core::dashboard::DashboardStats;
use crate::db::pool::DbPool;
use crate::db::{appointments, professionals, services};
use crate::errors::AppResult;
use crate::models::session::Session;
use crate::ui::messages::{header, info};
use crate::utils::date::{format_date, today, week_bounds};
use crate::utils::formatting::money;
use crate::utils::table::{Cell, Table};

/// Handle `dashboard` and `clients` (admin only)
pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    session.require_admin()?;
    let pool = DbPool::new(&cfg.database)?;
    let conn = &pool.conn;
    let appts = appointments::list(conn)?;

    match cmd {
        Commands::Dashboard { json } => {
            let now = today();
            let stats = DashboardStats::compute(
                &appts,
                &services::list(conn, false)?,
                &professionals::list(conn, false)?,
                now,
            );

            if *json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(());
            }

            let (from, to) = week_bounds(now);
            header(format!("📊 {} dashboard ({})", cfg.shop_name, format_date(now)));
            println!("Appointments today     : {}", stats.today);
            println!("Active appointments    : {}", stats.active);
            println!("Completed appointments : {}", stats.completed);
            println!(
                "This week              : {} ({} → {})",
                stats.week,
                format_date(from),
                format_date(to)
            );
            println!(
                "Revenue this week      : {}",
                money(&cfg.currency_symbol, stats.week_revenue)
            );
            println!("Active services        : {}", stats.active_services);
            println!("Active professionals   : {}", stats.active_professionals);
        }
        Commands::Clients { search } => {
            let clients = client_stats(&appts, search.as_deref());
            if clients.is_empty() {
                info("No clients found.");
                return Ok(());
            }
            let mut t = Table::new(&["Name", "Email", "Phone", "Appointments", "Completed", "Spent"]);
            for c in &clients {
                t.add_row(vec![
                    Cell::plain(c.name.clone()),
                    Cell::plain(c.email.clone()),
                    Cell::plain(if c.phone.is_empty() { "-".to_string() } else { c.phone.clone() }),
                    Cell::plain(c.appointments.to_string()),
                    Cell::plain(c.completed.to_string()),
                    Cell::plain(money(&cfg.currency_symbol, c.total_spent)),
                ]);
            }
            header(format!("👥 Clients ({})", clients.len()));
            print!("{}", t.render());
        }
        _ => {}
    }

    Ok(())
}
