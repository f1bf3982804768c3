use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::booking::{BookingLogic, BookingRequest, ClientInfo};
use crate::core::notify::OutboxNotifier;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::session::Session;
use crate::ui::messages::{success, warning};
use crate::utils::date::{parse_date_strict, today};
use crate::utils::formatting::money;
use crate::utils::time::parse_time_strict;

/// Handle the `book` command
pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Book {
        date,
        time,
        service,
        pro,
        name,
        email,
        phone,
        notes,
    } = cmd
    {
        let req = BookingRequest {
            service_id: *service,
            professional_id: *pro,
            date: parse_date_strict(date)?,
            time: parse_time_strict(time)?,
            client: ClientInfo {
                name: name.clone(),
                email: email.clone(),
                phone: phone.clone(),
                notes: notes.clone(),
            },
        };

        let pool = DbPool::new(&cfg.database)?;
        let notifier = OutboxNotifier::new(&pool.conn);
        let booked = BookingLogic::book(&pool.conn, &notifier, session, &req, cfg, today())?;
        let appt = &booked.appointment;

        success(format!(
            "Appointment #{} booked: {} {} · {} with {} · {}",
            appt.id,
            appt.date_str(),
            appt.time_str(),
            appt.service_name,
            appt.professional_name,
            money(&cfg.currency_symbol, appt.price)
        ));
        if booked.mail_queued {
            println!("✉️  Confirmation email queued for {}", appt.client_email);
        } else {
            warning("The confirmation email could not be queued.");
        }
    }

    Ok(())
}
