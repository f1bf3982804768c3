//! Booking flow: availability lookup and appointment creation.

use crate::config::Config;
use crate::core::availability::{AvailabilityQuery, Slot};
use crate::core::calendar::is_date_disabled;
use crate::core::notify::{Notifier, send_quietly};
use crate::db::appointments::{self, AppointmentFilter, Sort};
use crate::db::{hours, log, professionals, services};
use crate::errors::{AppError, AppResult};
use crate::models::appointment::{Appointment, AppointmentStatus, NewAppointment, PaymentStatus};
use crate::models::day_hours::DayHours;
use crate::models::professional::Professional;
use crate::models::service::Service;
use crate::models::session::Session;
use crate::utils::date::format_date;
use crate::utils::formatting::money;
use crate::utils::time::format_time;
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use rusqlite::Connection;
use std::sync::OnceLock;

/// Contact details typed in the last booking step; blanks fall back to the session user.
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub service_id: i64,
    pub professional_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub client: ClientInfo,
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"))
}

pub fn validate_email(email: &str) -> AppResult<()> {
    if email_re().is_match(email) {
        Ok(())
    } else {
        Err(AppError::InvalidEmail(email.to_string()))
    }
}

fn non_blank(v: &Option<String>) -> Option<String> {
    v.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Result of a successful booking.
#[derive(Debug, Clone)]
pub struct Booked {
    pub appointment: Appointment,
    /// Whether the confirmation email reached the notifier.
    pub mail_queued: bool,
}

pub struct BookingLogic;

impl BookingLogic {
    /// Bookable slots for `date` and `professional_id`, read from the store.
    pub fn available(
        conn: &Connection,
        date: NaiveDate,
        professional_id: i64,
        cfg: &Config,
    ) -> AppResult<Vec<Slot>> {
        let pro = professionals::get(conn, professional_id)?;
        if !pro.is_active {
            return Err(AppError::Inactive(format!("Professional '{}'", pro.name)));
        }
        let week = hours::list(conn)?;
        let confirmed = appointments::filter(
            conn,
            &AppointmentFilter::confirmed_on(date),
            Sort::DateAsc,
            None,
        )?;
        Ok(Self::available_in(&week, &confirmed, date, professional_id, cfg))
    }

    fn available_in(
        week: &[DayHours],
        confirmed: &[Appointment],
        date: NaiveDate,
        professional_id: i64,
        cfg: &Config,
    ) -> Vec<Slot> {
        AvailabilityQuery::for_week(
            date,
            professional_id,
            week,
            confirmed,
            cfg.slot_interval_minutes,
        )
        .slots()
    }

    /// Create a confirmed appointment, then queue the confirmation email.
    ///
    /// The date must pass the calendar predicate and the time must still be
    /// among the available slots when the row is written; both checks and
    /// the insert run in one transaction.
    pub fn book(
        conn: &Connection,
        notifier: &dyn Notifier,
        session: &Session,
        req: &BookingRequest,
        cfg: &Config,
        today: NaiveDate,
    ) -> AppResult<Booked> {
        let user = session.require_user()?;

        let client_name = non_blank(&req.client.name)
            .or_else(|| non_blank(&Some(user.full_name.clone())))
            .ok_or(AppError::MissingField("name"))?;
        let client_email = non_blank(&req.client.email)
            .or_else(|| non_blank(&Some(user.email.clone())))
            .ok_or(AppError::MissingField("email"))?;
        validate_email(&client_email)?;
        let client_phone = non_blank(&req.client.phone).unwrap_or_else(|| user.phone.clone());

        let tx = conn.unchecked_transaction()?;

        let service = services::get(&tx, req.service_id)?;
        if !service.is_active {
            return Err(AppError::Inactive(format!("Service '{}'", service.name)));
        }
        let pro = professionals::get(&tx, req.professional_id)?;
        if !pro.is_active {
            return Err(AppError::Inactive(format!("Professional '{}'", pro.name)));
        }

        let week = hours::list(&tx)?;
        if is_date_disabled(req.date, today, &week, cfg.booking_horizon_days) {
            return Err(AppError::DateNotBookable(format_date(req.date)));
        }

        let confirmed = appointments::filter(
            &tx,
            &AppointmentFilter::confirmed_on(req.date),
            Sort::DateAsc,
            None,
        )?;
        let slots = Self::available_in(&week, &confirmed, req.date, pro.id, cfg);
        if !slots.iter().any(|s| s.time() == req.time) {
            return Err(AppError::SlotUnavailable {
                date: format_date(req.date),
                time: format_time(req.time),
            });
        }

        let new = NewAppointment {
            client_name,
            client_email,
            client_phone,
            service_id: service.id,
            service_name: service.name.clone(),
            professional_id: pro.id,
            professional_name: pro.name.clone(),
            date: req.date,
            time: req.time,
            duration: service.duration,
            price: service.price,
            status: AppointmentStatus::Confirmed,
            payment_status: PaymentStatus::Pending,
            notes: non_blank(&req.client.notes).unwrap_or_default(),
        };
        let id = appointments::create(&tx, &new)?;
        log::audit(
            &tx,
            "book",
            &format!("appointment #{id}"),
            &format!(
                "{} {} with {} for {}",
                format_date(new.date),
                format_time(new.time),
                new.professional_name,
                new.client_email
            ),
        )?;
        tx.commit()?;

        let appt = appointments::get(conn, id)?;
        let (subject, body) = confirmation_email(&appt, &service, &pro, cfg);
        let mail_queued = send_quietly(notifier, &appt.client_email, &subject, &body);

        tracing::info!(id, date = %appt.date_str(), time = %appt.time_str(), "appointment booked");
        Ok(Booked {
            appointment: appt,
            mail_queued,
        })
    }
}

pub fn confirmation_email(
    appt: &Appointment,
    service: &Service,
    pro: &Professional,
    cfg: &Config,
) -> (String, String) {
    let subject = format!("Appointment confirmation - {}", service.name);
    let body = format!(
        "Hello {name},\n\n\
         Your appointment is confirmed:\n\n\
         Date: {date}\n\
         Time: {time}\n\
         Service: {service}\n\
         Professional: {pro}\n\
         Price: {price}\n\n\
         See you soon!\n\n\
         {shop}\n",
        name = appt.client_name,
        date = appt.date.format("%A %-d %B %Y"),
        time = appt.time_str(),
        service = service.name,
        pro = pro.name,
        price = money(&cfg.currency_symbol, service.price),
        shop = cfg.shop_name,
    );
    (subject, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;
    use crate::models::professional::ProfessionalFields;
    use crate::models::service::ServiceFields;
    use crate::models::session::{Role, SessionUser};
    use crate::utils::date::parse_date;
    use crate::utils::time::parse_time;
    use std::cell::RefCell;

    struct FailingNotifier;

    impl Notifier for FailingNotifier {
        fn send_email(&self, _: &str, _: &str, _: &str) -> AppResult<()> {
            Err(AppError::Io(std::io::Error::other("smtp down")))
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        sent: RefCell<Vec<(String, String)>>,
    }

    impl Notifier for RecordingNotifier {
        fn send_email(&self, to: &str, subject: &str, _: &str) -> AppResult<()> {
            self.sent.borrow_mut().push((to.into(), subject.into()));
            Ok(())
        }
    }

    // 2025-06-16 is a Monday
    fn today() -> NaiveDate {
        parse_date("2025-06-16").unwrap()
    }

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn session() -> Session {
        Session {
            user: Some(SessionUser {
                email: "ana@example.com".into(),
                full_name: "Ana Pérez".into(),
                phone: "555-0101".into(),
                role: Role::Customer,
            }),
        }
    }

    fn seed(pool: &DbPool) -> (i64, i64) {
        let c = &pool.conn;
        hours::replace_week(c, &DayHours::default_week()).unwrap();
        let s = services::create(
            c,
            &ServiceFields {
                name: Some("Corte".into()),
                price: Some(5000),
                duration: Some(30),
                ..Default::default()
            },
        )
        .unwrap();
        let p = professionals::create(
            c,
            &ProfessionalFields {
                name: Some("Pablo".into()),
                ..Default::default()
            },
        )
        .unwrap();
        (s, p)
    }

    fn request(s: i64, p: i64, date: &str, time: &str) -> BookingRequest {
        BookingRequest {
            service_id: s,
            professional_id: p,
            date: parse_date(date).unwrap(),
            time: parse_time(time).unwrap(),
            client: ClientInfo::default(),
        }
    }

    #[test]
    fn booking_takes_the_slot_and_sends_mail() {
        let pool = DbPool::in_memory().unwrap();
        let (s, p) = seed(&pool);
        let cfg = Config::default();
        let notifier = RecordingNotifier::default();

        let booked = BookingLogic::book(
            &pool.conn,
            &notifier,
            &session(),
            &request(s, p, "2025-06-17", "10:00"),
            &cfg,
            today(),
        )
        .unwrap();
        assert!(booked.mail_queued);
        let appt = booked.appointment;

        assert_eq!(appt.status, AppointmentStatus::Confirmed);
        assert_eq!(appt.payment_status, PaymentStatus::Pending);
        assert_eq!(appt.client_name, "Ana Pérez");
        assert_eq!(appt.price, 5000);
        assert_eq!(notifier.sent.borrow().len(), 1);

        let slots = BookingLogic::available(&pool.conn, appt.date, p, &cfg).unwrap();
        assert!(!slots.iter().any(|x| x.to_string() == "10:00"));
    }

    #[test]
    fn second_booking_of_same_slot_fails() {
        let pool = DbPool::in_memory().unwrap();
        let (s, p) = seed(&pool);
        let cfg = Config::default();
        let req = request(s, p, "2025-06-17", "10:00");
        BookingLogic::book(&pool.conn, &FailingNotifier, &session(), &req, &cfg, today()).unwrap();
        let err = BookingLogic::book(&pool.conn, &FailingNotifier, &session(), &req, &cfg, today())
            .unwrap_err();
        assert!(matches!(err, AppError::SlotUnavailable { .. }));
    }

    #[test]
    fn failing_notifier_does_not_fail_booking() {
        let pool = DbPool::in_memory().unwrap();
        let (s, p) = seed(&pool);
        let booked = BookingLogic::book(
            &pool.conn,
            &FailingNotifier,
            &session(),
            &request(s, p, "2025-06-17", "11:30"),
            &Config::default(),
            today(),
        )
        .unwrap();
        assert!(!booked.mail_queued);
        assert_eq!(booked.appointment.status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn inactive_professional_has_no_availability() {
        let pool = DbPool::in_memory().unwrap();
        let (_, p) = seed(&pool);
        let cfg = Config::default();
        assert!(!BookingLogic::available(&pool.conn, d("2025-06-17"), p, &cfg).unwrap().is_empty());

        professionals::update(
            &pool.conn,
            p,
            &ProfessionalFields {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .unwrap();
        let err = BookingLogic::available(&pool.conn, d("2025-06-17"), p, &cfg).unwrap_err();
        assert!(matches!(err, AppError::Inactive(_)));
    }

    #[test]
    fn closed_sunday_is_not_bookable() {
        let pool = DbPool::in_memory().unwrap();
        let (s, p) = seed(&pool);
        let err = BookingLogic::book(
            &pool.conn,
            &FailingNotifier,
            &session(),
            &request(s, p, "2025-06-22", "10:00"),
            &Config::default(),
            today(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::DateNotBookable(_)));
    }

    #[test]
    fn anonymous_user_must_log_in() {
        let pool = DbPool::in_memory().unwrap();
        let (s, p) = seed(&pool);
        let err = BookingLogic::book(
            &pool.conn,
            &FailingNotifier,
            &Session::anonymous(),
            &request(s, p, "2025-06-17", "10:00"),
            &Config::default(),
            today(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::LoginRequired));
    }

    #[test]
    fn off_grid_time_is_rejected() {
        let pool = DbPool::in_memory().unwrap();
        let (s, p) = seed(&pool);
        let err = BookingLogic::book(
            &pool.conn,
            &FailingNotifier,
            &session(),
            &request(s, p, "2025-06-17", "10:15"),
            &Config::default(),
            today(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::SlotUnavailable { .. }));
    }

    #[test]
    fn bad_email_is_rejected() {
        assert!(validate_email("ana@example.com").is_ok());
        assert!(validate_email("ana@example").is_err());
        assert!(validate_email("not an email").is_err());
    }
}
