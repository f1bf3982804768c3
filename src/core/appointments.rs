//! Customer and admin operations on existing appointments.

use crate::db::appointments::{self, AppointmentFilter, Sort};
use crate::db::log;
use crate::errors::{AppError, AppResult};
use crate::models::appointment::{Appointment, AppointmentStatus, PaymentStatus};
use crate::models::session::Session;
use chrono::NaiveDate;
use rusqlite::Connection;

/// The three tabs of "my appointments".
#[derive(Debug, Default)]
pub struct AppointmentBuckets {
    pub upcoming: Vec<Appointment>,
    pub past: Vec<Appointment>,
    pub cancelled: Vec<Appointment>,
}

impl AppointmentBuckets {
    /// upcoming: today or later and still active;
    /// past: before today or completed;
    /// cancelled: cancelled at any date.
    /// A cancelled appointment in the past shows up in both `past` and `cancelled`.
    pub fn split(appts: &[Appointment], today: NaiveDate) -> Self {
        let mut b = Self::default();
        for a in appts {
            if a.date >= today && !a.status.is_final() {
                b.upcoming.push(a.clone());
            }
            if a.date < today || a.status == AppointmentStatus::Completed {
                b.past.push(a.clone());
            }
            if a.status == AppointmentStatus::Cancelled {
                b.cancelled.push(a.clone());
            }
        }
        b
    }
}

pub struct AppointmentLogic;

impl AppointmentLogic {
    /// Appointments of the session user, newest date first.
    pub fn mine(conn: &Connection, session: &Session) -> AppResult<Vec<Appointment>> {
        let user = session.require_user()?;
        appointments::filter(
            conn,
            &AppointmentFilter::for_client(&user.email),
            Sort::DateDesc,
            None,
        )
    }

    /// Customer cancellation of one of their own modifiable appointments.
    pub fn cancel_own(
        conn: &Connection,
        session: &Session,
        id: i64,
        today: NaiveDate,
    ) -> AppResult<Appointment> {
        let user = session.require_user()?;
        let appt = appointments::get(conn, id)?;
        if !appt.client_email.eq_ignore_ascii_case(&user.email) {
            return Err(AppError::NotOwner(id));
        }
        Self::transition(conn, appt, AppointmentStatus::Cancelled, today, &user.email)
    }

    /// Admin status change (confirm, complete or cancel).
    pub fn set_status(
        conn: &Connection,
        session: &Session,
        id: i64,
        status: AppointmentStatus,
        today: NaiveDate,
    ) -> AppResult<Appointment> {
        let admin = session.require_admin()?;
        let appt = appointments::get(conn, id)?;
        Self::transition(conn, appt, status, today, &admin.email)
    }

    fn transition(
        conn: &Connection,
        appt: Appointment,
        to: AppointmentStatus,
        today: NaiveDate,
        actor: &str,
    ) -> AppResult<Appointment> {
        if to == AppointmentStatus::Pending || !appt.can_modify(today) {
            return Err(AppError::InvalidTransition {
                id: appt.id,
                from: appt.status.to_db_str().to_string(),
                to: to.to_db_str().to_string(),
            });
        }

        appointments::update_status(conn, appt.id, to)?;
        log::audit_quiet(
            conn,
            "status",
            &format!("appointment #{}", appt.id),
            &format!("{} -> {} by {}", appt.status.to_db_str(), to.to_db_str(), actor),
        );

        Ok(Appointment { status: to, ..appt })
    }

    /// Admin bookkeeping of the payment state; no payment is processed.
    pub fn set_payment(
        conn: &Connection,
        session: &Session,
        id: i64,
        payment: PaymentStatus,
    ) -> AppResult<Appointment> {
        let admin = session.require_admin()?;
        let appt = appointments::get(conn, id)?;
        appointments::update_payment(conn, id, payment)?;
        log::audit_quiet(
            conn,
            "payment",
            &format!("appointment #{id}"),
            &format!(
                "{} -> {} by {}",
                appt.payment_status.to_db_str(),
                payment.to_db_str(),
                admin.email
            ),
        );
        Ok(Appointment {
            payment_status: payment,
            ..appt
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;
    use crate::models::appointment::NewAppointment;
    use crate::models::session::{Role, SessionUser};
    use crate::utils::date::parse_date;
    use crate::utils::time::parse_time;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn session(email: &str, role: Role) -> Session {
        Session {
            user: Some(SessionUser {
                email: email.into(),
                full_name: String::new(),
                phone: String::new(),
                role,
            }),
        }
    }

    fn insert(conn: &Connection, date: &str, status: AppointmentStatus) -> i64 {
        appointments::create(
            conn,
            &NewAppointment {
                client_name: "Ana".into(),
                client_email: "ana@example.com".into(),
                client_phone: String::new(),
                service_id: 1,
                service_name: "Corte".into(),
                professional_id: 1,
                professional_name: "Pablo".into(),
                date: d(date),
                time: parse_time("10:00").unwrap(),
                duration: 30,
                price: 5000,
                status,
                payment_status: PaymentStatus::Pending,
                notes: String::new(),
            },
        )
        .unwrap()
    }

    #[test]
    fn buckets_follow_date_and_status() {
        let pool = DbPool::in_memory().unwrap();
        let c = &pool.conn;
        insert(c, "2025-06-20", AppointmentStatus::Confirmed);
        insert(c, "2025-06-10", AppointmentStatus::Confirmed);
        insert(c, "2025-06-20", AppointmentStatus::Completed);
        insert(c, "2025-06-10", AppointmentStatus::Cancelled);
        insert(c, "2025-06-25", AppointmentStatus::Cancelled);

        let all = appointments::list(c).unwrap();
        let b = AppointmentBuckets::split(&all, d("2025-06-16"));
        assert_eq!(b.upcoming.len(), 1);
        assert_eq!(b.past.len(), 3);
        assert_eq!(b.cancelled.len(), 2);
    }

    #[test]
    fn customer_cancels_own_upcoming_appointment() {
        let pool = DbPool::in_memory().unwrap();
        let id = insert(&pool.conn, "2025-06-20", AppointmentStatus::Confirmed);
        let s = session("ANA@example.com", Role::Customer);
        let a = AppointmentLogic::cancel_own(&pool.conn, &s, id, d("2025-06-16")).unwrap();
        assert_eq!(a.status, AppointmentStatus::Cancelled);
        assert_eq!(
            appointments::get(&pool.conn, id).unwrap().status,
            AppointmentStatus::Cancelled
        );
    }

    #[test]
    fn other_customers_cannot_cancel() {
        let pool = DbPool::in_memory().unwrap();
        let id = insert(&pool.conn, "2025-06-20", AppointmentStatus::Confirmed);
        let s = session("luis@example.com", Role::Customer);
        let err = AppointmentLogic::cancel_own(&pool.conn, &s, id, d("2025-06-16")).unwrap_err();
        assert!(matches!(err, AppError::NotOwner(_)));
    }

    #[test]
    fn past_or_final_appointments_are_read_only() {
        let pool = DbPool::in_memory().unwrap();
        let admin = session("boss@example.com", Role::Admin);
        let past = insert(&pool.conn, "2025-06-10", AppointmentStatus::Confirmed);
        let done = insert(&pool.conn, "2025-06-20", AppointmentStatus::Completed);
        for id in [past, done] {
            let err = AppointmentLogic::set_status(
                &pool.conn,
                &admin,
                id,
                AppointmentStatus::Cancelled,
                d("2025-06-16"),
            )
            .unwrap_err();
            assert!(matches!(err, AppError::InvalidTransition { .. }));
        }
    }

    #[test]
    fn status_change_needs_admin() {
        let pool = DbPool::in_memory().unwrap();
        let id = insert(&pool.conn, "2025-06-20", AppointmentStatus::Confirmed);
        let s = session("ana@example.com", Role::Customer);
        let err = AppointmentLogic::set_status(
            &pool.conn,
            &s,
            id,
            AppointmentStatus::Completed,
            d("2025-06-16"),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::AdminRequired));
    }
}
