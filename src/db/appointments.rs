use crate::db::{col_date, col_time, now_iso};
use crate::errors::{AppError, AppResult};
use crate::models::appointment::{
    Appointment, AppointmentStatus, NewAppointment, PaymentStatus,
};
use crate::utils::date::format_date;
use crate::utils::time::format_time;
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};

const COLUMNS: &str = "id, client_name, client_email, client_phone, service_id, service_name,
    professional_id, professional_name, date, time, duration, price, status, payment_status, notes";

/// Equality predicate on appointment fields; unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct AppointmentFilter {
    pub date: Option<NaiveDate>,
    pub status: Option<AppointmentStatus>,
    pub professional_id: Option<i64>,
    pub client_email: Option<String>,
}

impl AppointmentFilter {
    /// The snapshot the slot calculator needs: confirmed bookings of one day.
    pub fn confirmed_on(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            status: Some(AppointmentStatus::Confirmed),
            ..Self::default()
        }
    }

    pub fn for_client(email: &str) -> Self {
        Self {
            client_email: Some(email.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sort {
    /// Oldest first (date, then time)
    #[default]
    DateAsc,
    /// Newest date first, times ascending within a day
    DateDesc,
}

impl Sort {
    fn sql(self) -> &'static str {
        match self {
            Sort::DateAsc => "ORDER BY date ASC, time ASC, id ASC",
            Sort::DateDesc => "ORDER BY date DESC, time ASC, id ASC",
        }
    }
}

/// Raw row; enum and time columns are parsed after the query so a bad
/// stored value surfaces as an AppError instead of a panic.
struct AppointmentRow {
    appt: Appointment,
    date: String,
    time: String,
    status: String,
    payment_status: String,
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<AppointmentRow> {
    Ok(AppointmentRow {
        appt: Appointment {
            id: row.get(0)?,
            client_name: row.get(1)?,
            client_email: row.get(2)?,
            client_phone: row.get(3)?,
            service_id: row.get(4)?,
            service_name: row.get(5)?,
            professional_id: row.get(6)?,
            professional_name: row.get(7)?,
            date: NaiveDate::MIN,
            time: chrono::NaiveTime::MIN,
            duration: row.get(10)?,
            price: row.get(11)?,
            status: AppointmentStatus::Pending,
            payment_status: PaymentStatus::Pending,
            notes: row.get(14)?,
        },
        date: row.get(8)?,
        time: row.get(9)?,
        status: row.get(12)?,
        payment_status: row.get(13)?,
    })
}

impl AppointmentRow {
    fn into_model(self) -> AppResult<Appointment> {
        let mut a = self.appt;
        a.date = col_date(&self.date)?;
        a.time = col_time(&self.time)?;
        a.status = AppointmentStatus::from_db_str(&self.status)
            .ok_or_else(|| AppError::InvalidStatus(self.status.clone()))?;
        a.payment_status = PaymentStatus::from_db_str(&self.payment_status)
            .ok_or_else(|| AppError::InvalidStatus(self.payment_status.clone()))?;
        Ok(a)
    }
}

/// `filter(predicate, sort, limit)` over the appointments table.
pub fn filter(
    conn: &Connection,
    f: &AppointmentFilter,
    sort: Sort,
    limit: Option<usize>,
) -> AppResult<Vec<Appointment>> {
    let mut clauses: Vec<&str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    if let Some(d) = f.date {
        clauses.push("date = ?");
        values.push(Value::Text(format_date(d)));
    }
    if let Some(s) = f.status {
        clauses.push("status = ?");
        values.push(Value::Text(s.to_db_str().to_string()));
    }
    if let Some(p) = f.professional_id {
        clauses.push("professional_id = ?");
        values.push(Value::Integer(p));
    }
    if let Some(e) = &f.client_email {
        clauses.push("client_email = ? COLLATE NOCASE");
        values.push(Value::Text(e.clone()));
    }

    let where_sql = if clauses.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", clauses.join(" AND "))
    };
    let limit_sql = limit.map(|n| format!("LIMIT {n}")).unwrap_or_default();

    let sql = format!(
        "SELECT {COLUMNS} FROM appointments {where_sql} {} {limit_sql}",
        sort.sql()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?.into_model()?);
    }
    Ok(out)
}

pub fn list(conn: &Connection) -> AppResult<Vec<Appointment>> {
    filter(conn, &AppointmentFilter::default(), Sort::DateDesc, None)
}

pub fn get(conn: &Connection, id: i64) -> AppResult<Appointment> {
    let sql = format!("SELECT {COLUMNS} FROM appointments WHERE id = ?1");
    match conn.query_row(&sql, [id], map_row).optional()? {
        Some(r) => r.into_model(),
        None => Err(AppError::NotFound {
            entity: "Appointment",
            id,
        }),
    }
}

pub fn create(conn: &Connection, a: &NewAppointment) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO appointments
            (client_name, client_email, client_phone, service_id, service_name,
             professional_id, professional_name, date, time, duration, price,
             status, payment_status, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
        params![
            a.client_name,
            a.client_email,
            a.client_phone,
            a.service_id,
            a.service_name,
            a.professional_id,
            a.professional_name,
            format_date(a.date),
            format_time(a.time),
            a.duration,
            a.price,
            a.status.to_db_str(),
            a.payment_status.to_db_str(),
            a.notes,
            now_iso(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_status(conn: &Connection, id: i64, status: AppointmentStatus) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE appointments SET status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )?;
    if n == 0 {
        return Err(AppError::NotFound {
            entity: "Appointment",
            id,
        });
    }
    Ok(())
}

pub fn update_payment(conn: &Connection, id: i64, status: PaymentStatus) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE appointments SET payment_status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )?;
    if n == 0 {
        return Err(AppError::NotFound {
            entity: "Appointment",
            id,
        });
    }
    Ok(())
}

pub fn delete(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM appointments WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::NotFound {
            entity: "Appointment",
            id,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;
    use crate::utils::date::parse_date;
    use crate::utils::time::parse_time;

    fn new_appt(date: &str, time: &str, pro: i64, status: AppointmentStatus) -> NewAppointment {
        NewAppointment {
            client_name: "Ana".into(),
            client_email: "ana@example.com".into(),
            client_phone: String::new(),
            service_id: 1,
            service_name: "Corte".into(),
            professional_id: pro,
            professional_name: "Pablo".into(),
            date: parse_date(date).unwrap(),
            time: parse_time(time).unwrap(),
            duration: 30,
            price: 5000,
            status,
            payment_status: PaymentStatus::Pending,
            notes: String::new(),
        }
    }

    #[test]
    fn filter_by_date_and_status() {
        let pool = DbPool::in_memory().unwrap();
        let c = &pool.conn;
        create(c, &new_appt("2025-06-16", "09:00", 1, AppointmentStatus::Confirmed)).unwrap();
        create(c, &new_appt("2025-06-16", "09:30", 1, AppointmentStatus::Pending)).unwrap();
        create(c, &new_appt("2025-06-17", "09:00", 1, AppointmentStatus::Confirmed)).unwrap();

        let day = parse_date("2025-06-16").unwrap();
        let got = filter(c, &AppointmentFilter::confirmed_on(day), Sort::DateAsc, None).unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].time_str(), "09:00");
    }

    #[test]
    fn newest_first_with_limit() {
        let pool = DbPool::in_memory().unwrap();
        let c = &pool.conn;
        create(c, &new_appt("2025-06-10", "10:00", 1, AppointmentStatus::Confirmed)).unwrap();
        create(c, &new_appt("2025-06-20", "10:00", 1, AppointmentStatus::Confirmed)).unwrap();
        create(c, &new_appt("2025-06-15", "10:00", 1, AppointmentStatus::Confirmed)).unwrap();

        let got = filter(c, &AppointmentFilter::default(), Sort::DateDesc, Some(2)).unwrap();
        let dates: Vec<String> = got.iter().map(|a| a.date_str()).collect();
        assert_eq!(dates, vec!["2025-06-20", "2025-06-15"]);
    }

    #[test]
    fn client_email_match_ignores_case() {
        let pool = DbPool::in_memory().unwrap();
        let c = &pool.conn;
        create(c, &new_appt("2025-06-10", "10:00", 1, AppointmentStatus::Confirmed)).unwrap();
        let got = filter(c, &AppointmentFilter::for_client("ANA@example.com"), Sort::DateAsc, None)
            .unwrap();
        assert_eq!(got.len(), 1);
    }

    #[test]
    fn status_update_on_missing_row_is_not_found() {
        let pool = DbPool::in_memory().unwrap();
        let err = update_status(&pool.conn, 42, AppointmentStatus::Cancelled).unwrap_err();
        assert!(matches!(err, AppError::NotFound { id: 42, .. }));
    }
}
