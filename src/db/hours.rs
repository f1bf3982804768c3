use crate::db::{col_opt_time, col_time};
use crate::errors::AppResult;
use crate::models::day_hours::{DayHours, validate_week};
use crate::models::weekday::Weekday;
use crate::utils::time::format_time;
use rusqlite::{Connection, params};

struct HoursRow {
    day_of_week: u8,
    is_open: bool,
    open_time: String,
    close_time: String,
    break_start: Option<String>,
    break_end: Option<String>,
}

impl HoursRow {
    fn into_model(self) -> AppResult<DayHours> {
        let h = DayHours {
            day_of_week: Weekday::from_index(self.day_of_week)?,
            is_open: self.is_open,
            open_time: col_time(&self.open_time)?,
            close_time: col_time(&self.close_time)?,
            break_start: col_opt_time(self.break_start)?,
            break_end: col_opt_time(self.break_end)?,
        };
        h.validate()?;
        Ok(h)
    }
}

/// All stored records ordered by weekday; rejected as a whole if any row is invalid.
pub fn list(conn: &Connection) -> AppResult<Vec<DayHours>> {
    let mut stmt = conn.prepare_cached(
        "SELECT day_of_week, is_open, open_time, close_time, break_start, break_end
         FROM business_hours ORDER BY day_of_week ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(HoursRow {
            day_of_week: row.get(0)?,
            is_open: row.get(1)?,
            open_time: row.get(2)?,
            close_time: row.get(3)?,
            break_start: row.get(4)?,
            break_end: row.get(5)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?.into_model()?);
    }
    Ok(out)
}

pub fn create(conn: &Connection, h: &DayHours) -> AppResult<i64> {
    h.validate()?;
    conn.execute(
        "INSERT INTO business_hours
            (day_of_week, is_open, open_time, close_time, break_start, break_end)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            h.day_of_week.index(),
            h.is_open,
            format_time(h.open_time),
            format_time(h.close_time),
            h.break_start.map(format_time),
            h.break_end.map(format_time),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_all(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM business_hours", [])?)
}

/// Replace the stored week: delete every record, then create the new ones.
pub fn replace_week(conn: &Connection, week: &[DayHours]) -> AppResult<()> {
    validate_week(week)?;
    delete_all(conn)?;
    for h in week {
        create(conn, h)?;
    }
    Ok(())
}
