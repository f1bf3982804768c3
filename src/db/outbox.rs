use crate::db::now_iso;
use crate::errors::AppResult;
use rusqlite::{Connection, params};

#[derive(Debug, Clone)]
pub struct OutboxMail {
    pub id: i64,
    pub created_at: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

pub fn push(conn: &Connection, to: &str, subject: &str, body: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO outbox (created_at, recipient, subject, body) VALUES (?1, ?2, ?3, ?4)",
        params![now_iso(), to, subject, body],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list(conn: &Connection) -> AppResult<Vec<OutboxMail>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, created_at, recipient, subject, body FROM outbox ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(OutboxMail {
            id: row.get(0)?,
            created_at: row.get(1)?,
            recipient: row.get(2)?,
            subject: row.get(3)?,
            body: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
