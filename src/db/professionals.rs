use crate::db::now_iso;
use crate::errors::{AppError, AppResult};
use crate::models::professional::{Professional, ProfessionalFields};
use rusqlite::{Connection, OptionalExtension, Row, params};

const COLUMNS: &str = "id, name, specialty, email, phone, is_active";

fn map_row(row: &Row<'_>) -> rusqlite::Result<Professional> {
    Ok(Professional {
        id: row.get(0)?,
        name: row.get(1)?,
        specialty: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        is_active: row.get(5)?,
    })
}

pub fn list(conn: &Connection, only_active: bool) -> AppResult<Vec<Professional>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM professionals {} ORDER BY name COLLATE NOCASE ASC",
        if only_active { "WHERE is_active = 1" } else { "" }
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get(conn: &Connection, id: i64) -> AppResult<Professional> {
    let sql = format!("SELECT {COLUMNS} FROM professionals WHERE id = ?1");
    conn.query_row(&sql, [id], map_row)
        .optional()?
        .ok_or(AppError::NotFound {
            entity: "Professional",
            id,
        })
}

pub fn create(conn: &Connection, f: &ProfessionalFields) -> AppResult<i64> {
    let name = f
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(AppError::MissingField("name"))?;

    conn.execute(
        "INSERT INTO professionals (name, specialty, email, phone, is_active, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            name,
            f.specialty.clone().unwrap_or_default(),
            f.email.clone().unwrap_or_default(),
            f.phone.clone().unwrap_or_default(),
            f.is_active.unwrap_or(true),
            now_iso(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update(conn: &Connection, id: i64, f: &ProfessionalFields) -> AppResult<Professional> {
    let mut p = get(conn, id)?;
    if let Some(v) = &f.name {
        p.name = v.trim().to_string();
    }
    if let Some(v) = &f.specialty {
        p.specialty = v.clone();
    }
    if let Some(v) = &f.email {
        p.email = v.clone();
    }
    if let Some(v) = &f.phone {
        p.phone = v.clone();
    }
    if let Some(v) = f.is_active {
        p.is_active = v;
    }

    conn.execute(
        "UPDATE professionals
         SET name = ?1, specialty = ?2, email = ?3, phone = ?4, is_active = ?5
         WHERE id = ?6",
        params![p.name, p.specialty, p.email, p.phone, p.is_active, id],
    )?;
    Ok(p)
}

pub fn delete(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM professionals WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::NotFound {
            entity: "Professional",
            id,
        });
    }
    Ok(())
}
