use crate::db::now_iso;
use crate::errors::{AppError, AppResult};
use crate::models::service::{Service, ServiceCategory, ServiceFields};
use rusqlite::{Connection, OptionalExtension, Row, params};

const COLUMNS: &str = "id, name, description, price, duration, category, is_active";

fn map_row(row: &Row<'_>) -> rusqlite::Result<(Service, String)> {
    let category: String = row.get(5)?;
    Ok((
        Service {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            price: row.get(3)?,
            duration: row.get(4)?,
            category: ServiceCategory::Corte,
            is_active: row.get(6)?,
        },
        category,
    ))
}

fn finish((mut s, category): (Service, String)) -> AppResult<Service> {
    s.category = ServiceCategory::from_code(&category)?;
    Ok(s)
}

/// Services ordered by name; `only_active` hides disabled ones.
pub fn list(conn: &Connection, only_active: bool) -> AppResult<Vec<Service>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM services {} ORDER BY name COLLATE NOCASE ASC",
        if only_active { "WHERE is_active = 1" } else { "" }
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(finish(r?)?);
    }
    Ok(out)
}

pub fn get(conn: &Connection, id: i64) -> AppResult<Service> {
    let sql = format!("SELECT {COLUMNS} FROM services WHERE id = ?1");
    let row = conn.query_row(&sql, [id], map_row).optional()?;
    match row {
        Some(r) => finish(r),
        None => Err(AppError::NotFound {
            entity: "Service",
            id,
        }),
    }
}

pub fn create(conn: &Connection, f: &ServiceFields) -> AppResult<i64> {
    let name = f
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(AppError::MissingField("name"))?;

    conn.execute(
        "INSERT INTO services (name, description, price, duration, category, is_active, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            name,
            f.description.clone().unwrap_or_default(),
            f.price.unwrap_or(0),
            f.duration.unwrap_or(30),
            f.category.unwrap_or(ServiceCategory::Corte).to_db_str(),
            f.is_active.unwrap_or(true),
            now_iso(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Partial update: only the fields set in `f` change.
pub fn update(conn: &Connection, id: i64, f: &ServiceFields) -> AppResult<Service> {
    let mut s = get(conn, id)?;
    if let Some(v) = &f.name {
        s.name = v.trim().to_string();
    }
    if let Some(v) = &f.description {
        s.description = v.clone();
    }
    if let Some(v) = f.price {
        s.price = v;
    }
    if let Some(v) = f.duration {
        s.duration = v;
    }
    if let Some(v) = f.category {
        s.category = v;
    }
    if let Some(v) = f.is_active {
        s.is_active = v;
    }

    conn.execute(
        "UPDATE services
         SET name = ?1, description = ?2, price = ?3, duration = ?4, category = ?5, is_active = ?6
         WHERE id = ?7",
        params![
            s.name,
            s.description,
            s.price,
            s.duration,
            s.category.to_db_str(),
            s.is_active,
            id
        ],
    )?;
    Ok(s)
}

pub fn delete(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM services WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::NotFound {
            entity: "Service",
            id,
        });
    }
    Ok(())
}
