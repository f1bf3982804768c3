use rusqlite::{Connection, Result};

/// Create every table if missing. Safe to call on each open.
pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS business_hours (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            day_of_week  INTEGER NOT NULL UNIQUE CHECK(day_of_week BETWEEN 0 AND 6),
            is_open      INTEGER NOT NULL DEFAULT 1,
            open_time    TEXT NOT NULL DEFAULT '09:00',
            close_time   TEXT NOT NULL DEFAULT '20:00',
            break_start  TEXT,
            break_end    TEXT
        );

        CREATE TABLE IF NOT EXISTS services (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL,
            description  TEXT NOT NULL DEFAULT '',
            price        INTEGER NOT NULL DEFAULT 0,
            duration     INTEGER NOT NULL DEFAULT 30,
            category     TEXT NOT NULL DEFAULT 'corte'
                         CHECK(category IN ('corte','color','barba','peinado','tratamiento','combo')),
            is_active    INTEGER NOT NULL DEFAULT 1,
            created_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS professionals (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL,
            specialty    TEXT NOT NULL DEFAULT '',
            email        TEXT NOT NULL DEFAULT '',
            phone        TEXT NOT NULL DEFAULT '',
            is_active    INTEGER NOT NULL DEFAULT 1,
            created_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS appointments (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            client_name        TEXT NOT NULL,
            client_email       TEXT NOT NULL,
            client_phone       TEXT NOT NULL DEFAULT '',
            service_id         INTEGER NOT NULL,
            service_name       TEXT NOT NULL,
            professional_id    INTEGER NOT NULL,
            professional_name  TEXT NOT NULL,
            date               TEXT NOT NULL,
            time               TEXT NOT NULL,
            duration           INTEGER NOT NULL,
            price              INTEGER NOT NULL,
            status             TEXT NOT NULL DEFAULT 'pending'
                               CHECK(status IN ('pending','confirmed','completed','cancelled')),
            payment_status     TEXT NOT NULL DEFAULT 'pending'
                               CHECK(payment_status IN ('pending','paid','refunded')),
            notes              TEXT NOT NULL DEFAULT '',
            created_at         TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_appointments_date_pro
            ON appointments(date, professional_id);
        CREATE INDEX IF NOT EXISTS idx_appointments_client
            ON appointments(client_email);

        CREATE TABLE IF NOT EXISTS outbox (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at  TEXT NOT NULL,
            recipient   TEXT NOT NULL,
            subject     TEXT NOT NULL,
            body        TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        init_db(&conn).unwrap();
        let n: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN
                 ('business_hours','services','professionals','appointments','outbox','log')",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(n, 6);
    }
}
