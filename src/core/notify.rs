//! Notification collaborator: fire-and-forget confirmation emails.

use crate::db::outbox;
use crate::errors::AppResult;
use rusqlite::Connection;

pub trait Notifier {
    fn send_email(&self, to: &str, subject: &str, body: &str) -> AppResult<()>;
}

/// Stores every mail in the `outbox` table; delivery happens elsewhere.
pub struct OutboxNotifier<'a> {
    conn: &'a Connection,
}

impl<'a> OutboxNotifier<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl Notifier for OutboxNotifier<'_> {
    fn send_email(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        let id = outbox::push(self.conn, to, subject, body)?;
        tracing::debug!(id, to, subject, "email queued in outbox");
        Ok(())
    }
}

/// Send and swallow any failure: the caller's operation already succeeded.
pub fn send_quietly(notifier: &dyn Notifier, to: &str, subject: &str, body: &str) -> bool {
    match notifier.send_email(to, subject, body) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(to, subject, error = %e, "email could not be sent");
            false
        }
    }
}
