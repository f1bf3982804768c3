use crate::db::log::{self, LogEntry};
use crate::db::outbox;
use crate::errors::AppResult;
use crate::utils::colors::{BLUE, CYAN, GREEN, RED, RESET, YELLOW};
use crate::utils::formatting::ellipsize;
use crate::utils::table::{Cell, Table};
use rusqlite::Connection;

fn color_for_operation(op: &str) -> &'static str {
    match op {
        "book" => GREEN,
        "status" | "payment" => YELLOW,
        "service" | "professional" => CYAN,
        "hours" => BLUE,
        "delete" => RED,
        _ => RESET,
    }
}

fn local_time(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub struct LogLogic;

impl LogLogic {
    pub fn render_log(entries: &[LogEntry]) -> String {
        let mut t = Table::new(&["ID", "Date", "Operation", "Target", "Message"]);
        for e in entries {
            t.add_row(vec![
                Cell::plain(e.id.to_string()),
                Cell::plain(local_time(&e.date)),
                Cell::colored(e.operation.clone(), color_for_operation(&e.operation)),
                Cell::plain(e.target.clone()),
                Cell::plain(ellipsize(&e.message, 60)),
            ]);
        }
        t.render()
    }

    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let entries = log::list(conn)?;
        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }
        println!("📜 Internal log:\n");
        print!("{}", Self::render_log(&entries));
        Ok(())
    }

    pub fn print_outbox(conn: &Connection) -> AppResult<()> {
        let mails = outbox::list(conn)?;
        if mails.is_empty() {
            println!("📭 Outbox is empty.");
            return Ok(());
        }
        for m in mails {
            println!("✉️  #{} {} → {}", m.id, local_time(&m.created_at), m.recipient);
            println!("   Subject: {}", m.subject);
            for line in m.body.lines() {
                println!("   {line}");
            }
            println!();
        }
        Ok(())
    }
}
