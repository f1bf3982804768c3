use crate::cli::commands::confirmed;
use crate::cli::parser::{Commands, ProAction};
use crate::config::Config;
use crate::core::booking::validate_email;
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::professionals;
use crate::errors::AppResult;
use crate::models::professional::{Professional, ProfessionalFields};
use crate::models::session::Session;
use crate::ui::messages::{info, success};
use crate::utils::colors::color_for_active;
use crate::utils::table::{Cell, Table};

fn render(list: &[Professional]) -> String {
    let mut t = Table::new(&["ID", "Name", "Specialty", "Email", "Phone", "Active"]);
    for p in list {
        let color = color_for_active(p.is_active);
        let or_dash = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };
        t.add_row(vec![
            Cell::colored(p.id.to_string(), color),
            Cell::colored(p.name.clone(), color),
            Cell::colored(or_dash(&p.specialty), color),
            Cell::colored(or_dash(&p.email), color),
            Cell::colored(or_dash(&p.phone), color),
            Cell::colored(if p.is_active { "yes" } else { "no" }, color),
        ]);
    }
    t.render()
}

fn checked_email(email: &Option<String>) -> AppResult<Option<String>> {
    match email.as_deref().map(str::trim) {
        Some(e) if !e.is_empty() => {
            validate_email(e)?;
            Ok(Some(e.to_string()))
        }
        Some(_) => Ok(Some(String::new())),
        None => Ok(None),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    let Commands::Pro { action } = cmd else {
        return Ok(());
    };
    let pool = DbPool::new(&cfg.database)?;
    let conn = &pool.conn;

    match action {
        ProAction::List { all } => {
            let show_all = *all && session.require_admin().is_ok();
            let list = professionals::list(conn, !show_all)?;
            if list.is_empty() {
                info("No professionals configured.");
            } else {
                print!("{}", render(&list));
            }
        }
        ProAction::Add {
            name,
            specialty,
            email,
            phone,
        } => {
            let admin = session.require_admin()?;
            let fields = ProfessionalFields {
                name: Some(name.clone()),
                specialty: specialty.clone(),
                email: checked_email(email)?,
                phone: phone.clone(),
                is_active: Some(true),
            };
            let id = professionals::create(conn, &fields)?;
            audit_quiet(
                conn,
                "professional",
                &format!("professional #{id}"),
                &format!("created '{}' by {}", name, admin.email),
            );
            success(format!("Professional #{id} '{name}' created."));
        }
        ProAction::Edit {
            id,
            name,
            specialty,
            email,
            phone,
            active,
        } => {
            let admin = session.require_admin()?;
            let fields = ProfessionalFields {
                name: name.clone(),
                specialty: specialty.clone(),
                email: checked_email(email)?,
                phone: phone.clone(),
                is_active: *active,
            };
            let p = professionals::update(conn, *id, &fields)?;
            audit_quiet(
                conn,
                "professional",
                &format!("professional #{id}"),
                &format!("updated '{}' by {}", p.name, admin.email),
            );
            success(format!("Professional #{id} updated."));
            print!("{}", render(&[p]));
        }
        ProAction::Del { id, force } => {
            let admin = session.require_admin()?;
            let p = professionals::get(conn, *id)?;
            if !confirmed(&format!("Delete professional #{} '{}'?", id, p.name), *force) {
                return Ok(());
            }
            professionals::delete(conn, *id)?;
            audit_quiet(
                conn,
                "delete",
                &format!("professional #{id}"),
                &format!("deleted '{}' by {}", p.name, admin.email),
            );
            success(format!("Professional #{id} deleted."));
        }
    }

    Ok(())
}
