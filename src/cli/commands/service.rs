use crate::cli::commands::confirmed;
use crate::cli::parser::{Commands, ServiceAction};
use crate::config::Config;
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::services;
use crate::errors::AppResult;
use crate::models::service::{Service, ServiceCategory, ServiceFields};
use crate::models::session::Session;
use crate::ui::messages::{info, success};
use crate::utils::colors::color_for_active;
use crate::utils::formatting::{ellipsize, minutes_label, money};
use crate::utils::table::{Cell, Table};

fn render(list: &[Service], cfg: &Config) -> String {
    let mut t = Table::new(&["ID", "Name", "Category", "Duration", "Price", "Active", "Description"]);
    for s in list {
        let color = color_for_active(s.is_active);
        t.add_row(vec![
            Cell::colored(s.id.to_string(), color),
            Cell::colored(s.name.clone(), color),
            Cell::colored(s.category.label(), color),
            Cell::colored(minutes_label(s.duration), color),
            Cell::colored(money(&cfg.currency_symbol, s.price), color),
            Cell::colored(if s.is_active { "yes" } else { "no" }, color),
            Cell::colored(ellipsize(&s.description, 40), color),
        ]);
    }
    t.render()
}

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    let Commands::Service { action } = cmd else {
        return Ok(());
    };
    let pool = DbPool::new(&cfg.database)?;
    let conn = &pool.conn;

    match action {
        ServiceAction::List { all } => {
            // customers only ever see the active catalog
            let show_all = *all && session.require_admin().is_ok();
            let list = services::list(conn, !show_all)?;
            if list.is_empty() {
                info("No services configured.");
            } else {
                print!("{}", render(&list, cfg));
            }
        }
        ServiceAction::Add {
            name,
            price,
            duration,
            category,
            description,
        } => {
            let admin = session.require_admin()?;
            let fields = ServiceFields {
                name: Some(name.clone()),
                description: description.clone(),
                price: Some(*price),
                duration: Some(*duration),
                category: Some(ServiceCategory::from_code(category)?),
                is_active: Some(true),
            };
            let id = services::create(conn, &fields)?;
            audit_quiet(
                conn,
                "service",
                &format!("service #{id}"),
                &format!("created '{}' by {}", name, admin.email),
            );
            success(format!("Service #{id} '{name}' created."));
        }
        ServiceAction::Edit {
            id,
            name,
            price,
            duration,
            category,
            description,
            active,
        } => {
            let admin = session.require_admin()?;
            let fields = ServiceFields {
                name: name.clone(),
                description: description.clone(),
                price: *price,
                duration: *duration,
                category: category.as_deref().map(ServiceCategory::from_code).transpose()?,
                is_active: *active,
            };
            let s = services::update(conn, *id, &fields)?;
            audit_quiet(
                conn,
                "service",
                &format!("service #{id}"),
                &format!("updated '{}' by {}", s.name, admin.email),
            );
            success(format!("Service #{id} updated."));
            print!("{}", render(&[s], cfg));
        }
        ServiceAction::Del { id, force } => {
            let admin = session.require_admin()?;
            let s = services::get(conn, *id)?;
            if !confirmed(&format!("Delete service #{} '{}'?", id, s.name), *force) {
                return Ok(());
            }
            services::delete(conn, *id)?;
            audit_quiet(
                conn,
                "delete",
                &format!("service #{id}"),
                &format!("deleted '{}' by {}", s.name, admin.email),
            );
            success(format!("Service #{id} deleted."));
        }
    }

    Ok(())
}
