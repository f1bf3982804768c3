//! barberbook library root.
//! Exposes the CLI parser, the high-level run() function and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use crate::cli::commands;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::booking::validate_email;
use crate::errors::AppResult;
use crate::models::session::{Role, Session, SessionUser};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, session: &Session) -> AppResult<()> {
    let cmd = &cli.command;
    match cmd {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(cmd, cfg),
        Commands::Log { .. } | Commands::Outbox => commands::log::handle(cmd, cfg),
        Commands::Hours { .. } => commands::hours::handle(cmd, cfg, session),
        Commands::Service { .. } => commands::service::handle(cmd, cfg, session),
        Commands::Pro { .. } => commands::pro::handle(cmd, cfg, session),
        Commands::Dates | Commands::Slots { .. } => commands::slots::handle(cmd, cfg),
        Commands::Book { .. } => commands::book::handle(cmd, cfg, session),
        Commands::Appointments { .. }
        | Commands::Cancel { .. }
        | Commands::Status { .. }
        | Commands::Pay { .. } => commands::appointments::handle(cmd, cfg, session),
        Commands::Dashboard { .. } | Commands::Clients { .. } => {
            commands::dashboard::handle(cmd, cfg, session)
        }
    }
}

/// Logs go to stderr so table and JSON output on stdout stay clean.
/// Filter with BARBERBOOK_LOG (e.g. `BARBERBOOK_LOG=barberbook=debug`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("BARBERBOOK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `--user/--role` win over the configured user; name and phone are kept
/// when the email is the same.
fn build_session(cli: &Cli, cfg: &Config) -> AppResult<Session> {
    let Some(email) = cli.user.as_deref().map(str::trim) else {
        return Ok(cfg.session());
    };
    validate_email(email)?;

    let role = cli.role.as_deref().map(Role::from_code).transpose()?;
    let known = cfg
        .user
        .as_ref()
        .filter(|u| u.email.eq_ignore_ascii_case(email));

    let user = SessionUser {
        email: email.to_string(),
        full_name: known.map(|u| u.full_name.clone()).unwrap_or_default(),
        phone: known.map(|u| u.phone.clone()).unwrap_or_default(),
        role: role.or(known.map(|u| u.role)).unwrap_or_default(),
    };
    Ok(Session { user: Some(user) })
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db(custom_db).to_string_lossy().to_string();
    }

    let session = build_session(&cli, &cfg)?;
    tracing::debug!(
        database = %cfg.database,
        user = session.current_user().map(|u| u.email.as_str()).unwrap_or("-"),
        "starting"
    );

    dispatch(&cli, &cfg, &session)
}
