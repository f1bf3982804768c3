use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped with --test)
///  - the SQLite database with every table
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing barberbook…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", db_str);

    let pool = DbPool::new(&db_str)?;

    println!("✅ Database initialized at {}", db_str);

    log::audit_quiet(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_str),
    );

    println!("🎉 barberbook initialization completed!");
    Ok(())
}
