use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    match cmd {
        Commands::Log { print: true } => LogLogic::print_log(&pool.conn),
        Commands::Outbox => LogLogic::print_outbox(&pool.conn),
        _ => Ok(()),
    }
}
