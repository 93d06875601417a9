use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::stats::print_db_info;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Db { info: true }) {
        let pool = DbPool::new(&cfg.database)?;
        print_db_info(&pool, &cfg.database)?;
    }

    Ok(())
}
