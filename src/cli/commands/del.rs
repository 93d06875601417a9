use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Delete an entry by id. Unknown ids only produce a warning.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Delete { id } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        if DeleteLogic::apply(&pool, *id)? {
            success(format!("Deleted entry with id={}", id));
        } else {
            warning(format!("No entry with id={} (nothing deleted)", id));
        }
    }

    Ok(())
}
