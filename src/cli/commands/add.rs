use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Add a single entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        project,
        minutes,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let entry = AddLogic::apply(&pool, date, project, minutes)?;

        if let Some(id) = entry.id {
            success(format!("Added entry with id={}", id));
        }
    }

    Ok(())
}
