use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let stats = ImportLogic::from_path(&pool, &expand_tilde(file))?;

        success(format!(
            "Imported {} entries, skipped {}",
            stats.imported, stats.skipped
        ));
        if stats.skipped > 0 {
            warning("Skipped rows had an invalid date or minutes value.");
        }
    }

    Ok(())
}
