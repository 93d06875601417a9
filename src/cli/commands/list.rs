use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{filter_by_project, minutes_to_clock, sort_newest_first};
use crate::db::pool::DbPool;
use crate::db::queries::load_all_entries;
use crate::errors::AppResult;
use crate::utils::table::Table;

/// List entries, optionally filtered by project (newest first).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { project } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let all = load_all_entries(&pool)?;

        let mut entries = filter_by_project(&all, project.as_deref());

        if entries.is_empty() {
            println!("No entries.");
            return Ok(());
        }

        sort_newest_first(&mut entries);

        let mut table = Table::new(&["ID", "DATE", "PROJECT", "MIN", "H:MM"], cfg.separator());
        for e in &entries {
            table.add_row(vec![
                e.id.map(|id| id.to_string()).unwrap_or_default(),
                e.day_str(),
                e.project.clone(),
                e.minutes.to_string(),
                minutes_to_clock(u64::from(e.minutes)),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
