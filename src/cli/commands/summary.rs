use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{minutes_to_clock, summary};
use crate::db::pool::DbPool;
use crate::db::queries::load_all_entries;
use crate::errors::AppResult;
use crate::ui::messages::header;

/// Show overall summary statistics.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Summary) {
        let pool = DbPool::new(&cfg.database)?;
        let entries = load_all_entries(&pool)?;
        let data = summary(&entries);

        header("Summary");
        println!("- Entries: {}", data.entries);
        println!(
            "- Total minutes: {} min ({})",
            data.total_minutes,
            minutes_to_clock(data.total_minutes)
        );
        println!("- Days with entries: {}", data.days);

        if data.days > 0 {
            println!("- Average per day: {:.1} min", data.avg_minutes_per_day);
        }
    }

    Ok(())
}
