use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{filter_by_project, minutes_to_clock, sorted_totals, totals_by_project};
use crate::db::pool::DbPool;
use crate::db::queries::load_all_entries;
use crate::errors::AppResult;

/// Show total minutes per project, optionally for a single project.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Totals { project } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let all = load_all_entries(&pool)?;
        let entries = filter_by_project(&all, project.as_deref());

        if entries.is_empty() {
            println!("No entries.");
            return Ok(());
        }

        let totals = totals_by_project(&entries);
        print_totals(&sorted_totals(&totals));
    }

    Ok(())
}

/// `- project: N min (H:MM)` lines followed by the grand total.
pub(crate) fn print_totals(items: &[(String, u64)]) {
    let mut grand_total = 0;
    for (project, mins) in items {
        grand_total += mins;
        println!("- {}: {} min ({})", project, mins, minutes_to_clock(*mins));
    }

    println!(
        "Total: {} min ({})",
        grand_total,
        minutes_to_clock(grand_total)
    );
}
