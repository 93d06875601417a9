use crate::cli::commands::totals::print_totals;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{build_report, resolve_range, sorted_totals};
use crate::db::pool::DbPool;
use crate::db::queries::load_all_entries;
use crate::errors::AppResult;
use crate::export::export_report;
use crate::ui::messages::header;
use crate::utils::date::{parse_optional_date, today};
use crate::utils::path::expand_tilde;

/// Totals by project in a date range, with optional JSON/CSV export.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        start, end, force, ..
    } = cmd
    {
        let start = parse_optional_date(start.as_ref())?;
        let end = parse_optional_date(end.as_ref())?;
        let (start, end) = resolve_range(start, end, today(), cfg.default_report_days);

        let pool = DbPool::new(&cfg.database)?;
        let entries = load_all_entries(&pool)?;
        let report = build_report(&entries, start, end);

        if report.count == 0 {
            println!("No entries in range {} to {}.", report.start, report.end);
        } else {
            header(format!(
                "Report {} to {} ({} entries)",
                report.start, report.end, report.count
            ));
            print_totals(&sorted_totals(&report.totals_by_project));
        }

        for (format, file) in cmd.report_targets() {
            export_report(&report, format, &expand_tilde(&file), *force)?;
        }
    }

    Ok(())
}
