use crate::core::report::sorted_totals;
use crate::errors::{AppError, AppResult};
use crate::models::report::Report;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub fn write_json(report: &Report, path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(report)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}

/// Rows of the CSV export: one per project in display order, then `TOTAL`.
pub fn report_csv_rows(report: &Report) -> Vec<[String; 3]> {
    let mut rows: Vec<[String; 3]> = sorted_totals(&report.totals_by_project)
        .into_iter()
        .map(|(project, mins)| {
            let hhmm = report
                .totals_by_project_hhmm
                .get(&project)
                .cloned()
                .unwrap_or_default();
            [project, mins.to_string(), hhmm]
        })
        .collect();

    rows.push([
        "TOTAL".to_string(),
        report.grand_total_minutes.to_string(),
        report.grand_total_hhmm.clone(),
    ]);

    rows
}

/// Export CSV with a `project,minutes,hhmm` header.
pub fn write_csv(report: &Report, path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(["project", "minutes", "hhmm"])
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in report_csv_rows(report) {
        wtr.write_record(&row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}
