mod json_csv;
mod overwrite;

pub use overwrite::{confirm_overwrite, ensure_writable};
pub use json_csv::{report_csv_rows, write_csv, write_json};

use crate::errors::AppResult;
use crate::models::report::Report;
use crate::ui::messages::success;
use std::path::Path;

/// Common completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    let shown = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    success(format!("Wrote {label} report to {}", shown.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write `report` to `path` in the requested format.
/// An existing file is only replaced when `force` is set or the user agrees.
pub fn export_report(report: &Report, format: ExportFormat, path: &Path, force: bool) -> AppResult<()> {
    ensure_writable(path, force)?;

    match format {
        ExportFormat::Json => write_json(report, path)?,
        ExportFormat::Csv => write_csv(report, path)?,
    }

    notify_export_success(&format.as_str().to_uppercase(), path);
    Ok(())
}
