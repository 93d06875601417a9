use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::insert_entry;
use crate::errors::{AppError, AppResult};
use crate::models::entry::WorkEntry;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Outcome of an import run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportStats {
    pub imported: usize,
    pub skipped: usize,
}

pub struct ImportLogic;

impl ImportLogic {
    /// Import a headered `date,project,minutes` file.
    pub fn from_path(pool: &DbPool, path: &Path) -> AppResult<ImportStats> {
        let file = std::fs::File::open(path)?;
        let stats = Self::from_reader(pool, file)?;

        ttlog_soft(
            &pool.conn,
            "import",
            &path.display().to_string(),
            &format!(
                "Imported {} entries, skipped {}",
                stats.imported, stats.skipped
            ),
        );

        Ok(stats)
    }

    /// Rows that fail validation are counted as skipped, never inserted.
    pub fn from_reader<R: Read>(pool: &DbPool, reader: R) -> AppResult<ImportStats> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut stats = ImportStats::default();

        for record in rdr.deserialize::<HashMap<String, String>>() {
            let row = record.map_err(|e| AppError::Import(format!("CSV read error: {e}")))?;

            match WorkEntry::from_row(&row) {
                Some(mut entry) => {
                    insert_entry(pool, &mut entry)?;
                    stats.imported += 1;
                }
                None => stats.skipped += 1,
            }
        }

        Ok(stats)
    }
}
