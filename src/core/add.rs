use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::insert_entry;
use crate::errors::AppResult;
use crate::models::entry::WorkEntry;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate the raw fields, store the entry and return it with its id.
    /// Nothing is written when any field is invalid.
    pub fn apply(pool: &DbPool, date: &str, project: &str, minutes: &str) -> AppResult<WorkEntry> {
        let mut entry = WorkEntry::parse(date, project, minutes)?;
        let id = insert_entry(pool, &mut entry)?;

        ttlog_soft(
            &pool.conn,
            "add",
            &format!("id={id}"),
            &format!(
                "Added {} min on {} for '{}'",
                entry.minutes,
                entry.day_str(),
                entry.project
            ),
        );

        Ok(entry)
    }
}
