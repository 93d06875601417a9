use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::delete_entry;
use crate::errors::AppResult;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the entry with `id`. Returns whether a row was removed;
    /// an unknown id is not an error.
    pub fn apply(pool: &DbPool, id: i64) -> AppResult<bool> {
        let rows = delete_entry(pool, id)?;

        if rows > 0 {
            ttlog_soft(
                &pool.conn,
                "del",
                &format!("id={id}"),
                &format!("Deleted entry with id={id}"),
            );
        }

        Ok(rows > 0)
    }
}
