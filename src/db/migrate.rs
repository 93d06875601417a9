use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

/// Create the `entries` table if missing.
fn ensure_entries_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            day      TEXT NOT NULL,
            project  TEXT NOT NULL CHECK(project <> ''),
            minutes  INTEGER NOT NULL CHECK(minutes >= 0)
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        [chrono::Local::now().to_rfc3339().as_str(), version, message],
    )?;
    Ok(())
}

fn migrate_add_day_index(conn: &Connection) -> AppResult<()> {
    let version = "20260101_0001_entries_day_index";

    if is_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_entries_day ON entries(day);")
        .map_err(|e| AppError::Migration(format!("{version}: {e}")))?;

    mark_applied(conn, version, "Added day index to entries")?;

    success(format!(
        "Migration applied: {} → added index on entries(day)",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;
    ensure_entries_table(conn)?;
    migrate_add_day_index(conn)?;
    Ok(())
}
