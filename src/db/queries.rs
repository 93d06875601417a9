use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{WorkEntry, normalize_project};
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{Row, params};

/// Load every stored entry, fully materialized. Order is unspecified;
/// callers sort explicitly.
pub fn load_all_entries(pool: &DbPool) -> AppResult<Vec<WorkEntry>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, day, project, minutes FROM entries")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> rusqlite::Result<WorkEntry> {
    let day_str: String = row.get("day")?;
    let day = NaiveDate::parse_from_str(&day_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            Type::Text,
            Box::new(AppError::InvalidDate(day_str.clone())),
        )
    })?;

    let raw_minutes: i64 = row.get("minutes")?;
    let minutes = u32::try_from(raw_minutes).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            Type::Integer,
            Box::new(AppError::NegativeMinutes(raw_minutes)),
        )
    })?;

    Ok(WorkEntry {
        id: Some(row.get("id")?),
        day,
        project: row.get("project")?,
        minutes,
    })
}

/// Persist a new entry and record its freshly assigned id on it.
/// The project label is normalized here too, so a hand-built entry with a
/// blank project is stored as `(no project)`.
pub fn insert_entry(pool: &DbPool, entry: &mut WorkEntry) -> AppResult<i64> {
    if let Some(id) = entry.id {
        return Err(AppError::AlreadyPersisted(id));
    }

    entry.project = normalize_project(&entry.project);

    pool.conn.execute(
        "INSERT INTO entries (day, project, minutes) VALUES (?1, ?2, ?3)",
        params![entry.day_str(), entry.project, entry.minutes],
    )?;

    let id = pool.conn.last_insert_rowid();
    entry.id = Some(id);
    Ok(id)
}

/// Delete by id. Returns the number of rows removed (0 when nothing matched).
pub fn delete_entry(pool: &DbPool, id: i64) -> AppResult<usize> {
    let n = pool.conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
    Ok(n)
}

pub fn delete_all_entries(pool: &DbPool) -> AppResult<usize> {
    let n = pool.conn.execute("DELETE FROM entries", [])?;
    Ok(n)
}

pub fn count_entries(pool: &DbPool) -> AppResult<i64> {
    let n = pool
        .conn
        .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
    Ok(n)
}
