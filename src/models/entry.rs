use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// Label used when an entry is recorded without a project.
pub const NO_PROJECT: &str = "(no project)";

/// One unit of recorded work.
///
/// `id` stays `None` until the entry is inserted; the database assigns it
/// exactly once. Everything else is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkEntry {
    pub id: Option<i64>,   // ⇔ entries.id (INTEGER PRIMARY KEY AUTOINCREMENT)
    pub day: NaiveDate,    // ⇔ entries.day (TEXT "YYYY-MM-DD")
    pub project: String,   // ⇔ entries.project (TEXT, never empty)
    pub minutes: u32,      // ⇔ entries.minutes (INTEGER >= 0)
}

impl WorkEntry {
    /// Build an unsaved entry from already validated values.
    /// The project label is normalized the same way `parse` does it.
    pub fn new(day: NaiveDate, project: &str, minutes: u32) -> Self {
        Self {
            id: None,
            day,
            project: normalize_project(project),
            minutes,
        }
    }

    /// Parse raw user input into an entry.
    ///
    /// - `date` must be `YYYY-MM-DD`
    /// - `minutes` must be a base-10 whole number, not negative
    /// - an empty/blank `project` becomes [`NO_PROJECT`]
    pub fn parse(date: &str, project: &str, minutes: &str) -> AppResult<Self> {
        let day = parse_day(date)?;
        let minutes = parse_minutes(minutes)?;
        Ok(Self::new(day, project, minutes))
    }

    /// Lenient conversion of a delimited-file row (`date`, `project`, `minutes`).
    /// Missing columns count as empty text; any invalid field yields `None`.
    pub fn from_row(row: &HashMap<String, String>) -> Option<Self> {
        let field = |key: &str| row.get(key).map(String::as_str).unwrap_or("");
        Self::parse(field("date"), field("project"), field("minutes")).ok()
    }

    /// Text representation used for delimited files: `(date, project, minutes)`.
    pub fn to_row(&self) -> [String; 3] {
        [self.day_str(), self.project.clone(), self.minutes.to_string()]
    }

    pub fn day_str(&self) -> String {
        self.day.format("%Y-%m-%d").to_string()
    }
}

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`, zero-padded).
pub fn parse_day(text: &str) -> AppResult<NaiveDate> {
    let t = text.trim();
    if !is_iso_date_shape(t) {
        return Err(AppError::InvalidDate(t.to_string()));
    }
    NaiveDate::parse_from_str(t, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(t.to_string()))
}

/// Exactly `DDDD-DD-DD`; chrono alone also takes `2026-1-5` or a signed year.
fn is_iso_date_shape(t: &str) -> bool {
    let b = t.as_bytes();
    b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        })
}

/// Parse a non-negative whole number of minutes.
pub fn parse_minutes(text: &str) -> AppResult<u32> {
    let t = text.trim();
    let value: i64 = t
        .parse()
        .map_err(|_| AppError::InvalidMinutes(t.to_string()))?;

    if value < 0 {
        return Err(AppError::NegativeMinutes(value));
    }

    u32::try_from(value).map_err(|_| AppError::InvalidMinutes(t.to_string()))
}

pub fn normalize_project(project: &str) -> String {
    let p = project.trim();
    if p.is_empty() {
        NO_PROJECT.to_string()
    } else {
        p.to_string()
    }
}
