use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-project totals for a date range, as printed and exported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub count: usize,
    pub totals_by_project: BTreeMap<String, u64>,
    pub grand_total_minutes: u64,
    pub totals_by_project_hhmm: BTreeMap<String, String>,
    pub grand_total_hhmm: String,
}

/// Overall statistics over a set of entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub entries: usize,
    pub total_minutes: u64,
    pub days: usize,
    pub avg_minutes_per_day: f64,
}
