//! Aggregation over stored entries: per-project totals, date-range
//! filtering, overall statistics and the H:MM rendering of durations.
//!
//! Nothing here touches the database and nothing mutates an entry.

use crate::models::entry::WorkEntry;
use crate::models::report::{Report, Summary};
use chrono::{Duration, NaiveDate};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Sum minutes per project (exact label match, case-sensitive).
pub fn totals_by_project(entries: &[WorkEntry]) -> HashMap<String, u64> {
    let mut totals: HashMap<String, u64> = HashMap::new();

    for e in entries {
        *totals.entry(e.project.clone()).or_insert(0) += u64::from(e.minutes);
    }

    totals
}

/// Elapsed-duration formatting: `65 -> "1:05"`, `600 -> "10:00"`.
/// Hours are not padded and may exceed 23.
pub fn minutes_to_clock(total_minutes: u64) -> String {
    format!("{}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Keep entries with `start <= day <= end`. Reversed bounds are swapped.
pub fn filter_by_date_range(
    entries: &[WorkEntry],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<WorkEntry> {
    let (start, end) = ordered(start, end);

    entries
        .iter()
        .filter(|e| start <= e.day && e.day <= end)
        .cloned()
        .collect()
}

/// Keep entries of one project; `None` keeps everything.
pub fn filter_by_project(entries: &[WorkEntry], project: Option<&str>) -> Vec<WorkEntry> {
    match project {
        Some(p) => entries.iter().filter(|e| e.project == p).cloned().collect(),
        None => entries.to_vec(),
    }
}

pub fn summary(entries: &[WorkEntry]) -> Summary {
    let total_minutes: u64 = entries.iter().map(|e| u64::from(e.minutes)).sum();
    let days = entries.iter().map(|e| e.day).collect::<HashSet<_>>().len();

    let avg_minutes_per_day = if days == 0 {
        0.0
    } else {
        total_minutes as f64 / days as f64
    };

    Summary {
        entries: entries.len(),
        total_minutes,
        days,
        avg_minutes_per_day,
    }
}

/// Display order for project totals: most minutes first, then project
/// name ascending. Accepts any `project -> minutes` map by reference.
pub fn sorted_totals<'a, I>(totals: I) -> Vec<(String, u64)>
where
    I: IntoIterator<Item = (&'a String, &'a u64)>,
{
    let mut items: Vec<(String, u64)> = totals
        .into_iter()
        .map(|(project, mins)| (project.clone(), *mins))
        .collect();

    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    items
}

/// Display order for entry listings: newest day first, then highest id
/// (most recently inserted) first. Unsaved entries sort last within a day.
pub fn sort_newest_first(entries: &mut [WorkEntry]) {
    entries.sort_by(|a, b| b.day.cmp(&a.day).then_with(|| b.id.cmp(&a.id)));
}

/// Build the report for `[start, end]` (bounds normalized to min/max).
pub fn build_report(entries: &[WorkEntry], start: NaiveDate, end: NaiveDate) -> Report {
    let (start, end) = ordered(start, end);
    let in_range = filter_by_date_range(entries, start, end);

    let totals: BTreeMap<String, u64> = totals_by_project(&in_range).into_iter().collect();
    let grand_total: u64 = totals.values().sum();

    let totals_hhmm = totals
        .iter()
        .map(|(project, mins)| (project.clone(), minutes_to_clock(*mins)))
        .collect();

    Report {
        start,
        end,
        count: in_range.len(),
        totals_by_project: totals,
        grand_total_minutes: grand_total,
        totals_by_project_hhmm: totals_hhmm,
        grand_total_hhmm: minutes_to_clock(grand_total),
    }
}

/// The `days`-day window ending `today`, inclusive. `days == 0` counts as 1.
pub fn default_range(today: NaiveDate, days: u32) -> (NaiveDate, NaiveDate) {
    let span = i64::from(days.max(1)) - 1;
    (today - Duration::days(span), today)
}

/// Resolve optional report bounds: both given are used as given,
/// otherwise the [`default_range`] ending `today` applies.
pub fn resolve_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
    days: u32,
) -> (NaiveDate, NaiveDate) {
    match (start, end) {
        (Some(s), Some(e)) => (s, e),
        _ => default_range(today, days),
    }
}

fn ordered(a: NaiveDate, b: NaiveDate) -> (NaiveDate, NaiveDate) {
    if b < a { (b, a) } else { (a, b) }
}
