use chrono::NaiveDate;
use std::collections::HashMap;
use worklog::core::report::{
    build_report, default_range, filter_by_date_range, filter_by_project, minutes_to_clock,
    resolve_range, sort_newest_first, sorted_totals, summary, totals_by_project,
};
use worklog::models::entry::WorkEntry;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

fn entry(id: i64, day: NaiveDate, project: &str, minutes: u32) -> WorkEntry {
    WorkEntry {
        id: Some(id),
        day,
        project: project.to_string(),
        minutes,
    }
}

fn sample() -> Vec<WorkEntry> {
    vec![
        entry(1, d(2026, 1, 1), "Thesis", 30),
        entry(2, d(2026, 1, 1), "Thesis", 15),
        entry(3, d(2026, 1, 2), "Code", 45),
    ]
}

#[test]
fn totals_group_by_exact_project() {
    let totals = totals_by_project(&sample());

    let mut expected = HashMap::new();
    expected.insert("Thesis".to_string(), 45u64);
    expected.insert("Code".to_string(), 45u64);
    assert_eq!(totals, expected);
}

#[test]
fn totals_sum_matches_entries_sum() {
    let mut entries = sample();
    entries.push(entry(4, d(2026, 1, 3), "thesis", 7));
    entries.push(entry(5, d(2026, 1, 4), "Code", 0));

    let totals = totals_by_project(&entries);
    let entries_sum: u64 = entries.iter().map(|e| u64::from(e.minutes)).sum();
    let totals_sum: u64 = totals.values().sum();

    assert_eq!(totals_sum, entries_sum);
    assert_eq!(totals.get("thesis"), Some(&7));
    assert_eq!(totals.get("Thesis"), Some(&45));
    assert_eq!(totals.len(), 3);
}

#[test]
fn totals_of_nothing_is_empty() {
    assert!(totals_by_project(&[]).is_empty());
}

#[test]
fn totals_do_not_truncate_large_sums() {
    let entries = vec![
        entry(1, d(2026, 1, 1), "Big", u32::MAX),
        entry(2, d(2026, 1, 2), "Big", u32::MAX),
    ];
    let totals = totals_by_project(&entries);
    assert_eq!(totals["Big"], 2 * u64::from(u32::MAX));
}

#[test]
fn clock_formatting() {
    assert_eq!(minutes_to_clock(0), "0:00");
    assert_eq!(minutes_to_clock(5), "0:05");
    assert_eq!(minutes_to_clock(65), "1:05");
    assert_eq!(minutes_to_clock(600), "10:00");
    assert_eq!(minutes_to_clock(25 * 60 + 59), "25:59");
}

#[test]
fn date_range_is_inclusive() {
    let entries = vec![
        entry(1, d(2026, 1, 1), "A", 1),
        entry(2, d(2026, 1, 5), "A", 1),
        entry(3, d(2026, 1, 10), "A", 1),
        entry(4, d(2026, 1, 11), "A", 1),
    ];

    let kept = filter_by_date_range(&entries, d(2026, 1, 1), d(2026, 1, 10));
    let ids: Vec<i64> = kept.iter().filter_map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn date_range_bounds_are_order_independent() {
    let entries = vec![
        entry(1, d(2025, 12, 31), "A", 1),
        entry(2, d(2026, 1, 2), "B", 2),
        entry(3, d(2026, 1, 4), "C", 3),
    ];

    let a = d(2026, 1, 4);
    let b = d(2026, 1, 1);
    assert_eq!(
        filter_by_date_range(&entries, a, b),
        filter_by_date_range(&entries, b, a)
    );
    assert_eq!(filter_by_date_range(&entries, a, b).len(), 2);
}

#[test]
fn single_day_range() {
    let kept = filter_by_date_range(&sample(), d(2026, 1, 2), d(2026, 1, 2));
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].project, "Code");
}

#[test]
fn project_filter_is_exact() {
    let entries = sample();
    assert_eq!(filter_by_project(&entries, Some("Thesis")).len(), 2);
    assert!(filter_by_project(&entries, Some("thesis")).is_empty());
    assert_eq!(filter_by_project(&entries, None).len(), 3);
}

#[test]
fn summary_of_nothing_is_all_zero() {
    let s = summary(&[]);
    assert_eq!(s.entries, 0);
    assert_eq!(s.total_minutes, 0);
    assert_eq!(s.days, 0);
    assert_eq!(s.avg_minutes_per_day, 0.0);
}

#[test]
fn summary_counts_distinct_days() {
    let s = summary(&sample());
    assert_eq!(s.entries, 3);
    assert_eq!(s.total_minutes, 90);
    assert_eq!(s.days, 2);
    assert_eq!(s.avg_minutes_per_day, 45.0);
}

#[test]
fn summary_average_is_not_rounded() {
    let entries = vec![
        entry(1, d(2026, 1, 1), "A", 10),
        entry(2, d(2026, 1, 2), "A", 0),
        entry(3, d(2026, 1, 3), "A", 0),
    ];
    let s = summary(&entries);
    assert!((s.avg_minutes_per_day - 10.0 / 3.0).abs() < 1e-12);
}

#[test]
fn sorted_totals_most_minutes_first_then_name() {
    let mut totals = HashMap::new();
    totals.insert("Thesis".to_string(), 45u64);
    totals.insert("Code".to_string(), 45u64);
    totals.insert("Reading".to_string(), 90u64);
    totals.insert("Admin".to_string(), 5u64);

    let order: Vec<String> = sorted_totals(&totals).into_iter().map(|(p, _)| p).collect();
    assert_eq!(order, vec!["Reading", "Code", "Thesis", "Admin"]);
}

#[test]
fn entries_sort_newest_first() {
    let mut entries = vec![
        entry(1, d(2026, 1, 1), "A", 1),
        entry(2, d(2026, 1, 3), "A", 1),
        entry(3, d(2026, 1, 1), "A", 1),
        entry(4, d(2026, 1, 2), "A", 1),
    ];
    sort_newest_first(&mut entries);

    let ids: Vec<i64> = entries.iter().filter_map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 4, 3, 1]);
}

#[test]
fn report_fills_every_field() {
    let mut entries = sample();
    entries.push(entry(4, d(2026, 2, 1), "Outside", 500));

    let r = build_report(&entries, d(2026, 1, 31), d(2026, 1, 1));

    assert_eq!(r.start, d(2026, 1, 1));
    assert_eq!(r.end, d(2026, 1, 31));
    assert_eq!(r.count, 3);
    assert_eq!(r.grand_total_minutes, 90);
    assert_eq!(r.grand_total_hhmm, "1:30");
    assert_eq!(r.totals_by_project.get("Thesis"), Some(&45));
    assert_eq!(r.totals_by_project.get("Code"), Some(&45));
    assert!(!r.totals_by_project.contains_key("Outside"));
    assert_eq!(
        r.totals_by_project_hhmm.get("Thesis").map(String::as_str),
        Some("0:45")
    );
}

#[test]
fn empty_report_keeps_fields_with_defaults() {
    let r = build_report(&sample(), d(2020, 1, 1), d(2020, 1, 7));
    assert_eq!(r.count, 0);
    assert!(r.totals_by_project.is_empty());
    assert!(r.totals_by_project_hhmm.is_empty());
    assert_eq!(r.grand_total_minutes, 0);
    assert_eq!(r.grand_total_hhmm, "0:00");

    let json = serde_json::to_value(&r).expect("serializable report");
    for key in [
        "start",
        "end",
        "count",
        "totals_by_project",
        "grand_total_minutes",
        "totals_by_project_hhmm",
        "grand_total_hhmm",
    ] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(json["start"], "2020-01-01");
    assert_eq!(json["end"], "2020-01-07");
}

#[test]
fn default_range_is_seven_days_ending_today() {
    let today = d(2026, 3, 3);
    assert_eq!(default_range(today, 7), (d(2026, 2, 25), today));
    assert_eq!(default_range(today, 1), (today, today));
    assert_eq!(default_range(today, 0), (today, today));
}

#[test]
fn resolve_range_uses_default_window_unless_both_bounds_given() {
    let today = d(2026, 3, 10);
    assert_eq!(
        resolve_range(Some(d(2026, 1, 1)), Some(d(2026, 1, 31)), today, 7),
        (d(2026, 1, 1), d(2026, 1, 31))
    );
    assert_eq!(
        resolve_range(Some(d(2025, 1, 1)), None, today, 7),
        (d(2026, 3, 4), today)
    );
    assert_eq!(
        resolve_range(None, Some(d(2026, 1, 31)), today, 7),
        (d(2026, 3, 4), today)
    );
    assert_eq!(
        resolve_range(None, None, today, 7),
        (d(2026, 3, 4), today)
    );
}
