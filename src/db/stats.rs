use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL ENTRIES
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) DATE RANGE
    //
    let first_day: Option<String> = pool
        .conn
        .query_row("SELECT MIN(day) FROM entries", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();

    let last_day: Option<String> = pool
        .conn
        .query_row("SELECT MAX(day) FROM entries", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();

    let fmt_first = first_day.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_day.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
