use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;

/// Column width cap for the `operation (target)` column.
const OP_COLUMN_MAX: usize = 60;

fn strip_ansi(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

/// ANSI color by operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "import" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// One row of the internal `log` table.
#[derive(Debug, Clone)]
pub struct LogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(pool: &DbPool) -> AppResult<Vec<LogRow>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(LogRow {
                id: row.get(0)?,
                date: row.get(1)?,
                operation: row.get(2)?,
                target: row.get(3)?,
                message: row.get(4)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = Self::load(pool)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let ansi = Regex::new(r"\x1B\[[0-9;]*[mK]")
            .map_err(|e| crate::errors::AppError::Other(e.to_string()))?;

        let rows: Vec<(i64, String, String, String, String)> = entries
            .into_iter()
            .map(|r| {
                let date = chrono::DateTime::parse_from_rfc3339(&r.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(r.date);

                let op_target = if r.target.is_empty() {
                    r.operation.clone()
                } else {
                    format!("{} ({})", r.operation, r.target)
                };

                (r.id, date, r.operation, op_target, r.message)
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|(_, _, _, op_target, _)| op_target.chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_COLUMN_MAX);
        let id_w = rows
            .iter()
            .map(|(id, _, _, _, _)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rows
            .iter()
            .map(|(_, date, _, _, _)| date.len())
            .max()
            .unwrap_or(1);

        println!("📜 Internal log:\n");

        for (id, date, operation, op_target, message) in rows {
            let color = color_for_operation(&operation);

            let visible = if op_target.chars().count() > OP_COLUMN_MAX {
                let mut s = op_target.chars().take(OP_COLUMN_MAX - 3).collect::<String>();
                s.push_str("...");
                s
            } else {
                op_target
            };

            // only the operation word is coloured
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&ansi, &colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
