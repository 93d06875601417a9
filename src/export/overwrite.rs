use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Allow writing `path` when it is new, when `force` is set, or when the
/// user answers y/yes on stdin.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    let stdin = io::stdin();
    confirm_overwrite(path, force, &mut stdin.lock(), &mut io::stdout())
}

/// Same decision as [`ensure_writable`] with explicit streams.
pub fn confirm_overwrite<R: BufRead, W: Write>(
    path: &Path,
    force: bool,
    input: &mut R,
    prompt: &mut W,
) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("{} already exists", path.display()));
    write!(prompt, "Overwrite? [y/N]: ")?;
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(()),
        _ => Err(AppError::Export(format!(
            "export cancelled: {} not overwritten",
            path.display()
        ))),
    }
}
