//! Interactive stdin prompts shared by the CLI commands.

use crate::errors::{AppError, AppResult};
use std::io::{self, Write};

/// Outcome of the unsaved-changes prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirtyChoice {
    Save,
    Discard,
    Cancel,
}

/// Ask what to do with unsaved changes before leaving the current range.
pub fn ask_dirty_choice() -> AppResult<DirtyChoice> {
    print!("You have unsaved changes. [s]ave / [d]iscard / [c]ancel: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "s" | "save" => Ok(DirtyChoice::Save),
        "d" | "discard" => Ok(DirtyChoice::Discard),
        _ => Ok(DirtyChoice::Cancel),
    }
}

/// Read a single line from stdin after printing `question`.
pub fn read_line(question: &str) -> AppResult<String> {
    print!("{}: ", question);
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    Ok(answer.trim().to_string())
}
