//! Date-key parsing and formatting.
//!
//! The backend and the grid use three textual date forms:
//! - ISO `2025-09-08` (query parameters, CLI input)
//! - wire `08-09-2025` (save payloads, summary parameters)
//! - display label `8 Sep (Mon)` (fetched hoursByDate keys, grid columns)
//!
//! Everything else in the crate works on `NaiveDate`; conversion happens
//! only through these functions.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

fn label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{1,2})\s+([A-Za-z]{3})\s*\(([A-Za-z]{3})\)$").unwrap())
}

fn month_from_abbrev(s: &str) -> Option<u32> {
    match s.to_ascii_lowercase().as_str() {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

/// Parse any of the three supported forms into a date. Display labels
/// carry no year, so the caller supplies the one to assume.
pub fn normalize(key: &str, year: i32) -> AppResult<NaiveDate> {
    let k = key.trim();

    // ISO yyyy-mm-dd
    if let Ok(d) = NaiveDate::parse_from_str(k, "%Y-%m-%d") {
        return Ok(d);
    }

    // wire dd-mm-yyyy
    if let Ok(d) = NaiveDate::parse_from_str(k, "%d-%m-%Y") {
        return Ok(d);
    }

    // display label "8 Sep (Mon)"
    if let Some(caps) = label_re().captures(k) {
        let day: u32 = caps[1]
            .parse()
            .map_err(|_| AppError::InvalidDateKey(key.to_string()))?;
        if let Some(month) = month_from_abbrev(&caps[2])
            && let Some(d) = NaiveDate::from_ymd_opt(year, month, day)
        {
            return Ok(d);
        }
    }

    Err(AppError::InvalidDateKey(key.to_string()))
}

pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn to_wire(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Grid column label, day number without padding.
pub fn to_label(date: NaiveDate) -> String {
    format!("{} {} ({})", date.day(), date.format("%b"), date.format("%a"))
}
