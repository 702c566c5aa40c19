//! Pre-save checks: required fields, duplicate rows, future dates.
//!
//! Blank rows are skipped, not rejected, so a grid can always carry its
//! minimum empty row. Checks run in a fixed order and the first failure
//! wins: missing fields, then duplicates, then future dates.

use crate::core::datekey;
use crate::errors::{AppError, AppResult};
use crate::models::EffortRow;
use chrono::NaiveDate;

/// Canonical content string for duplicate detection. Two rows with the
/// same fingerprint describe the same work. Client codes compare
/// case-insensitively; everything else is trimmed verbatim.
pub fn fingerprint(row: &EffortRow) -> String {
    let mut parts = vec![
        row.client.trim().to_uppercase(),
        row.project.trim().to_string(),
        row.ticket.trim().to_string(),
        row.ticket_description.trim().to_string(),
        row.category.trim().to_string(),
        row.billable_label().to_string(),
        row.description.trim().to_string(),
    ];
    for (date, value) in &row.hours {
        parts.push(format!("{}={}", datekey::to_iso(*date), value));
    }
    parts.join("|")
}

fn missing_fields(row: &EffortRow) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if row.client.trim().is_empty() {
        missing.push("client");
    }
    if row.project.trim().is_empty() {
        missing.push("project");
    }
    if row.ticket.trim().is_empty() {
        missing.push("ticket");
    }
    if row.ticket_description.trim().is_empty() {
        missing.push("ticket description");
    }
    if row.category.trim().is_empty() {
        missing.push("category");
    }
    if row.hours.is_empty() {
        missing.push("hours");
    }
    missing
}

pub struct ValidateLogic;

impl ValidateLogic {
    /// Validate the grid for saving and return the rows that carry
    /// content, in grid order. Row numbers in errors are 1-based grid
    /// positions.
    pub fn check(rows: &[EffortRow], today: NaiveDate) -> AppResult<Vec<&EffortRow>> {
        let used: Vec<(usize, &EffortRow)> = rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_used())
            .map(|(i, r)| (i + 1, r))
            .collect();

        if used.is_empty() {
            return Err(AppError::NothingToSave);
        }

        for (pos, row) in &used {
            let missing = missing_fields(row);
            if !missing.is_empty() {
                return Err(AppError::MissingFields(*pos, missing.join(", ")));
            }
        }

        for (i, (pos_a, row_a)) in used.iter().enumerate() {
            let fp = fingerprint(row_a);
            for (pos_b, row_b) in used.iter().skip(i + 1) {
                if fp == fingerprint(row_b) {
                    return Err(AppError::DuplicateRows(*pos_a, *pos_b));
                }
            }
        }

        let mut future: Vec<NaiveDate> = used
            .iter()
            .flat_map(|(_, r)| r.hours.keys().copied())
            .filter(|d| *d > today)
            .collect();
        future.sort();
        future.dedup();
        match future.as_slice() {
            [] => {}
            [single] => return Err(AppError::FutureDate(datekey::to_label(*single))),
            [first, .., last] => {
                return Err(AppError::FutureDates(
                    datekey::to_label(*first),
                    datekey::to_label(*last),
                ));
            }
        }

        Ok(used.into_iter().map(|(_, r)| r).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn today() -> NaiveDate {
        d(2025, 9, 10)
    }

    fn complete_row(key: u64) -> EffortRow {
        let mut r = EffortRow::blank(key);
        r.client = "ACME".to_string();
        r.project = "P1".to_string();
        r.ticket = "T-100".to_string();
        r.ticket_description = "Support".to_string();
        r.category = "DEV".to_string();
        r.hours.insert(d(2025, 9, 8), 8.0);
        r
    }

    #[test]
    fn empty_grid_has_nothing_to_save() {
        let rows = vec![EffortRow::blank(1)];
        let err = ValidateLogic::check(&rows, today()).unwrap_err();
        assert!(matches!(err, AppError::NothingToSave));
    }

    #[test]
    fn blank_rows_are_skipped() {
        let rows = vec![complete_row(1), EffortRow::blank(2)];
        let valid = ValidateLogic::check(&rows, today()).unwrap();
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].key, 1);
    }

    #[test]
    fn missing_fields_are_named() {
        let mut row = EffortRow::blank(1);
        row.client = "ACME".to_string();
        row.description = "typing".to_string();
        let err = ValidateLogic::check(&[row], today()).unwrap_err();
        match err {
            AppError::MissingFields(1, fields) => {
                assert!(fields.contains("project"));
                assert!(fields.contains("ticket description"));
                assert!(fields.contains("hours"));
                assert!(!fields.contains("client"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn description_and_billable_are_optional() {
        let row = complete_row(1);
        assert!(row.description.is_empty());
        assert!(!row.billable);
        assert!(ValidateLogic::check(&[row], today()).is_ok());
    }

    #[test]
    fn identical_rows_are_duplicates() {
        let rows = vec![complete_row(1), complete_row(2)];
        let err = ValidateLogic::check(&rows, today()).unwrap_err();
        assert!(matches!(err, AppError::DuplicateRows(1, 2)));
    }

    #[test]
    fn client_matching_ignores_case() {
        let mut second = complete_row(2);
        second.client = "acme".to_string();
        let rows = vec![complete_row(1), second];
        let err = ValidateLogic::check(&rows, today()).unwrap_err();
        assert!(matches!(err, AppError::DuplicateRows(1, 2)));
    }

    #[test]
    fn differing_hours_are_not_duplicates() {
        let mut second = complete_row(2);
        second.hours.insert(d(2025, 9, 8), 4.0);
        let rows = vec![complete_row(1), second];
        assert!(ValidateLogic::check(&rows, today()).is_ok());
    }

    #[test]
    fn duplicate_positions_count_used_rows_only() {
        let rows = vec![EffortRow::blank(1), complete_row(2), complete_row(3)];
        let err = ValidateLogic::check(&rows, today()).unwrap_err();
        assert!(matches!(err, AppError::DuplicateRows(2, 3)));
    }

    #[test]
    fn a_single_future_date_is_reported_with_its_label() {
        let mut row = complete_row(1);
        row.hours.insert(d(2025, 9, 12), 2.0);
        let err = ValidateLogic::check(&[row], today()).unwrap_err();
        match err {
            AppError::FutureDate(label) => assert_eq!(label, "12 Sep (Fri)"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn several_future_dates_are_reported_as_a_span() {
        let mut row = complete_row(1);
        row.hours.insert(d(2025, 9, 13), 2.0);
        row.hours.insert(d(2025, 9, 11), 1.0);
        let err = ValidateLogic::check(&[row], today()).unwrap_err();
        match err {
            AppError::FutureDates(first, last) => {
                assert_eq!(first, "11 Sep (Thu)");
                assert_eq!(last, "13 Sep (Sat)");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicates_are_reported_before_future_dates() {
        let mut a = complete_row(1);
        a.hours.insert(d(2025, 9, 12), 2.0);
        let mut b = a.clone();
        b.key = 2;
        let err = ValidateLogic::check(&[a, b], today()).unwrap_err();
        assert!(matches!(err, AppError::DuplicateRows(1, 2)));
    }
}
