//! Dirty detection and the save/discard/cancel gate used before any
//! operation that replaces the grid.

use crate::config::Config;
use crate::config::workspace::Workspace;
use crate::core::save::SaveLogic;
use crate::errors::{AppError, AppResult};
use crate::models::EffortRow;
use crate::ui::messages;
use crate::ui::prompt::{self, DirtyChoice};

/// A grid is dirty when its used rows differ from the used rows of the
/// last fetched or saved snapshot. Blank rows never count, so an empty
/// grid and an empty snapshot compare clean.
pub fn is_dirty(rows: &[EffortRow], snapshot: &[EffortRow]) -> bool {
    let current: Vec<&EffortRow> = rows.iter().filter(|r| r.is_used()).collect();
    let saved: Vec<&EffortRow> = snapshot.iter().filter(|r| r.is_used()).collect();

    if current.len() != saved.len() {
        return true;
    }
    current
        .iter()
        .zip(saved.iter())
        .any(|(a, b)| !a.same_content(b))
}

/// Gate a range change behind unsaved edits. With `discard` the edits
/// are dropped without asking; otherwise the user picks save, discard
/// or cancel.
pub fn resolve_before_navigation(cfg: &Config, ws: &mut Workspace, discard: bool) -> AppResult<()> {
    if !is_dirty(&ws.rows, &ws.snapshot) {
        return Ok(());
    }
    if discard {
        messages::info("Discarding unsaved changes");
        return Ok(());
    }

    match prompt::ask_dirty_choice()? {
        DirtyChoice::Save => SaveLogic::apply(cfg, ws),
        DirtyChoice::Discard => Ok(()),
        DirtyChoice::Cancel => Err(AppError::Cancelled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn used_row(key: u64, client: &str) -> EffortRow {
        let mut r = EffortRow::blank(key);
        r.client = client.to_string();
        r
    }

    #[test]
    fn blank_grid_with_empty_snapshot_is_clean() {
        let rows = vec![EffortRow::blank(1)];
        assert!(!is_dirty(&rows, &[]));
    }

    #[test]
    fn an_edit_makes_the_grid_dirty() {
        let rows = vec![used_row(1, "ACME")];
        assert!(is_dirty(&rows, &[]));
    }

    #[test]
    fn matching_content_with_different_keys_is_clean() {
        let rows = vec![used_row(5, "ACME")];
        let snapshot = vec![used_row(9, "ACME")];
        assert!(!is_dirty(&rows, &snapshot));
    }

    #[test]
    fn extra_blank_rows_stay_clean() {
        let rows = vec![used_row(1, "ACME"), EffortRow::blank(2)];
        let snapshot = vec![used_row(1, "ACME")];
        assert!(!is_dirty(&rows, &snapshot));
    }

    #[test]
    fn changed_hours_make_the_grid_dirty() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 8).unwrap();
        let mut row = used_row(1, "ACME");
        row.hours = BTreeMap::from([(date, 8.0)]);
        let snapshot = vec![used_row(1, "ACME")];
        assert!(is_dirty(&[row], &snapshot));
    }

    #[test]
    fn reverting_an_edit_goes_back_to_clean() {
        let mut row = used_row(1, "ACME");
        let snapshot = vec![row.clone()];
        row.category = "DEV".to_string();
        assert!(is_dirty(std::slice::from_ref(&row), &snapshot));
        row.category.clear();
        assert!(!is_dirty(&[row], &snapshot));
    }
}
