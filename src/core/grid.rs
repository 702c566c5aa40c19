//! Grid row management: add, copy, delete and cell edits.

use crate::config::workspace::Workspace;
use crate::core::datekey;
use crate::errors::{AppError, AppResult};
use crate::models::EffortRow;
use chrono::NaiveDate;

/// Editable descriptive fields of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Client,
    Category,
    Project,
    Ticket,
    TicketDescription,
    Description,
    Billable,
}

pub struct GridLogic;

impl GridLogic {
    /// Append a blank unpersisted row; returns its key.
    pub fn add_row(ws: &mut Workspace) -> u64 {
        let key = ws.alloc_key();
        ws.rows.push(EffortRow::blank(key));
        key
    }

    /// Clone row `n` (1-based) right below itself. The copy gets a fresh
    /// key and no backend id, so it counts as locally created.
    pub fn copy_row(ws: &mut Workspace, n: usize) -> AppResult<u64> {
        let mut copy = ws.row(n)?.clone();
        let key = ws.alloc_key();
        copy.key = key;
        copy.row_id = None;
        ws.rows.insert(n, copy);
        Ok(key)
    }

    /// Only locally-created rows may be removed, and never the last one.
    pub fn delete_row(ws: &mut Workspace, n: usize) -> AppResult<()> {
        let row = ws.row(n)?;
        if row.is_persisted() {
            return Err(AppError::RowPersisted(n));
        }
        if ws.rows.len() == 1 {
            return Err(AppError::LastRow);
        }

        let removed = ws.rows.remove(n - 1);
        ws.options.remove(&removed.key);
        Ok(())
    }

    /// Change one descriptive field. A new client resets the dependent
    /// category/project values and drops the row's cached dropdown lists.
    pub fn set_field(ws: &mut Workspace, n: usize, field: Field, value: &str) -> AppResult<()> {
        if field == Field::Client {
            let row = ws.row_mut(n)?;
            if row.client != value {
                row.client = value.to_string();
                row.category.clear();
                row.project.clear();
                let key = row.key;
                ws.options.remove(&key);
            }
            return Ok(());
        }

        let row = ws.row_mut(n)?;
        match field {
            Field::Category => row.category = value.to_string(),
            Field::Project => row.project = value.to_string(),
            Field::Ticket => row.ticket = value.to_string(),
            Field::TicketDescription => row.ticket_description = value.to_string(),
            Field::Description => row.description = value.to_string(),
            Field::Billable => row.billable = parse_billable(value)?,
            Field::Client => unreachable!(),
        }
        Ok(())
    }

    /// Set one hours cell; a zero value clears it. The date must fall
    /// inside the active range.
    pub fn set_hours(ws: &mut Workspace, n: usize, date: NaiveDate, value: f64) -> AppResult<()> {
        if !ws.range.contains(date) {
            return Err(AppError::DateOutOfRange(datekey::to_iso(date)));
        }
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::InvalidHours(value.to_string()));
        }

        let row = ws.row_mut(n)?;
        if value == 0.0 {
            row.hours.remove(&date);
        } else {
            row.hours.insert(date, value);
        }
        Ok(())
    }
}

pub fn parse_billable(value: &str) -> AppResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Ok(true),
        "no" | "n" | "false" | "0" => Ok(false),
        other => Err(AppError::Other(format!("Invalid billable value: {other}"))),
    }
}
