//! Local draft of the effort grid, persisted between invocations.

use crate::core::daterange;
use crate::errors::{AppError, AppResult};
use crate::models::{DateRange, EffortRow, RangeMode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Cached dependent dropdown lists for one row, valid while the row's
/// client is still `client`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowOptions {
    pub client: String,
    pub categories: Vec<String>,
    pub projects: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Workspace {
    pub range: DateRange,
    pub rows: Vec<EffortRow>,
    /// Grid contents as last fetched or saved, for dirty detection.
    pub snapshot: Vec<EffortRow>,
    /// Dropdown cache keyed by row key, not by position.
    pub options: BTreeMap<u64, RowOptions>,
    next_key: u64,
}

impl Workspace {
    pub fn file(dir: &Path) -> PathBuf {
        dir.join("workspace.json")
    }

    pub fn new(today: NaiveDate) -> Self {
        let mut ws = Self {
            range: daterange::compute(RangeMode::Weekly, today),
            rows: Vec::new(),
            snapshot: Vec::new(),
            options: BTreeMap::new(),
            next_key: 1,
        };
        ws.ensure_min_row();
        ws
    }

    pub fn load(dir: &Path) -> AppResult<Self> {
        let path = Self::file(dir);
        if !path.exists() {
            return Ok(Self::new(daterange::today()));
        }

        let content = fs::read_to_string(&path)?;
        let mut ws: Workspace = serde_json::from_str(&content)
            .map_err(|e| AppError::Workspace(format!("cannot parse {}: {e}", path.display())))?;
        ws.ensure_min_row();
        Ok(ws)
    }

    pub fn save(&self, dir: &Path) -> AppResult<()> {
        fs::create_dir_all(dir)?;
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Workspace(format!("cannot serialize workspace: {e}")))?;
        fs::write(Self::file(dir), json)?;
        Ok(())
    }

    /// Allocate a fresh local row key.
    pub fn alloc_key(&mut self) -> u64 {
        let k = self.next_key;
        self.next_key += 1;
        k
    }

    /// The grid never drops below one row.
    pub fn ensure_min_row(&mut self) {
        if self.rows.is_empty() {
            let key = self.alloc_key();
            self.rows.push(EffortRow::blank(key));
        }
    }

    /// Switch to a new range, dropping rows, snapshot and option caches.
    pub fn reset_range(&mut self, range: DateRange) {
        self.range = range;
        self.rows.clear();
        self.snapshot.clear();
        self.options.clear();
        self.ensure_min_row();
    }

    /// Borrow a row by its 1-based grid position.
    pub fn row(&self, n: usize) -> AppResult<&EffortRow> {
        if n == 0 || n > self.rows.len() {
            return Err(AppError::InvalidRow(n));
        }
        Ok(&self.rows[n - 1])
    }

    pub fn row_mut(&mut self, n: usize) -> AppResult<&mut EffortRow> {
        if n == 0 || n > self.rows.len() {
            return Err(AppError::InvalidRow(n));
        }
        Ok(&mut self.rows[n - 1])
    }
}
