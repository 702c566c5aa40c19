use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One timesheet line item: descriptive fields plus a sparse date→hours map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffortRow {
    /// Local identity, assigned once and stable across reordering.
    pub key: u64,
    /// Backend identity; `None` until the row has been saved at least once.
    pub row_id: Option<i64>,
    pub client: String,
    pub category: String,
    pub project: String,
    pub ticket: String,
    pub ticket_description: String,
    pub description: String,
    pub billable: bool,
    pub hours: BTreeMap<NaiveDate, f64>,
}

impl EffortRow {
    pub fn blank(key: u64) -> Self {
        Self {
            key,
            row_id: None,
            client: String::new(),
            category: String::new(),
            project: String::new(),
            ticket: String::new(),
            ticket_description: String::new(),
            description: String::new(),
            billable: false,
            hours: BTreeMap::new(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.row_id.is_some()
    }

    /// A row is "used" when any descriptive field or hours cell is filled.
    pub fn is_used(&self) -> bool {
        !self.client.trim().is_empty()
            || !self.category.trim().is_empty()
            || !self.project.trim().is_empty()
            || !self.ticket.trim().is_empty()
            || !self.ticket_description.trim().is_empty()
            || !self.description.trim().is_empty()
            || !self.hours.is_empty()
    }

    pub fn total_hours(&self) -> f64 {
        self.hours.values().sum()
    }

    pub fn billable_label(&self) -> &'static str {
        if self.billable { "Yes" } else { "No" }
    }

    /// Content equality ignoring the local key.
    pub fn same_content(&self, other: &Self) -> bool {
        self.row_id == other.row_id
            && self.client == other.client
            && self.category == other.category
            && self.project == other.project
            && self.ticket == other.ticket
            && self.ticket_description == other.ticket_description
            && self.description == other.description
            && self.billable == other.billable
            && self.hours == other.hours
    }
}
