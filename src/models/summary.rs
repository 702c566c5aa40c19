use serde::{Deserialize, Serialize};

/// Aggregated effort over a date range, one row per
/// client/project/ticket/ticket-description combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub client: String,
    pub project: String,
    pub ticket: String,
    pub ticket_description: String,
    pub billable_hours: f64,
    pub non_billable_hours: f64,
    pub descriptions: Vec<String>,
}

impl SummaryRow {
    pub fn total_hours(&self) -> f64 {
        self.billable_hours + self.non_billable_hours
    }
}
