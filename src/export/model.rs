// src/export/model.rs

use crate::models::SummaryRow;
use crate::utils::formatting::format_hours;
use serde::Serialize;

/// Flat record used by the summary exports.
#[derive(Serialize, Clone, Debug)]
pub struct SummaryExport {
    pub client: String,
    pub project: String,
    pub ticket: String,
    pub ticket_description: String,
    pub billable_hours: f64,
    pub non_billable_hours: f64,
    pub total_hours: f64,
    pub descriptions: String,
}

impl From<&SummaryRow> for SummaryExport {
    fn from(row: &SummaryRow) -> Self {
        Self {
            client: row.client.clone(),
            project: row.project.clone(),
            ticket: row.ticket.clone(),
            ticket_description: row.ticket_description.clone(),
            billable_hours: row.billable_hours,
            non_billable_hours: row.non_billable_hours,
            total_hours: row.total_hours(),
            descriptions: row.descriptions.join("; "),
        }
    }
}

/// Header order for CSV / XLSX.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "client",
        "project",
        "ticket",
        "ticket_description",
        "billable_hours",
        "non_billable_hours",
        "total_hours",
        "descriptions",
    ]
}

/// One export record as a row of display strings (for XLSX).
pub(crate) fn summary_to_row(s: &SummaryExport) -> Vec<String> {
    vec![
        s.client.clone(),
        s.project.clone(),
        s.ticket.clone(),
        s.ticket_description.clone(),
        format_hours(s.billable_hours),
        format_hours(s.non_billable_hours),
        format_hours(s.total_hours),
        s.descriptions.clone(),
    ]
}
