//! Aggregation of effort rows into per-ticket summary lines.

use crate::models::{EffortRow, SummaryRow};
use std::collections::BTreeMap;

/// Collapse rows into one summary line per client, project and ticket.
/// Hours land in the billable or non-billable bucket of their line and
/// distinct work descriptions are collected in first-seen order.
pub fn aggregate(rows: &[EffortRow]) -> Vec<SummaryRow> {
    let mut grouped: BTreeMap<String, SummaryRow> = BTreeMap::new();

    for row in rows {
        let client = row.client.trim().to_string();
        let project = row.project.trim().to_string();
        let ticket = row.ticket.trim().to_string();
        let ticket_description = row.ticket_description.trim().to_string();
        let key = format!("{client}||{project}||{ticket}||{ticket_description}");

        let entry = grouped.entry(key).or_insert_with(|| SummaryRow {
            client,
            project,
            ticket,
            ticket_description,
            billable_hours: 0.0,
            non_billable_hours: 0.0,
            descriptions: Vec::new(),
        });

        let total = row.total_hours();
        if row.billable {
            entry.billable_hours += total;
        } else {
            entry.non_billable_hours += total;
        }

        let description = row.description.trim();
        if !description.is_empty() && !entry.descriptions.iter().any(|d| d == description) {
            entry.descriptions.push(description.to_string());
        }
    }

    grouped.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(client: &str, ticket: &str, billable: bool, hours: f64, desc: &str) -> EffortRow {
        let mut r = EffortRow::blank(0);
        r.client = client.to_string();
        r.project = "P1".to_string();
        r.ticket = ticket.to_string();
        r.ticket_description = "Work".to_string();
        r.billable = billable;
        r.description = desc.to_string();
        r.hours.insert(NaiveDate::from_ymd_opt(2025, 9, 8).unwrap(), hours);
        r
    }

    #[test]
    fn rows_for_the_same_ticket_merge() {
        let rows = vec![
            row("ACME", "T-1", true, 4.0, "fix"),
            row("ACME", "T-1", true, 2.0, "more fixes"),
        ];
        let summary = aggregate(&rows);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].billable_hours, 6.0);
        assert_eq!(summary[0].descriptions, vec!["fix", "more fixes"]);
    }

    #[test]
    fn billable_flag_splits_the_buckets() {
        let rows = vec![
            row("ACME", "T-1", true, 4.0, ""),
            row("ACME", "T-1", false, 3.0, ""),
        ];
        let summary = aggregate(&rows);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].billable_hours, 4.0);
        assert_eq!(summary[0].non_billable_hours, 3.0);
        assert_eq!(summary[0].total_hours(), 7.0);
    }

    #[test]
    fn different_tickets_stay_separate() {
        let rows = vec![
            row("ACME", "T-1", true, 4.0, ""),
            row("ACME", "T-2", true, 2.0, ""),
        ];
        let summary = aggregate(&rows);
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn repeated_descriptions_appear_once() {
        let rows = vec![
            row("ACME", "T-1", true, 4.0, "fix"),
            row("ACME", "T-1", true, 2.0, "fix"),
        ];
        let summary = aggregate(&rows);
        assert_eq!(summary[0].descriptions, vec!["fix"]);
    }

    #[test]
    fn output_is_sorted_by_client_then_project_then_ticket() {
        let rows = vec![
            row("ZETA", "T-1", true, 1.0, ""),
            row("ACME", "T-9", true, 1.0, ""),
            row("ACME", "T-1", true, 1.0, ""),
        ];
        let summary = aggregate(&rows);
        assert_eq!(summary[0].client, "ACME");
        assert_eq!(summary[0].ticket, "T-1");
        assert_eq!(summary[1].ticket, "T-9");
        assert_eq!(summary[2].client, "ZETA");
    }
}
