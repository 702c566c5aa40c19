mod common;
use common::temp_out;
use efforttrack::export::{ExportFormat, ExportLogic};
use efforttrack::models::SummaryRow;
use std::fs;

fn sample_rows() -> Vec<SummaryRow> {
    vec![
        SummaryRow {
            client: "ACME".to_string(),
            project: "WEBSHOP".to_string(),
            ticket: "T-100".to_string(),
            ticket_description: "Checkout rework".to_string(),
            billable_hours: 12.5,
            non_billable_hours: 0.0,
            descriptions: vec!["payment flow".to_string()],
        },
        SummaryRow {
            client: "GLOBEX".to_string(),
            project: "INTRANET".to_string(),
            ticket: "T-200".to_string(),
            ticket_description: "Search index".to_string(),
            billable_hours: 0.0,
            non_billable_hours: 4.0,
            descriptions: vec!["spike".to_string(), "review".to_string()],
        },
    ]
}

#[test]
fn test_export_summary_csv() {
    let out = temp_out("export_summary_csv", "csv");

    ExportLogic::export(&sample_rows(), ExportFormat::Csv, &out, true).expect("export csv");

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("client,project,ticket,ticket_description"));
    assert!(content.contains("ACME"));
    assert!(content.contains("GLOBEX"));
    assert!(content.contains("12.5"));
}

#[test]
fn test_export_summary_json() {
    let out = temp_out("export_summary_json", "json");

    ExportLogic::export(&sample_rows(), ExportFormat::Json, &out, true).expect("export json");

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    let records = parsed.as_array().expect("array of records");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["client"], "ACME");
    assert_eq!(records[0]["total_hours"], 12.5);
    assert_eq!(records[1]["descriptions"], "spike; review");
}

#[test]
fn test_export_summary_xlsx() {
    let out = temp_out("export_summary_xlsx", "xlsx");

    ExportLogic::export(&sample_rows(), ExportFormat::Xlsx, &out, true).expect("export xlsx");

    let meta = fs::metadata(&out).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_empty_dataset_xlsx() {
    let out = temp_out("export_empty_xlsx", "xlsx");

    ExportLogic::export(&[], ExportFormat::Xlsx, &out, true).expect("export empty xlsx");

    assert!(fs::metadata(&out).is_ok());
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let out = temp_out("export_overwrite_csv", "csv");
    fs::write(&out, "old content").expect("seed file");

    ExportLogic::export(&sample_rows(), ExportFormat::Csv, &out, true).expect("export csv");

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(!content.contains("old content"));
    assert!(content.contains("ACME"));
}
