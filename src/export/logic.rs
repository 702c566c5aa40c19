// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::SummaryExport;
use crate::export::xlsx::export_xlsx;
use crate::models::SummaryRow;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write summary lines to `file` in the requested format. An existing
    /// file is only overwritten with `force` or after confirmation.
    pub fn export(
        rows: &[SummaryRow],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let records: Vec<SummaryExport> = rows.iter().map(SummaryExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&records, path),
            ExportFormat::Json => export_json(&records, path),
            ExportFormat::Xlsx => export_xlsx(&records, path),
        }
    }
}
