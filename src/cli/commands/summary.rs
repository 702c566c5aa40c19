use crate::api::Api;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{datekey, summary};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::models::{DateRange, RangeMode, SummaryRow};
use crate::ui::messages;
use crate::utils::formatting::format_hours;
use crate::utils::table::Table;
use chrono::NaiveDate;

/// Handle the `summary` command: aggregate saved efforts over a range.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        from,
        to,
        export,
        output,
        force,
    } = cmd
    {
        let (from, to) = parse_bounds(from, to)?;

        let api = Api::new(cfg)?;
        let email = api.account_email()?;
        let tasks = api.summary_by_range(&email, from, to)?;

        let range = DateRange {
            mode: RangeMode::Daily,
            start: from,
            end: to,
        };
        let mut rows = Vec::new();
        for (i, dto) in tasks.into_iter().enumerate() {
            rows.push(dto.into_row(i as u64 + 1, &range)?);
        }
        let summary = summary::aggregate(&rows);

        if summary.is_empty() {
            messages::info("No saved efforts in the requested range");
            return Ok(());
        }

        messages::header(format!(
            "Summary {} to {}",
            datekey::to_iso(from),
            datekey::to_iso(to)
        ));
        print_summary_table(&summary);

        maybe_export(&summary, export, output, *force)?;
    }
    Ok(())
}

pub(crate) fn parse_bounds(from: &str, to: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let from = NaiveDate::parse_from_str(from, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(from.to_string()))?;
    let to = NaiveDate::parse_from_str(to, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(to.to_string()))?;
    if from > to {
        return Err(AppError::InvalidDate(format!(
            "range start {} is after its end {}",
            datekey::to_iso(from),
            datekey::to_iso(to)
        )));
    }
    Ok((from, to))
}

pub(crate) fn print_summary_table(summary: &[SummaryRow]) {
    let mut table = Table::new(vec![
        "Client".to_string(),
        "Project".to_string(),
        "Ticket".to_string(),
        "Ticket description".to_string(),
        "Billable".to_string(),
        "Non-billable".to_string(),
        "Total".to_string(),
        "Descriptions".to_string(),
    ]);
    for line in summary {
        table.add_row(vec![
            line.client.clone(),
            line.project.clone(),
            line.ticket.clone(),
            line.ticket_description.clone(),
            format_hours(line.billable_hours),
            format_hours(line.non_billable_hours),
            format_hours(line.total_hours()),
            line.descriptions.join("; "),
        ]);
    }
    println!("{}", table.render());
}

pub(crate) fn maybe_export(
    summary: &[SummaryRow],
    export: &Option<ExportFormat>,
    output: &Option<String>,
    force: bool,
) -> AppResult<()> {
    if let Some(format) = export {
        let file = output
            .as_deref()
            .ok_or_else(|| AppError::Export("an export needs --output FILE".to_string()))?;
        ExportLogic::export(summary, *format, file, force)?;
    } else if output.is_some() {
        messages::warning("--output is ignored without --export");
    }
    Ok(())
}
