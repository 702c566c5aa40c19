use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::workspace::Workspace;
use crate::core::{datekey, daterange, dirty};
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::formatting::format_hours;
use crate::utils::table::Table;

/// Handle the `show` command: print the grid or its date columns.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { columns } = cmd {
        let ws = Workspace::load(&cfg.dir)?;
        let cols = daterange::columns(&ws.range);

        messages::header(format!(
            "{} {} to {}",
            ws.range.mode.as_str(),
            datekey::to_iso(ws.range.start),
            datekey::to_iso(ws.range.end)
        ));

        if *columns {
            for col in &cols {
                if col.weekend {
                    println!("{} [weekend]", col.label);
                } else {
                    println!("{}", col.label);
                }
            }
            return Ok(());
        }

        let mut headers = vec![
            "#".to_string(),
            "Saved".to_string(),
            "Client".to_string(),
            "Category".to_string(),
            "Project".to_string(),
            "Ticket".to_string(),
            "Billable".to_string(),
        ];
        headers.extend(cols.iter().map(|c| c.label.clone()));
        headers.push("Total".to_string());

        let mut table = Table::new(headers);
        for (i, row) in ws.rows.iter().enumerate() {
            let mut cells = vec![
                (i + 1).to_string(),
                if row.is_persisted() {
                    "yes".to_string()
                } else {
                    "-".to_string()
                },
                row.client.clone(),
                row.category.clone(),
                row.project.clone(),
                row.ticket.clone(),
                row.billable_label().to_string(),
            ];
            for col in &cols {
                match row.hours.get(&col.date) {
                    Some(v) => cells.push(format_hours(*v)),
                    None => cells.push(String::new()),
                }
            }
            cells.push(format_hours(row.total_hours()));
            table.add_row(cells);
        }
        println!("{}", table.render());

        if dirty::is_dirty(&ws.rows, &ws.snapshot) {
            messages::warning("Workspace has unsaved changes");
        }
    }
    Ok(())
}
