use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::workspace::Workspace;
use crate::core::grid::{Field, GridLogic};
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// Handle the `set` command: edit the descriptive fields of one row.
/// Several field flags may be combined in one call; a client change is
/// applied first so dependent edits land on the reset row.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        row,
        client,
        category,
        project,
        ticket,
        ticket_desc,
        desc,
        billable,
    } = cmd
    {
        let mut ws = Workspace::load(&cfg.dir)?;

        let edits: [(Field, &Option<String>); 7] = [
            (Field::Client, client),
            (Field::Category, category),
            (Field::Project, project),
            (Field::Ticket, ticket),
            (Field::TicketDescription, ticket_desc),
            (Field::Description, desc),
            (Field::Billable, billable),
        ];

        let mut touched = 0;
        for (field, value) in edits {
            if let Some(value) = value {
                GridLogic::set_field(&mut ws, *row, field, value)?;
                touched += 1;
            }
        }
        if touched == 0 {
            return Err(AppError::Other(
                "Nothing to do: pass at least one field flag".to_string(),
            ));
        }

        ws.save(&cfg.dir)?;
        messages::success(format!("Updated {} field(s) on row {}", touched, row));
    }
    Ok(())
}
