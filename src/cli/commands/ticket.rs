use crate::api::Api;
use crate::api::models::TicketDescriptionUpdate;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `ticket` command: read or update a ticket description.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ticket {
        client,
        project,
        ticket,
        set,
    } = cmd
    {
        let api = Api::new(cfg)?;

        match set {
            Some(description) => {
                let message = api.update_ticket_description(&TicketDescriptionUpdate {
                    client,
                    project,
                    ticket,
                    description,
                })?;
                messages::success(message);
            }
            None => {
                let description = api.ticket_description(client, project, ticket)?;
                if description.trim().is_empty() {
                    messages::info(format!("Ticket {} has no description", ticket));
                } else {
                    println!("{}", description);
                }
            }
        }
    }
    Ok(())
}
