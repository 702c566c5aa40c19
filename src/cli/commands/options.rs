use crate::api::Api;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::workspace::Workspace;
use crate::core::options::OptionsLogic;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `options` command: category and project choices for a row.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Options { row, refresh } = cmd {
        let mut ws = Workspace::load(&cfg.dir)?;
        let api = Api::new(cfg)?;

        let options = OptionsLogic::for_row(&api, &mut ws, *row, *refresh)?;
        ws.save(&cfg.dir)?;

        if options.client.is_empty() {
            messages::info(format!("Row {} has no client; set one first", row));
            return Ok(());
        }

        messages::header(format!("Choices for row {} (client {})", row, options.client));
        println!("Categories: {}", join_or_dash(&options.categories));
        println!("Projects  : {}", join_or_dash(&options.projects));
    }
    Ok(())
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}
