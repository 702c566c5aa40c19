use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::workspace::Workspace;
use crate::core::datekey;
use crate::core::grid::GridLogic;
use crate::errors::AppResult;
use crate::ui::messages;
use chrono::Datelike;

/// Handle the `hours` command: set or clear one grid cell.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hours { row, date, value } = cmd {
        let mut ws = Workspace::load(&cfg.dir)?;

        let day = datekey::normalize(date, ws.range.start.year())?;
        GridLogic::set_hours(&mut ws, *row, day, *value)?;
        ws.save(&cfg.dir)?;

        if *value == 0.0 {
            messages::success(format!(
                "Cleared {} on row {}",
                datekey::to_label(day),
                row
            ));
        } else {
            messages::success(format!(
                "Set {} to {} hour(s) on row {}",
                datekey::to_label(day),
                value,
                row
            ));
        }
    }
    Ok(())
}
