use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::workspace::Workspace;
use crate::core::grid::GridLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// Handle the `row` command: add, copy or delete grid rows.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Row { add, copy, del } = cmd {
        let mut ws = Workspace::load(&cfg.dir)?;

        if *add {
            GridLogic::add_row(&mut ws);
            messages::success(format!("Added row {}", ws.rows.len()));
        } else if let Some(n) = copy {
            GridLogic::copy_row(&mut ws, *n)?;
            messages::success(format!("Copied row {} to row {}", n, n + 1));
        } else if let Some(n) = del {
            GridLogic::delete_row(&mut ws, *n)?;
            messages::success(format!("Deleted row {}", n));
        } else {
            return Err(AppError::Other(
                "Nothing to do: pass --add, --copy or --del".to_string(),
            ));
        }

        ws.save(&cfg.dir)?;
    }
    Ok(())
}
