use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::workspace::Workspace;
use crate::core::{datekey, daterange, dirty};
use crate::errors::{AppError, AppResult};
use crate::models::RangeMode;
use crate::ui::messages;

/// Handle the `week` command: move the weekly range one step.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week {
        prev,
        next,
        discard,
    } = cmd
    {
        let mut ws = Workspace::load(&cfg.dir)?;

        if ws.range.mode != RangeMode::Weekly {
            return Err(AppError::RangeBoundary(
                "Week navigation requires weekly mode (run `efforttrack mode --set weekly`)"
                    .to_string(),
            ));
        }
        if !*prev && !*next {
            return Err(AppError::Other(
                "Nothing to do: pass --prev or --next".to_string(),
            ));
        }

        dirty::resolve_before_navigation(cfg, &mut ws, *discard)?;

        let today = daterange::today();
        let range = if *prev {
            daterange::prev_week(&ws.range, today)?
        } else {
            daterange::next_week(&ws.range, today)?
        };

        ws.reset_range(range);
        ws.save(&cfg.dir)?;

        messages::success(format!(
            "Week set to {} to {}",
            datekey::to_iso(range.start),
            datekey::to_iso(range.end)
        ));
        messages::info("Run `efforttrack load` to fetch the saved efforts for this range");
    }
    Ok(())
}
