use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::workspace::Workspace;
use crate::core::{datekey, daterange, dirty};
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use chrono::NaiveDate;

/// Handle the `mode` command: derive a fresh range from a mode and an
/// anchor day, gated by the unsaved-changes prompt.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mode { set, date, discard } = cmd {
        let mut ws = Workspace::load(&cfg.dir)?;
        dirty::resolve_before_navigation(cfg, &mut ws, *discard)?;

        let anchor = match date {
            Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(d.clone()))?,
            None => daterange::today(),
        };

        let range = daterange::compute(*set, anchor);
        ws.reset_range(range);
        ws.save(&cfg.dir)?;

        messages::success(format!(
            "Switched to {} range: {} to {}",
            set.as_str(),
            datekey::to_iso(range.start),
            datekey::to_iso(range.end)
        ));
        messages::info("Run `efforttrack load` to fetch the saved efforts for this range");
    }
    Ok(())
}
