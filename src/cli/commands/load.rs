use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::workspace::Workspace;
use crate::core::dirty;
use crate::core::load::LoadLogic;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `load` command: fetch the saved efforts for the range.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Load { discard } = cmd {
        let mut ws = Workspace::load(&cfg.dir)?;
        dirty::resolve_before_navigation(cfg, &mut ws, *discard)?;

        let count = LoadLogic::apply(cfg, &mut ws)?;
        if count == 0 {
            messages::info("No saved efforts in the active range");
        } else {
            messages::success(format!("Loaded {} row(s)", count));
        }
    }
    Ok(())
}
