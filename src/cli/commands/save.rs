use crate::config::Config;
use crate::config::workspace::Workspace;
use crate::core::save::SaveLogic;
use crate::errors::AppResult;

/// Handle the `save` command: validate and push the grid.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut ws = Workspace::load(&cfg.dir)?;
    SaveLogic::apply(cfg, &mut ws)
}
