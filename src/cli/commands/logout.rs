use crate::config::Config;
use crate::config::session::Session;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `logout` command
pub fn handle(cfg: &Config) -> AppResult<()> {
    if Session::exists(&cfg.dir) {
        Session::clear(&cfg.dir)?;
        messages::success("Session dropped");
    } else {
        messages::info("No stored session");
    }
    Ok(())
}
