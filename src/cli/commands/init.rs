use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration directory (if missing)
///  - the configuration file with its defaults
///  - an empty workspace, weekly range anchored to today
pub fn handle(cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing efforttrack…");
    Config::init_all(&cfg.dir)?;
    println!("🎉 efforttrack initialization completed!");
    Ok(())
}
