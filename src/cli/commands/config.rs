use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { show, url, email } = cmd {
        let mut cfg = Config::load(&cfg.dir);
        let mut changed = false;

        if let Some(url) = url {
            cfg.base_url = url.trim_end_matches('/').to_string();
            changed = true;
        }
        if let Some(email) = email {
            cfg.email = email.clone();
            changed = true;
        }
        if changed {
            cfg.save()?;
            messages::success("Configuration updated");
        }

        if *show || !changed {
            println!(
                "📄 Configuration file: {}",
                Config::config_file(&cfg.dir).display()
            );
            println!("   Backend URL : {}", cfg.base_url);
            println!(
                "   Email       : {}",
                if cfg.email.is_empty() {
                    "(not set)"
                } else {
                    cfg.email.as_str()
                }
            );
            println!("   Timeout     : {}s", cfg.timeout_secs);
        }
    }
    Ok(())
}
