use crate::api::Api;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::session::Session;
use crate::errors::{AppError, AppResult};
use crate::ui::{messages, prompt};

/// Handle the `login` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { email, password } = cmd {
        let email = match email {
            Some(e) => e.clone(),
            None if !cfg.email.trim().is_empty() => cfg.email.clone(),
            None => {
                return Err(AppError::Config(
                    "no email given (use --email or `efforttrack config --email`)".to_string(),
                ));
            }
        };
        let password = match password {
            Some(p) => p.clone(),
            None => prompt::read_line("Password")?,
        };

        let api = Api::anonymous(cfg);
        let login = api.login(&email, &password)?;

        let session = Session {
            token: login.access_token,
            refresh_token: login.refresh_token,
            username: login.username,
            email: email.clone(),
            roles: login.roles,
        };
        session.save(&cfg.dir)?;

        messages::success(format!("Logged in as {}", email));
        if !session.roles.is_empty() {
            messages::info(format!("Roles: {}", session.roles.join(", ")));
        }
    }
    Ok(())
}
