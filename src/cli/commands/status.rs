use crate::config::Config;
use crate::config::session::Session;
use crate::config::workspace::Workspace;
use crate::core::{datekey, dirty};
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `status` command
pub fn handle(cfg: &Config) -> AppResult<()> {
    let ws = Workspace::load(&cfg.dir)?;

    messages::header("efforttrack status");
    println!("Backend : {}", cfg.base_url);

    match Session::load(&cfg.dir) {
        Ok(session) => {
            let who = if session.username.trim().is_empty() {
                session.email.clone()
            } else {
                session.username.clone()
            };
            println!("Session : logged in as {}", who);
            if session.is_admin() {
                println!("Roles   : {}", session.roles.join(", "));
            }
        }
        Err(_) => println!("Session : not logged in"),
    }

    println!(
        "Range   : {} ({} to {})",
        ws.range.mode.as_str(),
        datekey::to_iso(ws.range.start),
        datekey::to_iso(ws.range.end)
    );
    println!("Rows    : {}", ws.rows.len());

    if dirty::is_dirty(&ws.rows, &ws.snapshot) {
        messages::warning("Workspace has unsaved changes");
    } else {
        messages::info("Workspace in sync");
    }
    Ok(())
}
