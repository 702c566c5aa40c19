//! Fetch the saved efforts for the active range into the grid.

use crate::api::Api;
use crate::config::Config;
use crate::config::workspace::Workspace;
use crate::errors::AppResult;

pub struct LoadLogic;

impl LoadLogic {
    /// Replace the grid with the rows the backend holds for the active
    /// range. Returns how many rows came back.
    pub fn apply(cfg: &Config, ws: &mut Workspace) -> AppResult<usize> {
        let api = Api::new(cfg)?;
        let email = api.account_email()?;
        let fetched = api.effort_entries(&email, &ws.range)?;
        let count = fetched.len();
        let range = ws.range;

        ws.rows.clear();
        ws.options.clear();
        for dto in fetched {
            let key = ws.alloc_key();
            let row = dto.into_row(key, &range)?;
            ws.rows.push(row);
        }
        ws.ensure_min_row();
        ws.snapshot = ws.rows.clone();
        ws.save(&cfg.dir)?;
        Ok(count)
    }
}
