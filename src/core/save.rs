//! Validate the grid and push it to the backend.

use crate::api::Api;
use crate::api::models::TaskDto;
use crate::config::Config;
use crate::config::workspace::Workspace;
use crate::core::daterange;
use crate::core::validate::ValidateLogic;
use crate::errors::AppResult;
use crate::ui::messages;

pub struct SaveLogic;

impl SaveLogic {
    /// Validate, push, and absorb the returned backend ids. The snapshot
    /// is refreshed from the saved rows, so the grid comes out clean.
    pub fn apply(cfg: &Config, ws: &mut Workspace) -> AppResult<()> {
        let valid = ValidateLogic::check(&ws.rows, daterange::today())?;
        let keys: Vec<u64> = valid.iter().map(|r| r.key).collect();
        let tasks: Vec<TaskDto> = valid.iter().map(|r| TaskDto::from_row(r)).collect();

        let api = Api::new(cfg)?;
        let email = api.account_email()?;
        let ids = api.save_efforts(&email, &tasks)?;

        for (key, id) in keys.iter().zip(ids.iter()) {
            if let Some(row) = ws.rows.iter_mut().find(|r| r.key == *key) {
                row.row_id = Some(*id);
            }
        }

        ws.snapshot = ws.rows.clone();
        ws.save(&cfg.dir)?;
        messages::success(format!("Saved {} row(s)", tasks.len()));
        Ok(())
    }
}
