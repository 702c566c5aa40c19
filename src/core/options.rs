//! Dependent dropdown data for grid rows, cached per row key.

use crate::api::Api;
use crate::config::workspace::{RowOptions, Workspace};
use crate::errors::AppResult;
use crate::ui::messages;

pub struct OptionsLogic;

impl OptionsLogic {
    /// Category and project lists for row `n`, scoped to its client.
    /// Results are cached under the row key and reused until the client
    /// changes or a refresh is forced. A failed lookup warns and
    /// degrades to an empty list instead of blocking the grid.
    pub fn for_row(
        api: &Api,
        ws: &mut Workspace,
        n: usize,
        refresh: bool,
    ) -> AppResult<RowOptions> {
        let row = ws.row(n)?;
        let client = row.client.trim().to_string();
        let key = row.key;

        if client.is_empty() {
            return Ok(RowOptions {
                client,
                categories: Vec::new(),
                projects: Vec::new(),
            });
        }

        if !refresh
            && let Some(cached) = ws.options.get(&key)
            && cached.client == client
        {
            return Ok(cached.clone());
        }

        let categories = match api.task_types(&client) {
            Ok(types) => types.into_iter().map(|t| t.code).collect(),
            Err(e) => {
                messages::warning(format!("Could not fetch categories for {client}: {e}"));
                Vec::new()
            }
        };
        let projects = match api.projects(&client) {
            Ok(projects) => projects.into_iter().map(|p| p.code).collect(),
            Err(e) => {
                messages::warning(format!("Could not fetch projects for {client}: {e}"));
                Vec::new()
            }
        };

        let options = RowOptions {
            client,
            categories,
            projects,
        };
        ws.options.insert(key, options.clone());
        Ok(options)
    }
}
