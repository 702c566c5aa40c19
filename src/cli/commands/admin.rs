use crate::api::Api;
use crate::api::models::{
    AdminSearchRequest, ClientDto, ProjectDto, SearchBy, TaskTypeDto, UserRoleDto,
};
use crate::cli::commands::summary::{maybe_export, parse_bounds, print_summary_table};
use crate::cli::parser::{AdminCommands, Commands};
use crate::config::Config;
use crate::config::session::Session;
use crate::core::datekey;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::SummaryRow;
use crate::ui::messages;

/// Handle the `admin` subcommands. The role check is advisory: the
/// backend is the authority and refuses non-admin callers anyway.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Admin { action } = cmd {
        if let Ok(session) = Session::load(&cfg.dir)
            && !session.is_admin()
        {
            messages::warning(
                "Current session has no admin role; the backend may refuse these calls",
            );
        }

        let api = Api::new(cfg)?;
        match action {
            AdminCommands::Search {
                by,
                client,
                email,
                from,
                to,
                export,
                output,
                force,
            } => search(&api, *by, client, email, from, to, export, output, *force),
            AdminCommands::Clients {
                list,
                add,
                name,
                rename,
                del,
            } => clients(&api, *list, add, name, rename, del),
            AdminCommands::Projects {
                client,
                list,
                add,
                name,
                del,
            } => projects(&api, client, *list, add, name, del),
            AdminCommands::TaskTypes {
                client,
                list,
                add,
                del,
            } => task_types(&api, client, *list, add, del),
            AdminCommands::Roles { email, set } => roles(&api, email, set),
        }?;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn search(
    api: &Api,
    by: SearchBy,
    client: &Option<String>,
    email: &Option<String>,
    from: &str,
    to: &str,
    export: &Option<ExportFormat>,
    output: &Option<String>,
    force: bool,
) -> AppResult<()> {
    let (from, to) = parse_bounds(from, to)?;

    if matches!(by, SearchBy::Client | SearchBy::Both) && client.is_none() {
        return Err(AppError::Other(
            "Searching by client needs --client".to_string(),
        ));
    }
    if matches!(by, SearchBy::Email | SearchBy::Both) && email.is_none() {
        return Err(AppError::Other(
            "Searching by email needs --email".to_string(),
        ));
    }

    let request = AdminSearchRequest {
        search_by: by.as_str(),
        client: client.as_deref(),
        email: email.as_deref(),
        start_date: datekey::to_wire(from),
        end_date: datekey::to_wire(to),
    };

    let found = api.admin_search(&request)?;
    if found.is_empty() {
        messages::info("No efforts matched the search");
        return Ok(());
    }

    let summary: Vec<SummaryRow> = found.into_iter().map(SummaryRow::from).collect();
    messages::header(format!(
        "Search results {} to {}",
        datekey::to_iso(from),
        datekey::to_iso(to)
    ));
    print_summary_table(&summary);
    maybe_export(&summary, export, output, force)
}

fn clients(
    api: &Api,
    list: bool,
    add: &Option<String>,
    name: &Option<String>,
    rename: &Option<String>,
    del: &Option<String>,
) -> AppResult<()> {
    if let Some(code) = add {
        let message = api.admin_add_client(&ClientDto {
            code: code.clone(),
            name: name.clone().unwrap_or_default(),
        })?;
        messages::success(message);
    } else if let Some(code) = rename {
        let name = name
            .clone()
            .ok_or_else(|| AppError::Other("--rename needs --name".to_string()))?;
        let message = api.admin_update_client(&ClientDto {
            code: code.clone(),
            name,
        })?;
        messages::success(message);
    } else if let Some(code) = del {
        let message = api.admin_delete_client(code)?;
        messages::success(message);
    } else if list {
        let clients = api.client_codes()?;
        if clients.is_empty() {
            messages::info("No clients registered");
            return Ok(());
        }
        for c in clients {
            if c.name.is_empty() {
                println!("{}", c.code);
            } else {
                println!("{} - {}", c.code, c.name);
            }
        }
    } else {
        return Err(AppError::Other(
            "Nothing to do: pass --list, --add, --rename or --del".to_string(),
        ));
    }
    Ok(())
}

fn projects(
    api: &Api,
    client: &str,
    list: bool,
    add: &Option<String>,
    name: &Option<String>,
    del: &Option<String>,
) -> AppResult<()> {
    if let Some(code) = add {
        let message = api.admin_add_project(&ProjectDto {
            client: client.to_string(),
            code: code.clone(),
            name: name.clone().unwrap_or_default(),
        })?;
        messages::success(message);
    } else if let Some(code) = del {
        let message = api.admin_delete_project(client, code)?;
        messages::success(message);
    } else if list {
        let projects = api.projects(client)?;
        if projects.is_empty() {
            messages::info(format!("No projects for client {}", client));
            return Ok(());
        }
        for p in projects {
            if p.name.is_empty() {
                println!("{}", p.code);
            } else {
                println!("{} - {}", p.code, p.name);
            }
        }
    } else {
        return Err(AppError::Other(
            "Nothing to do: pass --list, --add or --del".to_string(),
        ));
    }
    Ok(())
}

fn task_types(
    api: &Api,
    client: &str,
    list: bool,
    add: &Option<String>,
    del: &Option<String>,
) -> AppResult<()> {
    if let Some(code) = add {
        let message = api.admin_add_task_type(&TaskTypeDto {
            client: client.to_string(),
            code: code.clone(),
        })?;
        messages::success(message);
    } else if let Some(code) = del {
        let message = api.admin_delete_task_type(client, code)?;
        messages::success(message);
    } else if list {
        let types = api.task_types(client)?;
        if types.is_empty() {
            messages::info(format!("No task types for client {}", client));
            return Ok(());
        }
        for t in types {
            println!("{}", t.code);
        }
    } else {
        return Err(AppError::Other(
            "Nothing to do: pass --list, --add or --del".to_string(),
        ));
    }
    Ok(())
}

fn roles(api: &Api, email: &str, set: &Option<String>) -> AppResult<()> {
    match set {
        Some(role) => {
            let message = api.admin_set_user_role(&UserRoleDto {
                email: email.to_string(),
                role: role.clone(),
            })?;
            messages::success(message);
        }
        None => {
            let role = api.admin_user_role(email)?;
            println!("{} has role {}", role.email, role.role);
        }
    }
    Ok(())
}
