//! Blocking HTTP client for the effort-entry backend.
//!
//! All requests run sequentially on the calling thread. A 401 on an
//! authenticated client drops the stored session and surfaces as
//! `SessionExpired`; any other failure status carries the backend's own
//! message when one is present.

use crate::api::models::{
    AdminSearchRequest, AdminSummaryDto, ApiEnvelope, ApiMessage, ClientDto, LoginRequest,
    LoginResponse, ProjectDto, SaveEffortsRequest, TaskDto, TaskTypeDto, TicketDescriptionUpdate,
    UserRoleDto,
};
use crate::config::Config;
use crate::config::session::Session;
use crate::core::datekey;
use crate::errors::{AppError, AppResult};
use crate::models::DateRange;
use chrono::NaiveDate;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::time::Duration;

pub struct Api {
    http: Client,
    base: String,
    token: Option<String>,
    account_email: String,
    conf_dir: PathBuf,
}

fn build_http(cfg: &Config) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}

impl Api {
    /// Authenticated client. Fails fast when no session is stored.
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let session = Session::load(&cfg.dir)?;
        let email = if session.email.trim().is_empty() {
            cfg.email.clone()
        } else {
            session.email.clone()
        };

        Ok(Self {
            http: build_http(cfg),
            base: cfg.base_url.trim_end_matches('/').to_string(),
            token: Some(session.token),
            account_email: email,
            conf_dir: cfg.dir.clone(),
        })
    }

    /// Anonymous client, only used to log in.
    pub fn anonymous(cfg: &Config) -> Self {
        Self {
            http: build_http(cfg),
            base: cfg.base_url.trim_end_matches('/').to_string(),
            token: None,
            account_email: cfg.email.clone(),
            conf_dir: cfg.dir.clone(),
        }
    }

    /// Email the backend should attribute efforts to: the session's,
    /// falling back to the configured one.
    pub fn account_email(&self) -> AppResult<String> {
        if self.account_email.trim().is_empty() {
            return Err(AppError::Config(
                "no account email configured (set one with `efforttrack config --email`)"
                    .to_string(),
            ));
        }
        Ok(self.account_email.clone())
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base, endpoint)
    }

    fn authed(&self, rb: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => rb.bearer_auth(token),
            None => rb,
        }
    }

    fn check(&self, response: Response) -> AppResult<Response> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED && self.token.is_some() {
            Session::clear(&self.conf_dir)?;
            return Err(AppError::SessionExpired);
        }
        if !status.is_success() {
            let msg = response
                .json::<ApiMessage>()
                .ok()
                .and_then(|m| m.message)
                .unwrap_or_else(|| "no error detail".to_string());
            return Err(AppError::Backend(status.as_u16(), msg));
        }
        Ok(response)
    }

    /// Send a request and unwrap the `{ message, data }` envelope.
    fn send<T: DeserializeOwned>(&self, endpoint: &str, rb: RequestBuilder) -> AppResult<T> {
        let response = self.check(self.authed(rb).send()?)?;
        let body = response.text()?;
        let envelope: ApiEnvelope<T> = serde_json::from_str(&body)
            .map_err(|e| AppError::Schema(endpoint.to_string(), e.to_string()))?;
        Ok(envelope.data)
    }

    /// Same for endpoints that answer with a bare `{ message }`.
    fn send_message(&self, endpoint: &str, rb: RequestBuilder) -> AppResult<String> {
        let response = self.check(self.authed(rb).send()?)?;
        let body = response.text()?;
        let msg: ApiMessage = serde_json::from_str(&body)
            .map_err(|e| AppError::Schema(endpoint.to_string(), e.to_string()))?;
        Ok(msg.message.unwrap_or_else(|| "OK".to_string()))
    }

    // ---------------------------
    // Auth
    // ---------------------------

    pub fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        let endpoint = "/api/auth/login";
        let rb = self
            .http
            .post(self.url(endpoint))
            .json(&LoginRequest { email, password });
        let response = self.check(rb.send()?)?;
        let body = response.text()?;
        serde_json::from_str(&body)
            .map_err(|e| AppError::Schema(endpoint.to_string(), e.to_string()))
    }

    // ---------------------------
    // Efforts
    // ---------------------------

    pub fn effort_entries(&self, email: &str, range: &DateRange) -> AppResult<Vec<TaskDto>> {
        let endpoint = "/api/effort-entry-horizon";
        let start = datekey::to_iso(range.start);
        let end = datekey::to_iso(range.end);
        let rb = self.http.get(self.url(endpoint)).query(&[
            ("email", email),
            ("startDate", start.as_str()),
            ("endDate", end.as_str()),
        ]);
        self.send(endpoint, rb)
    }

    /// Push rows and get one backend id back per task, in order.
    pub fn save_efforts(&self, email: &str, tasks: &[TaskDto]) -> AppResult<Vec<i64>> {
        let endpoint = "/api/tasks-new";
        let rb = self
            .http
            .post(self.url(endpoint))
            .json(&SaveEffortsRequest { email, tasks });
        self.send(endpoint, rb)
    }

    pub fn summary_by_range(
        &self,
        email: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<TaskDto>> {
        let endpoint = "/api/tasks/summary-by-range";
        let start = datekey::to_wire(from);
        let end = datekey::to_wire(to);
        let rb = self.http.get(self.url(endpoint)).query(&[
            ("email", email),
            ("startDate", start.as_str()),
            ("endDate", end.as_str()),
        ]);
        self.send(endpoint, rb)
    }

    // ---------------------------
    // Catalog lookups
    // ---------------------------

    pub fn client_codes(&self) -> AppResult<Vec<ClientDto>> {
        let endpoint = "/api/admin-panel/client-codes";
        self.send(endpoint, self.http.get(self.url(endpoint)))
    }

    pub fn task_types(&self, client: &str) -> AppResult<Vec<TaskTypeDto>> {
        let endpoint = format!("/api/admin-panel/task-types/{client}");
        self.send(&endpoint, self.http.get(self.url(&endpoint)))
    }

    pub fn projects(&self, client: &str) -> AppResult<Vec<ProjectDto>> {
        let endpoint = format!("/api/admin-panel/projects/{client}");
        self.send(&endpoint, self.http.get(self.url(&endpoint)))
    }

    // ---------------------------
    // Tickets
    // ---------------------------

    pub fn ticket_description(
        &self,
        client: &str,
        project: &str,
        ticket: &str,
    ) -> AppResult<String> {
        let endpoint = "/api/tickets/description";
        let rb = self.http.get(self.url(endpoint)).query(&[
            ("client", client),
            ("project", project),
            ("ticket", ticket),
        ]);
        self.send(endpoint, rb)
    }

    pub fn update_ticket_description(
        &self,
        update: &TicketDescriptionUpdate,
    ) -> AppResult<String> {
        let endpoint = "/api/tickets/description";
        self.send_message(endpoint, self.http.put(self.url(endpoint)).json(update))
    }

    // ---------------------------
    // Admin panel
    // ---------------------------

    pub fn admin_search(&self, request: &AdminSearchRequest) -> AppResult<Vec<AdminSummaryDto>> {
        let endpoint = "/api/admin-panel/search";
        self.send(endpoint, self.http.post(self.url(endpoint)).json(request))
    }

    pub fn admin_add_client(&self, client: &ClientDto) -> AppResult<String> {
        let endpoint = "/api/admin-panel/client-codes";
        self.send_message(endpoint, self.http.post(self.url(endpoint)).json(client))
    }

    pub fn admin_update_client(&self, client: &ClientDto) -> AppResult<String> {
        let endpoint = "/api/admin-panel/client-codes";
        self.send_message(endpoint, self.http.put(self.url(endpoint)).json(client))
    }

    pub fn admin_delete_client(&self, code: &str) -> AppResult<String> {
        let endpoint = format!("/api/admin-panel/client-codes/{code}");
        self.send_message(&endpoint, self.http.delete(self.url(&endpoint)))
    }

    pub fn admin_add_project(&self, project: &ProjectDto) -> AppResult<String> {
        let endpoint = "/api/admin-panel/projects";
        self.send_message(endpoint, self.http.post(self.url(endpoint)).json(project))
    }

    pub fn admin_delete_project(&self, client: &str, code: &str) -> AppResult<String> {
        let endpoint = format!("/api/admin-panel/projects/{client}/{code}");
        self.send_message(&endpoint, self.http.delete(self.url(&endpoint)))
    }

    pub fn admin_add_task_type(&self, task_type: &TaskTypeDto) -> AppResult<String> {
        let endpoint = "/api/admin-panel/task-types";
        self.send_message(endpoint, self.http.post(self.url(endpoint)).json(task_type))
    }

    pub fn admin_delete_task_type(&self, client: &str, code: &str) -> AppResult<String> {
        let endpoint = format!("/api/admin-panel/task-types/{client}/{code}");
        self.send_message(&endpoint, self.http.delete(self.url(&endpoint)))
    }

    pub fn admin_user_role(&self, email: &str) -> AppResult<UserRoleDto> {
        let endpoint = "/api/admin-panel/roles";
        let rb = self.http.get(self.url(endpoint)).query(&[("email", email)]);
        self.send(endpoint, rb)
    }

    pub fn admin_set_user_role(&self, role: &UserRoleDto) -> AppResult<String> {
        let endpoint = "/api/admin-panel/roles";
        self.send_message(endpoint, self.http.put(self.url(endpoint)).json(role))
    }
}
