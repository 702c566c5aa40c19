//! Wire types for the effort-entry backend.
//!
//! Every response body is the `{ "message": ..., "data": ... }` envelope
//! except login, which answers with a bare token object. Dates travel in
//! three shapes: ISO in query parameters, `dd-mm-yyyy` in save and
//! summary payloads, and year-less display labels in fetched hour maps.

use crate::core::datekey;
use crate::errors::AppResult;
use crate::models::{DateRange, EffortRow, SummaryRow};
use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Standard response wrapper.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

/// Minimal body used for `{ message }` responses and error details.
#[derive(Debug, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// One grid row as the backend sees it.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    #[serde(default)]
    pub row_id: Option<i64>,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub task_type: String,
    #[serde(default)]
    pub ticket_number: String,
    #[serde(default)]
    pub ticket_description: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub billable: String,
    #[serde(default)]
    pub hours_by_date: BTreeMap<String, f64>,
}

impl TaskDto {
    pub fn from_row(row: &EffortRow) -> Self {
        Self {
            row_id: row.row_id,
            client: row.client.trim().to_string(),
            project: row.project.trim().to_string(),
            task_type: row.category.trim().to_string(),
            ticket_number: row.ticket.trim().to_string(),
            ticket_description: row.ticket_description.trim().to_string(),
            description: row.description.trim().to_string(),
            billable: row.billable_label().to_string(),
            hours_by_date: row
                .hours
                .iter()
                .map(|(d, v)| (datekey::to_wire(*d), *v))
                .collect(),
        }
    }

    /// Turn a fetched task into a grid row under a fresh local key.
    /// Hour keys may be year-less display labels; the range supplies the
    /// year. Zero and negative cells are dropped.
    pub fn into_row(self, key: u64, range: &DateRange) -> AppResult<EffortRow> {
        let mut row = EffortRow::blank(key);
        row.row_id = self.row_id;
        row.client = self.client;
        row.category = self.task_type;
        row.project = self.project;
        row.ticket = self.ticket_number;
        row.ticket_description = self.ticket_description;
        row.description = self.description;
        row.billable = self.billable.trim().eq_ignore_ascii_case("yes");

        for (k, v) in self.hours_by_date {
            if v <= 0.0 {
                continue;
            }
            row.hours.insert(resolve_date(&k, range)?, v);
        }
        Ok(row)
    }
}

/// Resolve a date key against a range. Labels carry no year, so try the
/// range's start year first and the end year when the range crosses a
/// year boundary.
fn resolve_date(key: &str, range: &DateRange) -> AppResult<NaiveDate> {
    let first = datekey::normalize(key, range.start.year())?;
    if range.contains(first) || range.start.year() == range.end.year() {
        return Ok(first);
    }

    let second = datekey::normalize(key, range.end.year())?;
    if range.contains(second) {
        return Ok(second);
    }
    Ok(first)
}

#[derive(Debug, Serialize)]
pub struct SaveEffortsRequest<'a> {
    pub email: &'a str,
    pub tasks: &'a [TaskDto],
}

/// Pre-aggregated summary line from the admin search endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSummaryDto {
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub ticket: String,
    #[serde(default)]
    pub ticket_description: String,
    #[serde(default)]
    pub billable_hours: f64,
    #[serde(default)]
    pub non_billable_hours: f64,
    #[serde(default)]
    pub descriptions: Vec<String>,
}

impl From<AdminSummaryDto> for SummaryRow {
    fn from(dto: AdminSummaryDto) -> Self {
        Self {
            client: dto.client,
            project: dto.project,
            ticket: dto.ticket,
            ticket_description: dto.ticket_description,
            billable_hours: dto.billable_hours,
            non_billable_hours: dto.non_billable_hours,
            descriptions: dto.descriptions,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchBy {
    Client,
    Email,
    Both,
}

impl SearchBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchBy::Client => "client",
            SearchBy::Email => "email",
            SearchBy::Both => "both",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSearchRequest<'a> {
    pub search_by: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClientDto {
    pub code: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectDto {
    pub client: String,
    pub code: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskTypeDto {
    pub client: String,
    pub code: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleDto {
    pub email: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDescriptionUpdate<'a> {
    pub client: &'a str,
    pub project: &'a str,
    pub ticket: &'a str,
    pub description: &'a str,
}
