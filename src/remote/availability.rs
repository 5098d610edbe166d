//! Table availability checks and reservation confirmation.
//!
//! The server is loose about its response shape: the table list may appear
//! under `available`, `available_tables`, or `tables`, and each entry may be
//! a string, a number, or an object carrying `table_id`/`id`/`table` and
//! `table_number`/`number`. Floor-plan identifiers look like `"T10"`, so a
//! numeric table number N also answers to `"TN"`.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use tracing::instrument;

use crate::remote::RemoteError;

/// A requested reservation slot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRequest {
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    /// 24h time, `HH:MM`.
    pub time: String,
    pub party_size: u32,
}

/// Three-way availability semantics.
///
/// An absent (or unrecognizable) table list means the server gave no
/// availability information, which is NOT the same as an empty list:
/// unknown availability treats every table as available, while an empty
/// list means none are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAvailability {
    Unknown,
    Tables(HashSet<String>),
}

impl TableAvailability {
    /// Parse the availability field out of a response body.
    pub fn from_response(body: &Value) -> Self {
        let list = ["available", "available_tables", "tables"]
            .iter()
            .find_map(|key| body.get(*key));
        let Some(Value::Array(entries)) = list else {
            return TableAvailability::Unknown;
        };

        let mut tables = HashSet::new();
        for entry in entries {
            match entry {
                Value::String(s) if !s.is_empty() => {
                    tables.insert(s.clone());
                }
                Value::Number(n) => {
                    tables.insert(n.to_string());
                    tables.insert(format!("T{}", n));
                }
                Value::Object(obj) => {
                    if let Some(id) = ["table_id", "id", "table"]
                        .iter()
                        .find_map(|k| obj.get(*k))
                        .and_then(scalar_to_string)
                    {
                        tables.insert(id);
                    }
                    if let Some(num) = ["table_number", "number"]
                        .iter()
                        .find_map(|k| obj.get(*k))
                        .and_then(scalar_to_string)
                    {
                        tables.insert(format!("T{}", num));
                        tables.insert(num);
                    }
                }
                _ => {}
            }
        }
        TableAvailability::Tables(tables)
    }

    /// Whether a floor-plan identifier should be selectable.
    pub fn is_available(&self, table_id: &str) -> bool {
        match self {
            TableAvailability::Unknown => true,
            TableAvailability::Tables(tables) => tables.contains(table_id),
        }
    }

    /// True when the server answered and listed no tables at all.
    pub fn none_available(&self) -> bool {
        matches!(self, TableAvailability::Tables(t) if t.is_empty())
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Outcome of a reservation confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed { reservation_id: Option<String> },
    Rejected(String),
}

impl Confirmation {
    fn from_response(body: &Value) -> Self {
        if let Some(error) = body.get("error").and_then(Value::as_str) {
            return Confirmation::Rejected(error.to_string());
        }
        Confirmation::Confirmed {
            reservation_id: body.get("reservation_id").and_then(scalar_to_string),
        }
    }
}

/// The server keys reservations by numeric table id, while the floor plan
/// uses prefixed identifiers; `"T5"` normalizes to `"5"`.
pub fn normalize_table_id(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    if digits.is_empty() {
        raw.to_string()
    } else {
        digits
    }
}

/// Client for the reservations endpoints.
pub struct AvailabilityClient {
    http: reqwest::Client,
    base_url: String,
}

impl AvailabilityClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// POST the slot and parse out the availability answer.
    #[instrument(skip(self))]
    pub async fn check(&self, slot: &SlotRequest) -> Result<TableAvailability, RemoteError> {
        let url = format!("{}/reservations/available/", self.base_url);
        let response = self.http.post(&url).json(slot).send().await?;
        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status()));
        }
        let body: Value = response.json().await?;
        Ok(TableAvailability::from_response(&body))
    }

    /// Confirm a reservation for a selected table.
    #[instrument(skip(self))]
    pub async fn confirm(
        &self,
        slot: &SlotRequest,
        table_id: &str,
    ) -> Result<Confirmation, RemoteError> {
        #[derive(Debug, Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ConfirmRequest<'a> {
            #[serde(flatten)]
            slot: &'a SlotRequest,
            table_id: String,
        }

        let url = format!("{}/reservations/confirm/", self.base_url);
        let request = ConfirmRequest {
            slot,
            table_id: normalize_table_id(table_id),
        };
        let response = self.http.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status()));
        }
        let body: Value = response.json().await?;
        Ok(Confirmation::from_response(&body))
    }
}
