// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Transaction source: the paged listing endpoint and JSON dumps of the
//! same envelope.

use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use reqwest::Url;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{MAX_PAGES, ReportZone, Settings};
use crate::error::FetchError;
use crate::models::Transaction;
use crate::session::{Session, id_from_value};
use crate::utils::http_client;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    pub page: u32,
    pub limit: u32,
    pub start_date: String,
    pub end_date: String,
}

/// Result of a successful load. Failures travel as [`FetchError`].
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded(Vec<Transaction>),
    Empty,
}

impl FetchOutcome {
    pub fn from_rows(rows: Vec<Transaction>) -> Self {
        if rows.is_empty() {
            FetchOutcome::Empty
        } else {
            FetchOutcome::Loaded(rows)
        }
    }

    pub fn len(&self) -> usize {
        match self {
            FetchOutcome::Loaded(rows) => rows.len(),
            FetchOutcome::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_transactions(self) -> Vec<Transaction> {
        match self {
            FetchOutcome::Loaded(rows) => rows,
            FetchOutcome::Empty => Vec::new(),
        }
    }
}

const ISO_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Inclusive bounds of a calendar year in `zone`, as UTC ISO-8601 instants.
pub fn year_range(year: i32, zone: ReportZone) -> Option<(String, String)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_milli_opt(0, 0, 0, 0)?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31)?.and_hms_milli_opt(23, 59, 59, 999)?;
    Some((
        zone.to_utc(start).format(ISO_MILLIS).to_string(),
        zone.to_utc(end).format(ISO_MILLIS).to_string(),
    ))
}

/// Rows of a listing response: `records` if it is a list, else `items`.
pub fn envelope_rows(body: &Value) -> &[Value] {
    body.get("records")
        .and_then(Value::as_array)
        .or_else(|| body.get("items").and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawRecord {
    id: Value,
    created_at: Value,
    date: Value,
    time: Value,
    user_id: Value,
    user: Value,
    amount: Value,
    category: Value,
    note: Value,
}

fn first_present(values: [&Value; 3]) -> Option<&Value> {
    values.into_iter().find(|v| !v.is_null())
}

/// Parse a timestamp into wall-clock time in `zone`.
///
/// Offset-qualified strings and epoch milliseconds are converted; naive
/// date-times and bare dates are already wall-clock.
pub fn parse_timestamp(v: &Value, zone: ReportZone) -> Option<NaiveDateTime> {
    match v {
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|utc| zone.wall_clock(utc)),
        Value::String(s) => parse_timestamp_str(s.trim(), zone),
        _ => None,
    }
}

fn parse_timestamp_str(s: &str, zone: ReportZone) -> Option<NaiveDateTime> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(zone.wall_clock(dt.with_timezone(&Utc)));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Lenient amount: numbers and numeric strings; anything else is zero.
pub fn parse_amount(v: &Value) -> Decimal {
    let text = match v {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return Decimal::ZERO,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .unwrap_or(Decimal::ZERO)
}

fn text_of(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl RawRecord {
    fn into_transaction(self, zone: ReportZone) -> Transaction {
        let timestamp = first_present([&self.created_at, &self.date, &self.time])
            .and_then(|v| parse_timestamp(v, zone));
        if timestamp.is_none() {
            tracing::debug!(id = ?self.id, "record has no usable timestamp; excluded from aggregation");
        }
        let owner = if self.user_id.is_null() {
            self.user.get("id").cloned().unwrap_or(Value::Null)
        } else {
            self.user_id.clone()
        };
        Transaction {
            id: id_from_value(&self.id),
            timestamp,
            amount: parse_amount(&self.amount),
            category: text_of(&self.category).unwrap_or_default(),
            note: text_of(&self.note),
            owner_id: id_from_value(&owner),
        }
    }
}

/// Decode one listing page and keep the rows the session owns.
pub fn ingest(body: &Value, session: &Session, zone: ReportZone) -> Vec<Transaction> {
    envelope_rows(body)
        .iter()
        .filter_map(|row| match RawRecord::deserialize(row) {
            Ok(raw) => Some(raw.into_transaction(zone)),
            Err(e) => {
                tracing::debug!("skipping unreadable record: {e}");
                None
            }
        })
        .filter(|t| session.owns(t.owner_id.as_deref()))
        .collect()
}

pub struct TransactionClient {
    http: reqwest::blocking::Client,
    url: Url,
    token: Option<String>,
}

impl TransactionClient {
    pub fn new(settings: &Settings, session: &Session) -> Result<Self, FetchError> {
        let raw = settings.api_url.as_deref().ok_or(FetchError::NotConfigured)?;
        let url = Url::parse(raw).map_err(|_| FetchError::BadUrl(raw.to_string()))?;
        Ok(Self {
            http: http_client()?,
            url,
            token: session.token.clone(),
        })
    }

    pub fn fetch_page(&self, query: &TransactionQuery) -> Result<Value, FetchError> {
        let mut req = self.http.get(self.url.clone()).query(query);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        let resp = req.send()?.error_for_status()?;
        Ok(resp.json()?)
    }
}

/// Fetch every page of `year` and keep the session's rows.
pub fn fetch_year(
    client: &TransactionClient,
    settings: &Settings,
    session: &Session,
    year: i32,
) -> Result<FetchOutcome, FetchError> {
    let Some((start_date, end_date)) = year_range(year, settings.zone) else {
        return Ok(FetchOutcome::Empty);
    };
    let limit = settings.page_size.max(1);
    let mut rows = Vec::new();
    for page in 1..=MAX_PAGES {
        let query = TransactionQuery {
            page,
            limit,
            start_date: start_date.clone(),
            end_date: end_date.clone(),
        };
        let body = client.fetch_page(&query)?;
        let fetched = envelope_rows(&body).len();
        rows.extend(ingest(&body, session, settings.zone));
        tracing::debug!(page, fetched, kept = rows.len(), "fetched transaction page");
        if fetched < limit as usize {
            break;
        }
        if page == MAX_PAGES {
            tracing::warn!("stopped after {MAX_PAGES} pages; later transactions are not included");
        }
    }
    tracing::info!(year, count = rows.len(), "transactions loaded");
    Ok(FetchOutcome::from_rows(rows))
}

/// Read a saved listing response from disk.
pub fn load_file(
    path: &Path,
    session: &Session,
    zone: ReportZone,
) -> Result<FetchOutcome, FetchError> {
    let text = std::fs::read_to_string(path).map_err(|source| FetchError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let body: Value = serde_json::from_str(&text)?;
    Ok(FetchOutcome::from_rows(ingest(&body, session, zone)))
}
