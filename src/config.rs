// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use rusqlite::Connection;

use crate::db::{get_setting, set_setting};

pub const API_URL_ENV: &str = "MONEYTREND_API_URL";
pub const DEFAULT_PAGE_SIZE: u32 = 5000;
pub const MAX_PAGES: u32 = 20;
pub const DEFAULT_CURRENCY_SYMBOL: &str = "NT$";

const KEY_API_URL: &str = "api_url";
const KEY_PAGE_SIZE: &str = "page_size";
const KEY_CURRENCY: &str = "currency_symbol";
const KEY_UTC_OFFSET: &str = "utc_offset";
const KEY_PINNED: &str = "pinned_categories";

/// Time zone used to turn instants into calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportZone {
    Local,
    Fixed(FixedOffset),
}

impl ReportZone {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("local") {
            return Ok(ReportZone::Local);
        }
        s.parse::<FixedOffset>()
            .map(ReportZone::Fixed)
            .map_err(|_| anyhow!("Invalid UTC offset '{}', expected +HH:MM or 'local'", s))
    }

    /// Wall-clock time of an instant in this zone.
    pub fn wall_clock(&self, utc: DateTime<Utc>) -> NaiveDateTime {
        match self {
            ReportZone::Local => utc.with_timezone(&Local).naive_local(),
            ReportZone::Fixed(off) => utc.with_timezone(off).naive_local(),
        }
    }

    /// Interpret a wall-clock time in this zone and express it in UTC.
    pub fn to_utc(&self, naive: NaiveDateTime) -> NaiveDateTime {
        match self {
            ReportZone::Local => to_utc_in(&Local, naive),
            ReportZone::Fixed(off) => to_utc_in(off, naive),
        }
    }
}

impl std::fmt::Display for ReportZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportZone::Local => write!(f, "local"),
            ReportZone::Fixed(off) => write!(f, "{}", off),
        }
    }
}

fn to_utc_in<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> NaiveDateTime {
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.naive_utc())
        .unwrap_or(naive)
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: Option<String>,
    pub page_size: u32,
    pub currency_symbol: String,
    pub zone: ReportZone,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: None,
            page_size: DEFAULT_PAGE_SIZE,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            zone: ReportZone::Local,
        }
    }
}

pub fn load(conn: &Connection) -> Result<Settings> {
    let mut s = Settings::default();
    s.api_url = match std::env::var(API_URL_ENV) {
        Ok(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
        _ => get_setting(conn, KEY_API_URL)?,
    };
    if let Some(v) = get_setting(conn, KEY_PAGE_SIZE)? {
        s.page_size = v
            .parse()
            .with_context(|| format!("Invalid stored page size '{}'", v))?;
    }
    if let Some(v) = get_setting(conn, KEY_CURRENCY)? {
        s.currency_symbol = v;
    }
    if let Some(v) = get_setting(conn, KEY_UTC_OFFSET)? {
        s.zone = ReportZone::parse(&v)?;
    }
    Ok(s)
}

pub fn set_api_url(conn: &Connection, url: &str) -> Result<()> {
    let url = url.trim().trim_end_matches('/');
    reqwest::Url::parse(url).with_context(|| format!("Invalid API url '{}'", url))?;
    set_setting(conn, KEY_API_URL, url)
}

pub fn set_page_size(conn: &Connection, size: u32) -> Result<()> {
    if size == 0 {
        return Err(anyhow!("Page size must be at least 1"));
    }
    set_setting(conn, KEY_PAGE_SIZE, &size.to_string())
}

pub fn set_currency_symbol(conn: &Connection, symbol: &str) -> Result<()> {
    set_setting(conn, KEY_CURRENCY, symbol.trim())
}

pub fn set_zone(conn: &Connection, zone: ReportZone) -> Result<()> {
    set_setting(conn, KEY_UTC_OFFSET, &zone.to_string())
}

pub fn pinned_categories(conn: &Connection) -> Result<Vec<String>> {
    match get_setting(conn, KEY_PINNED)? {
        Some(raw) => serde_json::from_str(&raw).context("Invalid pinned category list"),
        None => Ok(Vec::new()),
    }
}

pub fn set_pinned_categories(conn: &Connection, pins: &[String]) -> Result<()> {
    set_setting(conn, KEY_PINNED, &serde_json::to_string(pins)?)
}
