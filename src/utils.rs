// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::{Datelike, Local};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::CategoryMovement;

const UA: &str = concat!(
    "moneytrend/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/moneytrend)"
);

pub fn http_client() -> reqwest::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()
}

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Zero-based index of the current month.
pub fn current_month() -> i32 {
    Local::now().month0() as i32
}

/// Parse a human month number (1-12) into a zero-based index.
pub fn parse_month(s: &str) -> Result<i32> {
    let m: i32 = s
        .trim()
        .parse()
        .with_context(|| format!("Invalid month '{}', expected 1-12", s))?;
    if !(1..=12).contains(&m) {
        return Err(anyhow!("Invalid month '{}', expected 1-12", s));
    }
    Ok(m - 1)
}

pub fn parse_year(s: &str) -> Result<i32> {
    let y: i32 = s
        .trim()
        .parse()
        .with_context(|| format!("Invalid year '{}'", s))?;
    if !(1970..=9999).contains(&y) {
        return Err(anyhow!("Year {} out of range", y));
    }
    Ok(y)
}

pub fn month_label(year: i32, month0: u32) -> String {
    format!("{}-{:02}", year, month0 + 1)
}

pub fn month_short(month0: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    NAMES.get(month0 as usize).copied().unwrap_or("?")
}

/// `-NT$1,234.5` style: sign first, grouped integer part, trailing zeros dropped.
pub fn fmt_money(d: &Decimal, symbol: &str) -> String {
    let sign = if d.is_sign_negative() && !d.is_zero() {
        "-"
    } else {
        ""
    };
    let abs = d.abs().round_dp(2).normalize();
    let text = abs.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac_part {
        Some(f) => format!("{}{}{}.{}", sign, symbol, grouped, f),
        None => format!("{}{}{}", sign, symbol, grouped),
    }
}

/// Badge text for a movement: "—" when empty, capped at "999+%".
pub fn fmt_percent_badge(m: &CategoryMovement) -> String {
    if m.is_empty() {
        return "—".to_string();
    }
    let pct = m.percent.abs();
    if pct >= Decimal::ONE_THOUSAND {
        "999+%".to_string()
    } else {
        format!(
            "{}%",
            pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        )
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
