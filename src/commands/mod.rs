// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod categories;
pub mod exporter;
pub mod notes;
pub mod pins;
pub mod reports;
pub mod session;
pub mod settings;

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::aggregate::NoteFilter;
use crate::api::{self, FetchOutcome, TransactionClient};
use crate::config;
use crate::models::Transaction;
use crate::report::ReportSelection;
use crate::utils::{current_month, current_year, parse_month, parse_year};

pub fn selected_year(sub: &clap::ArgMatches) -> Result<i32> {
    match sub.get_one::<String>("year") {
        Some(y) => parse_year(y),
        None => Ok(current_year()),
    }
}

/// Transactions of `year` owned by the signed-in user, from `--input` or the API.
pub fn load_transactions(
    conn: &Connection,
    sub: &clap::ArgMatches,
    year: i32,
) -> Result<Vec<Transaction>> {
    let settings = config::load(conn)?;
    let session = crate::session::load(conn)?;
    let outcome = match sub.get_one::<String>("input") {
        Some(path) => api::load_file(Path::new(path.trim()), &session, settings.zone),
        None => TransactionClient::new(&settings, &session)
            .and_then(|client| api::fetch_year(&client, &settings, &session, year)),
    }
    .context("Could not load transactions")?;
    if let FetchOutcome::Empty = outcome {
        tracing::info!(year, "no transactions returned");
    }
    Ok(outcome.into_transactions())
}

pub fn selection(conn: &Connection, sub: &clap::ArgMatches, year: i32) -> Result<ReportSelection> {
    let month = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => current_month(),
    };
    let pinned: Vec<String> = match sub.get_many::<String>("pin") {
        Some(pins) => pins.map(|p| p.trim().to_string()).collect(),
        None => config::pinned_categories(conn)?,
    };
    let notes = NoteFilter::new(sub.get_many::<String>("note").into_iter().flatten());
    Ok(ReportSelection {
        year,
        month,
        pinned,
        notes,
    })
}
