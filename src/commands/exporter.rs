// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use super::{load_transactions, selected_year, selection};
use crate::config;
use crate::report::{ExportFormat, build_report};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("report", sub)) => export_report(conn, sub),
        _ => Ok(()),
    }
}

fn export_report(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let format: ExportFormat = sub.get_one::<String>("format").unwrap().parse()?;
    let out = sub.get_one::<String>("out").unwrap().trim();

    let year = selected_year(sub)?;
    let sel = selection(conn, sub, year)?;
    let txs = load_transactions(conn, sub, year)?;
    let symbol = config::load(conn)?.currency_symbol;
    let doc = build_report(&txs, &sel, &symbol);

    if let Err(e) = doc.export(format, Path::new(out)) {
        tracing::error!("exporting report to {out}: {e:?}");
        return Err(e.into());
    }
    println!("Exported report to {}", out);
    Ok(())
}
