// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{load_transactions, selected_year};
use crate::aggregate::{NOTE_OPTION_LIMIT, note_values};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let year = selected_year(sub)?;
    let txs = load_transactions(conn, sub, year)?;
    let query = sub.get_one::<String>("query").map(|s| s.as_str());
    let limit = sub
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(NOTE_OPTION_LIMIT);
    let notes = note_values(&txs, year, query, Some(limit));

    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &notes)? {
        let rows = notes.into_iter().map(|n| vec![n]).collect();
        println!("{}", pretty_table(&["Note"], rows));
    }
    Ok(())
}
