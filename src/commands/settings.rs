// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{self, ReportZone};
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-api", sub)) => {
            let url = sub.get_one::<String>("url").unwrap();
            config::set_api_url(conn, url)?;
            println!("Transaction API set to {}", url.trim().trim_end_matches('/'));
        }
        Some(("set-page-size", sub)) => {
            let size = *sub.get_one::<u32>("size").unwrap();
            config::set_page_size(conn, size)?;
            println!("Page size set to {}", size);
        }
        Some(("set-currency", sub)) => {
            let symbol = sub.get_one::<String>("symbol").unwrap();
            config::set_currency_symbol(conn, symbol)?;
            println!("Currency symbol set to {}", symbol.trim());
        }
        Some(("set-utc-offset", sub)) => {
            let zone = ReportZone::parse(sub.get_one::<String>("offset").unwrap())?;
            config::set_zone(conn, zone)?;
            println!("Month boundaries now use {}", zone);
        }
        _ => show(conn)?,
    }
    Ok(())
}

fn show(conn: &Connection) -> Result<()> {
    let s = config::load(conn)?;
    let session = crate::session::load(conn)?;
    let rows = vec![
        vec![
            "api_url".to_string(),
            s.api_url.unwrap_or_else(|| "(not set)".into()),
        ],
        vec!["page_size".to_string(), s.page_size.to_string()],
        vec!["currency_symbol".to_string(), s.currency_symbol],
        vec!["utc_offset".to_string(), s.zone.to_string()],
        vec![
            "user_id".to_string(),
            session.user_id.unwrap_or_else(|| "(signed out)".into()),
        ],
        vec![
            "pinned".to_string(),
            config::pinned_categories(conn)?.join(", "),
        ],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
    Ok(())
}
