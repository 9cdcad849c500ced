// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::lookup;
use crate::config::{pinned_categories, set_pinned_categories};
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("category").unwrap().trim().to_string();
            let mut pins = pinned_categories(conn)?;
            if pins.contains(&name) {
                println!("'{}' is already pinned", name);
            } else {
                pins.push(name.clone());
                set_pinned_categories(conn, &pins)?;
                println!("Pinned '{}'", name);
            }
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("category").unwrap().trim();
            let mut pins = pinned_categories(conn)?;
            pins.retain(|p| p != name);
            set_pinned_categories(conn, &pins)?;
            println!("Unpinned '{}'", name);
        }
        _ => {
            let rows = pinned_categories(conn)?
                .into_iter()
                .map(|p| {
                    let def = lookup(&p);
                    vec![p.clone(), def.icon.to_string(), def.color.to_string()]
                })
                .collect();
            println!("{}", pretty_table(&["Pinned", "Icon", "Color"], rows));
        }
    }
    Ok(())
}
