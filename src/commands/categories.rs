// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::{EXPENSE_CATEGORIES, INCOME_CATEGORIES};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
pub struct CategoryRow {
    pub kind: &'static str,
    pub key: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub fn rows(income: bool, expense: bool) -> Vec<CategoryRow> {
    let both = !income && !expense;
    let mut out = Vec::new();
    if expense || both {
        out.extend(EXPENSE_CATEGORIES.iter().map(|c| CategoryRow {
            kind: "expense",
            key: c.key,
            icon: c.icon,
            color: c.color,
        }));
    }
    if income || both {
        out.extend(INCOME_CATEGORIES.iter().map(|c| CategoryRow {
            kind: "income",
            key: c.key,
            icon: c.icon,
            color: c.color,
        }));
    }
    out
}

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let data = rows(sub.get_flag("income"), sub.get_flag("expense"));
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let table_rows = data
            .iter()
            .map(|r| {
                vec![
                    r.kind.to_string(),
                    r.key.to_string(),
                    r.icon.to_string(),
                    r.color.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Kind", "Category", "Icon", "Color"], table_rows)
        );
    }
    Ok(())
}
