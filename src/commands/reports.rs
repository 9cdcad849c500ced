// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{load_transactions, selected_year, selection};
use crate::categories::lookup;
use crate::config;
use crate::report::{ReportDocument, build_report};
use crate::utils::{fmt_money, fmt_percent_badge, maybe_print_json, month_short, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let year = selected_year(sub)?;
    let sel = selection(conn, sub, year)?;
    let txs = load_transactions(conn, sub, year)?;
    let symbol = config::load(conn)?.currency_symbol;
    let doc = build_report(&txs, &sel, &symbol);

    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &doc)? {
        print_report(&doc);
    }
    Ok(())
}

fn print_report(doc: &ReportDocument) {
    let sym = &doc.currency_symbol;
    println!(
        "{}",
        pretty_table(
            &["Month", "Income", "Expense", "Net"],
            vec![vec![
                doc.month_title(),
                fmt_money(&doc.totals.income, sym),
                fmt_money(&doc.totals.expense, sym),
                fmt_money(&doc.net, sym),
            ]],
        )
    );

    let mv = &doc.movement;
    let mover = match &mv.category {
        Some(cat) => {
            let def = lookup(cat);
            let arrow = if mv.is_up() { "↑" } else { "↓" };
            vec![
                format!("{} ({})", cat, def.icon),
                fmt_money(&mv.current, sym),
                fmt_money(&mv.previous, sym),
                format!("{} {}", arrow, fmt_percent_badge(mv)),
            ]
        }
        None => vec![
            "(no spending)".to_string(),
            fmt_money(&mv.current, sym),
            fmt_money(&mv.previous, sym),
            fmt_percent_badge(mv),
        ],
    };
    println!(
        "{}",
        pretty_table(
            &["Biggest mover", "This month", "Last month", "Change"],
            vec![mover],
        )
    );

    let mut headers = vec!["Month", "All expense"];
    headers.extend(doc.pinned.iter().map(|p| p.category.as_str()));
    let rows = (0..12u32)
        .map(|m| {
            let mut row = vec![
                month_short(m).to_string(),
                fmt_money(&doc.expense_series.value(m), sym),
            ];
            row.extend(
                doc.pinned
                    .iter()
                    .map(|p| fmt_money(&p.series.value(m), sym)),
            );
            row
        })
        .collect();
    println!("{}", pretty_table(&headers, rows));
}
