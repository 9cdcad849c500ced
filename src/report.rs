// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Shareable trend report: a header summary, the all-categories expense
//! table, and one table per pinned category.

use std::fmt::Write as _;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::aggregate::{
    NoteFilter, category_series, clamp_month, expense_series, month_totals, significant_movement,
};
use crate::error::ExportError;
use crate::models::{CategoryMovement, MonthSeries, MonthTotals, Transaction};
use crate::utils::{fmt_money, month_label, month_short};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(ExportFormat::Html),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PinnedSeries {
    pub category: String,
    pub series: MonthSeries,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub year: i32,
    pub month_index: u32,
    pub totals: MonthTotals,
    pub net: rust_decimal::Decimal,
    pub movement: CategoryMovement,
    pub expense_series: MonthSeries,
    pub pinned: Vec<PinnedSeries>,
    #[serde(skip)]
    pub currency_symbol: String,
}

/// Selection the report is computed for.
#[derive(Debug, Clone, Default)]
pub struct ReportSelection {
    pub year: i32,
    pub month: i32,
    pub pinned: Vec<String>,
    pub notes: NoteFilter,
}

pub fn build_report(
    txs: &[Transaction],
    sel: &ReportSelection,
    currency_symbol: &str,
) -> ReportDocument {
    let month_index = clamp_month(sel.month);
    let totals = month_totals(txs, sel.year, sel.month);

    let mut pins: Vec<String> = Vec::new();
    for p in &sel.pinned {
        if !pins.contains(p) {
            pins.push(p.clone());
        }
    }
    let mut by_cat = category_series(txs, sel.year, &pins, &sel.notes);
    let pinned = pins
        .into_iter()
        .map(|category| {
            let series = by_cat.remove(&category).unwrap_or_default();
            PinnedSeries { category, series }
        })
        .collect();

    ReportDocument {
        year: sel.year,
        month_index,
        totals,
        net: totals.net(),
        movement: significant_movement(txs, sel.year, sel.month),
        expense_series: expense_series(txs, sel.year, &sel.notes),
        pinned,
        currency_symbol: currency_symbol.to_string(),
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn series_table(out: &mut String, value_header: &str, series: &MonthSeries, symbol: &str) {
    out.push_str("<table border=\"1\" cellpadding=\"6\" cellspacing=\"0\">\n");
    let _ = writeln!(out, "<tr><th>Month</th><th>{}</th></tr>", value_header);
    for p in &series.points {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td></tr>",
            month_short(p.month_index),
            fmt_money(&p.value, &escape_html(symbol))
        );
    }
    out.push_str("</table>\n");
}

impl ReportDocument {
    pub fn month_title(&self) -> String {
        month_label(self.year, self.month_index)
    }

    pub fn render_html(&self) -> String {
        let sym = &self.currency_symbol;
        let title = self.month_title();
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>Trend Report</title></head><body>\n");
        out.push_str("<h1>Trend Report</h1>\n");
        let _ = writeln!(out, "<p>Year: {}</p>", self.year);
        let _ = writeln!(
            out,
            "<p>Income ({}): {}</p>",
            title,
            escape_html(&fmt_money(&self.totals.income, sym))
        );
        let _ = writeln!(
            out,
            "<p>Expense ({}): {}</p>",
            title,
            escape_html(&fmt_money(&self.totals.expense, sym))
        );
        let _ = writeln!(
            out,
            "<p>Net ({}): {}</p>",
            title,
            escape_html(&fmt_money(&self.net, sym))
        );

        let _ = writeln!(out, "<h2>{} expense trend (all categories)</h2>", self.year);
        if self.expense_series.has_activity() {
            series_table(&mut out, "Expense", &self.expense_series, sym);
        } else {
            out.push_str("<p>No data</p>\n");
        }

        if !self.pinned.is_empty() {
            out.push_str("<h2>Pinned categories</h2>\n");
            for p in &self.pinned {
                let _ = writeln!(out, "<h3>{}</h3>", escape_html(&p.category));
                series_table(&mut out, "Amount", &p.series, sym);
            }
        }
        out.push_str("</body></html>\n");
        out
    }

    pub fn write_csv<W: std::io::Write>(&self, w: W) -> Result<(), ExportError> {
        let mut wtr = csv::Writer::from_writer(w);
        wtr.write_record(["section", "month", "value"])?;
        let title = self.month_title();
        wtr.write_record(["income", &title, &self.totals.income.to_string()])?;
        wtr.write_record(["expense", &title, &self.totals.expense.to_string()])?;
        wtr.write_record(["net", &title, &self.net.to_string()])?;
        for p in &self.expense_series.points {
            wtr.write_record([
                "all_expense",
                &month_label(self.year, p.month_index),
                &p.value.to_string(),
            ])?;
        }
        for pin in &self.pinned {
            let section = format!("pinned:{}", pin.category);
            for p in &pin.series.points {
                wtr.write_record([
                    section.as_str(),
                    &month_label(self.year, p.month_index),
                    &p.value.to_string(),
                ])?;
            }
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn export(&self, format: ExportFormat, out: &Path) -> Result<(), ExportError> {
        match format {
            ExportFormat::Html => std::fs::write(out, self.render_html())?,
            ExportFormat::Json => std::fs::write(out, serde_json::to_string_pretty(self)?)?,
            ExportFormat::Csv => {
                let file = std::fs::File::create(out)?;
                self.write_csv(file)?;
            }
        }
        tracing::info!(path = %out.display(), ?format, "report exported");
        Ok(())
    }
}
