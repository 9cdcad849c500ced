// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregations over an owned transaction list.
//!
//! Every function here is a full rescan of its input: nothing is cached
//! between calls, so callers simply re-run them when the list or the
//! year/month selection changes.

use std::collections::{HashMap, HashSet};

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use rust_decimal::Decimal;

use crate::categories::is_income_category;
use crate::models::{CategoryMovement, MonthSeries, MonthTotals, Transaction, accumulate};

/// Display cap for the note dictionary.
pub const NOTE_OPTION_LIMIT: usize = 120;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;
const SCORE_WEIGHT: Decimal = Decimal::ONE_THOUSAND;

/// Clamp a zero-based month index into 0..=11.
pub fn clamp_month(month: i32) -> u32 {
    month.clamp(0, 11) as u32
}

/// Selected note values. An empty filter lets every transaction through.
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    notes: HashSet<String>,
}

impl NoteFilter {
    pub fn new<I, S>(notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let notes = notes
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        Self { notes }
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Matches the trimmed note, the same form `note_values` offers.
    pub fn passes(&self, t: &Transaction) -> bool {
        self.notes.is_empty() || self.notes.contains(t.note_text())
    }
}

pub fn month_totals(txs: &[Transaction], year: i32, month: i32) -> MonthTotals {
    let m = clamp_month(month);
    let mut totals = MonthTotals::default();
    for t in txs.iter().filter(|t| t.in_month(year, m)) {
        if t.is_expense() {
            accumulate(&mut totals.expense, t.amount);
        } else if t.is_income() {
            accumulate(&mut totals.income, t.amount.abs());
        }
    }
    totals
}

/// Headline series: every category, positive amounts only.
pub fn expense_series(txs: &[Transaction], year: i32, notes: &NoteFilter) -> MonthSeries {
    let mut series = MonthSeries::empty();
    for t in txs {
        let Some((y, m)) = t.year_month() else {
            continue;
        };
        if y != year || !t.is_expense() || !notes.passes(t) {
            continue;
        }
        series.add(m, t.amount);
    }
    series
}

/// One series per requested label. Income categories collect the absolute
/// value of negative amounts; all others collect positive amounts.
pub fn category_series<S: AsRef<str>>(
    txs: &[Transaction],
    year: i32,
    categories: &[S],
    notes: &NoteFilter,
) -> HashMap<String, MonthSeries> {
    let mut map: HashMap<String, MonthSeries> = categories
        .iter()
        .map(|c| (c.as_ref().to_string(), MonthSeries::empty()))
        .collect();
    if map.is_empty() {
        return map;
    }

    for t in txs {
        let Some((y, m)) = t.year_month() else {
            continue;
        };
        if y != year {
            continue;
        }
        let cat = t.category_label();
        let Some(series) = map.get_mut(cat) else {
            continue;
        };
        if !notes.passes(t) {
            continue;
        }
        if is_income_category(cat) {
            if t.is_income() {
                series.add(m, t.amount.abs());
            }
        } else if t.is_expense() {
            series.add(m, t.amount);
        }
    }
    map
}

/// Per-category expense sums for one month, in first-seen order.
fn expense_by_category(txs: &[Transaction], year: i32, month: u32) -> Vec<(String, Decimal)> {
    let mut order: Vec<(String, Decimal)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for t in txs
        .iter()
        .filter(|t| t.in_month(year, month) && t.is_expense())
    {
        let cat = t.category_label();
        match index.get(cat) {
            Some(&i) => {
                accumulate(&mut order[i].1, t.amount);
            }
            None => {
                index.insert(cat.to_string(), order.len());
                order.push((cat.to_string(), t.amount));
            }
        }
    }
    order
}

/// Category whose spending moved the most between `month` and the month
/// before it, ranked by `|percent| * 1000 + |delta|`.
///
/// January has no previous month; earlier years are never consulted.
pub fn significant_movement(txs: &[Transaction], year: i32, month: i32) -> CategoryMovement {
    let m = clamp_month(month);
    let current = expense_by_category(txs, year, m);
    let previous = match m.checked_sub(1) {
        Some(prev) => expense_by_category(txs, year, prev),
        None => Vec::new(),
    };

    let cur_map: HashMap<&str, Decimal> = current.iter().map(|(c, v)| (c.as_str(), *v)).collect();
    let prev_map: HashMap<&str, Decimal> =
        previous.iter().map(|(c, v)| (c.as_str(), *v)).collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let candidates = current
        .iter()
        .chain(previous.iter())
        .map(|(c, _)| c.as_str())
        .filter(|c| seen.insert(*c))
        .collect::<Vec<_>>();

    let mut best: Option<CategoryMovement> = None;
    for cat in candidates {
        let cur_v = cur_map.get(cat).copied().unwrap_or(Decimal::ZERO);
        let prev_v = prev_map.get(cat).copied().unwrap_or(Decimal::ZERO);
        if cur_v <= Decimal::ZERO && prev_v <= Decimal::ZERO {
            continue;
        }

        // Both sides are non-negative, so the subtraction cannot overflow.
        let delta = cur_v - prev_v;
        let percent = if prev_v > Decimal::ZERO {
            delta
                .checked_div(prev_v)
                .and_then(|q| q.checked_mul(HUNDRED))
                .unwrap_or(Decimal::MAX)
        } else if cur_v > Decimal::ZERO {
            HUNDRED
        } else {
            Decimal::ZERO
        };
        let score = percent
            .abs()
            .checked_mul(SCORE_WEIGHT)
            .and_then(|s| s.checked_add(delta.abs()))
            .unwrap_or(Decimal::MAX);

        if best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(CategoryMovement {
                category: Some(cat.to_string()),
                current: cur_v,
                previous: prev_v,
                delta,
                percent,
                score,
            });
        }
    }

    best.unwrap_or_else(CategoryMovement::empty)
}

/// Distinct trimmed notes seen in `year`, in Traditional Chinese stroke order.
///
/// `query` filters case-insensitively after sorting; `limit` truncates last.
pub fn note_values(
    txs: &[Transaction],
    year: i32,
    query: Option<&str>,
    limit: Option<usize>,
) -> Vec<String> {
    let mut set: HashSet<&str> = HashSet::new();
    for t in txs.iter().filter(|t| t.in_year(year)) {
        let note = t.note_text();
        if !note.is_empty() {
            set.insert(note);
        }
    }
    let mut all: Vec<String> = set.into_iter().map(str::to_string).collect();
    sort_stroke_order(&mut all);

    let q = query.map(str::trim).unwrap_or("").to_lowercase();
    let filtered = all
        .into_iter()
        .filter(|s| q.is_empty() || s.to_lowercase().contains(&q));
    match limit {
        Some(n) => filtered.take(n).collect(),
        None => filtered.collect(),
    }
}

fn sort_stroke_order(values: &mut [String]) {
    // Plain zh data defaults to pinyin; stroke order needs the `co` keyword.
    match Collator::try_new(&locale!("zh-u-co-stroke").into(), CollatorOptions::new()) {
        Ok(collator) => {
            values.sort_by(|a, b| collator.compare(a, b).then_with(|| a.cmp(b)));
        }
        Err(e) => {
            tracing::warn!("stroke-order collator unavailable, using code point order: {e}");
            values.sort_by(|a, b| a.cmp(b));
        }
    }
}
