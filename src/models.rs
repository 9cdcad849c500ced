// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::OTHER_CATEGORY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Option<String>,
    /// Local wall-clock time; `None` when the source timestamp was unusable.
    pub timestamp: Option<NaiveDateTime>,
    pub amount: Decimal, // positive = expense, negative = income
    pub category: String,
    pub note: Option<String>,
    pub owner_id: Option<String>,
}

impl Transaction {
    /// Calendar year and zero-based month of the timestamp.
    pub fn year_month(&self) -> Option<(i32, u32)> {
        self.timestamp.map(|ts| (ts.year(), ts.month0()))
    }

    pub fn in_year(&self, year: i32) -> bool {
        matches!(self.year_month(), Some((y, _)) if y == year)
    }

    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.year_month() == Some((year, month))
    }

    /// Category label with blank labels folded into the "other" bucket.
    ///
    /// Whitespace-only labels count as blank too.
    pub fn category_label(&self) -> &str {
        if self.category.trim().is_empty() {
            OTHER_CATEGORY
        } else {
            &self.category
        }
    }

    pub fn note_text(&self) -> &str {
        self.note.as_deref().map(str::trim).unwrap_or("")
    }

    pub fn is_expense(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_income(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}

/// Add `value` into a running sum. On overflow the sum is left unchanged,
/// the record is skipped and `false` is returned.
pub fn accumulate(sum: &mut Decimal, value: Decimal) -> bool {
    match sum.checked_add(value) {
        Some(next) => {
            *sum = next;
            true
        }
        None => {
            tracing::warn!(%value, running = %sum, "amount overflows the running total; skipped");
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryDefinition<'a> {
    pub key: &'a str,
    pub icon: &'a str,
    pub color: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthPoint {
    pub month_index: u32,
    pub value: Decimal,
}

/// Twelve accumulation buckets, one per calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSeries {
    pub points: [MonthPoint; 12],
}

impl MonthSeries {
    pub fn empty() -> Self {
        let points = std::array::from_fn(|i| MonthPoint {
            month_index: i as u32,
            value: Decimal::ZERO,
        });
        Self { points }
    }

    /// Add `value` to a month. An amount that would overflow the bucket is
    /// dropped with a warning.
    pub fn add(&mut self, month: u32, value: Decimal) {
        if let Some(p) = self.points.get_mut(month as usize) {
            accumulate(&mut p.value, value);
        }
    }

    pub fn value(&self, month: u32) -> Decimal {
        self.points
            .get(month as usize)
            .map(|p| p.value)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn values(&self) -> [Decimal; 12] {
        self.points.map(|p| p.value)
    }

    /// Sum of all twelve buckets, saturating at `Decimal::MAX`.
    pub fn total(&self) -> Decimal {
        self.points
            .iter()
            .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.value))
            .unwrap_or(Decimal::MAX)
    }

    pub fn has_activity(&self) -> bool {
        self.points.iter().any(|p| p.value > Decimal::ZERO)
    }
}

impl Default for MonthSeries {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTotals {
    pub income: Decimal,
    pub expense: Decimal,
}

impl MonthTotals {
    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMovement {
    pub category: Option<String>,
    pub current: Decimal,
    pub previous: Decimal,
    pub delta: Decimal,
    pub percent: Decimal,
    pub score: Decimal,
}

impl CategoryMovement {
    pub fn empty() -> Self {
        Self {
            category: None,
            current: Decimal::ZERO,
            previous: Decimal::ZERO,
            delta: Decimal::ZERO,
            percent: Decimal::ZERO,
            score: Decimal::ZERO,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none()
    }

    pub fn is_up(&self) -> bool {
        self.delta >= Decimal::ZERO
    }
}
