// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use moneytrend::aggregate::{
    NoteFilter, category_series, clamp_month, expense_series, month_totals, significant_movement,
};
use moneytrend::models::{MonthSeries, Transaction};
use rust_decimal::Decimal;

fn tx(date: &str, amount: i64, category: &str, note: Option<&str>) -> Transaction {
    Transaction {
        id: None,
        timestamp: Some(
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        ),
        amount: Decimal::from(amount),
        category: category.to_string(),
        note: note.map(str::to_string),
        owner_id: None,
    }
}

fn dec(n: i64) -> Decimal {
    Decimal::from(n)
}

#[test]
fn worked_example_march_dinner() {
    let txs = vec![
        tx("2024-03-05", 500, "晚餐", None),
        tx("2024-02-10", 300, "晚餐", None),
    ];

    let totals = month_totals(&txs, 2024, 2);
    assert_eq!(totals.expense, dec(500));
    assert_eq!(totals.income, Decimal::ZERO);

    let series = category_series(&txs, 2024, &["晚餐"], &NoteFilter::default());
    let mut expected = [Decimal::ZERO; 12];
    expected[1] = dec(300);
    expected[2] = dec(500);
    assert_eq!(series["晚餐"].values(), expected);

    let mv = significant_movement(&txs, 2024, 2);
    assert_eq!(mv.category.as_deref(), Some("晚餐"));
    assert_eq!(mv.current, dec(500));
    assert_eq!(mv.previous, dec(300));
    assert_eq!(mv.delta, dec(200));
    assert_eq!(mv.percent.round_dp(2), Decimal::new(6667, 2));
    assert_eq!(mv.score.round_dp(2), Decimal::new(6686667, 2));
    assert!(mv.is_up());
}

#[test]
fn month_totals_partition_by_sign() {
    let txs = vec![
        tx("2024-05-01", 120, "午餐", None),
        tx("2024-05-02", -3000, "薪水", None),
        tx("2024-05-03", 0, "午餐", None),
        tx("2024-05-04", 80, "交通", None),
        tx("2024-05-20", -200, "回饋", None),
        tx("2024-06-01", 999, "午餐", None),
        tx("2023-05-01", 999, "午餐", None),
    ];
    let totals = month_totals(&txs, 2024, 4);
    assert_eq!(totals.expense, dec(200));
    assert_eq!(totals.income, dec(3200));
    assert_eq!(totals.net(), dec(3000));
}

#[test]
fn month_totals_clamp_month_index() {
    let txs = vec![
        tx("2024-12-24", 40, "禮物", None),
        tx("2024-01-02", 10, "早餐", None),
    ];
    assert_eq!(month_totals(&txs, 2024, 14).expense, dec(40));
    assert_eq!(month_totals(&txs, 2024, -3).expense, dec(10));
    assert_eq!(clamp_month(12), 11);
    assert_eq!(clamp_month(-1), 0);
}

#[test]
fn unparseable_timestamps_are_skipped_everywhere() {
    let mut broken = tx("2024-03-01", 700, "購物", Some("mall"));
    broken.timestamp = None;
    let txs = vec![broken, tx("2024-03-02", 50, "購物", Some("mall"))];

    assert_eq!(month_totals(&txs, 2024, 2).expense, dec(50));
    assert_eq!(
        expense_series(&txs, 2024, &NoteFilter::default()).total(),
        dec(50)
    );
    assert_eq!(significant_movement(&txs, 2024, 2).current, dec(50));
}

#[test]
fn expense_series_ignores_income_and_other_years() {
    let txs = vec![
        tx("2024-01-15", 100, "晚餐", None),
        tx("2024-01-20", -500, "薪水", None),
        tx("2024-07-04", 250, "娛樂", None),
        tx("2025-01-01", 900, "晚餐", None),
    ];
    let s = expense_series(&txs, 2024, &NoteFilter::default());
    assert_eq!(s.value(0), dec(100));
    assert_eq!(s.value(6), dec(250));
    assert_eq!(s.total(), dec(350));
}

#[test]
fn note_filter_restricts_series() {
    let txs = vec![
        tx("2024-04-01", 60, "飲品", Some("coffee")),
        tx("2024-04-02", 40, "飲品", Some(" tea ")),
        tx("2024-04-03", 30, "飲品", None),
    ];
    let filter = NoteFilter::new(["coffee", "tea"]);
    assert_eq!(expense_series(&txs, 2024, &filter).value(3), dec(100));

    let only_coffee = NoteFilter::new(["coffee"]);
    let series = category_series(&txs, 2024, &["飲品"], &only_coffee);
    assert_eq!(series["飲品"].value(3), dec(60));

    let none = NoteFilter::new(Vec::<String>::new());
    assert!(none.is_empty());
    assert_eq!(expense_series(&txs, 2024, &none).value(3), dec(130));
}

#[test]
fn income_categories_accumulate_negative_amounts() {
    let txs = vec![
        tx("2024-03-10", -3000, "薪水", None),
        tx("2024-03-11", 100, "薪水", None),
        tx("2024-03-12", 200, "晚餐", None),
        tx("2024-03-13", -50, "晚餐", None),
    ];
    let series = category_series(&txs, 2024, &["薪水", "晚餐"], &NoteFilter::default());
    assert_eq!(series["薪水"].value(2), dec(3000));
    assert_eq!(series["晚餐"].value(2), dec(200));
}

#[test]
fn blank_category_reads_as_other_which_is_an_income_label() {
    let txs = vec![
        tx("2024-08-01", -70, "", None),
        tx("2024-08-02", 45, "  ", None),
    ];
    let series = category_series(&txs, 2024, &["其他"], &NoteFilter::default());
    assert_eq!(series["其他"].value(7), dec(70));

    let mv = significant_movement(&txs, 2024, 7);
    assert_eq!(mv.category.as_deref(), Some("其他"));
    assert_eq!(mv.current, dec(45));
}

#[test]
fn requested_category_without_activity_gets_empty_series() {
    let txs = vec![tx("2024-02-02", 10, "晚餐", None)];
    let series = category_series(&txs, 2024, &["醫療"], &NoteFilter::default());
    assert_eq!(series.len(), 1);
    assert_eq!(series["醫療"], MonthSeries::empty());
    assert!(category_series(&txs, 2024, &[] as &[&str], &NoteFilter::default()).is_empty());
}

#[test]
fn series_sum_matches_direct_filtered_sum() {
    let txs = vec![
        tx("2024-01-03", 15, "交通", None),
        tx("2024-01-30", 25, "交通", None),
        tx("2024-04-11", 35, "交通", None),
        tx("2024-09-09", -5, "交通", None),
        tx("2024-12-31", 45, "交通", None),
        tx("2023-12-31", 1000, "交通", None),
        tx("2024-06-06", 99, "午餐", None),
    ];
    let series = category_series(&txs, 2024, &["交通"], &NoteFilter::default());
    let direct: Decimal = txs
        .iter()
        .filter(|t| t.in_year(2024) && t.category == "交通" && t.amount > Decimal::ZERO)
        .map(|t| t.amount)
        .sum();
    assert_eq!(series["交通"].total(), direct);
    assert_eq!(direct, dec(120));
}

#[test]
fn movement_prefers_larger_relative_swing() {
    // Same absolute delta; A doubled, B grew 10%.
    let txs = vec![
        tx("2024-05-01", 100, "A", None),
        tx("2024-06-01", 200, "A", None),
        tx("2024-05-01", 1000, "B", None),
        tx("2024-06-01", 1100, "B", None),
    ];
    let mv = significant_movement(&txs, 2024, 5);
    assert_eq!(mv.category.as_deref(), Some("A"));
    assert_eq!(mv.percent, dec(100));
}

#[test]
fn movement_breaks_equal_percent_by_absolute_delta() {
    let txs = vec![
        tx("2024-05-01", 100, "A", None),
        tx("2024-06-01", 200, "A", None),
        tx("2024-05-01", 300, "B", None),
        tx("2024-06-01", 600, "B", None),
    ];
    let mv = significant_movement(&txs, 2024, 5);
    assert_eq!(mv.category.as_deref(), Some("B"));
    assert_eq!(mv.delta, dec(300));
    assert_eq!(mv.score, dec(100_300));
}

#[test]
fn movement_reports_drops_as_down() {
    let txs = vec![
        tx("2024-09-01", 500, "房租", None),
        tx("2024-10-01", 20, "點心", None),
        tx("2024-10-02", 20, "點心", None),
    ];
    // 房租 fell to zero (-100%, delta -500) vs 點心 appearing (+100%, delta 40).
    let mv = significant_movement(&txs, 2024, 9);
    assert_eq!(mv.category.as_deref(), Some("房租"));
    assert_eq!(mv.current, Decimal::ZERO);
    assert_eq!(mv.percent, dec(-100));
    assert!(!mv.is_up());
}

#[test]
fn exact_score_tie_keeps_first_seen_current_month_category() {
    let txs = vec![
        tx("2024-03-01", 50, "甲", None),
        tx("2024-03-02", 50, "乙", None),
    ];
    let mv = significant_movement(&txs, 2024, 2);
    assert_eq!(mv.category.as_deref(), Some("甲"));
}

#[test]
fn january_has_no_previous_month() {
    let txs = vec![
        tx("2024-01-10", 100, "A", None),
        tx("2023-12-20", 999, "A", None),
        tx("2023-12-21", 5000, "B", None),
    ];
    let mv = significant_movement(&txs, 2024, 0);
    assert_eq!(mv.category.as_deref(), Some("A"));
    assert_eq!(mv.previous, Decimal::ZERO);
    assert_eq!(mv.percent, dec(100));
    assert_eq!(mv.score, dec(100_100));
}

#[test]
fn income_only_month_has_no_movement() {
    let txs = vec![tx("2024-01-10", -800, "薪水", None)];
    let mv = significant_movement(&txs, 2024, 0);
    assert!(mv.is_empty());
}

#[test]
fn empty_input_yields_zeroes() {
    let txs: Vec<Transaction> = Vec::new();
    for month in 0..12 {
        let totals = month_totals(&txs, 2024, month);
        assert_eq!(totals.income, Decimal::ZERO);
        assert_eq!(totals.expense, Decimal::ZERO);

        let mv = significant_movement(&txs, 2024, month);
        assert!(mv.is_empty());
        assert_eq!(mv.current, Decimal::ZERO);
        assert_eq!(mv.delta, Decimal::ZERO);
        assert_eq!(mv.score, Decimal::ZERO);
    }
    let s = expense_series(&txs, 2024, &NoteFilter::default());
    assert!(!s.has_activity());
    assert_eq!(s.values(), [Decimal::ZERO; 12]);
    let pinned = category_series(&txs, 2024, &["晚餐"], &NoteFilter::default());
    assert_eq!(pinned["晚餐"].values(), [Decimal::ZERO; 12]);
}

fn tx_text(date: &str, amount: &str, category: &str) -> Transaction {
    let mut t = tx(date, 0, category, None);
    t.amount = amount.parse().unwrap();
    t
}

#[test]
fn tiny_previous_month_saturates_score_instead_of_panicking() {
    let txs = vec![
        tx_text("2024-02-10", "0.0000000001", "晚餐"),
        tx_text("2024-03-05", "10000000000000000", "晚餐"),
        tx("2024-03-06", 500, "交通", None),
    ];
    let mv = significant_movement(&txs, 2024, 2);
    assert_eq!(mv.category.as_deref(), Some("晚餐"));
    assert_eq!(mv.score, Decimal::MAX);
    assert!(mv.is_up());
}

#[test]
fn overflowing_amounts_are_skipped_from_sums() {
    let huge = "50000000000000000000000000000";
    let txs = vec![
        tx_text("2024-05-01", huge, "購物"),
        tx_text("2024-05-02", huge, "購物"),
        tx("2024-05-03", 10, "晚餐", None),
        tx_text("2024-05-04", &format!("-{huge}"), "薪水"),
        tx_text("2024-05-05", &format!("-{huge}"), "薪水"),
    ];
    let big: Decimal = huge.parse().unwrap();

    let totals = month_totals(&txs, 2024, 4);
    assert_eq!(totals.expense, big);
    assert_eq!(totals.income, big);

    let series = expense_series(&txs, 2024, &NoteFilter::default());
    assert_eq!(series.value(4), big);
    let by_cat = category_series(&txs, 2024, &["購物", "薪水"], &NoteFilter::default());
    assert_eq!(by_cat["購物"].value(4), big);
    assert_eq!(by_cat["薪水"].value(4), big);

    let mv = significant_movement(&txs, 2024, 4);
    assert_eq!(mv.category.as_deref(), Some("購物"));
    assert_eq!(mv.current, big);
}
