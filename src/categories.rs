// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Static category reference tables.

use crate::models::CategoryDefinition;

pub const OTHER_CATEGORY: &str = "其他";

const DEFAULT_ICON: &str = "tag-outline";
const DEFAULT_COLOR: &str = "#BDBDBD";

const fn def(
    key: &'static str,
    icon: &'static str,
    color: &'static str,
) -> CategoryDefinition<'static> {
    CategoryDefinition { key, icon, color }
}

pub static EXPENSE_CATEGORIES: [CategoryDefinition<'static>; 22] = [
    def("晚餐", "silverware-fork-knife", "#F2C94C"),
    def("午餐", "silverware-fork-knife", "#F2C94C"),
    def("點心", "cupcake", "#F2994A"),
    def("購物", "shopping", "#B39DDB"),
    def("交通", "bus", "#6CB6FF"),
    def("飲品", "coffee", "#87CBB9"),
    def("早餐", "bread-slice", "#F2C94C"),
    def("洗衣服", "tshirt-crew-outline", "#9E9E9E"),
    def("娛樂", "gamepad-variant", "#F9A825"),
    def("日用品", "cart-outline", "#8D6E63"),
    def("書費", "book-open-variant", "#90CAF9"),
    def("社交", "account-group", "#4DB6AC"),
    def("水電費", "water", "#64B5F6"),
    def("學費", "school-outline", "#7986CB"),
    def("房租", "home-city-outline", "#AED581"),
    def("直播", "cellphone-play", "#90CAF9"),
    def("機車", "motorbike", "#B0BEC5"),
    def("信用卡", "credit-card-outline", "#90A4AE"),
    def("酒類", "glass-cocktail", "#CE93D8"),
    def("醫療", "medical-bag", "#EF9A9A"),
    def("禮物", "gift-outline", "#FFCC80"),
    def(OTHER_CATEGORY, "dots-horizontal-circle-outline", "#BDBDBD"),
];

pub static INCOME_CATEGORIES: [CategoryDefinition<'static>; 9] = [
    def("零用錢", "sack", "#90CAF9"),
    def("薪水", "wallet-outline", "#6CB6FF"),
    def("回饋", "cash-refund", "#87CBB9"),
    def("交易", "swap-horizontal", "#B0BEC5"),
    def("獎金", "gift-outline", "#FFD54F"),
    def("股息", "chart-line", "#AED581"),
    def("投資", "finance", "#81C784"),
    def(OTHER_CATEGORY, "dots-horizontal-circle-outline", "#BDBDBD"),
    def("租金", "home-currency-usd", "#FFCC80"),
];

/// Income categories accumulate negative amounts; everything else positive ones.
///
/// "其他" sits in both tables and therefore classifies as income.
pub fn is_income_category(label: &str) -> bool {
    INCOME_CATEGORIES.iter().any(|c| c.key == label)
}

/// Expense table first, then income; unknown labels get the default entry
/// keyed by the label itself.
pub fn lookup(label: &str) -> CategoryDefinition<'_> {
    match EXPENSE_CATEGORIES
        .iter()
        .chain(INCOME_CATEGORIES.iter())
        .find(|c| c.key == label)
    {
        Some(hit) => *hit,
        None => CategoryDefinition {
            key: label,
            icon: DEFAULT_ICON,
            color: DEFAULT_COLOR,
        },
    }
}
