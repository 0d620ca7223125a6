// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

use crate::models::{CategoryData, DailyData, Expense};
use crate::taxonomy;

/// Per-category totals in first-seen order. Amounts are summed as recorded:
/// mixed currencies are treated as numerically additive, with no conversion.
/// Categories whose total is exactly zero are excluded. Ids not in the
/// category table keep the raw id as name with the neutral color.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryData> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    for e in expenses {
        if !totals.contains_key(e.category.as_str()) {
            order.push(e.category.as_str());
        }
        *totals.entry(e.category.as_str()).or_insert(Decimal::ZERO) += e.amount;
    }
    order
        .into_iter()
        .filter_map(|id| {
            let value = totals[id];
            if value.is_zero() {
                return None;
            }
            let (name, color) = match taxonomy::category(id) {
                Some(c) => (c.name.to_string(), c.color.to_string()),
                None => (id.to_string(), taxonomy::NEUTRAL_COLOR.to_string()),
            };
            Some(CategoryData { name, value, color })
        })
        .collect()
}

/// Per-day totals over the full history, ascending by calendar date.
pub fn daily_totals(expenses: &[Expense]) -> Vec<DailyData> {
    let mut map: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for e in expenses {
        *map.entry(e.date).or_insert(Decimal::ZERO) += e.amount;
    }
    map.into_iter()
        .map(|(date, amount)| DailyData { date, amount })
        .collect()
}

/// Subset whose date equals `date` exactly; `None` means all-time and returns
/// the list unchanged.
pub fn filter_by_date(expenses: &[Expense], date: Option<NaiveDate>) -> Vec<Expense> {
    match date {
        None => expenses.to_vec(),
        Some(d) => expenses.iter().filter(|e| e.date == d).cloned().collect(),
    }
}

/// Sum of amounts over a subset; same mixed-currency limitation as
/// [`category_totals`].
pub fn total(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|e| e.amount).sum()
}
