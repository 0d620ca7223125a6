// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use travelclip::aggregate;
use travelclip::models::Expense;

fn expense(id: &str, amount: i64, category: &str, date: &str, timestamp: i64) -> Expense {
    Expense {
        id: id.to_string(),
        amount: Decimal::from(amount),
        currency: "TWD".to_string(),
        category: category.to_string(),
        date: date.parse::<NaiveDate>().unwrap(),
        description: format!("{} purchase", category),
        timestamp,
    }
}

#[test]
fn worked_dashboard_example() {
    let expenses = vec![
        expense("1", 1200, "transport", "2023-10-01", 1),
        expense("2", 350, "food", "2023-10-01", 2),
    ];

    let totals = aggregate::category_totals(&expenses);
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].name, "Transport");
    assert_eq!(totals[0].value, Decimal::from(1200));
    assert_eq!(totals[1].name, "Food");
    assert_eq!(totals[1].value, Decimal::from(350));

    let daily = aggregate::daily_totals(&expenses);
    assert_eq!(daily.len(), 1);
    assert_eq!(daily[0].amount, Decimal::from(1550));

    let day = "2023-10-01".parse::<NaiveDate>().unwrap();
    let subset = aggregate::filter_by_date(&expenses, Some(day));
    assert_eq!(aggregate::total(&subset), Decimal::from(1550));
}

#[test]
fn category_totals_cover_full_sum() {
    let expenses = vec![
        expense("1", 100, "food", "2023-10-01", 1),
        expense("2", 250, "transport", "2023-10-02", 2),
        expense("3", 50, "food", "2023-10-03", 3),
        expense("4", 700, "stay", "2023-10-03", 4),
    ];
    let totals = aggregate::category_totals(&expenses);
    let sum: Decimal = totals.iter().map(|c| c.value).sum();
    assert_eq!(sum, aggregate::total(&expenses));
    // first-seen order
    assert_eq!(totals[0].name, "Food");
    assert_eq!(totals[0].value, Decimal::from(150));
}

#[test]
fn daily_totals_ascend_and_cover_full_sum() {
    let expenses = vec![
        expense("1", 30, "food", "2023-10-03", 1),
        expense("2", 10, "food", "2023-10-01", 2),
        expense("3", 20, "food", "2023-10-03", 3),
        expense("4", 5, "other", "2023-10-02", 4),
    ];
    let daily = aggregate::daily_totals(&expenses);
    let dates: Vec<String> = daily.iter().map(|d| d.date.to_string()).collect();
    assert_eq!(dates, vec!["2023-10-01", "2023-10-02", "2023-10-03"]);
    assert!(daily.windows(2).all(|w| w[0].date <= w[1].date));
    let sum: Decimal = daily.iter().map(|d| d.amount).sum();
    assert_eq!(sum, aggregate::total(&expenses));
    assert_eq!(daily[2].amount, Decimal::from(50));
}

#[test]
fn zero_total_categories_are_excluded() {
    let expenses = vec![
        expense("1", 0, "food", "2023-10-01", 1),
        expense("2", 80, "transport", "2023-10-01", 2),
    ];
    let totals = aggregate::category_totals(&expenses);
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].name, "Transport");
}

#[test]
fn unknown_category_keeps_raw_id_with_neutral_color() {
    let expenses = vec![
        expense("1", 40, "snacks", "2023-10-01", 1),
        expense("2", 60, "food", "2023-10-01", 2),
    ];
    let totals = aggregate::category_totals(&expenses);
    assert_eq!(totals[0].name, "snacks");
    assert_eq!(totals[0].color, "#cccccc");
    assert_eq!(totals[1].name, "Food");
    assert_eq!(totals[1].color, "#f87171");
}

#[test]
fn filter_without_date_is_identity() {
    let expenses = vec![
        expense("1", 100, "food", "2023-10-01", 1),
        expense("2", 200, "stay", "2023-10-02", 2),
    ];
    let all = aggregate::filter_by_date(&expenses, None);
    assert_eq!(all, expenses);
}

#[test]
fn filter_by_date_is_exact() {
    let expenses = vec![
        expense("1", 100, "food", "2023-10-01", 1),
        expense("2", 200, "stay", "2023-10-02", 2),
        expense("3", 300, "food", "2023-10-01", 3),
    ];
    let day = "2023-10-01".parse::<NaiveDate>().unwrap();
    let subset = aggregate::filter_by_date(&expenses, Some(day));
    assert_eq!(subset.len(), 2);
    assert!(subset.iter().all(|e| e.date == day));
    assert_eq!(aggregate::total(&subset), Decimal::from(400));
}

#[test]
fn empty_input_aggregates_to_nothing() {
    assert!(aggregate::category_totals(&[]).is_empty());
    assert!(aggregate::daily_totals(&[]).is_empty());
    assert!(aggregate::filter_by_date(&[], None).is_empty());
    assert_eq!(aggregate::total(&[]), Decimal::ZERO);
}

#[test]
fn single_entry_aggregates_to_its_amount() {
    let expenses = vec![expense("1", 4500, "stay", "2023-10-01", 1)];
    let totals = aggregate::category_totals(&expenses);
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].value, Decimal::from(4500));
    assert_eq!(aggregate::total(&expenses), Decimal::from(4500));
}
