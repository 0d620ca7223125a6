// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::tempdir;

use travelclip::models::Expense;
use travelclip::store::{Store, STORE_FILE};
use travelclip::{cli, commands::expenses};

fn empty_store(dir: &tempfile::TempDir) -> Store {
    let path = dir.path().join(STORE_FILE);
    std::fs::write(&path, "[]").unwrap();
    Store::open_at(path)
}

fn expense(id: &str, date: &str, timestamp: i64) -> Expense {
    Expense {
        id: id.to_string(),
        amount: Decimal::from(100),
        currency: "TWD".to_string(),
        category: "food".to_string(),
        date: date.parse::<NaiveDate>().unwrap(),
        description: format!("meal {}", id),
        timestamp,
    }
}

fn expense_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["travelclip", "expense"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("expense", sub)) => sub.clone(),
        _ => panic!("no expense subcommand"),
    }
}

#[test]
fn list_is_newest_first_and_respects_limit() {
    let dir = tempdir().unwrap();
    let mut store = empty_store(&dir);
    store.add(expense("a", "2025-01-01", 1)).unwrap();
    store.add(expense("b", "2025-01-02", 3)).unwrap();
    store.add(expense("c", "2025-01-03", 2)).unwrap();

    let sub = expense_matches(&["list", "--limit", "2"]);
    if let Some(("list", list_m)) = sub.subcommand() {
        let rows = expenses::query_rows(&store, list_m).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "b");
        assert_eq!(rows[1].id, "c");
    } else {
        panic!("no list subcommand");
    }
}

#[test]
fn list_filters_by_exact_date() {
    let dir = tempdir().unwrap();
    let mut store = empty_store(&dir);
    store.add(expense("a", "2025-01-01", 1)).unwrap();
    store.add(expense("b", "2025-01-02", 2)).unwrap();

    let sub = expense_matches(&["list", "--date", "2025-01-02"]);
    if let Some(("list", list_m)) = sub.subcommand() {
        let rows = expenses::query_rows(&store, list_m).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "b");
    } else {
        panic!("no list subcommand");
    }
}

#[test]
fn add_validates_records_and_persists() {
    let dir = tempdir().unwrap();
    let mut store = empty_store(&dir);

    let sub = expense_matches(&[
        "add",
        "--amount",
        "350",
        "--desc",
        "Railway bento",
        "--category",
        "food",
        "--currency",
        "twd",
        "--date",
        "2023-10-01",
    ]);
    expenses::handle(&mut store, &sub).unwrap();

    let reloaded = Store::open_at(dir.path().join(STORE_FILE));
    assert_eq!(reloaded.expenses().len(), 1);
    let e = &reloaded.expenses()[0];
    assert_eq!(e.amount, Decimal::from(350));
    assert_eq!(e.currency, "TWD");
    assert_eq!(e.category, "food");
    assert_eq!(e.date.to_string(), "2023-10-01");
    assert_eq!(e.description, "Railway bento");
    assert!(!e.id.is_empty());
}

#[test]
fn add_rejects_bad_input_at_the_boundary() {
    let dir = tempdir().unwrap();
    let mut store = empty_store(&dir);

    let negative = expense_matches(&["add", "--amount", "-5", "--desc", "oops"]);
    assert!(expenses::handle(&mut store, &negative).is_err());

    let blank_desc = expense_matches(&["add", "--amount", "5", "--desc", "  "]);
    assert!(expenses::handle(&mut store, &blank_desc).is_err());

    let bad_currency =
        expense_matches(&["add", "--amount", "5", "--desc", "coffee", "--currency", "EUR"]);
    assert!(expenses::handle(&mut store, &bad_currency).is_err());

    let bad_amount = expense_matches(&["add", "--amount", "lots", "--desc", "coffee"]);
    assert!(expenses::handle(&mut store, &bad_amount).is_err());

    // no partial records entered the store
    assert!(store.expenses().is_empty());
    let reloaded = Store::open_at(dir.path().join(STORE_FILE));
    assert!(reloaded.expenses().is_empty());
}

#[test]
fn rm_missing_id_is_a_noop() {
    let dir = tempdir().unwrap();
    let mut store = empty_store(&dir);
    store.add(expense("a", "2025-01-01", 1)).unwrap();

    let sub = expense_matches(&["rm", "--id", "nope"]);
    expenses::handle(&mut store, &sub).unwrap();
    assert_eq!(store.expenses().len(), 1);

    let sub = expense_matches(&["rm", "--id", "a"]);
    expenses::handle(&mut store, &sub).unwrap();
    assert!(store.expenses().is_empty());
}
