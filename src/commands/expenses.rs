// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use chrono::Utc;
use serde::Serialize;

use crate::models::Expense;
use crate::store::Store;
use crate::taxonomy;
use crate::utils::{maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    if amount.is_sign_negative() {
        bail!("Amount must not be negative");
    }
    let description = sub.get_one::<String>("desc").unwrap().trim().to_string();
    if description.is_empty() {
        bail!("Description must not be empty");
    }
    let currency = sub.get_one::<String>("currency").unwrap().to_uppercase();
    if taxonomy::currency(&currency).is_none() {
        bail!(
            "Unknown currency '{}' (expected one of {})",
            currency,
            taxonomy::CURRENCIES.map(|c| c.code).join(", ")
        );
    }
    let category = sub.get_one::<String>("category").unwrap().to_string();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => Utc::now().date_naive(),
    };

    let expense = Expense {
        id: uuid::Uuid::new_v4().to_string(),
        amount,
        currency: currency.clone(),
        category,
        date,
        description: description.clone(),
        timestamp: Utc::now().timestamp_millis(),
    };
    store.add(expense)?;
    println!("Recorded {} {} on {} for '{}'", amount, currency, date, description);
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.category.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.currency.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Category", "Description", "Amount", "CCY"], rows)
        );
    }
    Ok(())
}

fn rm(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if store.delete(id)? {
        println!("Removed expense {}", id);
    } else {
        println!("No expense with id {}", id);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct ExpenseRow {
    pub id: String,
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
    pub currency: String,
}

/// Rows for `expense list`: newest first, optionally restricted to one date.
pub fn query_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<ExpenseRow>> {
    let filter = match sub.get_one::<String>("date") {
        Some(s) => Some(parse_date(s)?),
        None => None,
    };
    let mut expenses = crate::aggregate::filter_by_date(store.expenses(), filter);
    expenses.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        expenses.truncate(*limit);
    }

    Ok(expenses
        .into_iter()
        .map(|e| {
            let category = taxonomy::category_or_other(&e.category);
            ExpenseRow {
                id: e.id,
                date: e.date.to_string(),
                category: format!("{} {}", category.icon, category.name),
                description: e.description,
                amount: e.amount.to_string(),
                currency: e.currency,
            }
        })
        .collect())
}
