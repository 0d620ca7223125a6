// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use serde_json::json;

use crate::models::Expense;
use crate::store::Store;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => export_expenses(store, sub),
        _ => Ok(()),
    }
}

fn export_expenses(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let mut expenses: Vec<Expense> = store.expenses().to_vec();
    expenses.sort_by(|a, b| (a.date, a.timestamp).cmp(&(b.date, b.timestamp)));

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "category", "description", "amount", "currency"])?;
            for e in &expenses {
                wtr.write_record([
                    e.date.to_string(),
                    e.category.clone(),
                    e.description.clone(),
                    e.amount.to_string(),
                    e.currency.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for e in &expenses {
                items.push(json!({
                    "date": e.date.to_string(),
                    "category": e.category,
                    "description": e.description,
                    "amount": e.amount.to_string(),
                    "currency": e.currency,
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            bail!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported expenses to {}", out);
    Ok(())
}
