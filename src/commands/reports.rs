// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use crate::aggregate;
use crate::store::Store;
use crate::utils::{maybe_print_json, parse_date, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("by-category", sub)) => by_category(store, sub)?,
        Some(("daily", sub)) => daily(store, sub)?,
        Some(("summary", sub)) => summary(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn date_filter(sub: &clap::ArgMatches) -> Result<Option<NaiveDate>> {
    match sub.get_one::<String>("date") {
        Some(s) => Ok(Some(parse_date(s)?)),
        None => Ok(None),
    }
}

fn by_category(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let subset = aggregate::filter_by_date(store.expenses(), date_filter(sub)?);
    let totals = aggregate::category_totals(&subset);
    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        let rows: Vec<Vec<String>> = totals
            .iter()
            .map(|c| vec![c.name.clone(), format!("{:.2}", c.value)])
            .collect();
        println!("{}", pretty_table(&["Category", "Amount"], rows));
    }
    Ok(())
}

fn daily(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    // Trend always covers the full history, even when other views are date-filtered.
    let totals = aggregate::daily_totals(store.expenses());
    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        let rows: Vec<Vec<String>> = totals
            .iter()
            .map(|d| vec![d.date.to_string(), format!("{:.2}", d.amount)])
            .collect();
        println!("{}", pretty_table(&["Date", "Amount"], rows));
    }
    Ok(())
}

fn summary(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let filter = date_filter(sub)?;
    let subset = aggregate::filter_by_date(store.expenses(), filter);
    let total = aggregate::total(&subset);
    let scope = filter.map_or("all-time".to_string(), |d| d.to_string());
    if json_flag {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "scope": scope,
                "entries": subset.len(),
                "total": total.to_string(),
            }))?
        );
    } else {
        let rows = vec![vec![scope, subset.len().to_string(), format!("{:.2}", total)]];
        println!("{}", pretty_table(&["Scope", "Entries", "Total"], rows));
    }
    Ok(())
}
