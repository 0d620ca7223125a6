// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::advisor::AdvisorClient;
use crate::models::BudgetStatus;
use crate::store::Store;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let base_currency = m.get_one::<String>("currency").unwrap().to_uppercase();
    let client = AdvisorClient::from_env()?;

    let expenses = store.expenses();
    if !expenses.is_empty() {
        println!("Analyzing {} expenses with {}...", expenses.len(), client.model());
    }
    let result = client.analyze(expenses, &base_currency);

    let status = match result.budget_status {
        BudgetStatus::Good => "Budget on track",
        BudgetStatus::Warning => "Watch your spending",
        BudgetStatus::Critical => "Spending is high",
    };
    println!("[{}]", status);
    println!("{}", result.summary);
    if !result.advice.is_empty() {
        println!();
        for (i, tip) in result.advice.iter().enumerate() {
            println!("{}. {}", i + 1, tip);
        }
    }
    Ok(())
}
