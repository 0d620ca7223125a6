// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::collections::HashSet;

use crate::store::Store;
use crate::taxonomy;
use crate::utils::pretty_table;

pub fn handle(store: &Store) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Category ids outside the fixed table (display degrades to neutral)
    let mut seen_cats = HashSet::new();
    for e in store.expenses() {
        if taxonomy::category(&e.category).is_none() && seen_cats.insert(e.category.clone()) {
            rows.push(vec!["unknown_category".into(), e.category.clone()]);
        }
    }

    // 2) Currency codes outside the fixed table
    let mut seen_ccys = HashSet::new();
    for e in store.expenses() {
        if taxonomy::currency(&e.currency).is_none() && seen_ccys.insert(e.currency.clone()) {
            rows.push(vec!["unknown_currency".into(), e.currency.clone()]);
        }
    }

    // 3) Duplicate ids: the store trusts the caller, so surface violations here
    let mut seen_ids = HashSet::new();
    for e in store.expenses() {
        if !seen_ids.insert(e.id.as_str()) {
            rows.push(vec!["duplicate_id".into(), e.id.clone()]);
        }
    }

    // 4) Advisor credential
    if std::env::var("GEMINI_API_KEY").map(|v| v.is_empty()).unwrap_or(true) {
        rows.push(vec![
            "missing_api_key".into(),
            "set GEMINI_API_KEY to enable `travelclip analyze`".into(),
        ]);
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
