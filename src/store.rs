// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use crate::models::Expense;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Travelclip", "travelclip"));

/// File name of the persistence slot holding the serialized expense list.
pub const STORE_FILE: &str = "travel_expenses.json";

pub fn store_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join(STORE_FILE))
}

/// In-memory expense list backed by a single JSON file. The whole list is
/// rewritten after every mutation; there is no incremental persistence.
pub struct Store {
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl Store {
    pub fn open_or_seed() -> Result<Self> {
        Ok(Self::open_at(store_path()?))
    }

    /// Read the slot at `path`. Absent or unreadable content selects the seed
    /// dataset instead of erroring; nothing is written back until the first
    /// mutation.
    pub fn open_at(path: PathBuf) -> Self {
        let expenses = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Vec<Expense>>(&raw) {
                Ok(list) => list,
                Err(e) => {
                    warn!("expense store at {} is corrupt ({}); using seed data", path.display(), e);
                    seed_expenses()
                }
            },
            Err(_) => seed_expenses(),
        };
        Self { path, expenses }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Append one record and write the full list through to the slot.
    /// The caller guarantees id uniqueness.
    pub fn add(&mut self, expense: Expense) -> Result<()> {
        self.expenses.push(expense);
        self.persist()
    }

    /// Remove the first record whose id matches. Returns whether anything was
    /// removed; a missing id is a no-op, not an error. Writes through either way.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let removed = match self.expenses.iter().position(|e| e.id == id) {
            Some(idx) => {
                self.expenses.remove(idx);
                true
            }
            None => false,
        };
        self.persist()?;
        Ok(removed)
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.expenses)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Write expense store at {}", self.path.display()))
    }
}

fn expense(
    id: &str,
    amount: i64,
    currency: &str,
    category: &str,
    (y, m, d): (i32, u32, u32),
    description: &str,
    timestamp: i64,
) -> Expense {
    Expense {
        id: id.to_string(),
        amount: Decimal::from(amount),
        currency: currency.to_string(),
        category: category.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        description: description.to_string(),
        timestamp,
    }
}

/// Fixed example dataset shown when the slot is empty or unreadable.
pub fn seed_expenses() -> Vec<Expense> {
    vec![
        expense("1", 1200, "TWD", "transport", (2023, 10, 1), "High-speed rail ticket", 1_696_118_400_000),
        expense("2", 350, "TWD", "food", (2023, 10, 1), "Railway bento", 1_696_140_000_000),
        expense("3", 4500, "TWD", "stay", (2023, 10, 1), "Hotel, first night", 1_696_160_000_000),
        expense("4", 2000, "TWD", "shopping", (2023, 10, 2), "Souvenirs", 1_696_240_000_000),
    ]
}
