// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub amount: Decimal,
    pub currency: String,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
    /// Creation instant in epoch milliseconds; display ordering only.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Good,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub advice: Vec<String>,
    #[serde(rename = "budgetStatus")]
    pub budget_status: BudgetStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryData {
    pub name: String,
    pub value: Decimal,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyData {
    pub date: NaiveDate,
    pub amount: Decimal,
}
