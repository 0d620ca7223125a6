// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const CURRENCIES: [Currency; 4] = [
    Currency { code: "TWD", symbol: "NT$", name: "New Taiwan Dollar" },
    Currency { code: "JPY", symbol: "¥", name: "Japanese Yen" },
    Currency { code: "USD", symbol: "$", name: "US Dollar" },
    Currency { code: "KRW", symbol: "₩", name: "South Korean Won" },
];

pub const CATEGORIES: [Category; 6] = [
    Category { id: "food", name: "Food", icon: "🍽️", color: "#f87171" },
    Category { id: "transport", name: "Transport", icon: "🚆", color: "#60a5fa" },
    Category { id: "stay", name: "Stay", icon: "🏨", color: "#818cf8" },
    Category { id: "shopping", name: "Shopping", icon: "🛍️", color: "#f472b6" },
    Category { id: "tickets", name: "Tickets", icon: "🎫", color: "#fbbf24" },
    Category { id: "other", name: "Other", icon: "📦", color: "#94a3b8" },
];

/// Color used for category ids that are not in the table.
pub const NEUTRAL_COLOR: &str = "#cccccc";

pub fn currency(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|c| c.code == code)
}

pub fn category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Category for list display; unknown ids fall back to "other" styling.
pub fn category_or_other(id: &str) -> &'static Category {
    category(id).unwrap_or(&CATEGORIES[5])
}
