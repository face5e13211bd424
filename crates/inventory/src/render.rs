//! Display projection: flat, pre-formatted fields for a renderer.
//!
//! The renderer decides the markup; the domain never parses these strings
//! back into numbers.

use crate::item::InventoryItem;

/// One table row, ready to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub stock: String,
    pub minimum: String,
    pub status: String,
    pub price: String,
}

impl DisplayRow {
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            sku: item.sku().as_str().to_string(),
            name: item.name().to_string(),
            category: item.category().label().to_string(),
            stock: format_amount(item.stock()),
            minimum: format_amount(item.minimum()),
            status: item.status().label().to_string(),
            price: format_clp(item.price()),
        }
    }
}

/// Plain numeric rendering: whole values without a decimal point, fractional
/// values as-is. Never inserts separators.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// es-CL price grouping as shown on the admin page: `150000` renders `150.000`.
pub fn format_clp(value: f64) -> String {
    // Prices are kept >= 0 by construction, so no sign handling.
    let digits = (value.round() as i64).to_string();
    let mut reversed = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push('.');
        }
        reversed.push(ch);
    }
    reversed.chars().rev().collect()
}
