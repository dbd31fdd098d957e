use serde::{Deserialize, Serialize};

/// Loyalty points awarded to a receipt.
pub type Points = i64;

/// One purchased line entry on a receipt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free-form description as printed on the receipt
    pub short_description: String,
    /// Decimal-formatted price, e.g. `"6.49"`
    pub price: String,
}

impl Item {
    /// Convenience constructor used heavily by tests and fixtures
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self { short_description: short_description.into(), price: price.into() }
    }
}

/// A purchase receipt as submitted by a client
///
/// All numeric and temporal fields are kept in their textual form. They are
/// interpreted only when a rule needs them, and a field that cannot be
/// interpreted simply makes that rule not apply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name
    pub retailer: String,
    /// Purchase date in `YYYY-MM-DD` form
    pub purchase_date: String,
    /// Purchase time in 24-hour `HH:MM` form
    pub purchase_time: String,
    /// Purchased items, in receipt order
    pub items: Vec<Item>,
    /// Decimal-formatted total amount paid
    pub total: String,
}

impl Receipt {
    /// Number of line items on the receipt
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
