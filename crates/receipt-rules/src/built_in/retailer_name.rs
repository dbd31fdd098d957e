//! Retailer Name Rule
//!
//! One point for every ASCII letter or digit in the retailer name. Spaces,
//! punctuation and non-ASCII characters score nothing.

use receipt_types::{Points, Receipt};

use crate::PointsRule;

#[derive(Debug, Default)]
pub struct RetailerNameRule;

impl PointsRule for RetailerNameRule {
    fn name(&self) -> &'static str {
        "retailer_name"
    }

    fn description(&self) -> &'static str {
        "1 point for every alphanumeric character in the retailer name"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        receipt.retailer.chars().filter(char::is_ascii_alphanumeric).count() as Points
    }
}
