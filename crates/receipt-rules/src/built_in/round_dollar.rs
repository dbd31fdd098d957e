//! Round Dollar Rule
//!
//! 50 points when the total ends in `.00`. This is a textual suffix check on
//! the total as submitted; `"5"` or `"5.0"` do not qualify.

use receipt_types::{Points, Receipt};

use crate::PointsRule;

const ROUND_DOLLAR_POINTS: Points = 50;

#[derive(Debug, Default)]
pub struct RoundDollarRule;

impl PointsRule for RoundDollarRule {
    fn name(&self) -> &'static str {
        "round_dollar"
    }

    fn description(&self) -> &'static str {
        "50 points if the total is a round dollar amount with no cents"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        if receipt.total.ends_with(".00") { ROUND_DOLLAR_POINTS } else { 0 }
    }
}
