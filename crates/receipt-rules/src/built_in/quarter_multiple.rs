//! Quarter Multiple Rule
//!
//! 25 points when the total is an exact multiple of 0.25. Independent of the
//! round dollar rule, so a `.00` total earns both.

use receipt_types::{Points, Receipt};

use crate::PointsRule;
use crate::parse::parse_amount;

const QUARTER: f64 = 0.25;
const QUARTER_MULTIPLE_POINTS: Points = 25;

#[derive(Debug, Default)]
pub struct QuarterMultipleRule;

impl PointsRule for QuarterMultipleRule {
    fn name(&self) -> &'static str {
        "quarter_multiple"
    }

    fn description(&self) -> &'static str {
        "25 points if the total is a multiple of 0.25"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        match parse_amount(&receipt.total) {
            Some(total) if total % QUARTER == 0.0 => QUARTER_MULTIPLE_POINTS,
            _ => 0,
        }
    }
}
