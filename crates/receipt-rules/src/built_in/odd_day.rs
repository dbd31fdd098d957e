//! Odd Day Rule

use receipt_types::{Points, Receipt};

use crate::PointsRule;
use crate::parse::parse_day_of_month;

const ODD_DAY_POINTS: Points = 6;

#[derive(Debug, Default)]
pub struct OddDayRule;

impl PointsRule for OddDayRule {
    fn name(&self) -> &'static str {
        "odd_day"
    }

    fn description(&self) -> &'static str {
        "6 points if the day in the purchase date is odd"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        match parse_day_of_month(&receipt.purchase_date) {
            Some(day) if day % 2 == 1 => ODD_DAY_POINTS,
            _ => 0,
        }
    }
}
