//! Afternoon Window Rule
//!
//! 10 points for purchases from 14:00 up to, but not including, 16:00.

use std::ops::Range;

use receipt_types::{Points, Receipt};

use crate::PointsRule;
use crate::parse::parse_hour;

const AFTERNOON_HOURS: Range<u32> = 14..16;
const AFTERNOON_POINTS: Points = 10;

#[derive(Debug, Default)]
pub struct AfternoonWindowRule;

impl PointsRule for AfternoonWindowRule {
    fn name(&self) -> &'static str {
        "afternoon_window"
    }

    fn description(&self) -> &'static str {
        "10 points if the time of purchase is after 2:00pm and before 4:00pm"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        match parse_hour(&receipt.purchase_time) {
            Some(hour) if AFTERNOON_HOURS.contains(&hour) => AFTERNOON_POINTS,
            _ => 0,
        }
    }
}
