//! Item Pairs Rule
//!
//! 5 points for every complete pair of items; an odd trailing item earns
//! nothing.

use receipt_types::{Points, Receipt};

use crate::PointsRule;

const POINTS_PER_PAIR: Points = 5;

#[derive(Debug, Default)]
pub struct ItemPairsRule;

impl PointsRule for ItemPairsRule {
    fn name(&self) -> &'static str {
        "item_pairs"
    }

    fn description(&self) -> &'static str {
        "5 points for every two items on the receipt"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        (receipt.item_count() / 2) as Points * POINTS_PER_PAIR
    }
}
