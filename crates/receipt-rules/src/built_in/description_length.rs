//! Description Length Rule
//!
//! For every item whose trimmed description length is a multiple of 3, the
//! price is multiplied by 0.2 and rounded up to the nearest integer. An empty
//! description has length 0 and therefore qualifies.
//!
//! Length is measured in bytes, matching how the descriptions are counted
//! everywhere else in the service.

use receipt_types::{Item, Points, Receipt};

use crate::PointsRule;
use crate::parse::parse_amount;

const PRICE_MULTIPLIER: f64 = 0.2;

#[derive(Debug, Default)]
pub struct DescriptionLengthRule;

impl DescriptionLengthRule {
    fn item_points(item: &Item) -> Points {
        if item.short_description.trim().len() % 3 != 0 {
            return 0;
        }
        parse_amount(&item.price).map_or(0, |price| (price * PRICE_MULTIPLIER).ceil() as Points)
    }
}

impl PointsRule for DescriptionLengthRule {
    fn name(&self) -> &'static str {
        "description_length"
    }

    fn description(&self) -> &'static str {
        "ceil(price * 0.2) points for each item whose trimmed description length is a multiple of 3"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        receipt.items.iter().map(Self::item_points).fold(0, Points::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_points() {
        // 18 chars, 12.25 * 0.2 = 2.45 -> 3
        assert_eq!(DescriptionLengthRule::item_points(&Item::new("Emils Cheese Pizza", "12.25")), 3);
        // surrounding whitespace is trimmed to 24 chars, 12.00 * 0.2 = 2.4 -> 3
        assert_eq!(
            DescriptionLengthRule::item_points(&Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")),
            3
        );
        // 17 chars
        assert_eq!(DescriptionLengthRule::item_points(&Item::new("Mountain Dew 12PK", "6.49")), 0);
        // exact products are not bumped: 5.00 * 0.2 = 1.0 -> 1
        assert_eq!(DescriptionLengthRule::item_points(&Item::new("Gum", "5.00")), 1);
    }

    #[test]
    fn test_empty_description_qualifies() {
        assert_eq!(DescriptionLengthRule::item_points(&Item::new("   ", "10.00")), 2);
    }

    #[test]
    fn test_unparseable_price_scores_nothing() {
        assert_eq!(DescriptionLengthRule::item_points(&Item::new("Gum", "free")), 0);
    }

    #[test]
    fn test_huge_prices_saturate_instead_of_overflowing() {
        let receipt = Receipt {
            retailer: "Shop".into(),
            purchase_date: "2022-01-02".into(),
            purchase_time: "09:00".into(),
            items: vec![Item::new("Tea", "1e300"), Item::new("Gum", "1e300")],
            total: "1.01".into(),
        };
        assert_eq!(DescriptionLengthRule.points(&receipt), Points::MAX);
    }
}
