//! Rule registry and scoring
//!
//! The engine owns an ordered list of rules and sums their contributions.
//! Every rule is independent of the others, so the order only matters for
//! how breakdowns are reported.

use std::fmt;

use receipt_types::{Points, Receipt};
use tracing::{debug, instrument};

use crate::built_in::{
    afternoon_window::AfternoonWindowRule, description_length::DescriptionLengthRule,
    item_pairs::ItemPairsRule, odd_day::OddDayRule, quarter_multiple::QuarterMultipleRule,
    retailer_name::RetailerNameRule, round_dollar::RoundDollarRule,
};
use crate::{PointsRule, RuleContribution};

pub struct RuleEngine {
    rules: Vec<Box<dyn PointsRule>>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .finish()
    }
}

impl RuleEngine {
    /// Creates an engine with no rules; every receipt scores 0.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Creates an engine with the seven built-in rules.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(RetailerNameRule)
            .with_rule(RoundDollarRule)
            .with_rule(QuarterMultipleRule)
            .with_rule(ItemPairsRule)
            .with_rule(DescriptionLengthRule)
            .with_rule(OddDayRule)
            .with_rule(AfternoonWindowRule)
    }

    /// Appends a rule to the end of the scoring order.
    pub fn register(&mut self, rule: Box<dyn PointsRule>) {
        self.rules.push(rule);
    }

    /// Builder-style variant of [`RuleEngine::register`].
    pub fn with_rule<R: PointsRule + 'static>(mut self, rule: R) -> Self {
        self.register(Box::new(rule));
        self
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn PointsRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Total points for a receipt.
    pub fn calculate_points(&self, receipt: &Receipt) -> Points {
        self.rules.iter().fold(0, |total: Points, rule| total.saturating_add(rule.points(receipt)))
    }

    /// Per-rule contributions in scoring order. Their sum equals
    /// [`RuleEngine::calculate_points`].
    #[instrument(skip_all, fields(retailer = %receipt.retailer))]
    pub fn breakdown(&self, receipt: &Receipt) -> Vec<RuleContribution> {
        let contributions: Vec<RuleContribution> = self
            .rules
            .iter()
            .map(|rule| RuleContribution { rule: rule.name(), points: rule.points(receipt) })
            .collect();
        debug!(?contributions, "Computed points breakdown");
        contributions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_types::Item;

    struct FixedRule(Points);

    impl PointsRule for FixedRule {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn description(&self) -> &'static str {
            "always the same"
        }

        fn points(&self, _receipt: &Receipt) -> Points {
            self.0
        }
    }

    fn sample_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
            ],
            total: "18.74".to_string(),
        }
    }

    #[test]
    fn test_standard_engine_registers_seven_rules_in_order() {
        let engine = RuleEngine::standard();
        let names: Vec<_> = engine.rules().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec![
                "retailer_name",
                "round_dollar",
                "quarter_multiple",
                "item_pairs",
                "description_length",
                "odd_day",
                "afternoon_window",
            ]
        );
    }

    #[test]
    fn test_empty_engine_scores_zero() {
        let engine = RuleEngine::new();
        assert!(engine.is_empty());
        assert_eq!(engine.calculate_points(&sample_receipt()), 0);
    }

    #[test]
    fn test_custom_rules_are_added() {
        let mut engine = RuleEngine::new().with_rule(FixedRule(3));
        engine.register(Box::new(FixedRule(4)));
        assert_eq!(engine.len(), 2);
        assert_eq!(engine.calculate_points(&sample_receipt()), 7);
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let engine = RuleEngine::standard();
        let receipt = sample_receipt();
        let breakdown = engine.breakdown(&receipt);

        assert_eq!(breakdown.len(), 7);
        // 6 (retailer) + 5 (one pair) + 3 (pizza) + 6 (odd day)
        assert_eq!(breakdown.iter().map(|c| c.points).sum::<Points>(), 20);
        assert_eq!(engine.calculate_points(&receipt), 20);
    }

    #[test]
    fn test_total_saturates_instead_of_overflowing() {
        let engine = RuleEngine::new().with_rule(FixedRule(Points::MAX)).with_rule(FixedRule(1));
        assert_eq!(engine.calculate_points(&sample_receipt()), Points::MAX);
    }
}
