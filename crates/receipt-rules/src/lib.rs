#![deny(warnings)]
//! The points rule engine for purchase receipts.
//!
//! This crate provides the `PointsRule` trait, the seven built-in rules and
//! the `RuleEngine` that sums their contributions. Scoring is pure: the same
//! receipt always yields the same total, and no input makes it fail. Fields
//! that cannot be interpreted (a total that is not a number, a date that is
//! not a calendar date) simply make the rules that need them not apply.

use std::sync::LazyLock;

use receipt_types::{Points, Receipt};
use serde::Serialize;

pub mod built_in;
pub mod engine;
pub mod parse;

pub use engine::RuleEngine;

/// A trait for all points rules.
/// Rules are stateless and thread-safe.
pub trait PointsRule: Send + Sync {
    /// Stable identifier used in logs and breakdowns.
    fn name(&self) -> &'static str;

    /// One-line, human readable explanation of the rule.
    fn description(&self) -> &'static str;

    /// Points this rule contributes for the given receipt.
    fn points(&self, receipt: &Receipt) -> Points;
}

/// Points contributed by a single rule for one receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleContribution {
    pub rule: &'static str,
    pub points: Points,
}

static STANDARD_ENGINE: LazyLock<RuleEngine> = LazyLock::new(RuleEngine::standard);

/// Scores a receipt with the standard rule set.
pub fn calculate_points(receipt: &Receipt) -> Points {
    STANDARD_ENGINE.calculate_points(receipt)
}

// Re-export rule implementations
pub use built_in::{
    afternoon_window::AfternoonWindowRule, description_length::DescriptionLengthRule,
    item_pairs::ItemPairsRule, odd_day::OddDayRule, quarter_multiple::QuarterMultipleRule,
    retailer_name::RetailerNameRule, round_dollar::RoundDollarRule,
};
