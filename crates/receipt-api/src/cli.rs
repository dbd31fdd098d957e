//! Offline commands of the `receipts` binary
//!
//! Both commands render to a `String` so the binary only has to print.

use std::fs;
use std::path::Path;

use anyhow::Context;
use receipt_core::{Points, Receipt, RuleEngine};

use crate::types::ProcessReceiptRequest;

/// Names and descriptions of every rule registered in `engine`, in scoring order.
pub fn explain(engine: &RuleEngine) -> String {
    let mut out = String::from("Receipt Points - Rules\n");
    out.push_str("Points for a receipt are the sum of these independent rules:\n\n");
    for rule in engine.rules() {
        out.push_str(&format!("  {:<20} {}\n", rule.name(), rule.description()));
    }
    out
}

/// Per-rule breakdown followed by the total.
pub fn score_report(engine: &RuleEngine, receipt: &Receipt) -> String {
    let breakdown = engine.breakdown(receipt);
    let mut out = String::new();
    for contribution in &breakdown {
        out.push_str(&format!("  {:<20} {:>6}\n", contribution.rule, contribution.points));
    }
    let total = breakdown.iter().map(|c| c.points).fold(0, Points::saturating_add);
    out.push_str(&format!("  {:<20} {:>6}\n", "total", total));
    out
}

/// Read a receipt JSON file, check it the way the HTTP API does and score it
/// with the standard rules.
pub fn score_file(file: &Path) -> anyhow::Result<String> {
    let contents =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let request: ProcessReceiptRequest = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a receipt", file.display()))?;
    let receipt = request.into_receipt()?;
    Ok(score_report(&RuleEngine::standard(), &receipt))
}
