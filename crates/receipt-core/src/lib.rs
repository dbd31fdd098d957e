#![deny(warnings)]
#![allow(missing_docs)]
//! Core functionality for the receipt points service.
//!
//! This crate ties the rule engine to an in-memory, append-only score store.
//! A store is an explicit value: build one at start-up, share it behind an
//! `Arc`, and build a fresh one per test.

/// Identifier-keyed storage of computed scores
pub mod score_store;

pub use receipt_rules::{PointsRule, RuleContribution, RuleEngine, calculate_points};
pub use receipt_types::{Item, Points, Receipt};
pub use score_store::ScoreStore;
