use std::sync::Arc;

use dashmap::DashMap;
use receipt_rules::RuleEngine;
use receipt_types::{Points, Receipt};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Thread-safe, append-only map from receipt id to its score
///
/// Every submitted receipt gets a fresh random (v4) UUID, so two submissions
/// of identical receipts are stored under different ids. Entries are never
/// updated or removed for the lifetime of the store.
#[derive(Debug)]
pub struct ScoreStore {
    engine: Arc<RuleEngine>,
    scores: DashMap<String, Points>,
}

impl Default for ScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreStore {
    /// Create a store that scores with the standard rule set
    pub fn new() -> Self {
        Self::with_engine(Arc::new(RuleEngine::standard()))
    }

    /// Create a store that scores with the given engine
    pub fn with_engine(engine: Arc<RuleEngine>) -> Self {
        Self { engine, scores: DashMap::new() }
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// Score a receipt and store the result under a newly generated id
    #[instrument(skip_all, fields(retailer = %receipt.retailer, items = receipt.items.len()))]
    pub fn submit(&self, receipt: &Receipt) -> String {
        let points = self.engine.calculate_points(receipt);
        let id = Uuid::new_v4().to_string();

        self.scores.insert(id.clone(), points);
        info!(receipt_id = %id, points, "Receipt processed");
        id
    }

    /// Points stored for `id`, or `None` if the id was never issued
    pub fn lookup(&self, id: &str) -> Option<Points> {
        let points = self.scores.get(id).map(|entry| *entry.value());
        if points.is_none() {
            debug!(receipt_id = %id, "Receipt id not found");
        }
        points
    }

    /// Number of receipts stored
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
