use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::model::{Trade, TradeFilter};
use crate::seed::seed_trades;

/// Read-only, in-memory collection of trades.
///
/// Populated once on construction and never mutated afterwards, so a shared
/// reference can be queried from any number of tasks without locking.
#[derive(Debug, Clone)]
pub struct TradeStore {
    trades: Vec<Trade>,
}

impl TradeStore {
    pub fn new(trades: Vec<Trade>) -> Self {
        TradeStore { trades }
    }

    pub fn seeded() -> Self {
        TradeStore::new(seed_trades())
    }

    /// Loads a JSON array of trades from `path`.
    pub fn from_json_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let trades: Vec<Trade> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(TradeStore::new(trades))
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    pub fn list_all(&self) -> &[Trade] {
        &self.trades
    }

    /// First trade whose id equals `trade_id` exactly.
    pub fn get_by_id(&self, trade_id: &str) -> StoreResult<&Trade> {
        self.trades
            .iter()
            .find(|t| t.trade_id.as_deref() == Some(trade_id))
            .ok_or_else(|| StoreError::TradeNotFound(trade_id.to_string()))
    }

    /// Case-insensitive substring search over counterparty, instrument id,
    /// instrument name and trader. An empty result is an error.
    pub fn search(&self, query: &str) -> StoreResult<Vec<&Trade>> {
        let needle = query.to_lowercase();

        let matched = self
            .trades
            .iter()
            .filter(|t| {
                t.searchable_fields().iter().any(|(field, value)| match value {
                    Some(v) if v.to_lowercase().contains(&needle) => {
                        debug!(query, field, "search hit");
                        true
                    }
                    _ => false,
                })
            })
            .collect::<Vec<_>>();

        if matched.is_empty() {
            return Err(StoreError::NoSearchMatches(query.to_string()));
        }
        Ok(matched)
    }

    /// Trades satisfying every criterion set in `filter`. Never fails; no
    /// match is an empty list.
    pub fn filter(&self, filter: &TradeFilter) -> Vec<&Trade> {
        let mut filtered = self.trades.iter().collect::<Vec<_>>();
        for predicate in filter.predicates() {
            filtered.retain(|t| predicate(*t));
        }
        filtered
    }
}

impl Default for TradeStore {
    fn default() -> Self {
        TradeStore::seeded()
    }
}
