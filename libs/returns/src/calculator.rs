//! Actor return aggregation.

use std::sync::Arc;

use marquee_dataset::{normalize_name, DatasetStore, MovieId, MovieReturn};
use serde::Serialize;
use tracing::debug;

use crate::error::ReturnError;
use crate::format::{format_percent, round2};

/// Raw aggregates over an actor's appearances, before formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStats {
    /// Appearances that resolved to a return record.
    pub total_appearances: usize,

    /// Sum of known return ratios. Missing returns contribute nothing.
    pub total_return: f64,

    /// Appearances with a strictly positive return.
    pub valid_appearances: usize,

    /// Mean of the positive returns, rounded to two decimals then scaled to a
    /// percentage. Zero when there are no positive returns.
    pub average_return_pct: f64,

    /// Mean over every appearance as a percentage, rounded to two decimals.
    /// Zero when no appearance resolved.
    pub average_return_with_zeros_pct: f64,

    /// Movies whose return is exactly zero, in record order.
    pub zero_return_movie_ids: Vec<MovieId>,
}

impl ReturnStats {
    /// Aggregate a set of resolved appearances.
    pub fn from_appearances(appearances: &[&MovieReturn]) -> Self {
        let total_appearances = appearances.len();
        // Folding from +0.0 keeps an empty total positive; `sum` starts at -0.0.
        let total_return = appearances
            .iter()
            .filter_map(|r| r.return_ratio)
            .fold(0.0, |total, ratio| total + ratio);

        let valid: Vec<f64> = appearances
            .iter()
            .filter_map(|r| r.return_ratio)
            .filter(|ratio| *ratio > 0.0)
            .collect();
        let valid_appearances = valid.len();

        // Rounding happens before scaling.
        let average_return_pct = if valid_appearances > 0 {
            round2(valid.iter().sum::<f64>() / valid_appearances as f64) * 100.0
        } else {
            0.0
        };

        let average_return_with_zeros_pct = if total_appearances > 0 {
            round2(total_return / total_appearances as f64 * 100.0)
        } else {
            0.0
        };

        let zero_return_movie_ids = appearances
            .iter()
            .filter(|r| r.return_ratio == Some(0.0))
            .map(|r| r.movie_id)
            .collect();

        Self {
            total_appearances,
            total_return,
            valid_appearances,
            average_return_pct,
            average_return_with_zeros_pct,
            zero_return_movie_ids,
        }
    }

    pub fn zero_return_count(&self) -> usize {
        self.zero_return_movie_ids.len()
    }
}

/// Formatted return summary for one actor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorReturnSummary {
    /// The actor name exactly as supplied by the caller.
    pub actor: String,
    pub total_appearances: usize,
    pub valid_appearances: usize,
    pub zero_return_count: usize,
    pub zero_return_movie_ids: Vec<MovieId>,
    pub total_return: String,
    pub average_return: String,
    pub average_return_with_zeros: String,
}

impl ActorReturnSummary {
    fn new(actor: &str, stats: ReturnStats) -> Self {
        Self {
            actor: actor.to_string(),
            total_appearances: stats.total_appearances,
            valid_appearances: stats.valid_appearances,
            zero_return_count: stats.zero_return_count(),
            total_return: format_percent(stats.total_return * 100.0),
            average_return: format_percent(stats.average_return_pct),
            average_return_with_zeros: format_percent(stats.average_return_with_zeros_pct),
            zero_return_movie_ids: stats.zero_return_movie_ids,
        }
    }
}

/// Computes return summaries against a shared, immutable store.
#[derive(Debug, Clone)]
pub struct ActorReturnCalculator {
    store: Arc<DatasetStore>,
}

impl ActorReturnCalculator {
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// Compute the return summary for `name`.
    ///
    /// Matching is case-insensitive. An actor whose movies have no return
    /// records gets a zero-valued summary rather than an error.
    pub fn compute(&self, name: &str) -> Result<ActorReturnSummary, ReturnError> {
        if name.trim().is_empty() {
            return Err(ReturnError::InvalidInput);
        }

        let key = normalize_name(name);
        let movie_ids = self.store.movies_for_actor(&key);
        if movie_ids.is_empty() {
            debug!(actor = %name, "Actor not found");
            return Err(ReturnError::NotFound {
                actor: name.to_string(),
            });
        }

        let appearances = self.store.returns_for_movies(&movie_ids);
        if appearances.is_empty() {
            debug!(actor = %name, movies = movie_ids.len(), "No return records for actor's movies");
        }

        let stats = ReturnStats::from_appearances(&appearances);
        debug!(
            actor = %name,
            movies = movie_ids.len(),
            appearances = stats.total_appearances,
            valid = stats.valid_appearances,
            zero = stats.zero_return_count(),
            "Computed actor returns"
        );

        Ok(ActorReturnSummary::new(name, stats))
    }
}
