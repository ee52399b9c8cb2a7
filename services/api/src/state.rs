//! Application state shared across request handlers.

use std::sync::Arc;

use marquee_dataset::DatasetStore;
use marquee_returns::ActorReturnCalculator;

/// Shared application state.
///
/// This is passed to all request handlers via Axum's state extractor.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    calculator: ActorReturnCalculator,
    public_url: String,
}

impl AppState {
    /// Create a new application state over a loaded dataset.
    pub fn new(store: Arc<DatasetStore>, public_url: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                calculator: ActorReturnCalculator::new(store),
                public_url: public_url.into(),
            }),
        }
    }

    pub fn calculator(&self) -> &ActorReturnCalculator {
        &self.inner.calculator
    }

    pub fn store(&self) -> &DatasetStore {
        self.inner.calculator.store()
    }

    /// Base URL used when rendering example links.
    pub fn public_url(&self) -> &str {
        &self.inner.public_url
    }
}
