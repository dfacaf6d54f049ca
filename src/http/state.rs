//! Application state for the HTTP server.

use std::sync::Arc;

use crate::models::ChannelDataset;

/// Shared application state passed to all handlers.
///
/// The dataset is loaded once at startup and never mutated afterwards,
/// so handlers share it behind a plain `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded channel dataset
    pub dataset: Arc<ChannelDataset>,
}

impl AppState {
    /// Create a new application state with the given dataset.
    pub fn new(dataset: Arc<ChannelDataset>) -> Self {
        Self { dataset }
    }
}
