//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::ResolutionService;
use crate::domain::repositories::LinkRepository;

/// Per-process shared state.
///
/// The store handle is acquired once at startup and shared read-only by all
/// concurrent request handlers; no handler closes or replaces it.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<ResolutionService>,
    pub store: Arc<dyn LinkRepository>,
}

impl AppState {
    /// Builds the application state over a store implementation.
    pub fn new(store: Arc<dyn LinkRepository>) -> Self {
        Self {
            resolver: Arc::new(ResolutionService::new(store.clone())),
            store,
        }
    }
}
