//! Application state for the HTTP server.

use crate::db::repository::AgendaRepository;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for agenda storage
    pub repository: Arc<dyn AgendaRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn AgendaRepository>) -> Self {
        Self { repository }
    }
}
