//! Axum-based HTTP server for the agenda REST API.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::AppError;
pub use router::create_router;
pub use state::AppState;
