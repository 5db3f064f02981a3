//! Repository abstraction: trait definition and error types.

pub mod agenda;
pub mod error;

pub use agenda::AgendaRepository;
pub use error::{ErrorContext, RepositoryError, RepositoryResult};
