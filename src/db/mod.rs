//! Storage module for agenda data.
//!
//! This module provides abstractions for storage operations via the
//! Repository pattern, allowing different backends to be swapped easily.
//!
//! # Architecture
//!
//! The module follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API)                            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Business Logic            │
//! │  - Write validation                                      │
//! │  - Availability orchestration                            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! **For new code, use the service layer:**
//! ```ignore
//! use gira_rust::db::{factory::RepositoryFactory, services};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = RepositoryFactory::create_local();
//!     let guides = services::list_guides(repo.as_ref()).await?;
//!     Ok(())
//! }
//! ```

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repositories;
pub mod repository;
pub mod services;

#[cfg(test)]
#[path = "services_tests.rs"]
mod services_tests;

// ==================== Service Layer (Recommended for new code) ====================
// Use these high-level functions that work with any repository implementation

pub use services::{
    add_assignment, add_event, assignments_for_date, create_guide, events_for_date, get_guide,
    get_working_hours, guide_availability, health_check, list_guides, search_availability,
    set_working_hours,
};

// ==================== Repository Pattern Exports ====================

pub use factory::{RepositoryFactory, RepositoryType};
#[cfg(feature = "local-repo")]
pub use repositories::LocalRepository;
pub use repository::{AgendaRepository, ErrorContext, RepositoryError, RepositoryResult};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn AgendaRepository>> = OnceLock::new();

#[cfg(feature = "local-repo")]
fn create_selected_repository() -> RepositoryResult<Arc<dyn AgendaRepository>> {
    Ok(RepositoryFactory::create_local())
}

/// Initialize the global repository singleton for the selected backend.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo = create_selected_repository().map_err(|e| anyhow::Error::msg(e.to_string()))?;
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn AgendaRepository>> {
    if REPOSITORY.get().is_none() {
        let _ = init_repository();
    }

    REPOSITORY
        .get()
        .context("Repository not initialized. Call init_repository() first.")
}
