//! Factory for creating repository instances.
//!
//! Centralizes backend selection so callers depend only on the
//! `AgendaRepository` trait object.

use std::sync::Arc;

use super::repository::{AgendaRepository, RepositoryResult};

/// Supported repository backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory backend
    Local,
}

/// Factory for repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an in-memory repository.
    #[cfg(feature = "local-repo")]
    pub fn create_local() -> Arc<dyn AgendaRepository> {
        Arc::new(super::repositories::LocalRepository::new())
    }

    /// Create a repository of the requested type.
    pub fn create(repository_type: RepositoryType) -> RepositoryResult<Arc<dyn AgendaRepository>> {
        match repository_type {
            #[cfg(feature = "local-repo")]
            RepositoryType::Local => Ok(Self::create_local()),
            #[cfg(not(feature = "local-repo"))]
            RepositoryType::Local => Err(super::repository::RepositoryError::configuration(
                "local-repo feature is not enabled",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_local_repository() {
        let repo = RepositoryFactory::create(RepositoryType::Local).unwrap();
        assert!(repo.health_check().await.unwrap());
    }
}
