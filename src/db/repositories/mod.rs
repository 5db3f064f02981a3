//! Repository implementations module.
//!
//! This module contains the implementations of the `AgendaRepository` trait:
//! - `local`: In-memory implementation for unit testing and local development
//!
//! Additional backends (e.g. SQL) slot in here behind their own feature flag.
#[cfg(feature = "local-repo")]
pub mod local;

#[cfg(feature = "local-repo")]
pub use local::LocalRepository;
