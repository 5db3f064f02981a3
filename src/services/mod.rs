//! Service layer for business logic.
//!
//! This module contains the pure availability computation. Orchestration
//! over the repository (fetching working hours and agenda records) lives in
//! [`crate::db::services`].

pub mod availability;

pub use availability::{compute_free_slots, DEFAULT_MIN_SLOT_MINUTES};
