//! # Gira Rust Backend
//!
//! Guide availability engine for the Gira tour-operator platform.
//!
//! This crate provides the agenda backend for Gira: it stores guide working
//! hours, personal events, and tour assignments behind a repository
//! abstraction, and computes bookable free slots (working hours minus
//! occupied intervals) for the booking flow. The backend exposes a REST API
//! via Axum for the React frontend.
//!
//! ## Features
//!
//! - **Time Handling**: minute-precision `TimeOfDay` values and weekly
//!   working-hour schedules
//! - **Availability**: pure free-slot computation with configurable minimum
//!   slot duration
//! - **Agenda Storage**: repository pattern with an in-memory backend
//! - **HTTP API**: RESTful endpoints for guide CRUD, agenda writes, and
//!   single- or multi-guide availability queries
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: typed domain entities shared across layers
//! - [`models`]: time value types and lenient agenda-record conversion
//! - [`services`]: the pure slot calculator
//! - [`db`]: repository trait, implementations, and the service layer
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod db;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
