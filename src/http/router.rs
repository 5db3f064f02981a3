//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Guide CRUD
        .route("/guides", get(handlers::list_guides))
        .route("/guides", post(handlers::create_guide))
        // Working hours
        .route(
            "/guides/{guide_id}/working-hours",
            get(handlers::get_working_hours),
        )
        .route(
            "/guides/{guide_id}/working-hours",
            put(handlers::set_working_hours),
        )
        // Agenda records
        .route("/guides/{guide_id}/events", post(handlers::create_event))
        .route("/guides/{guide_id}/events", get(handlers::list_events))
        .route(
            "/guides/{guide_id}/assignments",
            post(handlers::create_assignment),
        )
        .route(
            "/guides/{guide_id}/assignments",
            get(handlers::list_assignments),
        )
        // Availability
        .route(
            "/guides/{guide_id}/availability",
            get(handlers::get_availability),
        )
        .route("/availability/search", post(handlers::search_availability));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
