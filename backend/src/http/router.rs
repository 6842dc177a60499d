//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{number, range, sixn, visualization};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Any origin may query the analysis endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let collatz = Router::new()
        .route(number::COLLATZ_NUMBER_PATH, get(handlers::get_collatz_number))
        .route(range::COLLATZ_RANGE_PATH, get(handlers::get_collatz_range))
        .route(sixn::SIXN_ANALYSIS_PATH, get(handlers::get_sixn_analysis))
        .route(
            visualization::VISUALIZATION_PATH,
            get(handlers::get_visualization_data),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(collatz)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
