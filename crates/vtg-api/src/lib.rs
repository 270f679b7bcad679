//! vtg-api - Vehicle telemetry REST API layer
//!
//! Declares the HTTP routes and maps [`AdapterError`](vtg_core::AdapterError)
//! kinds to status codes. Every handler resolves the vehicle's brand and
//! hands the call to the [`AdapterSelector`](vtg_gateway::AdapterSelector);
//! no brand knowledge lives here.
//!
//! # Usage
//!
//! ```ignore
//! use vtg_api::{create_router, AppState};
//!
//! let state = AppState::new(resolver, selector);
//! let router = create_router(state);
//! ```

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the vehicle REST API router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Vehicle routes
        .route(
            "/vehicles/{vehicle_id}",
            get(handlers::vehicles::get_vehicle_info),
        )
        .route(
            "/vehicles/{vehicle_id}/doors",
            get(handlers::vehicles::get_doors),
        )
        .route(
            "/vehicles/{vehicle_id}/fuel",
            get(handlers::vehicles::get_fuel),
        )
        .route(
            "/vehicles/{vehicle_id}/battery",
            get(handlers::vehicles::get_battery),
        )
        .route(
            "/vehicles/{vehicle_id}/engine",
            post(handlers::vehicles::post_engine),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
