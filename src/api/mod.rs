//! API handlers for the Stockroom REST endpoints

pub mod health;
pub mod items;
pub mod locations;
pub mod openapi;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration: the SPA is served from elsewhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Items (inventory)
        .route("/items", get(items::list_items))
        .route("/items", post(items::create_item))
        .route("/items/:id", get(items::get_item))
        .route("/items/:id", put(items::update_item))
        .route("/items/:id", delete(items::delete_item))
        // Locations (building plan)
        .route("/locations", get(locations::list_locations))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
