use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Catalog
        .route(
            "/api/infographics",
            get(handlers::list_infographics).post(handlers::create_infographic),
        )
        .route("/api/infographics/:id", delete(handlers::delete_infographic))
        // Uploads are not size-capped
        .route(
            "/api/upload",
            post(handlers::upload_file).layer(DefaultBodyLimit::disable()),
        )
        // Internal
        .route("/_internal/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
