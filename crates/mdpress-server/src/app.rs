//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::posts::list_posts))
        .route("/upload", post(handlers::upload::upload))
        .route("/posts/{name}", get(handlers::posts::get_post))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
