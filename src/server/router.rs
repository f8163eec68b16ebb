use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Build the complete axum Router.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/analyze",
            get(handlers::analyze_query).post(handlers::analyze_body),
        )
        .route(
            "/summary",
            get(handlers::summary_query).post(handlers::summary_body),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
