pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/worksheets", post(handlers::handle_create_worksheet))
        .route("/api/v1/problems", post(handlers::handle_generate_problems))
        .route(
            "/api/v1/long-division",
            post(handlers::handle_long_division),
        )
        .with_state(state)
}
