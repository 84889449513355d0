pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::scoring::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/ats/score", post(handlers::handle_score))
        .route("/api/v1/ats/taxonomy", get(handlers::handle_taxonomy))
        .with_state(state)
}
