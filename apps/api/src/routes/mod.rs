pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::parser::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/parse-resume", post(handlers::handle_parse_resume))
        .with_state(state)
}
