pub mod health;
pub mod parse;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/parse-resume", post(parse::handle_parse_resume))
        .route("/view-resume", post(parse::handle_view_resume))
        .with_state(state)
}
