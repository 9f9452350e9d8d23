use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", get(handlers::health_check))
        .merge(handlers::records::routes())
        .with_state(state)
}
