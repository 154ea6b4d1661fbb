use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .merge(handlers::access::routes())
        .merge(handlers::visitors::routes())
        .merge(handlers::denylist::routes())
        .with_state(state)
}

/// Full application: service status at `/`, everything else under `/api`.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::status::service_status))
        .nest("/api", create_api_routes(state))
}
