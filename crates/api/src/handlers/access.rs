use axum::{extract::State, response::Json, routing::get, Router};
use tracing::debug;

use crate::{dto::VerifyIpResponse, extractors::ClientOrigin, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/verify-ip", get(verify_ip))
}

async fn verify_ip(
    State(state): State<AppState>,
    ClientOrigin(origin): ClientOrigin,
) -> Json<VerifyIpResponse> {
    let decision = state.access.check_access.execute(&origin).await;
    debug!(address = %decision.address, allowed = decision.allowed, "Access verified");

    Json(VerifyIpResponse {
        success: true,
        allow_access: decision.allowed,
    })
}
