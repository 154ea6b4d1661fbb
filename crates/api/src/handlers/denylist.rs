use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::{get, post},
    Router,
};
use tracing::debug;

use crate::{
    dto::{DenylistResponse, SaveDenylistRequest, SaveDenylistResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/get-blacklist", get(get_denylist))
        .route("/save-blacklist", post(save_denylist))
}

async fn get_denylist(State(state): State<AppState>) -> Json<DenylistResponse> {
    match state.denylist.get_denylist.execute().await {
        Ok(entries) => {
            debug!(count = entries.len(), "Denylist retrieved");
            Json(DenylistResponse {
                success: true,
                msg: None,
                blacklist: entries.into_iter().map(|e| e.address).collect(),
            })
        }
        Err(e) => Json(DenylistResponse::unavailable(ApiError::from(e).message())),
    }
}

async fn save_denylist(
    State(state): State<AppState>,
    body: Result<Json<SaveDenylistRequest>, JsonRejection>,
) -> Json<SaveDenylistResponse> {
    let result = match body {
        Ok(Json(req)) => state
            .denylist
            .save_denylist
            .execute(&req.blacklist)
            .await
            .map_err(ApiError::from),
        Err(rejection) => Err(ApiError::from(rejection)),
    };

    match result {
        Ok(report) => Json(report.into()),
        Err(e) => Json(SaveDenylistResponse::failed(e.message())),
    }
}
