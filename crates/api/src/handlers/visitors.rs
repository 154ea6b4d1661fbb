use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use ferrous_visits_domain::VisitOutcome;
use tracing::debug;

use crate::{
    dto::{
        BatchDeleteRequest, BatchDeleteResponse, EditVisitorRequest, MessageResponse,
        RecordVisitResponse, VisitorDataResponse,
    },
    errors::ApiError,
    extractors::ClientOrigin,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/record-visitor", post(record_visitor))
        .route("/get-visitor-data", get(get_visitor_data))
        .route("/delete-visitor/{id}", delete(delete_visitor))
        .route("/batch-delete-visitor", delete(batch_delete_visitors))
        .route("/edit-visitor/{id}", put(edit_visitor))
        .route("/reset-visitor", delete(reset_visitors))
}

async fn record_visitor(
    State(state): State<AppState>,
    ClientOrigin(origin): ClientOrigin,
) -> Result<Json<RecordVisitResponse>, ApiError> {
    let outcome = state.visitors.record_visit.execute(&origin).await?;

    let response = match outcome {
        VisitOutcome::Recorded {
            address,
            visit_time,
        } => RecordVisitResponse::recorded(address, visit_time),
        VisitOutcome::Restricted { .. } => RecordVisitResponse::restricted(),
    };

    Ok(Json(response))
}

async fn get_visitor_data(State(state): State<AppState>) -> Json<VisitorDataResponse> {
    let stats = state.visitors.get_stats.execute().await;
    debug!(total = stats.total_count, "Visitor data retrieved");
    Json(stats.into())
}

async fn delete_visitor(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    state.visitors.delete_visitor.execute(id).await?;
    Ok(Json(MessageResponse::ok(format!("Visitor record {} deleted", id))))
}

async fn batch_delete_visitors(
    State(state): State<AppState>,
    body: Result<Json<BatchDeleteRequest>, JsonRejection>,
) -> Json<BatchDeleteResponse> {
    let result = match body {
        Ok(Json(req)) => state
            .visitors
            .batch_delete
            .execute(&req.ids)
            .await
            .map_err(ApiError::from),
        Err(rejection) => Err(ApiError::from(rejection)),
    };

    match result {
        Ok(deleted) => Json(BatchDeleteResponse {
            success: true,
            msg: format!("{} visitor records deleted", deleted),
            deleted,
        }),
        Err(e) => Json(BatchDeleteResponse::failed(e.message())),
    }
}

async fn edit_visitor(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<EditVisitorRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    let Json(req) = body?;
    state.visitors.update_remark.execute(id, req.remark).await?;
    Ok(Json(MessageResponse::ok(format!("Visitor record {} updated", id))))
}

async fn reset_visitors(State(state): State<AppState>) -> Result<Json<MessageResponse>, ApiError> {
    let outcome = state.visitors.reset.execute().await?;

    let msg = if outcome.compacted {
        format!("{} visitor records removed, storage compacted", outcome.deleted)
    } else {
        format!(
            "{} visitor records removed, storage compaction skipped",
            outcome.deleted
        )
    };

    Ok(Json(MessageResponse::ok(msg)))
}
