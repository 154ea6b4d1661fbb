use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Response},
    Json,
};
use ferrous_visits_domain::DomainError;
use serde_json::json;

/// Failure surfaced to HTTP callers.
///
/// Every variant renders as status 200 with `{"success": false, "msg": ..}`;
/// clients branch on `success`, never on the status code.
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::InvalidInput(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(DomainError::InvalidInput(rejection.body_text()))
    }
}

impl ApiError {
    /// Client-facing text; storage details stay in the logs.
    pub fn message(&self) -> String {
        match &self.0 {
            DomainError::InvalidInput(_) | DomainError::VisitorNotFound(_) => self.0.to_string(),

            DomainError::DatabaseError(_) => "Storage is temporarily unavailable".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        Json(json!({ "success": false, "msg": self.message() })).into_response()
    }
}
