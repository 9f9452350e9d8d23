use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use minidns_domain::DomainError;
use serde_json::json;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::HostNotFound(_) | DomainError::RecordNotFound(_) => {
                (StatusCode::NOT_FOUND, self.0.to_string())
            }

            DomainError::DuplicateRecord(_) => (StatusCode::CONFLICT, self.0.to_string()),

            DomainError::ConflictingRecordType(_)
            | DomainError::CircularReference(_)
            | DomainError::ChainTooLong(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            DomainError::InvalidHostname(_)
            | DomainError::InvalidIpAddress(_)
            | DomainError::InvalidRecordType(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.0.to_string())
            }

            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
