//! Mapping from pipeline errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use paperlens_core::Error;

/// Wrapper giving core errors an HTTP shape: a status plus a structured
/// `{kind, message}` body.
pub struct ApiError(pub Error);

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::NoCorpus => StatusCode::NOT_FOUND,
            Error::RemoteService { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({
            "error": {
                "kind": self.0.kind(),
                "message": self.0.to_string(),
            }
        }));
        (status, body).into_response()
    }
}
