//! Mapping of domain errors onto HTTP responses.
//!
//! Bodies keep the `{"detail": ...}` shape API clients already parse.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::domains::tukang::{FieldError, TukangError};

#[derive(Debug)]
pub enum ApiError {
    /// Field-level validation failures (422)
    Validation(Vec<FieldError>),
    /// Target id does not exist (404)
    NotFound,
    /// Request could not be read at all (400)
    BadRequest(String),
    /// Store failure (500)
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> Value {
        match self {
            ApiError::Validation(errors) => json!(errors),
            ApiError::NotFound => json!("Tukang not found"),
            ApiError::BadRequest(message) | ApiError::Internal(message) => json!(message),
        }
    }
}

impl From<TukangError> for ApiError {
    fn from(err: TukangError) -> Self {
        match err {
            TukangError::Validation(errors) => ApiError::Validation(errors.into_errors()),
            TukangError::NotFound => ApiError::NotFound,
            TukangError::Storage(e) => {
                tracing::error!(error = %e, "Document store operation failed");
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON with the wrong shape, e.g. a number where text belongs.
            JsonRejection::JsonDataError(e) => {
                ApiError::Validation(vec![FieldError::new("body", e.body_text())])
            }
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}
