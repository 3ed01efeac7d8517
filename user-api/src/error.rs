use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::ErrorBody;

/// Client-facing failures. Every variant maps to 400 or 404 with an
/// `{"error": ...}` body; none is retried or recovered from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("invalid user id")]
    InvalidId,

    #[error("invalid request body")]
    InvalidBody,

    #[error("name and email are required")]
    MissingFields,

    #[error("user not found")]
    NotFound,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::InvalidBody | ApiError::MissingFields => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
