//! Request extractors that reject with `ApiError` instead of axum's plain-text
//! rejections.
//!
//! `UserId` is a parts extractor and `UserBody` consumes the body, so axum
//! always runs the id check first when a handler takes both.

use axum::{
    extract::{FromRequest, FromRequestParts, Json, Path, Request},
    http::request::Parts,
};
use validator::Validate;

use crate::error::ApiError;
use crate::model::UserInput;

/// The `{id}` path segment parsed as an integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId)?;

        raw.parse::<i64>().map(UserId).map_err(|_| ApiError::InvalidId)
    }
}

/// A JSON `UserInput` whose `name` and `email` are present and non-empty.
#[derive(Debug)]
pub struct UserBody(pub UserInput);

impl<S> FromRequest<S> for UserBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(input) = Json::<UserInput>::from_request(req, state)
            .await
            .map_err(|_| ApiError::InvalidBody)?;

        input.validate().map_err(|_| ApiError::MissingFields)?;

        Ok(UserBody(input))
    }
}
