use axum::{extract::State, http::StatusCode, Json};

use crate::error::{ApiError, ApiResult};
use crate::extract::{UserBody, UserId};
use crate::model::{MessageBody, ServiceInfo, User};
use crate::AppState;

/// GET /
pub async fn health(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(state.info.as_ref().clone())
}

/// GET /api/v1/users
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store.list().await)
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> ApiResult<Json<User>> {
    state
        .store
        .find_by_id(id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// POST /api/v1/users
pub async fn create_user(
    State(state): State<AppState>,
    UserBody(input): UserBody,
) -> (StatusCode, Json<User>) {
    let user = state.store.insert(input).await;
    (StatusCode::CREATED, Json(user))
}

/// PUT /api/v1/users/{id}
///
/// Replaces every field; the path id wins over any id in the body.
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    UserBody(input): UserBody,
) -> ApiResult<Json<User>> {
    state
        .store
        .replace_by_id(id, input)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// DELETE /api/v1/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> ApiResult<Json<MessageBody>> {
    if state.store.delete_by_id(id).await {
        Ok(Json(MessageBody {
            message: "user deleted".to_string(),
        }))
    } else {
        Err(ApiError::NotFound)
    }
}
