//! Administrative handlers: user management and prediction listings.

use crate::{
    ApiError, ApiResult, DeleteResponse, PredictionDto, PredictionListResponse, UpdateUserRequest,
    UserDto, UserListResponse, UserResponse,
};
use crate::state::AppState;

use sp_db::{PredictionRepository, UserRepository};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;

/// GET /api/v1/admin/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let users = repo.find_all().await?;

    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}

/// PATCH /api/v1/admin/users/{id}
///
/// Apply any subset of name, email, role, is_blocked.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let repo = UserRepository::new(state.pool.clone());

    let mut user = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if let Some(name) = req.name {
        user.name = name;
    }
    if let Some(email) = req.email {
        user.email = email;
    }
    if let Some(role) = req.role {
        user.role = role;
    }
    if let Some(is_blocked) = req.is_blocked {
        user.is_blocked = is_blocked;
    }

    repo.update(&user).await?;

    log::info!("Updated user {}", user.id);

    Ok(Json(UserResponse { user: user.into() }))
}

/// DELETE /api/v1/admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    let repo = UserRepository::new(state.pool.clone());

    if !repo.delete(id).await? {
        return Err(ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Deleted user {}", id);

    Ok(Json(DeleteResponse { deleted: true, id }))
}

/// GET /api/v1/admin/predictions
pub async fn list_predictions(
    State(state): State<AppState>,
) -> ApiResult<Json<PredictionListResponse>> {
    let repo = PredictionRepository::new(state.pool.clone());
    let predictions = repo.find_all().await?;

    Ok(Json(PredictionListResponse {
        predictions: predictions.into_iter().map(PredictionDto::from).collect(),
    }))
}

/// GET /api/v1/admin/predictions/user/{id}
pub async fn list_predictions_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<PredictionListResponse>> {
    let repo = PredictionRepository::new(state.pool.clone());
    let predictions = repo.find_by_user(user_id).await?;

    Ok(Json(PredictionListResponse {
        predictions: predictions.into_iter().map(PredictionDto::from).collect(),
    }))
}
