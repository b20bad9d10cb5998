//! Role CRUD handlers

use crate::{
    ApiError, ApiResult, CreateRoleRequest, DeleteResponse, RoleDto, RoleListResponse,
    RoleResponse, UpdateRoleRequest,
};
use crate::state::AppState;

use sp_core::Role;
use sp_db::RoleRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;

/// POST /api/v1/roles
pub async fn create_role(
    State(state): State<AppState>,
    Json(req): Json<CreateRoleRequest>,
) -> ApiResult<Json<RoleResponse>> {
    let repo = RoleRepository::new(state.pool.clone());

    let role = repo.create(&req.name).await.map_err(|e| {
        if e.is_unique_violation() {
            ApiError::Conflict {
                message: format!("Role '{}' already exists", req.name),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            ApiError::from(e)
        }
    })?;

    Ok(Json(RoleResponse { role: role.into() }))
}

/// GET /api/v1/roles
pub async fn list_roles(State(state): State<AppState>) -> ApiResult<Json<RoleListResponse>> {
    let repo = RoleRepository::new(state.pool.clone());
    let roles = repo.find_all().await?;

    Ok(Json(RoleListResponse {
        roles: roles.into_iter().map(RoleDto::from).collect(),
    }))
}

/// GET /api/v1/roles/{id}
pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<RoleResponse>> {
    let repo = RoleRepository::new(state.pool.clone());

    let role = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Role {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(RoleResponse { role: role.into() }))
}

/// PUT /api/v1/roles/{id}
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateRoleRequest>,
) -> ApiResult<Json<RoleResponse>> {
    let repo = RoleRepository::new(state.pool.clone());

    let role = Role { id, name: req.name };
    if !repo.update(&role).await? {
        return Err(ApiError::NotFound {
            message: format!("Role {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(Json(RoleResponse { role: role.into() }))
}

/// DELETE /api/v1/roles/{id}
pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    let repo = RoleRepository::new(state.pool.clone());

    if !repo.delete(id).await? {
        return Err(ApiError::NotFound {
            message: format!("Role {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(Json(DeleteResponse { deleted: true, id }))
}
