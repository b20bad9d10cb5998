//! Registration and login handlers

use crate::{ApiError, ApiResult, LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::state::AppState;

use sp_auth::{hash_password, verify_password};
use sp_db::UserRepository;

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// POST /api/v1/users
///
/// Register a new account. The password is argon2-hashed before storage;
/// a duplicate email answers 409.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<UserResponse>> {
    let hashed = hash_password(&req.password)?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .create(&req.name, &req.email, &hashed)
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                ApiError::Conflict {
                    message: format!("Email {} is already registered", req.email),
                    location: ErrorLocation::from(Location::caller()),
                }
            } else {
                ApiError::from(e)
            }
        })?;

    log::info!("Registered user {} ({})", user.id, user.email);

    Ok(Json(UserResponse { user: user.into() }))
}

/// POST /api/v1/users/login
///
/// Verify credentials and issue an access token. Unknown email and wrong
/// password answer the same 401; a blocked account answers 403.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let repo = UserRepository::new(state.pool.clone());

    let user = repo
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized {
            message: "Invalid email or password".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if !verify_password(&req.password, &user.hashed_password)? {
        return Err(ApiError::Unauthorized {
            message: "Invalid email or password".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if user.is_blocked {
        return Err(ApiError::Forbidden {
            message: "Account is blocked".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let access_token = state.tokens.issue(&user)?;

    log::info!("User {} logged in", user.id);

    Ok(Json(LoginResponse {
        access_token,
        token_type: "bearer".to_string(),
        user: user.into(),
    }))
}
