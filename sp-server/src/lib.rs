pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    account::{
        account::{get_session, logout, set_session},
        session_response::SessionResponse,
        set_session_request::SetSessionRequest,
    },
    admin::{
        admin::{delete_user, list_predictions, list_predictions_by_user, list_users, update_user},
        update_user_request::UpdateUserRequest,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::session_cookie::SessionCookie,
    predictions::{
        predict_request::PredictRequest,
        predict_response::PredictResponse,
        prediction_dto::PredictionDto,
        prediction_list_response::PredictionListResponse,
        predictions::predict,
    },
    roles::{
        create_role_request::CreateRoleRequest,
        role_dto::RoleDto,
        role_list_response::RoleListResponse,
        role_response::RoleResponse,
        roles::{create_role, delete_role, get_role, list_roles, update_role},
        update_role_request::UpdateRoleRequest,
    },
    users::{
        login_request::LoginRequest,
        login_response::LoginResponse,
        register_request::RegisterRequest,
        user_dto::UserDto,
        user_list_response::UserListResponse,
        user_response::UserResponse,
        users::{login, register},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
