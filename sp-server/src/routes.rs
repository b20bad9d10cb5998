use crate::api::{account, admin, predictions, roles, users};
use crate::health;
use crate::state::AppState;

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Session endpoints
        .route("/api/v1/session", post(account::account::set_session))
        .route("/api/v1/session", get(account::account::get_session))
        .route("/api/v1/session/logout", post(account::account::logout))
        // Users
        .route("/api/v1/users", post(users::users::register))
        .route("/api/v1/users/login", post(users::users::login))
        // Roles
        .route("/api/v1/roles", post(roles::roles::create_role))
        .route("/api/v1/roles", get(roles::roles::list_roles))
        .route("/api/v1/roles/{id}", get(roles::roles::get_role))
        .route("/api/v1/roles/{id}", put(roles::roles::update_role))
        .route("/api/v1/roles/{id}", delete(roles::roles::delete_role))
        // Admin
        .route("/api/v1/admin/users", get(admin::admin::list_users))
        .route("/api/v1/admin/users/{id}", patch(admin::admin::update_user))
        .route(
            "/api/v1/admin/users/{id}",
            delete(admin::admin::delete_user),
        )
        .route(
            "/api/v1/admin/predictions",
            get(admin::admin::list_predictions),
        )
        .route(
            "/api/v1/admin/predictions/user/{id}",
            get(admin::admin::list_predictions_by_user),
        )
        // Predictions
        .route("/api/v1/predict", post(predictions::predictions::predict))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        // CORS middleware (the UI is served from another origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
