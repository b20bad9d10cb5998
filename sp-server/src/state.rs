//! Shared application state handed to every handler.

use std::sync::Arc;

use sp_auth::TokenService;
use sp_session::IdentitySessions;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Identity session manager over the configured session store
    pub sessions: IdentitySessions,
    pub tokens: Arc<TokenService>,
    /// Name of the cookie carrying the opaque session id
    pub session_cookie_name: String,
}
