//! Axum extractor for the session cookie.

use crate::ApiError;
use crate::state::AppState;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use sp_session::SessionId;

/// Extracts the opaque session id from the request's Cookie header.
///
/// `None` means the client presented no session cookie; the token itself
/// is taken as-is, whether or not the store has ever seen it.
pub struct SessionCookie(pub Option<SessionId>);

fn find_cookie(cookie_header: &str, name: &str) -> Option<SessionId> {
    for cookie in cookie_header.split(';') {
        let cookie = cookie.trim();
        if let Some(value) = cookie.strip_prefix(name) {
            if let Some(token) = value.strip_prefix('=') {
                if !token.is_empty() {
                    return Some(SessionId::from(token));
                }
            }
        }
    }
    None
}

impl FromRequestParts<AppState> for SessionCookie {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let session_id = parts
                .headers
                .get("Cookie")
                .and_then(|value| value.to_str().ok())
                .and_then(|header| find_cookie(header, &state.session_cookie_name));

            Ok(SessionCookie(session_id))
        }
    }
}

/// Build a Set-Cookie value carrying `id`.
///
/// No Max-Age: the idle timeout is enforced server-side, so the cookie
/// itself lives for the browser session.
pub fn session_cookie_value(name: &str, id: &SessionId) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", name, id)
}

/// Build a Set-Cookie value that drops the session cookie.
pub fn expired_cookie_value(name: &str) -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", name)
}
