//! Session API handlers
//!
//! The stateful surface of the application: write the caller's identity
//! into their server-side session, read it back, or end the session.

use crate::api::extractors::session_cookie::{
    SessionCookie, expired_cookie_value, session_cookie_value,
};
use crate::{ApiResult, SessionResponse, SetSessionRequest};
use crate::state::AppState;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header::{LOCATION, SET_COOKIE}},
    response::IntoResponse,
};
use sp_core::UserIdentity;
use sp_session::SessionId;

/// Where POST /api/v1/session/logout sends the browser afterwards.
const LOGIN_ROUTE: &str = "/login";

/// POST /api/v1/session
///
/// Store the caller's identity fields in their session, minting a session
/// id (and cookie) when the request carries none. 200 with an empty body.
pub async fn set_session(
    State(state): State<AppState>,
    SessionCookie(cookie): SessionCookie,
    Json(req): Json<SetSessionRequest>,
) -> ApiResult<impl IntoResponse> {
    let session_id = cookie.unwrap_or_else(SessionId::generate);

    let identity = UserIdentity {
        role: req.role,
        id: req.id,
        name: req.name,
        email: req.email,
    };
    state.sessions.set_identity(&session_id, &identity).await?;

    let cookie = session_cookie_value(&state.session_cookie_name, &session_id);
    Ok(([(SET_COOKIE, cookie)], StatusCode::OK))
}

/// GET /api/v1/session
///
/// Read the identity fields back. Absence of any (or all) fields is a
/// normal outcome: a fresh, cleared, or expired session answers with all
/// fields null.
pub async fn get_session(
    State(state): State<AppState>,
    SessionCookie(cookie): SessionCookie,
) -> ApiResult<Json<SessionResponse>> {
    let snapshot = match cookie {
        Some(session_id) => state.sessions.identity(&session_id).await?,
        None => Default::default(),
    };

    Ok(Json(SessionResponse::from(snapshot)))
}

/// POST /api/v1/session/logout
///
/// Discard the caller's entire session entry and send the browser to the
/// login view. 302 whether or not a session existed.
pub async fn logout(
    State(state): State<AppState>,
    SessionCookie(cookie): SessionCookie,
) -> ApiResult<impl IntoResponse> {
    if let Some(session_id) = cookie {
        state.sessions.clear(&session_id).await?;
    }

    let cookie = expired_cookie_value(&state.session_cookie_name);
    Ok((
        StatusCode::FOUND,
        [(LOCATION, LOGIN_ROUTE.to_string()), (SET_COOKIE, cookie)],
    ))
}
