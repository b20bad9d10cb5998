use crate::SessionCookie;
use crate::api::extractors::session_cookie::{expired_cookie_value, session_cookie_value};
use crate::state::AppState;

use sp_auth::TokenService;
use sp_session::{IdentitySessions, MemoryStore, SessionId};

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use sqlx::SqlitePool;

async fn create_test_state() -> AppState {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("../crates/sp-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    AppState {
        pool,
        sessions: IdentitySessions::new(Arc::new(MemoryStore::default())),
        tokens: Arc::new(TokenService::with_hs256(
            b"test-secret-key-at-least-32-bytes",
            Duration::from_secs(3600),
        )),
        session_cookie_name: "sp_session".to_string(),
    }
}

async fn extract(state: &AppState, request: Request<Body>) -> Option<SessionId> {
    let (mut parts, _) = request.into_parts();
    let SessionCookie(cookie) = SessionCookie::from_request_parts(&mut parts, state)
        .await
        .unwrap();
    cookie
}

#[tokio::test]
async fn test_extractor_with_session_cookie() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header("Cookie", "sp_session=abc-123")
        .body(Body::empty())
        .unwrap();

    let cookie = extract(&state, request).await;

    assert_eq!(cookie, Some(SessionId::from("abc-123")));
}

#[tokio::test]
async fn test_extractor_picks_cookie_out_of_many() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header("Cookie", "theme=dark; sp_session=abc-123; lang=en")
        .body(Body::empty())
        .unwrap();

    let cookie = extract(&state, request).await;

    assert_eq!(cookie, Some(SessionId::from("abc-123")));
}

#[tokio::test]
async fn test_extractor_without_cookie_header() {
    let state = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let cookie = extract(&state, request).await;

    assert_eq!(cookie, None);
}

#[tokio::test]
async fn test_extractor_ignores_other_cookies_and_empty_value() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header("Cookie", "sp_session_old=zzz; theme=dark; sp_session=")
        .body(Body::empty())
        .unwrap();

    let cookie = extract(&state, request).await;

    assert_eq!(cookie, None);
}

#[test]
fn test_cookie_values_are_http_only() {
    let id = SessionId::from("abc-123");

    assert_eq!(
        session_cookie_value("sp_session", &id),
        "sp_session=abc-123; Path=/; HttpOnly; SameSite=Lax"
    );
    assert_eq!(
        expired_cookie_value("sp_session"),
        "sp_session=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0"
    );
}
