#![allow(dead_code)]

//! Test infrastructure for sp-server API tests

use sp_auth::TokenService;
use sp_server::AppState;
use sp_session::{IdentitySessions, MemoryStore};

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response, header};
use axum::response::Response as AxumResponse;
use http_body_util::BodyExt;
use sqlx::SqlitePool;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/sp-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing with the given session idle timeout
pub async fn create_test_state_with_timeout(idle_timeout: Duration) -> AppState {
    let pool = create_test_pool().await;

    AppState {
        pool,
        sessions: IdentitySessions::new(Arc::new(MemoryStore::new(idle_timeout))),
        tokens: Arc::new(TokenService::with_hs256(
            TEST_JWT_SECRET,
            Duration::from_secs(3600),
        )),
        session_cookie_name: "sp_session".to_string(),
    }
}

/// Create AppState for testing
pub async fn create_test_state() -> AppState {
    create_test_state_with_timeout(Duration::from_secs(30 * 60)).await
}

/// Build a JSON request
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

/// Build a bodyless request
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

/// Read a response body as JSON
pub async fn response_json(response: AxumResponse) -> serde_json::Value {
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&body).expect("Body is not valid JSON")
}

/// Extract the `name=value` pair of the session cookie from a response
pub fn session_cookie<B>(response: &Response<B>) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("No Set-Cookie header")
        .to_str()
        .expect("Set-Cookie is not valid UTF-8");

    set_cookie
        .split(';')
        .next()
        .expect("Empty Set-Cookie header")
        .to_string()
}

/// Register a user through the API and return their id
pub async fn register_user(
    app: &axum::Router,
    name: &str,
    email: &str,
    password: &str,
) -> i64 {
    use tower::ServiceExt;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/users",
            serde_json::json!({"name": name, "email": email, "password": password}),
        ))
        .await
        .expect("register request failed");

    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let json = response_json(response).await;
    json["user"]["id"].as_i64().expect("user id missing")
}
