use crate::ApiError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;

fn location() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[test]
fn test_status_codes() {
    let cases = [
        (
            ApiError::NotFound {
                message: "x".into(),
                location: location(),
            },
            StatusCode::NOT_FOUND,
        ),
        (
            ApiError::Validation {
                message: "x".into(),
                field: None,
                location: location(),
            },
            StatusCode::BAD_REQUEST,
        ),
        (
            ApiError::Conflict {
                message: "x".into(),
                location: location(),
            },
            StatusCode::CONFLICT,
        ),
        (
            ApiError::Unauthorized {
                message: "x".into(),
                location: location(),
            },
            StatusCode::UNAUTHORIZED,
        ),
        (
            ApiError::Forbidden {
                message: "x".into(),
                location: location(),
            },
            StatusCode::FORBIDDEN,
        ),
        (
            ApiError::Internal {
                message: "x".into(),
                location: location(),
            },
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        let response = error.into_response();
        assert_eq!(response.status(), expected);
    }
}

#[test]
fn test_session_fault_maps_to_internal() {
    let fault = sp_session::SessionError::Unavailable {
        message: "backend outage".into(),
        location: location(),
    };

    let api_error = ApiError::from(fault);

    assert!(matches!(&api_error, ApiError::Internal { .. }));
    assert_eq!(
        api_error.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
