use crate::UserDto;
use serde::Serialize;

/// Successful login: a bearer token plus the public account record.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserDto,
}
