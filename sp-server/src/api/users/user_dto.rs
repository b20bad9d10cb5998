use sp_core::User;

use serde::Serialize;

/// Public user shape: everything except the password hash.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub is_blocked: bool,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
            is_blocked: u.is_blocked,
        }
    }
}
