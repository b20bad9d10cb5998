//! User account entity.

use serde::{Deserialize, Serialize};

/// A registered user. `hashed_password` holds the argon2 PHC string and
/// must never leave the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub hashed_password: String,
    pub role: String,
    pub is_blocked: bool,
}

impl User {
    /// Default role assigned at registration
    pub const DEFAULT_ROLE: &'static str = "user";
}
