use serde::Deserialize;

/// Partial update for PATCH /api/v1/admin/users/{id}.
/// Absent fields stay untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub is_blocked: Option<bool>,
}
