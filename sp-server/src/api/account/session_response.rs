use serde::Serialize;
use sp_session::IdentitySnapshot;

/// Body of GET /api/v1/session.
///
/// Fields come back exactly as stored, each independently null; `id`
/// stays in its string form.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub role: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<IdentitySnapshot> for SessionResponse {
    fn from(s: IdentitySnapshot) -> Self {
        Self {
            role: s.role,
            id: s.id,
            name: s.name,
            email: s.email,
        }
    }
}
