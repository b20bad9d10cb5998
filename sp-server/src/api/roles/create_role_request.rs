use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateRoleRequest {
    pub name: String,
}
