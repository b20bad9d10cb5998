use crate::RoleDto;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RoleListResponse {
    pub roles: Vec<RoleDto>,
}
