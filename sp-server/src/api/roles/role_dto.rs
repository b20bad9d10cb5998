use sp_core::Role;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RoleDto {
    pub id: i64,
    pub name: String,
}

impl From<Role> for RoleDto {
    fn from(r: Role) -> Self {
        Self {
            id: r.id,
            name: r.name,
        }
    }
}
