//! Role repository.

use crate::Result as DbErrorResult;

use sp_core::Role;

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

pub struct RoleRepository {
    pool: SqlitePool,
}

fn map_role(row: &SqliteRow) -> DbErrorResult<Role> {
    Ok(Role {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
    })
}

impl RoleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new role and return it with its assigned id.
    /// A duplicate name surfaces as a UNIQUE violation.
    pub async fn create(&self, name: &str) -> DbErrorResult<Role> {
        let result = sqlx::query("INSERT INTO roles (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(Role {
            id: result.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Role>> {
        let row = sqlx::query("SELECT id, name FROM roles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_role).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Role>> {
        let rows = sqlx::query("SELECT id, name FROM roles ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_role).collect()
    }

    /// Rename the role. Returns false when the id is unknown.
    pub async fn update(&self, role: &Role) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE roles SET name = ? WHERE id = ?")
            .bind(&role.name)
            .bind(role.id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns false when the id is unknown.
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM roles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
