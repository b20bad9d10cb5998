//! User repository for account CRUD.

use crate::Result as DbErrorResult;

use sp_core::User;

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

pub struct UserRepository {
    pool: SqlitePool,
}

fn map_user(row: &SqliteRow) -> DbErrorResult<User> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        hashed_password: row.try_get("hashed_password")?,
        role: row.try_get("role")?,
        is_blocked: row.try_get::<i64, _>("is_blocked")? != 0,
    })
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new account and return it with its assigned id.
    /// A duplicate email surfaces as a UNIQUE violation.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        hashed_password: &str,
    ) -> DbErrorResult<User> {
        let result = sqlx::query(
            r#"
                INSERT INTO users (name, email, hashed_password, role, is_blocked)
                VALUES (?, ?, ?, ?, 0)
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(hashed_password)
        .bind(User::DEFAULT_ROLE)
        .execute(&self.pool)
        .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            email: email.to_string(),
            hashed_password: hashed_password.to_string(),
            role: User::DEFAULT_ROLE.to_string(),
            is_blocked: false,
        })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, email, hashed_password, role, is_blocked
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_user).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, email, hashed_password, role, is_blocked
                FROM users
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_user).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query(
            r#"
                SELECT id, name, email, hashed_password, role, is_blocked
                FROM users
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_user).collect()
    }

    /// Persist the full row for `user`. Returns false when the id is
    /// unknown.
    pub async fn update(&self, user: &User) -> DbErrorResult<bool> {
        let is_blocked = user.is_blocked as i64;

        let result = sqlx::query(
            r#"
                UPDATE users
                SET name = ?, email = ?, hashed_password = ?, role = ?, is_blocked = ?
                WHERE id = ?
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.hashed_password)
        .bind(&user.role)
        .bind(is_blocked)
        .bind(user.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns false when the id is unknown.
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
