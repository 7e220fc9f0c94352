use crate::error::Result;
use sqlx::PgPool;

use super::user_models::User;

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new user. The unique index on login_key rejects duplicates
    /// with a database error the caller maps to a conflict.
    pub async fn create(&self, login_key: &str, password_hash: &str, name: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (login_key, password_hash, name) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(login_key)
        .bind(password_hash)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_login_key(&self, login_key: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE login_key = $1")
            .bind(login_key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }
}
