//! Login credential lookup
//!
//! Read-only: nothing in this API creates, updates, or deletes login rows.

use sqlx::{FromRow, PgPool};

use super::DbError;

/// Credential row. The password column holds plaintext; the login check
/// is an exact string comparison against it.
#[derive(Debug, Clone, FromRow)]
pub struct LoginRecord {
    pub idlogin: i32,
    pub username: String,
    pub password: String,
}

/// Login repository
pub struct LoginRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> LoginRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Look up a credential row by username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<LoginRecord>, DbError> {
        let record: Option<LoginRecord> = sqlx::query_as(
            "SELECT idlogin, username, password FROM login WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(record)
    }
}
