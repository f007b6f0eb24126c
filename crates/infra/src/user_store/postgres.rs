//! Postgres-backed user store implementation.
//!
//! ## Error Mapping
//!
//! SQLx errors are mapped to `StoreError` as follows:
//!
//! | SQLx Error | StoreError | Scenario |
//! |------------|------------|----------|
//! | RowNotFound / empty optional | `NotFound` | Lookup, replace, or delete addressed a missing row |
//! | Database (any code) | `Query` | Constraint violation or malformed statement |
//! | PoolClosed | `Unavailable` | Connection pool was closed |
//! | Other | `Unavailable` | Network errors, connection failures, etc. |
//!
//! ## Schema
//!
//! Expects the following table (schema management is out of scope here):
//!
//! ```sql
//! CREATE TABLE users (
//!     id    BIGSERIAL PRIMARY KEY,
//!     name  TEXT NOT NULL,
//!     email TEXT NOT NULL
//! );
//! ```

use std::sync::Arc;

use sqlx::{FromRow, PgPool, Row};
use tracing::instrument;

use userd_core::{NewUser, User, UserId};

use super::r#trait::{StoreError, UserStore};

/// Postgres-backed user store.
///
/// Uses the SQLx connection pool, which handles thread-safe connection
/// management; the struct is `Send + Sync` and can be shared across tasks.
#[derive(Debug, Clone)]
pub struct PostgresUserStore {
    pool: Arc<PgPool>,
}

impl PostgresUserStore {
    /// Create a new PostgresUserStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Connect a fresh pool and wrap it.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url)
            .await
            .map_err(|e| StoreError::Unavailable(format!("connect failed: {e}")))?;
        Ok(Self::new(pool))
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[instrument(skip(self), err)]
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT
                id,
                name,
                email
            FROM users
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_all", e))?;

        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            let user = UserRow::from_row(&row)
                .map_err(|e| StoreError::Query(format!("failed to deserialize user row: {e}")))?;
            users.push(user.into());
        }

        Ok(users)
    }

    #[instrument(skip(self), fields(id = %id), err)]
    async fn find_by_id(&self, id: UserId) -> Result<User, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT
                id,
                name,
                email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_by_id", e))?
        .ok_or(StoreError::NotFound)?;

        let user = UserRow::from_row(&row)
            .map_err(|e| StoreError::Query(format!("failed to deserialize user row: {e}")))?;
        Ok(user.into())
    }

    #[instrument(skip(self, new_user), err)]
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("create", e))?;

        let user = UserRow::from_row(&row)
            .map_err(|e| StoreError::Query(format!("failed to deserialize user row: {e}")))?;
        Ok(user.into())
    }

    #[instrument(skip(self, user), fields(id = %user.id), err)]
    async fn update(&self, user: User) -> Result<User, StoreError> {
        let row = sqlx::query(
            r#"
            UPDATE users
            SET name = $2, email = $3
            WHERE id = $1
            RETURNING id, name, email
            "#,
        )
        .bind(user.id.as_i64())
        .bind(&user.name)
        .bind(&user.email)
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("update", e))?
        .ok_or(StoreError::NotFound)?;

        let user = UserRow::from_row(&row)
            .map_err(|e| StoreError::Query(format!("failed to deserialize user row: {e}")))?;
        Ok(user.into())
    }

    #[instrument(skip(self), fields(id = %id), err)]
    async fn delete(&self, id: UserId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_i64())
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}

/// Map SQLx errors to StoreError.
fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            StoreError::Query(format!("database error in {}: {}", operation, db_err.message()))
        }
        sqlx::Error::PoolClosed => {
            StoreError::Unavailable(format!("connection pool closed in {operation}"))
        }
        sqlx::Error::RowNotFound => StoreError::NotFound,
        _ => StoreError::Unavailable(format!("sqlx error in {operation}: {err}")),
    }
}

// SQLx row type

#[derive(Debug)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for UserRow {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        Ok(UserRow {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
        })
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::new(row.id),
            name: row.name,
            email: row.email,
        }
    }
}
