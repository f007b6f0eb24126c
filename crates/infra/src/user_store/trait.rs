use thiserror::Error;

use userd_core::{NewUser, User, UserId};

/// Store operation error.
///
/// These are **infrastructure errors** (missing rows, connectivity, bad
/// statements) as opposed to domain errors (validation, parse failures).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The addressed row does not exist.
    #[error("user not found")]
    NotFound,

    /// A statement failed against the backing store.
    #[error("{0}")]
    Query(String),

    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// The user store: owner of persistence for user CRUD.
///
/// Handlers never construct SQL; every statement lives behind this trait.
/// Implementations must assign identifiers on `create` and report `NotFound`
/// for lookups, replacements, and deletes that address a missing row.
///
/// Cancellation is structural: callers drop the returned future when the
/// inbound request goes away, which aborts the in-flight operation.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// All rows, ordered by id.
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;

    /// Single row by id.
    async fn find_by_id(&self, id: UserId) -> Result<User, StoreError>;

    /// Insert a row; the store assigns the id.
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Full replace of an existing row (not a partial patch).
    async fn update(&self, user: User) -> Result<User, StoreError>;

    /// Delete by id.
    async fn delete(&self, id: UserId) -> Result<(), StoreError>;
}
