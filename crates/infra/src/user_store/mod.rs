//! User persistence boundary.
//!
//! This module defines the storage-facing abstraction for user rows without
//! making any storage assumptions, plus the two shipped implementations
//! (Postgres for production, in-memory for dev/tests).

pub mod memory;
pub mod postgres;
pub mod r#trait;

pub use memory::InMemoryUserStore;
pub use postgres::PostgresUserStore;
pub use r#trait::{StoreError, UserStore};
