use std::sync::Arc;

use userd_infra::user_store::{InMemoryUserStore, PostgresUserStore, UserStore};

/// Build the user store from the environment.
///
/// `DATABASE_URL` selects Postgres; without it the API runs on the in-memory
/// store (dev/test). A connection failure at startup is fatal: nothing is
/// served without a working store.
pub async fn build_store() -> Arc<dyn UserStore> {
    match std::env::var("DATABASE_URL") {
        Ok(database_url) => {
            let store = PostgresUserStore::connect(&database_url)
                .await
                .expect("failed to connect to Postgres");
            Arc::new(store)
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; using in-memory user store");
            Arc::new(InMemoryUserStore::new())
        }
    }
}
