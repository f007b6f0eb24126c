use std::collections::BTreeMap;
use std::sync::RwLock;

use userd_core::{NewUser, User, UserId};

use super::r#trait::{StoreError, UserStore};

#[derive(Debug)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, User>,
}

/// In-memory user store.
///
/// Intended for tests/dev. Assigns ids from a monotonic counter, the way the
/// database would from a sequence.
#[derive(Debug)]
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        Ok(inner.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<User, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        inner.rows.get(&id.as_i64()).cloned().ok_or(StoreError::NotFound)
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        let id = inner.next_id;
        inner.next_id += 1;

        let user = User {
            id: UserId::new(id),
            name: new_user.name,
            email: new_user.email,
        };
        inner.rows.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        let key = user.id.as_i64();
        if !inner.rows.contains_key(&key) {
            return Err(StoreError::NotFound);
        }
        inner.rows.insert(key, user.clone());

        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<(), StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        inner
            .rows
            .remove(&id.as_i64())
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_monotonic_ids() {
        let store = InMemoryUserStore::new();

        let a = store.create(draft("Alice", "alice@example.com")).await.unwrap();
        let b = store.create(draft("Bob", "bob@x.com")).await.unwrap();

        assert_eq!(a.id, UserId::new(1));
        assert_eq!(b.id, UserId::new(2));
    }

    #[tokio::test]
    async fn find_all_returns_rows_in_id_order() {
        let store = InMemoryUserStore::new();
        store.create(draft("Alice", "alice@example.com")).await.unwrap();
        store.create(draft("Bob", "bob@x.com")).await.unwrap();

        let users = store.find_all().await.unwrap();
        let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[tokio::test]
    async fn update_is_a_full_replace() {
        let store = InMemoryUserStore::new();
        let created = store.create(draft("Alice", "alice@example.com")).await.unwrap();

        let updated = store
            .update(User {
                id: created.id,
                name: "Alice".to_string(),
                email: "alice@new.example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Alice");
        assert_eq!(updated.email, "alice@new.example.com");

        let fetched = store.find_by_id(created.id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn update_of_missing_row_reports_not_found() {
        let store = InMemoryUserStore::new();

        let err = store
            .update(User {
                id: UserId::new(99),
                name: "Ghost".to_string(),
                email: "ghost@example.com".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn delete_twice_reports_not_found_the_second_time() {
        let store = InMemoryUserStore::new();
        let created = store.create(draft("Alice", "alice@example.com")).await.unwrap();

        store.delete(created.id).await.unwrap();
        let err = store.delete(created.id).await.unwrap_err();

        assert!(matches!(err, StoreError::NotFound));
    }
}
