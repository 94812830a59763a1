use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use warden_core::{User, UserId, UserStore, UserStoreError, Username};

/// In-memory user store. One store-wide lock guards the identity record
/// map and its three unique indexes, so the duplicate check and the insert
/// of a registration are a single atomic unit.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    users: HashMap<UserId, User>,
    by_username: HashMap<String, UserId>,
    by_email: HashMap<String, UserId>,
    by_phone: HashMap<String, UserId>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    #[tracing::instrument(name = "Adding user to in-memory store", skip_all)]
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut inner = self.inner.write().await;

        if inner.by_username.contains_key(user.username().as_ref())
            || inner.by_email.contains_key(user.email().as_ref())
            || inner.by_phone.contains_key(user.phone().as_ref())
        {
            return Err(UserStoreError::IdentityTaken);
        }

        let id = user.id();
        inner
            .by_username
            .insert(user.username().as_ref().to_string(), id);
        inner.by_email.insert(user.email().as_ref().to_string(), id);
        inner.by_phone.insert(user.phone().as_ref().to_string(), id);
        inner.users.insert(id, user);
        Ok(())
    }

    async fn get_by_username(&self, username: &Username) -> Result<User, UserStoreError> {
        let inner = self.inner.read().await;
        inner
            .by_username
            .get(username.as_ref())
            .and_then(|id| inner.users.get(id))
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn get_by_id(&self, id: UserId) -> Result<User, UserStoreError> {
        let inner = self.inner.read().await;
        inner
            .users
            .get(&id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }
}
