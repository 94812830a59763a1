use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use warden_core::{LockoutError, LockoutStore, UserId};

/// Sharded in-memory lockout records: one optional expiry timestamp per
/// user. Readers decide whether a record is still in force; nothing here
/// sweeps expired entries.
#[derive(Default, Clone)]
pub struct DashMapLockoutStore {
    lockouts: Arc<DashMap<UserId, DateTime<Utc>>>,
}

impl DashMapLockoutStore {
    pub fn new() -> Self {
        Self {
            lockouts: Arc::new(DashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl LockoutStore for DashMapLockoutStore {
    async fn locked_until(&self, user_id: UserId) -> Result<Option<DateTime<Utc>>, LockoutError> {
        Ok(self.lockouts.get(&user_id).map(|entry| *entry.value()))
    }

    #[tracing::instrument(name = "Locking account", skip(self))]
    async fn lock(&self, user_id: UserId, until: DateTime<Utc>) -> Result<(), LockoutError> {
        self.lockouts.insert(user_id, until);
        Ok(())
    }

    async fn clear(&self, user_id: UserId) -> Result<(), LockoutError> {
        self.lockouts.remove(&user_id);
        Ok(())
    }
}
