use std::sync::Arc;

use dashmap::DashMap;

use warden_core::{
    SecuritySettings, SecuritySettingsUpdate, SettingsError, SettingsStore, UserId,
};

/// Sharded in-memory security settings. Reads fall back to the documented
/// defaults without persisting them; the first write materializes an
/// entry.
#[derive(Default, Clone)]
pub struct DashMapSettingsStore {
    settings: Arc<DashMap<UserId, SecuritySettings>>,
}

impl DashMapSettingsStore {
    pub fn new() -> Self {
        Self {
            settings: Arc::new(DashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl SettingsStore for DashMapSettingsStore {
    async fn get(&self, user_id: UserId) -> Result<SecuritySettings, SettingsError> {
        Ok(self
            .settings
            .get(&user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    #[tracing::instrument(name = "Updating security settings", skip(self, update))]
    async fn update(
        &self,
        user_id: UserId,
        update: SecuritySettingsUpdate,
    ) -> Result<(), SettingsError> {
        let mut entry = self.settings.entry(user_id).or_default();
        update.apply_to(entry.value_mut());
        Ok(())
    }
}
