use serde::{Deserialize, Serialize};

/// Per-user security preferences, read by the UI's settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    pub two_factor_enabled: bool,
    pub trusted_devices: Vec<String>,
    pub session_timeout_minutes: u32,
    pub login_notifications: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            two_factor_enabled: true,
            trusted_devices: Vec::new(),
            session_timeout_minutes: 30,
            login_notifications: true,
        }
    }
}

/// Partial update for [`SecuritySettings`]: fields left as `None` keep
/// their current value. Fixed shape rather than an open-ended merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettingsUpdate {
    pub two_factor_enabled: Option<bool>,
    pub trusted_devices: Option<Vec<String>>,
    pub session_timeout_minutes: Option<u32>,
    pub login_notifications: Option<bool>,
}

impl SecuritySettingsUpdate {
    /// Shallow-merge into `current`, field by field.
    pub fn apply_to(self, current: &mut SecuritySettings) {
        if let Some(enabled) = self.two_factor_enabled {
            current.two_factor_enabled = enabled;
        }
        if let Some(devices) = self.trusted_devices {
            current.trusted_devices = devices;
        }
        if let Some(timeout) = self.session_timeout_minutes {
            current.session_timeout_minutes = timeout;
        }
        if let Some(notify) = self.login_notifications {
            current.login_notifications = notify;
        }
    }
}
