use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Network/device metadata the UI layer may attach to a login call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// One entry in a user's login history. Recorded on every password-login
/// call that reaches credential verification, success or failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginAttempt {
    pub timestamp: DateTime<Utc>,
    pub success: bool,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl LoginAttempt {
    pub fn new(timestamp: DateTime<Utc>, success: bool, device: Option<DeviceInfo>) -> Self {
        let device = device.unwrap_or_default();
        Self {
            timestamp,
            success,
            ip_address: device.ip_address,
            user_agent: device.user_agent,
        }
    }

    /// True when this attempt is a failure inside the trailing `window`
    /// ending at `now`.
    pub fn is_recent_failure(&self, window: chrono::Duration, now: DateTime<Utc>) -> bool {
        !self.success && now - self.timestamp < window
    }
}
