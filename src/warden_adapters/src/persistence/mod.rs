pub mod dashmap_attempt_ledger;
pub mod dashmap_lockout_store;
pub mod dashmap_otp_session_store;
pub mod dashmap_settings_store;
pub mod hashmap_user_store;

pub use dashmap_attempt_ledger::DashMapAttemptLedger;
pub use dashmap_lockout_store::DashMapLockoutStore;
pub use dashmap_otp_session_store::DashMapOtpSessionStore;
pub use dashmap_settings_store::DashMapSettingsStore;
pub use hashmap_user_store::HashMapUserStore;
