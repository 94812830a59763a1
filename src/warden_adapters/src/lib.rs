pub mod clock;
pub mod hashing;
pub mod persistence;
pub mod sms;

pub use clock::{ManualClock, SystemClock};
pub use hashing::Argon2PasswordHasher;
pub use persistence::{
    DashMapAttemptLedger, DashMapLockoutStore, DashMapOtpSessionStore, DashMapSettingsStore,
    HashMapUserStore,
};
pub use sms::LoggingSmsClient;
