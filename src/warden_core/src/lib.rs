pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::EmailAddress,
    login_attempt::{DeviceInfo, LoginAttempt},
    otp::{OtpCode, OtpSession, OtpVerdict},
    password::{Password, PasswordDigest},
    phone::PhoneNumber,
    settings::{SecuritySettings, SecuritySettingsUpdate},
    user::{User, UserId},
    username::Username,
    ValidationError,
};

pub use ports::{
    repositories::{
        AttemptLedger, LedgerError, LockoutError, LockoutStore, OtpSessionStore,
        OtpSessionStoreError, OtpVerifyError, SettingsError, SettingsStore, UserStore,
        UserStoreError,
    },
    services::{Clock, OtpDeliverer, PasswordHashError, PasswordHasher},
};
