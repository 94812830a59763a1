use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{
    otp::OtpCode,
    password::{Password, PasswordDigest},
    user::User,
};

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Failed to hash password: {0}")]
    Hashing(String),
}

/// One-way salted password hashing with a fixed work factor.
///
/// Hashing is deliberately slow (tens of milliseconds); implementations
/// must not run it under any lock that serializes unrelated users.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Each call salts freshly, so hashing the same input twice yields two
    /// different digests.
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, PasswordHashError>;

    /// Constant-time-safe comparison. A malformed digest is a mismatch,
    /// never an error.
    async fn verify(&self, candidate: &Password, digest: &PasswordDigest) -> bool;
}

/// Port trait for out-of-band passcode delivery (SMS in production; the
/// prototype adapter just logs the code).
#[async_trait]
pub trait OtpDeliverer: Send + Sync {
    async fn deliver(&self, recipient: &User, code: &OtpCode) -> Result<(), String>;
}

/// Source of the current time. Everything time-dependent (lockout expiry,
/// OTP expiry, ledger windows) reads through this so tests can advance a
/// manual clock instead of sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
