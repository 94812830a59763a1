use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::domain::{
    login_attempt::LoginAttempt,
    otp::OtpSession,
    settings::{SecuritySettings, SecuritySettingsUpdate},
    user::{User, UserId},
    username::Username,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists with this username, email, or phone")]
    IdentityTaken,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::IdentityTaken, Self::IdentityTaken) => true,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Owner of user identity records. Registration must perform the
/// uniqueness check over username, email, and phone and the insertion as
/// one atomic unit across the whole store.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError>;
    async fn get_by_username(&self, username: &Username) -> Result<User, UserStoreError>;
    async fn get_by_id(&self, id: UserId) -> Result<User, UserStoreError>;
}

// AttemptLedger port trait and errors
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Per-user append-only login history, bounded to the most recent 10
/// entries (oldest evicted first). Time is passed in by the caller so the
/// ledger itself depends on nothing but its entries.
#[async_trait]
pub trait AttemptLedger: Send + Sync {
    async fn record(&self, user_id: UserId, attempt: LoginAttempt) -> Result<(), LedgerError>;
    async fn recent_failures(
        &self,
        user_id: UserId,
        window: Duration,
        now: DateTime<Utc>,
    ) -> Result<usize, LedgerError>;
    /// Insertion order, most-recent-last.
    async fn history(&self, user_id: UserId) -> Result<Vec<LoginAttempt>, LedgerError>;
}

// LockoutStore port trait and errors
#[derive(Debug, Error, PartialEq)]
pub enum LockoutError {
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Per-user optional lockout-expiry timestamp. Expired records are ignored
/// lazily by readers, never swept.
#[async_trait]
pub trait LockoutStore: Send + Sync {
    async fn locked_until(&self, user_id: UserId) -> Result<Option<DateTime<Utc>>, LockoutError>;
    async fn lock(&self, user_id: UserId, until: DateTime<Utc>) -> Result<(), LockoutError>;
    async fn clear(&self, user_id: UserId) -> Result<(), LockoutError>;
}

// OtpSessionStore port trait and errors
#[derive(Debug, Error, PartialEq)]
pub enum OtpSessionStoreError {
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

#[derive(Debug, Error)]
pub enum OtpVerifyError {
    #[error("No OTP session found. Please request a new OTP.")]
    NoSession,
    #[error("OTP has expired. Please request a new one.")]
    Expired,
    #[error("Too many failed attempts. Please request a new OTP.")]
    TooManyAttempts,
    #[error("Invalid OTP. Please try again.")]
    InvalidCode,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for OtpVerifyError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NoSession, Self::NoSession) => true,
            (Self::Expired, Self::Expired) => true,
            (Self::TooManyAttempts, Self::TooManyAttempts) => true,
            (Self::InvalidCode, Self::InvalidCode) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Owner of live OTP sessions, at most one per user.
///
/// `verify` runs the whole read-modify-write of one attempt (expiry check,
/// attempt increment, comparison, session deletion) atomically with
/// respect to other operations on the same user.
#[async_trait]
pub trait OtpSessionStore: Send + Sync {
    /// Store a session, replacing any live one for this user.
    async fn put(&self, user_id: UserId, session: OtpSession) -> Result<(), OtpSessionStoreError>;
    async fn verify(
        &self,
        user_id: UserId,
        candidate: &str,
        now: DateTime<Utc>,
    ) -> Result<(), OtpVerifyError>;
    /// Whole seconds until expiry; 0 when no session exists.
    async fn remaining_seconds(
        &self,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> Result<u64, OtpSessionStoreError>;
}

// SettingsStore port trait and errors
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Per-user security preferences. Reads fall back to defaults without
/// persisting them; writes merge a partial update into current-or-default
/// settings and store the result.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, user_id: UserId) -> Result<SecuritySettings, SettingsError>;
    async fn update(
        &self,
        user_id: UserId,
        update: SecuritySettingsUpdate,
    ) -> Result<(), SettingsError>;
}
