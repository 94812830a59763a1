use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// One-time passcode: exactly 6 ASCII digits, leading zeros preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OtpCode(String);

impl OtpCode {
    /// Uniformly random code in `000000..=999999`.
    pub fn random() -> Self {
        Self(format!("{:06}", rand::rng().random_range(0..1_000_000)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for OtpCode {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.len() != 6 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::MalformedOtpCode);
        }
        Ok(Self(value.to_string()))
    }
}

impl std::fmt::Display for OtpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Outcome of feeding one candidate code to a live session.
///
/// Every variant except `WrongCode` ends the session; the caller is
/// responsible for deleting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpVerdict {
    Verified,
    Expired,
    AttemptsExhausted,
    WrongCode,
}

impl OtpVerdict {
    pub fn ends_session(self) -> bool {
        !matches!(self, OtpVerdict::WrongCode)
    }
}

/// Live passcode session for one user. At most one exists per user;
/// issuing a new code replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpSession {
    code: OtpCode,
    expires_at: DateTime<Utc>,
    attempts: u8,
}

impl OtpSession {
    /// Verification attempts allowed before the session is destroyed.
    pub const MAX_ATTEMPTS: u8 = 3;

    pub fn new(code: OtpCode, expires_at: DateTime<Utc>) -> Self {
        Self {
            code,
            expires_at,
            attempts: 0,
        }
    }

    pub fn code(&self) -> &OtpCode {
        &self.code
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    /// Whole seconds until expiry, clamped at zero.
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> u64 {
        (self.expires_at - now).num_seconds().max(0) as u64
    }

    /// Run one verification attempt against this session.
    ///
    /// Order matters: expiry is checked first, then the attempt counter is
    /// incremented and checked *before* the candidate is compared. The
    /// fourth call on a session is therefore rejected outright as
    /// `AttemptsExhausted` even if it carries the right code. That
    /// asymmetry is the intended brute-force cap, not a bug.
    pub fn verify(&mut self, candidate: &str, now: DateTime<Utc>) -> OtpVerdict {
        if now > self.expires_at {
            return OtpVerdict::Expired;
        }

        self.attempts += 1;
        if self.attempts > Self::MAX_ATTEMPTS {
            return OtpVerdict::AttemptsExhausted;
        }

        if self.code.as_str() != candidate {
            return OtpVerdict::WrongCode;
        }

        OtpVerdict::Verified
    }
}
