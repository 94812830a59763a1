use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use warden_core::{
    OtpSession, OtpSessionStore, OtpSessionStoreError, OtpVerdict, OtpVerifyError, UserId,
};

/// Sharded in-memory OTP sessions, at most one per user. The dashmap
/// entry guard makes each verification's read-modify-write (and eventual
/// session deletion) atomic with respect to the same user.
#[derive(Default, Clone)]
pub struct DashMapOtpSessionStore {
    sessions: Arc<DashMap<UserId, OtpSession>>,
}

impl DashMapOtpSessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl OtpSessionStore for DashMapOtpSessionStore {
    #[tracing::instrument(name = "Storing OTP session", skip(self, session))]
    async fn put(&self, user_id: UserId, session: OtpSession) -> Result<(), OtpSessionStoreError> {
        self.sessions.insert(user_id, session);
        Ok(())
    }

    #[tracing::instrument(name = "Verifying OTP", skip(self, candidate))]
    async fn verify(
        &self,
        user_id: UserId,
        candidate: &str,
        now: DateTime<Utc>,
    ) -> Result<(), OtpVerifyError> {
        match self.sessions.entry(user_id) {
            Entry::Vacant(_) => Err(OtpVerifyError::NoSession),
            Entry::Occupied(mut occupied) => {
                let verdict = occupied.get_mut().verify(candidate, now);
                if verdict.ends_session() {
                    occupied.remove();
                }
                match verdict {
                    OtpVerdict::Verified => Ok(()),
                    OtpVerdict::Expired => Err(OtpVerifyError::Expired),
                    OtpVerdict::AttemptsExhausted => Err(OtpVerifyError::TooManyAttempts),
                    OtpVerdict::WrongCode => Err(OtpVerifyError::InvalidCode),
                }
            }
        }
    }

    async fn remaining_seconds(
        &self,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> Result<u64, OtpSessionStoreError> {
        Ok(self
            .sessions
            .get(&user_id)
            .map(|session| session.remaining_seconds(now))
            .unwrap_or(0))
    }
}
