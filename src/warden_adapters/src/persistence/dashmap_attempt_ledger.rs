use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use warden_core::{AttemptLedger, LedgerError, LoginAttempt, UserId};

/// Entries kept per user; the oldest is evicted when the cap is exceeded.
const HISTORY_LIMIT: usize = 10;

/// Sharded in-memory login-attempt ledger. Each user's history lives under
/// its own map entry, so appends for one user never contend with another.
#[derive(Default, Clone)]
pub struct DashMapAttemptLedger {
    attempts: Arc<DashMap<UserId, VecDeque<LoginAttempt>>>,
}

impl DashMapAttemptLedger {
    pub fn new() -> Self {
        Self {
            attempts: Arc::new(DashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl AttemptLedger for DashMapAttemptLedger {
    #[tracing::instrument(name = "Recording login attempt", skip(self, attempt))]
    async fn record(&self, user_id: UserId, attempt: LoginAttempt) -> Result<(), LedgerError> {
        let mut history = self.attempts.entry(user_id).or_default();
        history.push_back(attempt);
        while history.len() > HISTORY_LIMIT {
            history.pop_front();
        }
        Ok(())
    }

    async fn recent_failures(
        &self,
        user_id: UserId,
        window: Duration,
        now: DateTime<Utc>,
    ) -> Result<usize, LedgerError> {
        Ok(self
            .attempts
            .get(&user_id)
            .map(|history| {
                history
                    .iter()
                    .filter(|attempt| attempt.is_recent_failure(window, now))
                    .count()
            })
            .unwrap_or(0))
    }

    async fn history(&self, user_id: UserId) -> Result<Vec<LoginAttempt>, LedgerError> {
        Ok(self
            .attempts
            .get(&user_id)
            .map(|history| history.iter().cloned().collect())
            .unwrap_or_default())
    }
}
