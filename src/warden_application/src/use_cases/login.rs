use chrono::{DateTime, Duration, Utc};
use warden_core::{
    AttemptLedger, Clock, DeviceInfo, LedgerError, LockoutError, LockoutStore, LoginAttempt,
    Password, PasswordHasher, UserId, UserStore, UserStoreError, Username,
};

/// Brute-force lockout knobs. Defaults match the reference behavior:
/// 5 failures inside 15 minutes lock the account for 30 minutes.
#[derive(Debug, Clone, Copy)]
pub struct LockoutPolicy {
    pub max_recent_failures: usize,
    pub failure_window: Duration,
    pub lock_duration: Duration,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_recent_failures: 5,
            failure_window: Duration::minutes(15),
            lock_duration: Duration::minutes(30),
        }
    }
}

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Deliberately identical for an unknown username and a wrong
    /// password, so callers cannot enumerate accounts.
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Account locked. Try again in {remaining_minutes} minutes.")]
    AccountLocked { remaining_minutes: i64 },
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Ledger error: {0}")]
    LedgerError(#[from] LedgerError),
    #[error("Lockout store error: {0}")]
    LockoutError(#[from] LockoutError),
}

impl LoginError {
    pub fn is_locked(&self) -> bool {
        matches!(self, LoginError::AccountLocked { .. })
    }
}

/// Login use case - credential check plus lockout state machine.
///
/// Per-user lock state is evaluated lazily: an expired lock simply stops
/// rejecting logins and is cleared by the next successful one.
pub struct LoginUseCase<'a, U, H, L, K, C>
where
    U: UserStore,
    H: PasswordHasher,
    L: AttemptLedger,
    K: LockoutStore,
    C: Clock,
{
    user_store: &'a U,
    hasher: &'a H,
    ledger: &'a L,
    lockouts: &'a K,
    clock: &'a C,
    policy: LockoutPolicy,
}

impl<'a, U, H, L, K, C> LoginUseCase<'a, U, H, L, K, C>
where
    U: UserStore,
    H: PasswordHasher,
    L: AttemptLedger,
    K: LockoutStore,
    C: Clock,
{
    pub fn new(
        user_store: &'a U,
        hasher: &'a H,
        ledger: &'a L,
        lockouts: &'a K,
        clock: &'a C,
        policy: LockoutPolicy,
    ) -> Self {
        Self {
            user_store,
            hasher,
            ledger,
            lockouts,
            clock,
            policy,
        }
    }

    /// Execute the login use case
    ///
    /// # Returns
    /// The user's id on success; `InvalidCredentials` or `AccountLocked`
    /// otherwise. A locked account is rejected before the password hash is
    /// consulted and without touching the ledger.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: &Username,
        password: &Password,
        device: Option<DeviceInfo>,
    ) -> Result<UserId, LoginError> {
        let user = match self.user_store.get_by_username(username).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => return Err(LoginError::InvalidCredentials),
            Err(e) => return Err(LoginError::UserStoreError(e)),
        };
        let user_id = user.id();

        let now = self.clock.now();
        if let Some(until) = self.lockouts.locked_until(user_id).await? {
            if now < until {
                tracing::warn!(%user_id, "login rejected: account locked");
                return Err(LoginError::AccountLocked {
                    remaining_minutes: minutes_until(until, now),
                });
            }
        }

        let password_ok = self.hasher.verify(password, user.password_digest()).await;

        // Hashing takes tens of milliseconds; stamp the attempt after it.
        let now = self.clock.now();
        self.ledger
            .record(user_id, LoginAttempt::new(now, password_ok, device))
            .await?;

        if !password_ok {
            let recent = self
                .ledger
                .recent_failures(user_id, self.policy.failure_window, now)
                .await?;
            if recent >= self.policy.max_recent_failures {
                let until = now + self.policy.lock_duration;
                self.lockouts.lock(user_id, until).await?;
                tracing::warn!(%user_id, failures = recent, "account locked");
                return Err(LoginError::AccountLocked {
                    remaining_minutes: minutes_until(until, now),
                });
            }
            return Err(LoginError::InvalidCredentials);
        }

        self.lockouts.clear(user_id).await?;
        tracing::info!(%user_id, "login successful");
        Ok(user_id)
    }
}

/// Whole minutes until `until`, rounded up, never negative.
fn minutes_until(until: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let seconds = (until - now).num_seconds().max(0);
    (seconds + 59) / 60
}
