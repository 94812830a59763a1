use chrono::{DateTime, Duration, Utc};
use warden_core::{
    Clock, OtpCode, OtpDeliverer, OtpSession, OtpSessionStore, OtpSessionStoreError, UserId,
    UserStore, UserStoreError,
};

/// Passcode issuance knobs. Default TTL matches the reference: 60 seconds.
#[derive(Debug, Clone, Copy)]
pub struct OtpPolicy {
    pub ttl: Duration,
}

impl Default for OtpPolicy {
    fn default() -> Self {
        Self {
            ttl: Duration::seconds(60),
        }
    }
}

/// Whether the issued code is handed back to the caller.
///
/// `ExposeForDemo` exists because this is a prototype whose UI displays
/// the code instead of receiving it out-of-band. A hardened deployment
/// uses `DeliverOnly`, which only reports that the code was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpExposure {
    ExposeForDemo,
    DeliverOnly,
}

/// Issuance receipt. `code` is `None` unless the caller asked for demo
/// exposure.
#[derive(Debug, Clone)]
pub struct IssuedOtp {
    pub code: Option<OtpCode>,
    pub expires_at: DateTime<Utc>,
}

/// Error types specific to the issue-OTP use case
#[derive(Debug, thiserror::Error)]
pub enum IssueOtpError {
    #[error("User not found")]
    UserNotFound,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("OTP session store error: {0}")]
    SessionStoreError(#[from] OtpSessionStoreError),
    #[error("Failed to deliver OTP: {0}")]
    DeliveryError(String),
}

/// Issue-OTP use case - mints a fresh code and replaces any live session.
pub struct IssueOtpUseCase<'a, U, S, D, C>
where
    U: UserStore,
    S: OtpSessionStore,
    D: OtpDeliverer,
    C: Clock,
{
    user_store: &'a U,
    sessions: &'a S,
    deliverer: &'a D,
    clock: &'a C,
    policy: OtpPolicy,
}

impl<'a, U, S, D, C> IssueOtpUseCase<'a, U, S, D, C>
where
    U: UserStore,
    S: OtpSessionStore,
    D: OtpDeliverer,
    C: Clock,
{
    pub fn new(
        user_store: &'a U,
        sessions: &'a S,
        deliverer: &'a D,
        clock: &'a C,
        policy: OtpPolicy,
    ) -> Self {
        Self {
            user_store,
            sessions,
            deliverer,
            clock,
            policy,
        }
    }

    /// Execute the issue-OTP use case
    ///
    /// Replaces any prior session for the user, so the previous code stops
    /// working the moment a new one is issued.
    #[tracing::instrument(name = "IssueOtpUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        user_id: UserId,
        exposure: OtpExposure,
    ) -> Result<IssuedOtp, IssueOtpError> {
        let user = match self.user_store.get_by_id(user_id).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => return Err(IssueOtpError::UserNotFound),
            Err(e) => return Err(IssueOtpError::UserStoreError(e)),
        };

        let code = OtpCode::random();
        let expires_at = self.clock.now() + self.policy.ttl;
        self.sessions
            .put(user_id, OtpSession::new(code.clone(), expires_at))
            .await?;

        self.deliverer
            .deliver(&user, &code)
            .await
            .map_err(IssueOtpError::DeliveryError)?;

        tracing::info!(%user_id, "OTP issued");
        Ok(IssuedOtp {
            code: match exposure {
                OtpExposure::ExposeForDemo => Some(code),
                OtpExposure::DeliverOnly => None,
            },
            expires_at,
        })
    }
}
