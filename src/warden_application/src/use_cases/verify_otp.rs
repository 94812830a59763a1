use warden_core::{Clock, OtpSessionStore, OtpVerifyError, UserId};

/// Verify-OTP use case - feeds one candidate code to the user's live
/// session.
///
/// The attempt-counting rules live in the session itself (see
/// `OtpSession::verify`); this use case supplies the clock and leaves the
/// per-user atomicity to the store.
pub struct VerifyOtpUseCase<'a, S, C>
where
    S: OtpSessionStore,
    C: Clock,
{
    sessions: &'a S,
    clock: &'a C,
}

impl<'a, S, C> VerifyOtpUseCase<'a, S, C>
where
    S: OtpSessionStore,
    C: Clock,
{
    pub fn new(sessions: &'a S, clock: &'a C) -> Self {
        Self { sessions, clock }
    }

    /// Execute the verify-OTP use case
    #[tracing::instrument(name = "VerifyOtpUseCase::execute", skip(self, candidate))]
    pub async fn execute(&self, user_id: UserId, candidate: &str) -> Result<(), OtpVerifyError> {
        self.sessions
            .verify(user_id, candidate, self.clock.now())
            .await
    }
}
