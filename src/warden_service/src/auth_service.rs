use warden_adapters::{
    Argon2PasswordHasher, DashMapAttemptLedger, DashMapLockoutStore, DashMapOtpSessionStore,
    DashMapSettingsStore, HashMapUserStore, LoggingSmsClient, SystemClock,
};
use warden_application::{
    IssueOtpError, IssueOtpUseCase, IssuedOtp, LockoutPolicy, LoginError, LoginUseCase,
    OtpExposure, OtpPolicy, RegisterError, RegisterUseCase, VerifyOtpUseCase,
};
use warden_core::{
    AttemptLedger, Clock, DeviceInfo, EmailAddress, LedgerError, LockoutStore, LoginAttempt,
    OtpDeliverer, OtpSessionStore, OtpSessionStoreError, OtpVerifyError, Password, PasswordHasher,
    PhoneNumber, SecuritySettings, SecuritySettingsUpdate, SettingsError, SettingsStore, User,
    UserId, UserStore, UserStoreError, Username,
};

/// Main authentication service consumed in-process by the UI layer.
///
/// Owns one store per concern; every mutating operation is atomic with
/// respect to other operations on the same user, while different users
/// proceed independently. Construct once and share by reference.
///
/// # Note on Architecture
/// Stores implement Clone via internal Arc sharing; use cases borrow them
/// per call, so the service itself is cheap to build and to share.
pub struct AuthService<U, H, L, K, S, T, D, C>
where
    U: UserStore,
    H: PasswordHasher,
    L: AttemptLedger,
    K: LockoutStore,
    S: OtpSessionStore,
    T: SettingsStore,
    D: OtpDeliverer,
    C: Clock,
{
    user_store: U,
    hasher: H,
    ledger: L,
    lockouts: K,
    otp_sessions: S,
    settings: T,
    deliverer: D,
    clock: C,
    lockout_policy: LockoutPolicy,
    otp_policy: OtpPolicy,
}

impl<U, H, L, K, S, T, D, C> AuthService<U, H, L, K, S, T, D, C>
where
    U: UserStore,
    H: PasswordHasher,
    L: AttemptLedger,
    K: LockoutStore,
    S: OtpSessionStore,
    T: SettingsStore,
    D: OtpDeliverer,
    C: Clock,
{
    /// Create a new AuthService over the provided stores and services,
    /// with the default lockout and OTP policies.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_store: U,
        hasher: H,
        ledger: L,
        lockouts: K,
        otp_sessions: S,
        settings: T,
        deliverer: D,
        clock: C,
    ) -> Self {
        Self {
            user_store,
            hasher,
            ledger,
            lockouts,
            otp_sessions,
            settings,
            deliverer,
            clock,
            lockout_policy: LockoutPolicy::default(),
            otp_policy: OtpPolicy::default(),
        }
    }

    /// Override the default policies (threshold, windows, OTP TTL).
    pub fn with_policies(mut self, lockout: LockoutPolicy, otp: OtpPolicy) -> Self {
        self.lockout_policy = lockout;
        self.otp_policy = otp;
        self
    }

    /// Register a new user; fails with `IdentityTaken` when the username,
    /// email, or phone is already in use.
    pub async fn register(
        &self,
        username: Username,
        email: EmailAddress,
        phone: PhoneNumber,
        password: Password,
    ) -> Result<UserId, RegisterError> {
        RegisterUseCase::new(&self.user_store, &self.hasher, &self.clock)
            .execute(username, email, phone, password)
            .await
    }

    /// Password login. Runs the lockout state machine and records the
    /// attempt in the user's login history.
    pub async fn login(
        &self,
        username: &Username,
        password: &Password,
        device: Option<DeviceInfo>,
    ) -> Result<UserId, LoginError> {
        LoginUseCase::new(
            &self.user_store,
            &self.hasher,
            &self.ledger,
            &self.lockouts,
            &self.clock,
            self.lockout_policy,
        )
        .execute(username, password, device)
        .await
    }

    /// Mint a fresh OTP for the user, replacing any live session, and hand
    /// it to the deliverer. The code comes back to the caller only under
    /// `OtpExposure::ExposeForDemo`.
    pub async fn issue_otp(
        &self,
        user_id: UserId,
        exposure: OtpExposure,
    ) -> Result<IssuedOtp, IssueOtpError> {
        IssueOtpUseCase::new(
            &self.user_store,
            &self.otp_sessions,
            &self.deliverer,
            &self.clock,
            self.otp_policy,
        )
        .execute(user_id, exposure)
        .await
    }

    /// Feed one candidate code to the user's live OTP session.
    pub async fn verify_otp(&self, user_id: UserId, candidate: &str) -> Result<(), OtpVerifyError> {
        VerifyOtpUseCase::new(&self.otp_sessions, &self.clock)
            .execute(user_id, candidate)
            .await
    }

    /// Whole seconds until the user's OTP expires; 0 when no session.
    pub async fn otp_remaining_seconds(
        &self,
        user_id: UserId,
    ) -> Result<u64, OtpSessionStoreError> {
        self.otp_sessions
            .remaining_seconds(user_id, self.clock.now())
            .await
    }

    pub async fn get_user(&self, user_id: UserId) -> Result<User, UserStoreError> {
        self.user_store.get_by_id(user_id).await
    }

    /// Login history, insertion order, at most the 10 most recent entries.
    pub async fn login_history(&self, user_id: UserId) -> Result<Vec<LoginAttempt>, LedgerError> {
        self.ledger.history(user_id).await
    }

    /// Current security settings, falling back to the documented defaults
    /// for a never-configured user.
    pub async fn security_settings(
        &self,
        user_id: UserId,
    ) -> Result<SecuritySettings, SettingsError> {
        self.settings.get(user_id).await
    }

    /// Merge a partial settings update; untouched fields keep their value.
    pub async fn update_security_settings(
        &self,
        user_id: UserId,
        update: SecuritySettingsUpdate,
    ) -> Result<(), SettingsError> {
        self.settings.update(user_id, update).await
    }
}

/// The service over the in-memory adapters, as used by the prototype UI.
pub type InMemoryAuthService = AuthService<
    HashMapUserStore,
    Argon2PasswordHasher,
    DashMapAttemptLedger,
    DashMapLockoutStore,
    DashMapOtpSessionStore,
    DashMapSettingsStore,
    LoggingSmsClient,
    SystemClock,
>;

impl InMemoryAuthService {
    /// Wire up the in-memory stores, the Argon2 hasher, the logging
    /// deliverer, and the system clock.
    pub fn in_memory() -> Self {
        AuthService::new(
            HashMapUserStore::new(),
            Argon2PasswordHasher::new(),
            DashMapAttemptLedger::new(),
            DashMapLockoutStore::new(),
            DashMapOtpSessionStore::new(),
            DashMapSettingsStore::new(),
            LoggingSmsClient::new(),
            SystemClock::new(),
        )
    }
}
