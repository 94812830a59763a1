use warden_adapters::{
    Argon2PasswordHasher, DashMapAttemptLedger, DashMapLockoutStore, DashMapOtpSessionStore,
    DashMapSettingsStore, HashMapUserStore, LoggingSmsClient, ManualClock,
};
use warden_core::{EmailAddress, Password, PhoneNumber, UserId, Username};
use warden_service::AuthService;

pub type TestService = AuthService<
    HashMapUserStore,
    Argon2PasswordHasher,
    DashMapAttemptLedger,
    DashMapLockoutStore,
    DashMapOtpSessionStore,
    DashMapSettingsStore,
    LoggingSmsClient,
    ManualClock,
>;

pub struct TestApp {
    pub service: TestService,
    pub clock: ManualClock,
}

/// A full service over the in-memory adapters, with a hand-cranked clock
/// so lockout and OTP expiry can be exercised without sleeping.
pub fn test_app() -> TestApp {
    let clock = ManualClock::default();
    let service = AuthService::new(
        HashMapUserStore::new(),
        Argon2PasswordHasher::new(),
        DashMapAttemptLedger::new(),
        DashMapLockoutStore::new(),
        DashMapOtpSessionStore::new(),
        DashMapSettingsStore::new(),
        LoggingSmsClient::new(),
        clock.clone(),
    );
    TestApp { service, clock }
}

pub const JANE_PASSWORD: &str = "Str0ngpass";

pub fn username(raw: &str) -> Username {
    Username::try_from(raw).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(raw.to_string()).unwrap()
}

/// Register the standard test user and return her id.
pub async fn register_jane(app: &TestApp) -> UserId {
    app.service
        .register(
            username("jdoe"),
            EmailAddress::try_from("jdoe@university.edu").unwrap(),
            PhoneNumber::try_from("+1 555 000 1111").unwrap(),
            password(JANE_PASSWORD),
        )
        .await
        .unwrap()
}
