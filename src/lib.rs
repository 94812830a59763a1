//! # Warden - University Portal Authentication Library
//!
//! This is a facade crate that re-exports all public APIs from the warden
//! components. Use this crate to get access to the full authentication and
//! session-risk engine in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! warden = { path = "../warden" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `EmailAddress`, `Password`, `User`, etc.
//! - **Repository traits**: `UserStore`, `AttemptLedger`, `LockoutStore`,
//!   `OtpSessionStore`, `SettingsStore`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, `IssueOtpUseCase`,
//!   `VerifyOtpUseCase`
//! - **Adapters**: `HashMapUserStore`, `DashMapOtpSessionStore`,
//!   `Argon2PasswordHasher`, `LoggingSmsClient`, etc.
//! - **Service**: `AuthService` - the main entry point, consumed in-process
//!   by the UI layer
//!
//! ## Example
//!
//! ```rust
//! use warden::{EmailAddress, OtpExposure, Password, PhoneNumber, Username};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let service = warden::InMemoryAuthService::in_memory();
//!
//! let user_id = service
//!     .register(
//!         Username::try_from("jdoe").unwrap(),
//!         EmailAddress::try_from("jdoe@university.edu").unwrap(),
//!         PhoneNumber::try_from("+1 555 000 1111").unwrap(),
//!         Password::try_from("Str0ngpass".to_string()).unwrap(),
//!     )
//!     .await
//!     .unwrap();
//!
//! let issued = service
//!     .issue_otp(user_id, OtpExposure::ExposeForDemo)
//!     .await
//!     .unwrap();
//! service
//!     .verify_otp(user_id, issued.code.unwrap().as_str())
//!     .await
//!     .unwrap();
//! # }
//! ```

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use warden_core::*;
}

// Re-export most commonly used core types at the root level
pub use warden_core::{
    DeviceInfo, EmailAddress, LoginAttempt, OtpCode, OtpSession, Password, PasswordDigest,
    PhoneNumber, SecuritySettings, SecuritySettingsUpdate, User, UserId, Username,
    ValidationError,
};

// ============================================================================
// Repository Traits (Ports)
// ============================================================================

/// Repository trait definitions
pub mod repositories {
    pub use warden_core::{
        AttemptLedger, LedgerError, LockoutError, LockoutStore, OtpSessionStore,
        OtpSessionStoreError, OtpVerifyError, SettingsError, SettingsStore, UserStore,
        UserStoreError,
    };
}

// Re-export repository traits at root level
pub use warden_core::{
    AttemptLedger, Clock, LedgerError, LockoutError, LockoutStore, OtpDeliverer, OtpSessionStore,
    OtpSessionStoreError, OtpVerifyError, PasswordHashError, PasswordHasher, SettingsError,
    SettingsStore, UserStore, UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use warden_application::*;
}

// Re-export use cases at root level
pub use warden_application::{
    IssueOtpError, IssueOtpUseCase, IssuedOtp, LockoutPolicy, LoginError, LoginUseCase,
    OtpExposure, OtpPolicy, RegisterError, RegisterUseCase, VerifyOtpUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use warden_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use warden_adapters::hashing::*;
    }

    /// Passcode delivery
    pub mod sms {
        pub use warden_adapters::sms::*;
    }

    /// Clocks
    pub mod clock {
        pub use warden_adapters::clock::*;
    }
}

// Re-export commonly used adapters at root level
pub use warden_adapters::{
    Argon2PasswordHasher, DashMapAttemptLedger, DashMapLockoutStore, DashMapOtpSessionStore,
    DashMapSettingsStore, HashMapUserStore, LoggingSmsClient, ManualClock, SystemClock,
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main auth service
pub use warden_service::{AuthService, InMemoryAuthService};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

/// Re-export chrono durations for policy configuration
pub use chrono::Duration;
