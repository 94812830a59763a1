pub mod email;
pub mod login_attempt;
pub mod otp;
pub mod password;
pub mod phone;
pub mod settings;
pub mod user;
pub mod username;

use thiserror::Error;

/// Rejections produced when parsing raw registration input into domain types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username must be at least 3 characters")]
    UsernameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Password must contain uppercase, lowercase, and number")]
    PasswordTooWeak,
    #[error("OTP code must be exactly 6 digits")]
    MalformedOtpCode,
}
