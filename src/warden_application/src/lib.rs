pub mod use_cases;

pub use use_cases::{
    issue_otp::{IssueOtpError, IssueOtpUseCase, IssuedOtp, OtpExposure, OtpPolicy},
    login::{LockoutPolicy, LoginError, LoginUseCase},
    register::{RegisterError, RegisterUseCase},
    verify_otp::VerifyOtpUseCase,
};
