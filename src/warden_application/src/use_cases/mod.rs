pub mod issue_otp;
pub mod login;
pub mod register;
pub mod verify_otp;
