pub mod logging_sms_client;

pub use logging_sms_client::LoggingSmsClient;
