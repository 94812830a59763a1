use warden_core::{OtpCode, OtpDeliverer, User};

/// Prototype passcode "delivery": logs the code instead of sending an SMS.
/// The log line is the stand-in for the text message, so the code is
/// intentionally visible here and nowhere else.
#[derive(Debug, Clone, Default)]
pub struct LoggingSmsClient;

impl LoggingSmsClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl OtpDeliverer for LoggingSmsClient {
    async fn deliver(&self, recipient: &User, code: &OtpCode) -> Result<(), String> {
        tracing::info!(
            user_id = %recipient.id(),
            phone = %recipient.phone(),
            %code,
            "prototype OTP delivery"
        );
        Ok(())
    }
}
