//! Twilio SMS Service Implementation
//!
//! Production SMS delivery through the Twilio REST API, with retry and
//! exponential backoff on transient failures.

use async_trait::async_trait;
use phonenumber::{Mode, PhoneNumber};
use std::time::Duration;
use tracing::{debug, error, info, warn};
use twilio::{Client, OutboundMessage};

use qp_shared::config::SmsConfig;
use qp_shared::utils::phone::mask_phone_number;

use super::sms_service::SmsService;
use crate::InfrastructureError;

/// Twilio limit for a single (concatenated) message body
const MAX_MESSAGE_LENGTH: usize = 1600;

/// Twilio SMS service configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number)
    pub from_number: String,
    /// Maximum attempts per message
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
}

impl TryFrom<&SmsConfig> for TwilioConfig {
    type Error = InfrastructureError;

    fn try_from(config: &SmsConfig) -> Result<Self, Self::Error> {
        if config.account_sid.is_empty() || config.auth_token.is_empty() {
            return Err(InfrastructureError::Config(
                "TWILIO_ACCOUNT_SID and TWILIO_AUTH_TOKEN must be set".to_string(),
            ));
        }

        if !config.from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "TWILIO_FROM_NUMBER must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        Ok(Self {
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            from_number: config.from_number.clone(),
            max_retries: 3,
            retry_delay_ms: 1000,
        })
    }
}

/// Twilio SMS service implementation
pub struct TwilioSmsService {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSmsService {
    /// Create a new Twilio SMS service
    pub fn new(config: TwilioConfig) -> Self {
        let client = Client::new(&config.account_sid, &config.auth_token);

        info!(
            "Twilio SMS service initialized with from number: {}",
            mask_phone_number(&config.from_number)
        );

        Self { client, config }
    }

    /// Check that an E.164 number is a real, dialable number
    fn validate_phone_number(phone: &str) -> Result<String, InfrastructureError> {
        let parsed = phone.parse::<PhoneNumber>().map_err(|e| {
            InfrastructureError::Sms(format!("Invalid phone number format: {}", e))
        })?;

        if !phonenumber::is_valid(&parsed) {
            return Err(InfrastructureError::Sms(format!(
                "Phone number {} is not assigned to any region",
                mask_phone_number(phone)
            )));
        }

        Ok(parsed.format().mode(Mode::E164).to_string())
    }

    /// Send SMS with retry logic
    async fn send_with_retry(&self, to: &str, message: &str) -> Result<String, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;

            debug!(
                "Sending SMS attempt {}/{} to {}",
                attempts,
                self.config.max_retries,
                mask_phone_number(to)
            );

            let msg = OutboundMessage::new(&self.config.from_number, to, message);

            match self.client.send_message(msg).await {
                Ok(response) => {
                    info!(
                        "SMS sent successfully to {} with SID: {}",
                        mask_phone_number(to),
                        response.sid
                    );
                    return Ok(response.sid);
                }
                Err(e) => {
                    error!(
                        "Failed to send SMS (attempt {}/{}): {}",
                        attempts, self.config.max_retries, e
                    );

                    if attempts >= self.config.max_retries {
                        return Err(InfrastructureError::Sms(format!(
                            "Failed to send SMS after {} attempts: {}",
                            self.config.max_retries, e
                        )));
                    }

                    let error_msg = e.to_string();
                    if error_msg.contains("400") || error_msg.contains("invalid") {
                        // Client errors will not succeed on retry
                        return Err(InfrastructureError::Sms(format!("Invalid request: {}", e)));
                    }

                    warn!("Transient SMS failure, retrying after {:?}", delay);
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }
}

#[async_trait]
impl SmsService for TwilioSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let normalized_phone = Self::validate_phone_number(phone_number)?;

        if message.len() > MAX_MESSAGE_LENGTH {
            return Err(InfrastructureError::Sms(format!(
                "Message exceeds maximum length of {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }

        info!(
            "Sending SMS to {} via Twilio (message length: {} chars)",
            mask_phone_number(&normalized_phone),
            message.len()
        );

        self.send_with_retry(&normalized_phone, message).await
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sms_config(sid: &str, token: &str, from: &str) -> SmsConfig {
        SmsConfig {
            account_sid: sid.to_string(),
            auth_token: token.to_string(),
            from_number: from.to_string(),
            ..SmsConfig::default()
        }
    }

    #[test]
    fn test_config_from_sms_config() {
        let config = TwilioConfig::try_from(&sms_config("ACtest", "secret", "+15551234567")).unwrap();
        assert_eq!(config.account_sid, "ACtest");
        assert_eq!(config.from_number, "+15551234567");
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_config_requires_credentials() {
        let result = TwilioConfig::try_from(&sms_config("", "", "+15551234567"));
        assert!(matches!(result, Err(InfrastructureError::Config(_))));
    }

    #[test]
    fn test_config_requires_e164_sender() {
        let result = TwilioConfig::try_from(&sms_config("ACtest", "secret", "15551234567"));
        assert!(result.unwrap_err().to_string().contains("E.164 format"));
    }

    #[test]
    fn test_phone_validation() {
        assert_eq!(
            TwilioSmsService::validate_phone_number("+16502530000").unwrap(),
            "+16502530000"
        );
        assert!(TwilioSmsService::validate_phone_number("not a number").is_err());
    }

    #[tokio::test]
    async fn test_overlong_message_is_rejected_before_sending() {
        let service = TwilioSmsService::new(
            TwilioConfig::try_from(&sms_config("ACtest", "secret", "+15551234567")).unwrap(),
        );
        let body = "x".repeat(MAX_MESSAGE_LENGTH + 1);

        let result = service.send_sms("+16502530000", &body).await;
        assert!(result.unwrap_err().to_string().contains("maximum length"));
    }
}
