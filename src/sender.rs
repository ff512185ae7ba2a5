use async_trait::async_trait;

use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("Invalid SMTP relay '{relay}': {reason}")]
    Relay { relay: String, reason: String },

    #[error("SMTP transport error: {0}")]
    Transport(String),
}

/// Outbound delivery capability. The gateway only ever talks to this
/// trait; the concrete transport is chosen at startup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: Message) -> Result<(), SendError>;
}

pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailSender {
    pub fn new(config: &Config) -> Result<Self, SendError> {
        let creds = Credentials::new(config.smtp_username.clone(), config.smtp_pass.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_relay)
            .map_err(|e| SendError::Relay {
                relay: config.smtp_relay.clone(),
                reason: e.to_string(),
            })?
            .credentials(creds)
            .build();

        Ok(SmtpEmailSender { transport })
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, message: Message) -> Result<(), SendError> {
        self.transport
            .send(message)
            .await
            .map_err(|e| SendError::Transport(e.to_string()))?;

        Ok(())
    }
}
