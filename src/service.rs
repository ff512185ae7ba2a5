use crate::{
    dto::{SendEmailRequest, SendEmailResponse},
    sender::{EmailSender, SendError},
};

use lettre::Message;

use std::sync::Arc;

pub struct EmailGateway {
    sender: Arc<dyn EmailSender>,
}

#[derive(Debug, thiserror::Error)]
pub enum EmailGatewayError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address format: {0}")]
    AddressFormat(#[from] lettre::address::AddressError),

    #[error("Failed to build email message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    #[error("Failed to deliver email: {0}")]
    Delivery(#[from] SendError),
}

impl EmailGateway {
    pub fn new(sender: Arc<dyn EmailSender>) -> Self {
        EmailGateway { sender }
    }

    pub async fn send_email(
        &self,
        request: SendEmailRequest,
    ) -> Result<SendEmailResponse, EmailGatewayError> {
        let fields = [
            ("from", &request.from),
            ("to", &request.to),
            ("subject", &request.subject),
            ("body", &request.body),
        ];
        for (name, value) in fields {
            if value.is_empty() {
                return Err(EmailGatewayError::MissingField(name));
            }
        }

        let email = Message::builder()
            .from(request.from.parse()?)
            .to(request.to.parse()?)
            .subject(request.subject.clone())
            .body(request.body)?;

        tracing::info!(
            "Sending email to '{}' with subject '{}'",
            request.to,
            request.subject
        );

        self.sender.send(email).await?;

        tracing::info!("Message to {} sent successfully", request.to);

        Ok(SendEmailResponse {
            message: "Email sent".to_string(),
        })
    }
}
