use serde::{Deserialize, Serialize};

/// Inbound payload. Fields left out of the JSON deserialize to empty
/// strings and are rejected by validation before any send attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendEmailRequest {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendEmailResponse {
    pub message: String,
}
