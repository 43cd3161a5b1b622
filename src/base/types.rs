use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// Errors a caller can trigger with the text they submit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// The trimmed input is longer than the configured maximum.
    #[error("Input too long. Maximum allowed is {max} characters.")]
    InputTooLong { max: usize },
}

/// Which handler answers `POST /chatbot`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ChatbotVariant {
    /// Token-exact phrase matching against the response table, no side effects.
    #[default]
    Classifier,
    /// Room lookup and incident keyword detection with email and log side effects.
    IncidentReport,
}

/// Body returned by `POST /chatbot`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChatbotResponse {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_status: Option<String>,
}

impl ChatbotResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            email_status: None,
            log_status: None,
        }
    }
}

/// Outcome of a single notification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationStatus {
    Sent,
    Failed(String),
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationStatus::Sent => write!(f, "Email sent successfully!"),
            NotificationStatus::Failed(reason) => write!(f, "Error sending email: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_too_long_message() {
        let err = ClassifyError::InputTooLong { max: 200 };
        assert_eq!(err.to_string(), "Input too long. Maximum allowed is 200 characters.");
    }

    #[test]
    fn test_notification_status_display() {
        assert_eq!(NotificationStatus::Sent.to_string(), "Email sent successfully!");
        assert_eq!(
            NotificationStatus::Failed("connection refused".to_string()).to_string(),
            "Error sending email: connection refused"
        );
    }

    #[test]
    fn test_chatbot_response_omits_empty_statuses() {
        let json = serde_json::to_value(ChatbotResponse::new("ok")).unwrap();
        assert_eq!(json, serde_json::json!({ "response": "ok" }));
    }
}
