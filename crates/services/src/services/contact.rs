//! Contact-form delivery: validate, then try the transactional provider,
//! then fall back to a pre-filled mailto link. The fallback is reported
//! explicitly rather than disguised as a successful send.

use std::sync::Arc;

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use ts_rs::TS;

use super::validate;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeliveryOutcome {
    /// Delivered through the transactional provider.
    Sent,
    /// Provider unavailable; the client should open this mailto link.
    MailtoFallback { url: String },
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{0}")]
    Validation(String),
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

#[derive(Debug, Error)]
#[error("{0}")]
pub struct SendError(pub String);

/// One delivery stage. Primary and fallback share this contract so each is
/// testable with fakes.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<DeliveryOutcome, SendError>;
}

/// Resend-backed primary sender.
pub struct ResendSender {
    http: reqwest::Client,
    api_key: String,
    from: String,
    to: String,
}

impl ResendSender {
    pub fn new(api_key: String, from: String, to: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            from,
            to,
        }
    }
}

#[async_trait]
impl EmailSender for ResendSender {
    async fn send(&self, message: &ContactMessage) -> Result<DeliveryOutcome, SendError> {
        let body = serde_json::json!({
            "from": self.from,
            "to": [self.to],
            "reply_to": message.email,
            "subject": message.subject,
            "text": format!("From: {} <{}>\n\n{}", message.name, message.email, message.message),
        });
        let response = self
            .http
            .post("https://api.resend.com/emails")
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SendError(e.to_string()))?;
        if response.status().is_success() {
            Ok(DeliveryOutcome::Sent)
        } else {
            Err(SendError(format!(
                "provider returned {}",
                response.status()
            )))
        }
    }
}

/// Terminal fallback: always "succeeds" by handing back a mailto link.
pub struct MailtoSender {
    pub to: String,
}

#[async_trait]
impl EmailSender for MailtoSender {
    async fn send(&self, message: &ContactMessage) -> Result<DeliveryOutcome, SendError> {
        let body = format!(
            "From: {} <{}>\n\n{}",
            message.name, message.email, message.message
        );
        Ok(DeliveryOutcome::MailtoFallback {
            url: mailto_url(&self.to, &message.subject, &body),
        })
    }
}

pub fn mailto_url(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        encode_component(subject),
        encode_component(body)
    )
}

/// Everything outside the RFC 3986 unreserved set gets escaped. Mail clients
/// expect %20 for spaces, not '+'.
const MAILTO_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, MAILTO_SET).to_string()
}

pub struct ContactService {
    senders: Vec<Arc<dyn EmailSender>>,
}

impl ContactService {
    /// Primary is optional: with no provider configured every submission
    /// takes the mailto path.
    pub fn new(primary: Option<Arc<dyn EmailSender>>, fallback_to: String) -> Self {
        let mut senders: Vec<Arc<dyn EmailSender>> = Vec::new();
        if let Some(primary) = primary {
            senders.push(primary);
        }
        senders.push(Arc::new(MailtoSender { to: fallback_to }));
        Self { senders }
    }

    pub fn with_senders(senders: Vec<Arc<dyn EmailSender>>) -> Self {
        Self { senders }
    }

    pub fn validate(message: &ContactMessage) -> Result<(), ContactError> {
        validate::min_len("name", &message.name, 2).map_err(ContactError::Validation)?;
        validate::email(&message.email).map_err(ContactError::Validation)?;
        validate::required("subject", &message.subject).map_err(ContactError::Validation)?;
        validate::min_len("message", &message.message, 10).map_err(ContactError::Validation)?;
        Ok(())
    }

    pub async fn submit(&self, message: ContactMessage) -> Result<DeliveryOutcome, ContactError> {
        Self::validate(&message)?;

        let mut last_error: Option<SendError> = None;
        for sender in &self.senders {
            match sender.send(&message).await {
                Ok(outcome) => {
                    if let DeliveryOutcome::MailtoFallback { .. } = outcome {
                        warn!("email provider unavailable, falling back to mailto");
                    }
                    return Ok(outcome);
                }
                Err(e) => {
                    warn!(error = %e, "email sender failed, trying next stage");
                    last_error = Some(e);
                }
            }
        }
        Err(ContactError::Delivery(
            last_error
                .map(|e| e.0)
                .unwrap_or_else(|| "no email sender configured".to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSender;

    #[async_trait]
    impl EmailSender for FailingSender {
        async fn send(&self, _message: &ContactMessage) -> Result<DeliveryOutcome, SendError> {
            Err(SendError("connection refused".to_string()))
        }
    }

    struct OkSender;

    #[async_trait]
    impl EmailSender for OkSender {
        async fn send(&self, _message: &ContactMessage) -> Result<DeliveryOutcome, SendError> {
            Ok(DeliveryOutcome::Sent)
        }
    }

    fn valid_message() -> ContactMessage {
        ContactMessage {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Quote request".to_string(),
            message: "I would like a quote for rooftop panels.".to_string(),
        }
    }

    #[tokio::test]
    async fn short_message_fails_before_any_send() {
        let service = ContactService::with_senders(vec![Arc::new(FailingSender)]);
        let mut message = valid_message();
        message.message = "Hi".to_string();
        let err = service.submit(message).await.unwrap_err();
        assert!(matches!(err, ContactError::Validation(_)));
    }

    #[tokio::test]
    async fn primary_success_never_reaches_fallback() {
        let service = ContactService::with_senders(vec![
            Arc::new(OkSender),
            Arc::new(MailtoSender {
                to: "info@solarshine.example".to_string(),
            }),
        ]);
        let outcome = service.submit(valid_message()).await.unwrap();
        assert_eq!(outcome, DeliveryOutcome::Sent);
    }

    #[tokio::test]
    async fn primary_failure_reports_mailto_fallback() {
        let service = ContactService::with_senders(vec![
            Arc::new(FailingSender),
            Arc::new(MailtoSender {
                to: "info@solarshine.example".to_string(),
            }),
        ]);
        let outcome = service.submit(valid_message()).await.unwrap();
        match outcome {
            DeliveryOutcome::MailtoFallback { url } => {
                assert!(url.starts_with("mailto:info@solarshine.example?subject="));
                assert!(url.contains("Quote%20request"));
            }
            other => panic!("expected mailto fallback, got {other:?}"),
        }
    }

    #[test]
    fn mailto_encodes_spaces_and_newlines() {
        let url = mailto_url("a@b.c", "Hello world", "line one\nline two");
        assert_eq!(url, "mailto:a@b.c?subject=Hello%20world&body=line%20one%0Aline%20two");
    }
}
