//! Outbound email composition and the SendGrid v3 request body.

use serde::Serialize;

use super::form::ContactDetails;
use crate::config::RelayConfig;

/// A single plain-text email derived from one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub text: String,
}

impl EmailMessage {
    /// Build the notification email for a contact submission.
    pub fn compose(details: &ContactDetails, config: &RelayConfig) -> Self {
        Self {
            to: config.to_email.clone(),
            from: config.sender_for(&details.email).to_string(),
            subject: format!("New message from {}", details.name),
            text: format!(
                "Name: {}\nEmail: {}\nInquiry Type: {}\n\nMessage:\n{}",
                details.name, details.email, details.service, details.message
            ),
        }
    }
}

/// SendGrid `mail/send` request body.
#[derive(Debug, Serialize)]
pub struct SendGridPayload<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    content: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
    subject: &'a str,
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    value: &'a str,
}

impl<'a> From<&'a EmailMessage> for SendGridPayload<'a> {
    fn from(message: &'a EmailMessage) -> Self {
        Self {
            personalizations: vec![Personalization {
                to: vec![Address { email: &message.to }],
                subject: &message.subject,
            }],
            from: Address {
                email: &message.from,
            },
            content: vec![Content {
                kind: "text/plain",
                value: &message.text,
            }],
        }
    }
}
