//! Contact-form relay.
//!
//! Handles one submission per call:
//! - rejects anything but `POST`
//! - drops honeypot-tagged submissions while still redirecting to success
//! - forwards everything else as one email through an [`EmailTransport`]

mod email;
mod form;
mod transport;

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::RelayConfig;

pub use email::{EmailMessage, SendGridPayload};
pub use form::{
    parse_form, ContactDetails, FormSubmission, DEFAULT_EMAIL, DEFAULT_NAME, DEFAULT_SERVICE,
    HONEYPOT_FIELD,
};
pub use transport::EmailTransport;
#[cfg(feature = "server")]
pub use transport::SendGridTransport;

/// The only method the relay accepts.
pub const ALLOWED_METHOD: &str = "POST";

/// Errors that can occur while relaying a submission.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("SENDGRID_API_KEY is not configured")]
    MissingApiKey,

    #[error("Failed to reach email API: {0}")]
    Transport(String),

    #[error("Email API returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },
}

/// Outcome of handling one request, independent of any HTTP framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayResponse {
    /// 302 to the given location.
    Redirect(String),
    /// 405 with `Allow: POST`.
    MethodNotAllowed,
    /// 500 with the message as body.
    Failed(String),
}

impl RelayResponse {
    pub fn status(&self) -> u16 {
        match self {
            RelayResponse::Redirect(_) => 302,
            RelayResponse::MethodNotAllowed => 405,
            RelayResponse::Failed(_) => 500,
        }
    }
}

/// Relays contact submissions as email.
pub struct Relay {
    config: RelayConfig,
    transport: Arc<dyn EmailTransport>,
}

impl Relay {
    pub fn new(config: RelayConfig, transport: Arc<dyn EmailTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Handle one request with the given method and raw body.
    pub async fn handle(&self, method: &str, body: &[u8]) -> RelayResponse {
        if method != ALLOWED_METHOD {
            debug!("Rejecting {} request to contact relay", method);
            return RelayResponse::MethodNotAllowed;
        }

        let submission = parse_form(body);
        if submission.is_spam() {
            info!("Honeypot field filled, dropping submission");
            return self.success();
        }

        match self.forward(&submission).await {
            Ok(()) => self.success(),
            Err(e) => {
                error!("Failed to relay contact submission: {}", e);
                RelayResponse::Failed(format!("Error sending email: {}", e))
            }
        }
    }

    /// Compose and send the email for a non-spam submission.
    pub async fn forward(&self, submission: &FormSubmission) -> Result<(), RelayError> {
        let api_key = self.config.api_key()?;
        let details = ContactDetails::from_submission(submission);
        let message = EmailMessage::compose(&details, &self.config);

        info!("Relaying message from {} ({})", details.name, details.service);
        self.transport.send(&message, api_key).await
    }

    fn success(&self) -> RelayResponse {
        RelayResponse::Redirect(self.config.success_path.clone())
    }
}
