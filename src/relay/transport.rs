//! Delivery of composed emails to the email API.

use async_trait::async_trait;

use super::email::EmailMessage;
use super::RelayError;

/// Something that can deliver one email.
#[async_trait]
pub trait EmailTransport: Send + Sync {
    /// Send `message` using `api_key` as the bearer credential.
    ///
    /// A single attempt; implementations must not retry.
    async fn send(&self, message: &EmailMessage, api_key: &str) -> Result<(), RelayError>;
}

#[cfg(feature = "server")]
pub use sendgrid::SendGridTransport;

#[cfg(feature = "server")]
mod sendgrid {
    use async_trait::async_trait;
    use reqwest::redirect::Policy;
    use reqwest::Client;
    use tracing::debug;

    use super::EmailTransport;
    use crate::relay::email::{EmailMessage, SendGridPayload};
    use crate::relay::RelayError;

    /// SendGrid v3 transport over reqwest.
    #[derive(Debug, Clone)]
    pub struct SendGridTransport {
        client: Client,
        endpoint: String,
    }

    impl SendGridTransport {
        /// Create a transport posting to `endpoint`.
        ///
        /// Redirects are not followed: a 3xx answer is a failed send.
        pub fn new(endpoint: &str) -> Result<Self, RelayError> {
            let client = Client::builder()
                .redirect(Policy::none())
                .build()
                .map_err(|e| RelayError::Transport(e.to_string()))?;

            Ok(Self {
                client,
                endpoint: endpoint.to_string(),
            })
        }

        pub fn endpoint(&self) -> &str {
            &self.endpoint
        }
    }

    #[async_trait]
    impl EmailTransport for SendGridTransport {
        async fn send(&self, message: &EmailMessage, api_key: &str) -> Result<(), RelayError> {
            let payload = SendGridPayload::from(message);

            debug!("Posting email to {} for {}", self.endpoint, message.to);
            let resp = self
                .client
                .post(&self.endpoint)
                .bearer_auth(api_key)
                .json(&payload)
                .send()
                .await
                .map_err(|e| RelayError::Transport(e.to_string()))?;

            let status = resp.status();
            if status.is_success() {
                debug!("Email API accepted message (HTTP {})", status.as_u16());
                return Ok(());
            }

            let body = resp.text().await.unwrap_or_default();
            Err(RelayError::Upstream {
                status: status.as_u16(),
                body,
            })
        }
    }
}
