//! Relay configuration.
//!
//! Values come from the process environment (optionally seeded from a
//! `.env` file by the binary) and are captured once into a [`RelayConfig`]
//! that is handed to the relay at construction.

use crate::relay::RelayError;

/// Recipient used when `TO_EMAIL` is not set.
pub const DEFAULT_TO_EMAIL: &str = "hello@example.com";

/// SendGrid v3 send endpoint.
pub const DEFAULT_SENDGRID_ENDPOINT: &str = "https://api.sendgrid.com/v3/mail/send";

/// Page visitors land on after a submission (real or filtered).
pub const SUCCESS_PATH: &str = "/contact-success.html";

/// Configuration for the contact-form relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// SendGrid API key. Required for sending; absence is reported per request.
    pub api_key: Option<String>,
    /// Address that receives contact messages.
    pub to_email: String,
    /// Sender address. Falls back to the submitter's address when unset.
    pub from_email: Option<String>,
    /// Email API endpoint
    pub endpoint: String,
    /// Redirect target after a successful submission
    pub success_path: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            to_email: DEFAULT_TO_EMAIL.to_string(),
            from_email: None,
            endpoint: DEFAULT_SENDGRID_ENDPOINT.to_string(),
            success_path: SUCCESS_PATH.to_string(),
        }
    }
}

impl RelayConfig {
    /// Build the configuration from the process environment.
    ///
    /// Supported env vars:
    /// - `SENDGRID_API_KEY`: API key (required to send)
    /// - `TO_EMAIL`: recipient address
    /// - `FROM_EMAIL`: sender address
    /// - `SENDGRID_ENDPOINT`: alternate send endpoint (testing, regional hosts)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        config.api_key = get("SENDGRID_API_KEY");
        if let Some(to) = get("TO_EMAIL") {
            config.to_email = to;
        }
        config.from_email = get("FROM_EMAIL");
        if let Some(endpoint) = get("SENDGRID_ENDPOINT") {
            config.endpoint = endpoint;
        }

        config
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn with_to_email(mut self, to_email: &str) -> Self {
        self.to_email = to_email.to_string();
        self
    }

    pub fn with_from_email(mut self, from_email: &str) -> Self {
        self.from_email = Some(from_email.to_string());
        self
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    /// The API key, or [`RelayError::MissingApiKey`] when none is configured.
    pub fn api_key(&self) -> Result<&str, RelayError> {
        self.api_key.as_deref().ok_or(RelayError::MissingApiKey)
    }

    /// Sender address for a message from `submitter`.
    pub fn sender_for<'a>(&'a self, submitter: &'a str) -> &'a str {
        self.from_email.as_deref().unwrap_or(submitter)
    }
}
