//! HTTP server hosting the contact-form relay.
//!
//! Stands in for the hosting platform's function runtime: each request to
//! the contact route is one relay invocation.

mod handlers;
mod routes;

pub use routes::{create_router, FUNCTION_PATH};

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::RelayConfig;
use crate::relay::{EmailTransport, Relay, SendGridTransport};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
}

impl AppState {
    /// State backed by the SendGrid transport.
    pub fn new(config: RelayConfig) -> anyhow::Result<Self> {
        let transport = SendGridTransport::new(&config.endpoint)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// State backed by an arbitrary transport.
    pub fn with_transport(config: RelayConfig, transport: Arc<dyn EmailTransport>) -> Self {
        Self {
            relay: Arc::new(Relay::new(config, transport)),
        }
    }
}

/// Bind a listener. `host` may be a hostname such as `localhost`.
pub async fn bind_listener(host: &str, port: u16) -> std::io::Result<TcpListener> {
    TcpListener::bind((host, port)).await
}

/// Start the web server.
pub async fn serve(config: RelayConfig, host: &str, port: u16) -> anyhow::Result<()> {
    if config.api_key.is_none() {
        tracing::warn!("SENDGRID_API_KEY is not set; submissions will fail with HTTP 500");
    }

    let state = AppState::new(config)?;
    let app = create_router(state);

    let listener = bind_listener(host, port).await?;
    tracing::info!("Starting relay at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
