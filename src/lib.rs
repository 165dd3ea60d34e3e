//! site-relay - glue code for a personal static website.
//!
//! Two independent pieces live here:
//! - [`relay`]: forwards contact-form submissions to SendGrid and redirects
//!   the visitor to a success page.
//! - [`ui`]: navigation toggle and gallery lightbox behaviours for the pages,
//!   with browser bindings behind the `web` feature.

pub mod config;
pub mod relay;
pub mod ui;

#[cfg(feature = "server")]
pub mod server;
