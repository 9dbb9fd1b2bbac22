//! Lambda handlers for the contact notifier.
//!
//! Two independent functions share nothing but this crate:
//!
//! - [`handlers::smtp`] sends a fixed test message through an authenticated
//!   SMTP relay.
//! - [`handlers::ses`] decodes a contact form submission and sends it through
//!   the SES v2 API.
//!
//! Both rebuild their configuration and clients on every invocation and make
//! exactly one delivery attempt.

pub mod error;
pub mod handlers;
pub mod telemetry;

pub use error::InvocationError;
