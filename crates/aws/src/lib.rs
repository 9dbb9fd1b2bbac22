//! AWS integration for the contact notifier.
//!
//! Wraps the SES v2 `SendEmail` API and adapts its error codes into the
//! provider-neutral [`DeliveryErrorKind`](notifier_provider::DeliveryErrorKind).
//! Clients are built from an [`AwsBaseConfig`](config::AwsBaseConfig) holding
//! the region and an optional endpoint override.

pub mod auth;
pub mod config;
pub mod error;
pub mod ses;

// Re-exports for convenience.
pub use config::AwsBaseConfig;
pub use error::AwsProviderError;
pub use ses::{SesClient, SesConfig};
