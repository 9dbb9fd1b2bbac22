pub mod backend;
pub mod config;
pub mod ses;
pub mod smtp;

pub use config::{SesNotifierConfig, SmtpConfig, SmtpNotifierConfig};
pub use ses::{SesBackend, SesConnector};
pub use smtp::{SmtpBackend, SmtpConnector};

// Re-export backend traits for external use.
pub use backend::{BackendConnector, EmailBackend, EmailMessage, EmailResult};
