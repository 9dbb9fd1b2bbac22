use async_trait::async_trait;
use notifier_provider::ProviderError;

/// A unified email message representation shared across all backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Sender email address.
    pub from: String,
    /// Recipient email address.
    pub to: String,
    /// Email subject line.
    pub subject: String,
    /// Optional plain-text body.
    pub body: Option<String>,
    /// Optional HTML body.
    pub html_body: Option<String>,
}

/// Result of a successful email send operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailResult {
    /// Provider-assigned message identifier, when the provider returns one.
    pub message_id: Option<String>,
}

impl EmailResult {
    pub fn sent(message_id: Option<String>) -> Self {
        Self { message_id }
    }
}

/// Trait for pluggable email delivery backends.
///
/// Implementations handle the actual transport of a message (SMTP, SES).
/// Every call is a single attempt; backends never retry.
#[async_trait]
pub trait EmailBackend: Send + Sync + std::fmt::Debug {
    /// Send an email message through this backend.
    async fn send(&self, message: &EmailMessage) -> Result<EmailResult, ProviderError>;

    /// Return the backend name (e.g. `"smtp"`, `"ses"`), used in handler logs.
    fn backend_name(&self) -> &'static str;
}

/// Builds a fresh backend for one invocation.
///
/// Handlers never keep a backend between invocations; the connector is the
/// session/client factory that turns the configuration read for this call
/// into a ready backend.
#[async_trait]
pub trait BackendConnector: Send + Sync {
    /// Configuration the backend is built from.
    type Config: Send + Sync;

    /// Backend produced by this connector.
    type Backend: EmailBackend;

    /// Build the backend. Fails with [`ProviderError::Configuration`] when the
    /// configuration cannot produce a working client.
    async fn connect(&self, config: &Self::Config) -> Result<Self::Backend, ProviderError>;
}
