use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::{Credentials, Mechanism};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use notifier_provider::ProviderError;
use tracing::{debug, info};

use crate::backend::{BackendConnector, EmailBackend, EmailMessage, EmailResult};
use crate::config::SmtpConfig;

/// SMTP email delivery backend using `lettre`.
pub struct SmtpBackend {
    config: SmtpConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl std::fmt::Debug for SmtpBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpBackend")
            .field("config", &self.config)
            .field("transport", &"<AsyncSmtpTransport>")
            .finish()
    }
}

impl SmtpBackend {
    /// Create a new `SmtpBackend` from the given SMTP configuration.
    pub fn new(config: SmtpConfig) -> Result<Self, ProviderError> {
        let transport = build_transport(&config)?;
        Ok(Self { config, transport })
    }
}

#[async_trait]
impl EmailBackend for SmtpBackend {
    async fn send(&self, message: &EmailMessage) -> Result<EmailResult, ProviderError> {
        debug!(to = %message.to, subject = %message.subject, "building SMTP message");
        let lettre_message = build_message(message)?;

        info!(
            to = %message.to,
            relay = %self.config.smtp_host,
            port = self.config.smtp_port,
            "sending email via SMTP"
        );
        let response = self
            .transport
            .send(lettre_message)
            .await
            .map_err(|e| map_smtp_error(&e))?;

        info!(to = %message.to, code = %response.code(), "email sent successfully via SMTP");
        Ok(EmailResult::sent(None))
    }

    fn backend_name(&self) -> &'static str {
        "smtp"
    }
}

/// Builds a fresh [`SmtpBackend`] per invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmtpConnector;

#[async_trait]
impl BackendConnector for SmtpConnector {
    type Config = SmtpConfig;
    type Backend = SmtpBackend;

    async fn connect(&self, config: &SmtpConfig) -> Result<SmtpBackend, ProviderError> {
        SmtpBackend::new(config.clone())
    }
}

/// Build a `lettre::Message` from the unified [`EmailMessage`].
fn build_message(msg: &EmailMessage) -> Result<Message, ProviderError> {
    let from_mailbox: Mailbox = msg
        .from
        .parse()
        .map_err(|e| ProviderError::Configuration(format!("invalid from address: {e}")))?;

    let to_mailbox: Mailbox = msg
        .to
        .parse()
        .map_err(|e| ProviderError::Configuration(format!("invalid recipient address: {e}")))?;

    let builder = Message::builder()
        .from(from_mailbox)
        .to(to_mailbox)
        .subject(&msg.subject);

    let message = match (&msg.body, &msg.html_body) {
        (Some(text), Some(html)) => builder.multipart(MultiPart::alternative_plain_html(
            text.clone(),
            html.clone(),
        )),
        (Some(text), None) => builder.header(ContentType::TEXT_PLAIN).body(text.clone()),
        (None, Some(html)) => builder.singlepart(
            SinglePart::builder()
                .header(ContentType::TEXT_HTML)
                .body(html.clone()),
        ),
        (None, None) => builder.body(String::new()),
    }
    .map_err(|e| ProviderError::Serialization(format!("failed to build email: {e}")))?;

    Ok(message)
}

/// Build an async SMTP transport from the given configuration.
///
/// The connection is upgraded via STARTTLS before the PLAIN credentials are
/// sent.
fn build_transport(
    config: &SmtpConfig,
) -> Result<AsyncSmtpTransport<Tokio1Executor>, ProviderError> {
    let builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
        .map_err(|e| ProviderError::Configuration(format!("SMTP TLS relay error: {e}")))?
        .port(config.smtp_port)
        .authentication(vec![Mechanism::Plain]);

    let builder = if let (Some(user), Some(pass)) = (&config.username, &config.password) {
        builder.credentials(Credentials::new(user.clone(), pass.clone()))
    } else {
        builder
    };

    Ok(builder.build())
}

/// Map a lettre SMTP error to the appropriate `ProviderError` variant.
fn map_smtp_error(error: &lettre::transport::smtp::Error) -> ProviderError {
    let message = error.to_string();

    if error.is_permanent() {
        // 5xx: includes 535 authentication failures.
        ProviderError::Transport(format!("permanent SMTP error: {message}"))
    } else if error.is_transient() {
        ProviderError::Transport(format!("transient SMTP error: {message}"))
    } else if error.is_timeout() {
        ProviderError::Transport(format!("SMTP timeout: {message}"))
    } else {
        ProviderError::Transport(format!("SMTP error: {message}"))
    }
}
