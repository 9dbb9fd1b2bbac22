//! SMTP notifier: sends a fixed test message through an authenticated relay.

use notifier_core::ProxyResponse;
use notifier_email::{BackendConnector, EmailBackend, EmailMessage, SmtpConfig, SmtpNotifierConfig};
use notifier_provider::ProviderError;
use tracing::{error, info, instrument};

use crate::error::InvocationError;

pub const SUBJECT: &str = "Test Email";
pub const BODY: &str = "Hello World";

/// Name and value of the header identifying this function in replies.
pub const REPLY_HEADER: (&str, &str) = ("X-MyCompany-Func-Reply", "contact-us-handler");

/// Handle one SMTP notifier invocation.
///
/// Builds a transport from `config`, submits the fixed message once and
/// answers 200 with two fixed headers. Any failure, from transport setup to
/// authentication to submission, answers 400.
#[instrument(skip_all, fields(relay = %config.smtp_host, receiver = %config.receiver))]
pub async fn handle_smtp_invocation<C>(
    config: &SmtpNotifierConfig,
    connector: &C,
) -> Result<ProxyResponse, InvocationError>
where
    C: BackendConnector<Config = SmtpConfig>,
{
    match send_test_message(config, connector).await {
        Ok(backend) => {
            info!(backend, "test email submitted");
            Ok(success_response())
        }
        Err(e) => {
            error!(error = %e, "failed to send test email");
            Err(InvocationError::new(400, e))
        }
    }
}

async fn send_test_message<C>(
    config: &SmtpNotifierConfig,
    connector: &C,
) -> Result<&'static str, ProviderError>
where
    C: BackendConnector<Config = SmtpConfig>,
{
    let backend = connector.connect(&config.smtp_config()).await?;
    backend.send(&test_message(config)).await?;
    Ok(backend.backend_name())
}

fn test_message(config: &SmtpNotifierConfig) -> EmailMessage {
    EmailMessage {
        from: config.sender.clone(),
        to: config.receiver.clone(),
        subject: SUBJECT.to_owned(),
        body: Some(BODY.to_owned()),
        html_body: None,
    }
}

fn success_response() -> ProxyResponse {
    ProxyResponse::ok()
        .with_header("Content-Type", "application/json")
        .with_header(REPLY_HEADER.0, REPLY_HEADER.1)
}
