use async_trait::async_trait;
use notifier_aws::ses::{SesClient, SesConfig};
use notifier_provider::ProviderError;
use tracing::{debug, info};

use crate::backend::{BackendConnector, EmailBackend, EmailMessage, EmailResult};

/// SES email delivery backend.
///
/// Delegates to [`notifier_aws::ses::SesClient`] for the actual AWS API calls.
#[derive(Debug)]
pub struct SesBackend {
    client: SesClient,
}

impl SesBackend {
    /// Create a new `SesBackend` by building an AWS SES client.
    ///
    /// Fails with [`ProviderError::Configuration`] if the region is missing
    /// or malformed.
    pub async fn new(config: SesConfig) -> Result<Self, ProviderError> {
        let client = SesClient::new(config).await?;
        Ok(Self { client })
    }
}

#[async_trait]
impl EmailBackend for SesBackend {
    async fn send(&self, message: &EmailMessage) -> Result<EmailResult, ProviderError> {
        debug!(to = %message.to, subject = %message.subject, "sending email via SES");

        let message_id = self
            .client
            .send_email(
                &message.from,
                &message.to,
                &message.subject,
                message.body.as_deref(),
                message.html_body.as_deref(),
            )
            .await?;

        info!(message_id = ?message_id, to = %message.to, "email sent via SES");

        Ok(EmailResult::sent(message_id))
    }

    fn backend_name(&self) -> &'static str {
        "ses"
    }
}

/// Builds a fresh [`SesBackend`] (one SES session) per invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SesConnector;

#[async_trait]
impl BackendConnector for SesConnector {
    type Config = SesConfig;
    type Backend = SesBackend;

    async fn connect(&self, config: &SesConfig) -> Result<SesBackend, ProviderError> {
        SesBackend::new(config.clone()).await
    }
}
