use aws_sdk_sesv2::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_sesv2::operation::send_email::SendEmailError;
use notifier_provider::{DeliveryErrorKind, ProviderError};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::auth::build_sdk_config;
use crate::config::AwsBaseConfig;
use crate::error::{AwsProviderError, classify_error_code};

const CHARSET: &str = "UTF-8";

/// Configuration for the SES v2 client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SesConfig {
    /// Shared AWS configuration (region, endpoint URL).
    #[serde(flatten)]
    pub aws: AwsBaseConfig,

    /// Optional SES configuration set name attached to every send.
    pub configuration_set: Option<String>,
}

impl SesConfig {
    /// Create a new `SesConfig` with the given AWS region.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            aws: AwsBaseConfig::new(region),
            configuration_set: None,
        }
    }

    /// Set the SES configuration set name.
    #[must_use]
    pub fn with_configuration_set(mut self, name: impl Into<String>) -> Self {
        self.configuration_set = Some(name.into());
        self
    }

    /// Set the endpoint URL override (for `LocalStack`).
    #[must_use]
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.aws.endpoint_url = Some(endpoint_url.into());
        self
    }
}

/// AWS `SESv2` client wrapper for sending emails.
pub struct SesClient {
    config: SesConfig,
    client: aws_sdk_sesv2::Client,
}

impl std::fmt::Debug for SesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SesClient")
            .field("config", &self.config)
            .field("client", &"<SesV2Client>")
            .finish()
    }
}

impl SesClient {
    /// Build an SES session bound to the configured region.
    ///
    /// Fails with [`AwsProviderError::Configuration`] when the region is
    /// missing or malformed.
    pub async fn new(config: SesConfig) -> Result<Self, AwsProviderError> {
        config.aws.validate()?;
        let sdk_config = build_sdk_config(&config.aws).await;
        let client = aws_sdk_sesv2::Client::new(&sdk_config);
        debug!(region = %config.aws.region, "SES client ready");
        Ok(Self { config, client })
    }

    /// Send a single-recipient email and return the SES message id, if SES
    /// reported one.
    ///
    /// Subject and both body parts are tagged with the UTF-8 charset.
    pub async fn send_email(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        body_text: Option<&str>,
        body_html: Option<&str>,
    ) -> Result<Option<String>, ProviderError> {
        debug!(from = %from, to = %to, subject = %subject, "sending email via SES");

        let destination = aws_sdk_sesv2::types::Destination::builder()
            .to_addresses(to)
            .build();

        let mut body_builder = aws_sdk_sesv2::types::Body::builder();
        if let Some(text) = body_text {
            body_builder = body_builder.text(utf8_content(text)?);
        }
        if let Some(html) = body_html {
            body_builder = body_builder.html(utf8_content(html)?);
        }

        let message = aws_sdk_sesv2::types::Message::builder()
            .subject(utf8_content(subject)?)
            .body(body_builder.build())
            .build();

        let email_content = aws_sdk_sesv2::types::EmailContent::builder()
            .simple(message)
            .build();

        let mut request = self
            .client
            .send_email()
            .from_email_address(from)
            .destination(destination)
            .content(email_content);

        if let Some(ref config_set) = self.config.configuration_set {
            request = request.configuration_set_name(config_set);
        }

        let result = request.send().await.map_err(|e| {
            let aws_err = classify_send_error(&e);
            log_send_failure(&aws_err);
            ProviderError::from(aws_err)
        })?;

        let message_id = result.message_id().map(str::to_owned);
        info!(message_id = ?message_id, "SES email sent");

        Ok(message_id)
    }
}

fn utf8_content(data: &str) -> Result<aws_sdk_sesv2::types::Content, ProviderError> {
    aws_sdk_sesv2::types::Content::builder()
        .data(data)
        .charset(CHARSET)
        .build()
        .map_err(|e| AwsProviderError::InvalidPayload(e.to_string()).into())
}

/// Adapt an SDK `SendEmail` failure into an [`AwsProviderError`].
fn classify_send_error(err: &SdkError<SendEmailError>) -> AwsProviderError {
    let message = DisplayErrorContext(err).to_string();
    match err {
        SdkError::ServiceError(context) => AwsProviderError::ServiceError {
            kind: classify_service_error(context.err()),
            message,
        },
        SdkError::TimeoutError(_) => AwsProviderError::Timeout,
        SdkError::DispatchFailure(_) | SdkError::ResponseError(_) => {
            AwsProviderError::Connection(message)
        }
        SdkError::ConstructionFailure(_) => AwsProviderError::InvalidPayload(message),
        _ => AwsProviderError::ServiceError {
            kind: DeliveryErrorKind::Other,
            message,
        },
    }
}

/// Classify a modeled `SendEmail` error, falling back to its error code for
/// variants that have no dedicated kind.
pub fn classify_service_error(err: &SendEmailError) -> DeliveryErrorKind {
    match err {
        SendEmailError::MessageRejected(_) => DeliveryErrorKind::Rejected,
        SendEmailError::MailFromDomainNotVerifiedException(_) => {
            DeliveryErrorKind::DomainNotVerified
        }
        SendEmailError::NotFoundException(_) => DeliveryErrorKind::ConfigurationSetMissing,
        other => classify_error_code(other.code()),
    }
}

fn log_send_failure(err: &AwsProviderError) {
    match err {
        AwsProviderError::ServiceError { kind, message } => {
            error!(kind = %kind, error = %message, "{}", failure_summary(*kind));
        }
        other => error!(error = %other, "SES send_email failed"),
    }
}

/// Log line for a classified provider failure; one per kind.
fn failure_summary(kind: DeliveryErrorKind) -> &'static str {
    match kind {
        DeliveryErrorKind::Rejected => "SES rejected the message",
        DeliveryErrorKind::DomainNotVerified => "SES mail-from domain is not verified",
        DeliveryErrorKind::ConfigurationSetMissing => "SES configuration set does not exist",
        DeliveryErrorKind::Other => "SES send_email failed",
    }
}
