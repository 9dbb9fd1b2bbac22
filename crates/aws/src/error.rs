use notifier_provider::{DeliveryErrorKind, ProviderError};
use thiserror::Error;

/// Errors specific to AWS provider operations.
#[derive(Debug, Error)]
pub enum AwsProviderError {
    /// The AWS service answered with an error.
    #[error("AWS service error ({kind}): {message}")]
    ServiceError {
        kind: DeliveryErrorKind,
        message: String,
    },

    /// A network or connection error occurred communicating with AWS.
    #[error("AWS connection error: {0}")]
    Connection(String),

    /// The request timed out.
    #[error("AWS request timed out")]
    Timeout,

    /// The request could not be built.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// Configuration is invalid.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl From<AwsProviderError> for ProviderError {
    fn from(err: AwsProviderError) -> Self {
        match err {
            AwsProviderError::ServiceError { kind, message } => {
                ProviderError::Delivery { kind, message }
            }
            AwsProviderError::Connection(msg) => ProviderError::Transport(msg),
            AwsProviderError::Timeout => ProviderError::Transport("AWS request timed out".into()),
            AwsProviderError::InvalidPayload(msg) => ProviderError::Serialization(msg),
            AwsProviderError::Configuration(msg) => ProviderError::Configuration(msg),
        }
    }
}

/// Map an SES error code onto a [`DeliveryErrorKind`].
///
/// Both the SES v2 and the classic SES spellings are recognized. Unknown or
/// missing codes fall through to [`DeliveryErrorKind::Other`].
pub fn classify_error_code(code: Option<&str>) -> DeliveryErrorKind {
    match code {
        Some("MessageRejected") => DeliveryErrorKind::Rejected,
        Some("MailFromDomainNotVerifiedException" | "MailFromDomainNotVerified") => {
            DeliveryErrorKind::DomainNotVerified
        }
        Some(
            "ConfigurationSetDoesNotExistException"
            | "ConfigurationSetDoesNotExist"
            | "NotFoundException",
        ) => DeliveryErrorKind::ConfigurationSetMissing,
        _ => DeliveryErrorKind::Other,
    }
}
