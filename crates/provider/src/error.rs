use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a failure reported by a managed delivery API.
///
/// The variants are provider-neutral. Each backend adapts its own error codes
/// into one of these kinds at the client boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryErrorKind {
    /// The provider refused the message itself (content, recipient, policy).
    Rejected,
    /// The sender's mail-from domain has not been verified with the provider.
    DomainNotVerified,
    /// The configuration set named in the request does not exist.
    ConfigurationSetMissing,
    /// Any other provider failure.
    Other,
}

impl DeliveryErrorKind {
    /// Stable string form used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rejected => "rejected",
            Self::DomainNotVerified => "domain_not_verified",
            Self::ConfigurationSetMissing => "configuration_set_missing",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for DeliveryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while turning an invocation into a delivered email.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The inbound request could not be decoded.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The backend could not be configured (missing region, bad address, ...).
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A network, TLS, or SMTP protocol error occurred.
    #[error("transport error: {0}")]
    Transport(String),

    /// The delivery API answered with an error.
    #[error("delivery failed ({kind}): {message}")]
    Delivery {
        kind: DeliveryErrorKind,
        message: String,
    },

    /// The outgoing request could not be assembled.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ProviderError {
    /// Build a [`ProviderError::Delivery`] of the given kind.
    pub fn delivery(kind: DeliveryErrorKind, message: impl Into<String>) -> Self {
        Self::Delivery {
            kind,
            message: message.into(),
        }
    }

    /// Returns the delivery classification, if this error came from the
    /// delivery API.
    pub fn delivery_kind(&self) -> Option<DeliveryErrorKind> {
        match self {
            Self::Delivery { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns `true` if the error was caused by the caller's input rather
    /// than by the backend.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_invalid_request_is_client_error() {
        assert!(ProviderError::InvalidRequest("bad json".into()).is_client_error());
        assert!(!ProviderError::Configuration("no region".into()).is_client_error());
        assert!(!ProviderError::Transport("reset".into()).is_client_error());
        assert!(!ProviderError::delivery(DeliveryErrorKind::Rejected, "x").is_client_error());
        assert!(!ProviderError::Serialization("x".into()).is_client_error());
    }

    #[test]
    fn delivery_kind_accessor() {
        let err = ProviderError::delivery(DeliveryErrorKind::DomainNotVerified, "unverified");
        assert_eq!(err.delivery_kind(), Some(DeliveryErrorKind::DomainNotVerified));
        assert!(ProviderError::Transport("x".into()).delivery_kind().is_none());
    }

    #[test]
    fn error_display() {
        let err = ProviderError::InvalidRequest("expected object".into());
        assert_eq!(err.to_string(), "invalid request: expected object");

        let err = ProviderError::delivery(DeliveryErrorKind::Rejected, "address blacklisted");
        assert_eq!(
            err.to_string(),
            "delivery failed (rejected): address blacklisted"
        );
    }

    #[test]
    fn kind_serializes_as_snake_case() {
        let json = serde_json::to_string(&DeliveryErrorKind::ConfigurationSetMissing).unwrap();
        assert_eq!(json, "\"configuration_set_missing\"");
        assert_eq!(
            DeliveryErrorKind::ConfigurationSetMissing.to_string(),
            "configuration_set_missing"
        );
    }
}
