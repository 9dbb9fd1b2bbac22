use notifier_core::ProxyResponse;
use notifier_provider::ProviderError;
use thiserror::Error;

/// A failed invocation: the response the handler produced together with the
/// error that caused it.
///
/// The binaries hand this to the Lambda runtime as the invocation's failure
/// value, so the error is reported to the framework while the status code
/// stays inspectable in tests.
#[derive(Debug, Error)]
#[error("invocation failed with status {}: {source}", .response.status_code)]
pub struct InvocationError {
    pub response: ProxyResponse,
    #[source]
    pub source: ProviderError,
}

impl InvocationError {
    /// Failure with an empty-bodied response of the given status.
    pub fn new(status_code: u16, source: ProviderError) -> Self {
        Self {
            response: ProxyResponse::new(status_code),
            source,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.response.status_code
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn display_includes_status_and_cause() {
        let err = InvocationError::new(400, ProviderError::InvalidRequest("not JSON".into()));
        assert_eq!(
            err.to_string(),
            "invocation failed with status 400: invalid request: not JSON"
        );
        assert_eq!(err.status_code(), 400);
        assert!(err.source().is_some());
    }

    #[test]
    fn response_has_no_body() {
        let err = InvocationError::new(500, ProviderError::Configuration("no region".into()));
        assert!(err.response.body.is_empty());
        assert!(err.response.headers.is_empty());
    }
}
