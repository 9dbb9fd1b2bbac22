use serde::{Deserialize, Serialize};

use crate::error::AwsProviderError;

/// Shared AWS settings: the region and an optional endpoint override for
/// local development (e.g. `LocalStack`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsBaseConfig {
    /// AWS region (e.g. `"us-east-1"`).
    pub region: String,

    /// Optional endpoint URL override.
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

impl AwsBaseConfig {
    /// Create a new `AwsBaseConfig` with the given region.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            endpoint_url: None,
        }
    }

    /// Set an endpoint URL override for local development.
    #[must_use]
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Check that the region looks like an AWS region code.
    ///
    /// The SDK accepts any string and only fails at request time, so an empty
    /// or malformed region is caught here instead.
    pub fn validate(&self) -> Result<(), AwsProviderError> {
        let region = self.region.trim();
        if region.is_empty() {
            return Err(AwsProviderError::Configuration(
                "AWS region is not set".to_owned(),
            ));
        }
        let well_formed = region
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !well_formed {
            return Err(AwsProviderError::Configuration(format!(
                "invalid AWS region: {region:?}"
            )));
        }
        Ok(())
    }
}
