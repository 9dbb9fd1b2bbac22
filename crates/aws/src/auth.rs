use tracing::debug;

use crate::config::AwsBaseConfig;

/// Build an AWS SDK configuration from the given [`AwsBaseConfig`].
///
/// Credentials come from the standard environment chain (in Lambda: the
/// execution role). The endpoint is overridden when `endpoint_url` is set.
///
/// # Examples
///
/// ```no_run
/// use notifier_aws::config::AwsBaseConfig;
/// use notifier_aws::auth::build_sdk_config;
///
/// # async fn example() {
/// let config = AwsBaseConfig::new("us-east-1")
///     .with_endpoint_url("http://localhost:4566");
/// let sdk_config = build_sdk_config(&config).await;
/// # }
/// ```
pub async fn build_sdk_config(config: &AwsBaseConfig) -> aws_config::SdkConfig {
    let mut loader =
        aws_config::from_env().region(aws_config::Region::new(config.region.trim().to_owned()));

    if let Some(endpoint) = &config.endpoint_url {
        debug!(endpoint = %endpoint, "using custom AWS endpoint");
        loader = loader.endpoint_url(endpoint);
    }

    loader.load().await
}
