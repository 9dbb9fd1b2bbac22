use lambda_runtime::{Error, LambdaEvent, service_fn};
use notifier_core::ProxyResponse;
use notifier_email::{SmtpConnector, SmtpNotifierConfig};
use notifier_lambda::handlers::smtp::handle_smtp_invocation;

async fn handle_request(_event: LambdaEvent<serde_json::Value>) -> Result<ProxyResponse, Error> {
    let config = SmtpNotifierConfig::from_env();
    Ok(handle_smtp_invocation(&config, &SmtpConnector).await?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    notifier_lambda::telemetry::init();
    lambda_runtime::run(service_fn(handle_request)).await
}
