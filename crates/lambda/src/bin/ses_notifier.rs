use lambda_runtime::{Error, LambdaEvent, service_fn};
use notifier_core::{ProxyRequest, ProxyResponse};
use notifier_email::{SesConnector, SesNotifierConfig};
use notifier_lambda::handlers::ses::handle_contact_invocation;

async fn handle_request(event: LambdaEvent<ProxyRequest>) -> Result<ProxyResponse, Error> {
    let config = SesNotifierConfig::from_env();
    Ok(handle_contact_invocation(&event.payload, &config, &SesConnector).await?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    notifier_lambda::telemetry::init();
    lambda_runtime::run(service_fn(handle_request)).await
}
