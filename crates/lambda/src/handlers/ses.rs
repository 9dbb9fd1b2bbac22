//! Delivery-API notifier: forwards a contact form submission through SES.

use notifier_aws::SesConfig;
use notifier_core::{ContactRequest, NotificationMessage, ProxyRequest, ProxyResponse};
use notifier_email::{BackendConnector, EmailBackend, EmailMessage, SesNotifierConfig};
use notifier_provider::ProviderError;
use tracing::{error, info, instrument, warn};

use crate::error::InvocationError;

/// Handle one delivery-API notifier invocation.
///
/// 1. Decode the body (400 on failure, nothing is sent).
/// 2. Open an SES session for the configured region (500 on failure).
/// 3. Render and send the notification once (500 on any provider error).
///
/// On success the body is the SES message id, or empty if SES returned none.
#[instrument(skip_all, fields(recipient = %config.recipient))]
pub async fn handle_contact_invocation<C>(
    event: &ProxyRequest,
    config: &SesNotifierConfig,
    connector: &C,
) -> Result<ProxyResponse, InvocationError>
where
    C: BackendConnector<Config = SesConfig>,
{
    let request = ContactRequest::from_proxy_request(event).map_err(|e| {
        warn!(error = %e, "rejecting contact request");
        InvocationError::new(400, ProviderError::InvalidRequest(e.to_string()))
    })?;

    let backend = connector.connect(&config.ses_config()).await.map_err(|e| {
        error!(error = %e, region = %config.region, "failed to create SES session");
        InvocationError::new(500, e)
    })?;

    let message = notification_email(config, &request);

    // Delivery failures are classified and logged by the SES client.
    let result = backend
        .send(&message)
        .await
        .map_err(|e| InvocationError::new(500, e))?;

    let message_id = result.message_id.unwrap_or_else(|| {
        warn!("message accepted without a provider message id");
        String::new()
    });
    info!(
        backend = backend.backend_name(),
        message_id = %message_id,
        "contact request forwarded"
    );

    Ok(ProxyResponse::ok()
        .with_body(message_id)
        .with_header("Content-Type", "text/plain"))
}

fn notification_email(config: &SesNotifierConfig, request: &ContactRequest) -> EmailMessage {
    let NotificationMessage {
        subject,
        html_body,
        text_body,
    } = NotificationMessage::compose(request);

    EmailMessage {
        from: config.sender.clone(),
        to: config.recipient.clone(),
        subject,
        body: Some(text_body),
        html_body: Some(html_body),
    }
}
