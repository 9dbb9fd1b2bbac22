//! In-process fakes for the backend seams.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use notifier_email::{BackendConnector, EmailBackend, EmailMessage, EmailResult};
use notifier_provider::{DeliveryErrorKind, ProviderError};

/// What a fake send attempt answers with.
#[derive(Debug, Clone)]
pub enum Outcome {
    Sent(Option<String>),
    Delivery(DeliveryErrorKind),
    AuthFailure,
}

#[derive(Debug)]
pub struct FakeBackend {
    outcome: Outcome,
    sent: Arc<Mutex<Vec<EmailMessage>>>,
}

#[async_trait]
impl EmailBackend for FakeBackend {
    async fn send(&self, message: &EmailMessage) -> Result<EmailResult, ProviderError> {
        self.sent.lock().unwrap().push(message.clone());
        match &self.outcome {
            Outcome::Sent(id) => Ok(EmailResult::sent(id.clone())),
            Outcome::Delivery(kind) => Err(ProviderError::delivery(*kind, "provider said no")),
            Outcome::AuthFailure => Err(ProviderError::Transport(
                "permanent SMTP error: 535 5.7.8 Username and Password not accepted".into(),
            )),
        }
    }

    fn backend_name(&self) -> &'static str {
        "fake"
    }
}

/// Connector recording every session it opens and every message sent
/// through those sessions.
pub struct FakeConnector<C> {
    outcome: Outcome,
    connect_error: Option<String>,
    connects: AtomicUsize,
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    _config: PhantomData<fn(&C)>,
}

impl<C> FakeConnector<C> {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            connect_error: None,
            connects: AtomicUsize::new(0),
            sent: Arc::new(Mutex::new(Vec::new())),
            _config: PhantomData,
        }
    }

    pub fn failing_to_connect(message: &str) -> Self {
        Self {
            connect_error: Some(message.to_owned()),
            ..Self::new(Outcome::Sent(None))
        }
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl<C: Send + Sync> BackendConnector for FakeConnector<C> {
    type Config = C;
    type Backend = FakeBackend;

    async fn connect(&self, _config: &C) -> Result<FakeBackend, ProviderError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        if let Some(ref message) = self.connect_error {
            return Err(ProviderError::Configuration(message.clone()));
        }
        Ok(FakeBackend {
            outcome: self.outcome.clone(),
            sent: Arc::clone(&self.sent),
        })
    }
}
