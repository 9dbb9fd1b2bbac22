use notifier_aws::SesConfig;
use serde::{Deserialize, Serialize};

/// Relay used by the SMTP notifier unless `SMTP_HOST` overrides it.
pub const DEFAULT_SMTP_RELAY: &str = "smtp.gmail.com";

/// STARTTLS submission port.
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Environment variable names read by the notifiers.
pub mod env {
    pub const SENDER: &str = "SENDER";
    pub const APP_PASSWORD: &str = "APP_PASSWORD";
    pub const RECEIVER: &str = "RECEIVER";
    pub const SMTP_HOST: &str = "SMTP_HOST";
    pub const SMTP_PORT: &str = "SMTP_PORT";
    pub const RECIPIENT: &str = "RECIPIENT";
    pub const REGION: &str = "REGION";
    pub const SES_ENDPOINT_URL: &str = "SES_ENDPOINT_URL";
    pub const SES_CONFIGURATION_SET: &str = "SES_CONFIGURATION_SET";
}

/// Read a process environment variable, treating unset and non-UTF-8 values
/// alike.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// SMTP-specific configuration settings.
///
/// Holds all settings needed to establish a STARTTLS connection to an SMTP
/// relay. Deserialize-only so the password cannot be written back out.
#[derive(Clone, Deserialize)]
pub struct SmtpConfig {
    /// SMTP server hostname.
    pub smtp_host: String,

    /// SMTP server port. Defaults to 587 (STARTTLS submission port).
    pub smtp_port: u16,

    /// Optional SMTP username for authentication.
    pub username: Option<String>,

    /// Optional SMTP password for authentication.
    pub password: Option<String>,
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            smtp_host: DEFAULT_SMTP_RELAY.to_owned(),
            smtp_port: DEFAULT_SMTP_PORT,
            username: None,
            password: None,
        }
    }
}

/// Configuration of the SMTP notifier, read from the environment on every
/// invocation.
///
/// Unset variables read as empty strings; nothing is validated up front, so a
/// bad value surfaces as a send failure.
///
/// # Examples
///
/// ```
/// use notifier_email::SmtpNotifierConfig;
///
/// let config = SmtpNotifierConfig::from_lookup(|key| match key {
///     "SENDER" => Some("me@gmail.com".to_owned()),
///     "APP_PASSWORD" => Some("app-password".to_owned()),
///     "RECEIVER" => Some("you@example.com".to_owned()),
///     _ => None,
/// });
/// assert_eq!(config.smtp_host, "smtp.gmail.com");
/// assert_eq!(config.smtp_port, 587);
/// ```
#[derive(Clone, Deserialize)]
pub struct SmtpNotifierConfig {
    /// Sender address; also the SMTP username.
    pub sender: String,

    /// Application password used for SMTP authentication.
    pub app_password: String,

    /// Single recipient address.
    pub receiver: String,

    /// Relay hostname.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// Relay port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
}

fn default_smtp_host() -> String {
    DEFAULT_SMTP_RELAY.to_owned()
}

fn default_smtp_port() -> u16 {
    DEFAULT_SMTP_PORT
}

impl std::fmt::Debug for SmtpNotifierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpNotifierConfig")
            .field("sender", &self.sender)
            .field("app_password", &"[REDACTED]")
            .field("receiver", &self.receiver)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .finish()
    }
}

impl SmtpNotifierConfig {
    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let smtp_host = lookup(env::SMTP_HOST)
            .filter(|host| !host.trim().is_empty())
            .unwrap_or_else(default_smtp_host);
        let smtp_port = lookup(env::SMTP_PORT)
            .and_then(|port| port.trim().parse().ok())
            .unwrap_or(DEFAULT_SMTP_PORT);

        Self {
            sender: lookup(env::SENDER).unwrap_or_default(),
            app_password: lookup(env::APP_PASSWORD).unwrap_or_default(),
            receiver: lookup(env::RECEIVER).unwrap_or_default(),
            smtp_host,
            smtp_port,
        }
    }

    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    /// Transport settings: STARTTLS, authenticating as the sender.
    pub fn smtp_config(&self) -> SmtpConfig {
        SmtpConfig {
            smtp_host: self.smtp_host.clone(),
            smtp_port: self.smtp_port,
            username: Some(self.sender.clone()),
            password: Some(self.app_password.clone()),
        }
    }
}

/// Configuration of the delivery-API notifier, read from the environment on
/// every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SesNotifierConfig {
    /// Verified sender address.
    pub sender: String,

    /// Single recipient address.
    pub recipient: String,

    /// AWS region of the SES endpoint.
    pub region: String,

    /// Optional endpoint override (e.g. `LocalStack`).
    #[serde(default)]
    pub endpoint_url: Option<String>,

    /// Optional SES configuration set.
    #[serde(default)]
    pub configuration_set: Option<String>,
}

impl SesNotifierConfig {
    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            sender: lookup(env::SENDER).unwrap_or_default(),
            recipient: lookup(env::RECIPIENT).unwrap_or_default(),
            region: lookup(env::REGION).unwrap_or_default(),
            endpoint_url: optional(env::SES_ENDPOINT_URL),
            configuration_set: optional(env::SES_CONFIGURATION_SET),
        }
    }

    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    /// Client settings for the SES session.
    pub fn ses_config(&self) -> SesConfig {
        let mut config = SesConfig::new(self.region.clone());
        if let Some(ref url) = self.endpoint_url {
            config = config.with_endpoint_url(url);
        }
        if let Some(ref set) = self.configuration_set {
            config = config.with_configuration_set(set);
        }
        config
    }
}
