//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use super::types::{ChatbotVariant, Res};

/// Default address the HTTP server binds to.
fn default_bind_address() -> String {
    "0.0.0.0:8000".to_string()
}

/// Default maximum query length, in characters.
fn default_max_query_length() -> usize {
    200
}

/// Default SMTP relay host.
fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

/// Default SMTP relay port (STARTTLS).
fn default_smtp_port() -> u16 {
    587
}

/// Default path of the incident log.
fn default_incident_log_path() -> String {
    "logs/security_incidents.log".to_string()
}

/// Configuration for the incident bot.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<ConfigInner> for Config {
    fn from(inner: ConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// Address the HTTP server listens on (`BIND_ADDRESS`).
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Longest accepted query after trimming, in characters (`MAX_QUERY_LENGTH`).
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
    /// Handler that answers `POST /chatbot` (`CHATBOT_VARIANT`).
    #[serde(default)]
    pub chatbot_variant: ChatbotVariant,
    /// SMTP relay host (`SMTP_HOST`).
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// SMTP relay port (`SMTP_PORT`).
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// Sender address and SMTP username (`EMAIL_ADDRESS`).
    #[serde(default)]
    pub email_address: String,
    /// SMTP password (`EMAIL_PASSWORD`).
    #[serde(default)]
    pub email_password: String,
    /// Recipient of incident notifications (`SECURITY_TEAM_EMAIL`).
    #[serde(default)]
    pub security_team_email: String,
    /// File incident records are appended to (`INCIDENT_LOG_PATH`).
    #[serde(default = "default_incident_log_path")]
    pub incident_log_path: String,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            max_query_length: default_max_query_length(),
            chatbot_variant: ChatbotVariant::default(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            email_address: String::new(),
            email_password: String::new(),
            security_team_email: String::new(),
            incident_log_path: default_incident_log_path(),
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("INCIDENT_BOT"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    /// Apply command-line overrides on top of the loaded values, then re-validate.
    pub fn with_overrides(self, bind_address: Option<String>, chatbot_variant: Option<ChatbotVariant>) -> Res<Self> {
        if bind_address.is_none() && chatbot_variant.is_none() {
            return Ok(self);
        }

        let mut inner = (*self.inner).clone();

        if let Some(bind_address) = bind_address {
            inner.bind_address = bind_address;
        }

        if let Some(chatbot_variant) = chatbot_variant {
            inner.chatbot_variant = chatbot_variant;
        }

        let result = Config::from(inner);
        result.validate()?;

        Ok(result)
    }

    /// Check the loaded values for consistency.
    pub fn validate(&self) -> Res<()> {
        if self.max_query_length < 1 {
            return Err(anyhow::anyhow!("Max query length must be at least 1."));
        }

        if self.chatbot_variant == ChatbotVariant::IncidentReport {
            if self.email_address.is_empty() {
                return Err(anyhow::anyhow!("An email address is required for incident reporting."));
            }

            if self.security_team_email.is_empty() {
                return Err(anyhow::anyhow!("A security team email is required for incident reporting."));
            }
        }

        Ok(())
    }
}
