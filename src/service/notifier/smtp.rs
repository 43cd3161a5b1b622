//! Email delivery of incident alerts over an SMTP relay.

use std::sync::Arc;

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::instrument;

use crate::base::{
    config::Config,
    types::{Res, Void},
};

use super::{GenericNotifier, Notifier};

// Extra methods on `Notifier` applied by the SMTP implementation.

impl Notifier {
    /// Creates a new SMTP notifier.
    pub fn smtp(config: &Config) -> Res<Self> {
        let notifier = SmtpNotifier::new(config)?;
        Ok(Self { inner: Arc::new(notifier) })
    }
}

/// SMTP notifier implementation.
struct SmtpNotifier {
    from: Mailbox,
    to: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpNotifier {
    #[instrument(name = "SmtpNotifier::new", skip_all)]
    fn new(config: &Config) -> Res<Self> {
        let from = config
            .email_address
            .parse::<Mailbox>()
            .map_err(|e| anyhow::anyhow!("Invalid sender address `{}`: {}", config.email_address, e))?;
        let to = config
            .security_team_email
            .parse::<Mailbox>()
            .map_err(|e| anyhow::anyhow!("Invalid security team address `{}`: {}", config.security_team_email, e))?;

        let credentials = Credentials::new(config.email_address.clone(), config.email_password.clone());

        // The transport connects lazily, so a bad relay only shows up on send.
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self { from, to, transport })
    }
}

#[async_trait]
impl GenericNotifier for SmtpNotifier {
    #[instrument(skip(self, body))]
    async fn send(&self, subject: &str, body: &str) -> Void {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        self.transport.send(message).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::config::ConfigInner;

    #[test]
    fn test_rejects_invalid_address() {
        let config = Config::from(ConfigInner {
            email_address: "not an address".to_string(),
            security_team_email: "security@example.com".to_string(),
            ..Default::default()
        });

        assert!(Notifier::smtp(&config).is_err());
    }

    #[tokio::test]
    async fn test_builds_with_valid_addresses() {
        let _ = rustls::crypto::ring::default_provider().install_default();

        let config = Config::from(ConfigInner {
            email_address: "bot@example.com".to_string(),
            security_team_email: "security@example.com".to_string(),
            ..Default::default()
        });

        assert!(Notifier::smtp(&config).is_ok());
    }
}
