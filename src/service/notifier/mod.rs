pub mod smtp;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::base::types::{NotificationStatus, Void};

// Traits.

/// Generic notification trait that senders must implement.
///
/// Implementing this trait allows incident alerts to be delivered over
/// different channels (email, chat, pager, etc.).
#[async_trait]
pub trait GenericNotifier: Send + Sync + 'static {
    /// Deliver a single alert.
    async fn send(&self, subject: &str, body: &str) -> Void;
}

// Structs.

/// Notifier for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Notifier {
    inner: Arc<dyn GenericNotifier>,
}

impl Deref for Notifier {
    type Target = dyn GenericNotifier;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl Notifier {
    pub fn new(inner: Arc<dyn GenericNotifier>) -> Self {
        Self { inner }
    }

    /// A notifier that refuses every alert.
    pub fn disabled() -> Self {
        Self::new(Arc::new(DisabledNotifier))
    }

    /// Send an alert, folding any failure into the returned status.
    #[instrument(skip_all)]
    pub async fn notify(&self, subject: &str, body: &str) -> NotificationStatus {
        match self.send(subject, body).await {
            Ok(()) => {
                info!("Incident notification sent.");
                NotificationStatus::Sent
            }
            Err(err) => {
                warn!("Failed to send incident notification: {:#}", err);
                NotificationStatus::Failed(format!("{err:#}"))
            }
        }
    }
}

/// Stand-in used when no delivery channel is configured.
struct DisabledNotifier;

#[async_trait]
impl GenericNotifier for DisabledNotifier {
    async fn send(&self, _subject: &str, _body: &str) -> Void {
        Err(anyhow::anyhow!("notifications are not configured"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticNotifier {
        fail: bool,
    }

    #[async_trait]
    impl GenericNotifier for StaticNotifier {
        async fn send(&self, _subject: &str, _body: &str) -> Void {
            if self.fail {
                return Err(anyhow::anyhow!("relay unreachable"));
            }

            Ok(())
        }
    }

    #[tokio::test]
    async fn test_notify_success() {
        let notifier = Notifier::new(Arc::new(StaticNotifier { fail: false }));

        assert_eq!(notifier.notify("subject", "body").await, NotificationStatus::Sent);
    }

    #[tokio::test]
    async fn test_notify_failure_becomes_status() {
        let notifier = Notifier::new(Arc::new(StaticNotifier { fail: true }));
        let status = notifier.notify("subject", "body").await;

        assert_eq!(status, NotificationStatus::Failed("relay unreachable".to_string()));
        assert_eq!(status.to_string(), "Error sending email: relay unreachable");
    }

    #[tokio::test]
    async fn test_disabled_notifier_reports_failure() {
        let status = Notifier::disabled().notify("subject", "body").await;

        assert!(matches!(status, NotificationStatus::Failed(_)));
    }
}
