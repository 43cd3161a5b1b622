//! Runtime services and shared state for the incident bot.

use tracing::{info, instrument};

use crate::{
    base::{
        config::Config,
        types::{ChatbotVariant, Res, Void},
    },
    classify::{Classifier, incident::IncidentDetector},
    server::{self, AppState},
    service::{incident_log::IncidentLog, notifier::Notifier},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the configuration, the classifier, and the side-effecting
/// services. It is designed to be trivially cloneable, allowing it to be passed
/// around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The keyword classifier.
    pub classifier: Classifier,
    /// The incident notifier instance.
    pub notifier: Notifier,
    /// The incident log instance.
    pub incident_log: IncidentLog,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        let classifier = Classifier::new(config.max_query_length);

        // Initialize the notifier; only incident reporting sends anything.
        let notifier = match config.chatbot_variant {
            ChatbotVariant::IncidentReport => Notifier::smtp(&config)?,
            ChatbotVariant::Classifier => Notifier::disabled(),
        };

        // Initialize the incident log.
        let incident_log = IncidentLog::file(&config);

        Ok(Self {
            config,
            classifier,
            notifier,
            incident_log,
        })
    }

    /// Build the HTTP router for this runtime.
    pub fn router(&self) -> axum::Router {
        let state = AppState {
            classifier: self.classifier.clone(),
            detector: IncidentDetector::default(),
            notifier: self.notifier.clone(),
            incident_log: self.incident_log.clone(),
        };

        server::build_router(state, self.config.chatbot_variant)
    }

    pub async fn start(&self) -> Void {
        if self.config.chatbot_variant == ChatbotVariant::IncidentReport {
            info!("Incident reporting enabled; alerts go to {}.", self.config.security_team_email);
        }

        server::serve(&self.config.bind_address, self.router()).await
    }
}
