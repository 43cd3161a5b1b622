//! Room lookups and incident reporting.
//!
//! Incidents fan out to the notifier and the incident log. Neither can fail
//! the request; failures come back as status strings in the response.

use tracing::{info, instrument, warn};

use crate::{
    base::{
        responses::{INCIDENT_ACKNOWLEDGEMENT, INCIDENT_SUBJECT, QUERY_PROCESSED, incident_body},
        types::{ChatbotResponse, ClassifyError},
    },
    classify::{Classifier, incident::IncidentDetector},
    service::{
        incident_log::{IncidentLog, IncidentRecord},
        notifier::Notifier,
    },
};

/// Answer a query, reporting it as an incident when it mentions one.
///
/// The length check runs first, so an oversized query never triggers an alert.
#[instrument(skip_all)]
pub async fn handle_incident_report(
    classifier: &Classifier,
    detector: &IncidentDetector,
    notifier: &Notifier,
    incident_log: &IncidentLog,
    query: &str,
) -> Result<ChatbotResponse, ClassifyError> {
    let normalized = classifier.prepare(query)?;

    if let Some(location) = detector.locate_room(&normalized) {
        info!("Answered room location query.");
        return Ok(ChatbotResponse::new(location));
    }

    if !detector.is_incident(&normalized) {
        return Ok(ChatbotResponse::new(QUERY_PROCESSED));
    }

    info!("Incident detected; notifying security.");

    let query = query.trim();
    let email_status = notifier.notify(INCIDENT_SUBJECT, &incident_body(query)).await;

    let log_status = match incident_log.append(&IncidentRecord::now(query)).await {
        Ok(()) => None,
        Err(err) => {
            warn!("Failed to append incident record: {:#}", err);
            Some(format!("Error logging incident: {err:#}"))
        }
    };

    Ok(ChatbotResponse {
        response: INCIDENT_ACKNOWLEDGEMENT.to_string(),
        email_status: Some(email_status.to_string()),
        log_status,
    })
}
