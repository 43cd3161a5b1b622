//! HTTP surface for the incident bot.
//!
//! Provides the welcome endpoint and `POST /chatbot`, which is served by
//! whichever handler the configured variant selects.

use std::future::Future;

use axum::{
    Form, Json, Router,
    extract::{FromRequest, Multipart, Query, Request, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, instrument, warn};

use crate::{
    base::{
        responses::WELCOME_MESSAGE,
        types::{ChatbotResponse, ChatbotVariant, ClassifyError},
    },
    classify::{Classifier, incident::IncidentDetector},
    interaction::{chatbot::handle_chatbot, incident_report::handle_incident_report},
    service::{incident_log::IncidentLog, notifier::Notifier},
};

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Classifier,
    pub detector: IncidentDetector,
    pub notifier: Notifier,
    pub incident_log: IncidentLog,
}

/// The `query` field of a chatbot request.
#[derive(Debug, Deserialize)]
struct ChatbotQuery {
    query: String,
}

/// The `query` form field, sent either url-encoded or as `multipart/form-data`.
#[derive(Debug)]
struct ChatbotForm(ChatbotQuery);

impl<S> FromRequest<S> for ChatbotForm
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if !is_multipart {
            let Form(form) = Form::<ChatbotQuery>::from_request(req, state).await.map_err(IntoResponse::into_response)?;
            return Ok(Self(form));
        }

        let mut multipart = Multipart::from_request(req, state).await.map_err(IntoResponse::into_response)?;

        while let Some(field) = multipart.next_field().await.map_err(IntoResponse::into_response)? {
            if field.name() == Some("query") {
                let query = field.text().await.map_err(IntoResponse::into_response)?;
                return Ok(Self(ChatbotQuery { query }));
            }
        }

        Err((StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "detail": "Missing form field `query`." }))).into_response())
    }
}

impl IntoResponse for ClassifyError {
    fn into_response(self) -> Response {
        let status = match self {
            ClassifyError::InputTooLong { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// `GET /` — Static welcome message.
async fn home() -> Json<serde_json::Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

/// `POST /chatbot` — Classify the `query` form field.
#[instrument(skip_all)]
async fn chatbot(State(state): State<AppState>, ChatbotForm(form): ChatbotForm) -> Result<Json<ChatbotResponse>, ClassifyError> {
    handle_chatbot(&state.classifier, &form.query).map(Json).inspect_err(|e| warn!("Rejected chatbot query: {}", e))
}

/// `POST /chatbot?query=...` — Answer room questions and report incidents.
#[instrument(skip_all)]
async fn incident_report(State(state): State<AppState>, Query(params): Query<ChatbotQuery>) -> Result<Json<ChatbotResponse>, ClassifyError> {
    handle_incident_report(&state.classifier, &state.detector, &state.notifier, &state.incident_log, &params.query)
        .await
        .map(Json)
        .inspect_err(|e| warn!("Rejected incident query: {}", e))
}

/// Build the axum router with shared state.
pub fn build_router(state: AppState, variant: ChatbotVariant) -> Router {
    // Only the classifier variant has a welcome page.
    let router = match variant {
        ChatbotVariant::Classifier => Router::new().route("/", get(home)).route("/chatbot", post(chatbot)),
        ChatbotVariant::IncidentReport => Router::new().route("/chatbot", post(incident_report)),
    };

    router
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve `router` on `bind_address` until Ctrl-C.
pub async fn serve(bind_address: &str, router: Router) -> crate::base::types::Void {
    let listener = match tokio::net::TcpListener::bind(bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", bind_address, e);
            return Err(anyhow::anyhow!("Failed to bind to {}: {}", bind_address, e));
        }
    };

    info!("Listening on {} ...", listener.local_addr()?);

    if let Err(e) = axum::serve(listener, router).with_graceful_shutdown(shutdown_signal(tokio::signal::ctrl_c())).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Resolve once `signal` fires.
///
/// If the signal handler cannot be installed, this never resolves, so the
/// server keeps running instead of shutting down on startup.
async fn shutdown_signal<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("Shutting down ..."),
        Err(e) => {
            error!("Failed to listen for the shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_shutdown_signal_resolves_on_signal() {
        let result = tokio::time::timeout(Duration::from_secs(1), shutdown_signal(async { Ok::<(), std::io::Error>(()) })).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shutdown_signal_waits_when_handler_fails() {
        let failing = async { Err::<(), _>(std::io::Error::other("signal handler unavailable")) };
        let result = tokio::time::timeout(Duration::from_millis(50), shutdown_signal(failing)).await;

        assert!(result.is_err());
    }
}
