//! Library root for `incident-bot`.
//!
//! Incident-bot is a small HTTP chatbot for security desks designed to:
//! - Classify short free-text messages into security and medical categories
//! - Answer with a canned response for the first recognized trigger phrase
//! - Optionally report security incidents by email and to an append-only log
//!
//! Classification is pure keyword matching; the side-effecting services sit
//! behind traits so that they can be swapped out or mocked.

pub mod base;
pub mod classify;
pub mod interaction;
pub mod runtime;
pub mod server;
pub mod service;

use base::{config::Config, types::Void};
use rustls::crypto;
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the incident-bot runtime:
/// - Initializes the crypto provider
/// - Creates the runtime context with the classifier, notifier, and incident log
/// - Serves HTTP until shutdown
pub async fn start(config: Config) -> Void {
    info!("Starting incident-bot ...");

    // Start the crypto provider.
    crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install the crypto provider."))?;

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config)?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
