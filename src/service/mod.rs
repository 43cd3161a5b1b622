//! Service integrations for side effects.
//!
//! This module contains implementations for the services the incident bot calls out to:
//! - Notifiers (e.g., SMTP email)
//! - Incident logs (e.g., a plain-text file)
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod incident_log;
pub mod notifier;
