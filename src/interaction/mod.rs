//! Request handling for the incident bot.
//!
//! This module composes classification with side effects:
//! - Plain keyword classification of chatbot messages
//! - Room lookups and incident reporting with email alerts and log records

pub mod chatbot;
pub mod incident_report;
