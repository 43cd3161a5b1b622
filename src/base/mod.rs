//! Core components, types, and utilities for the incident bot.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Static response, room, and keyword tables.
//! - Common types and result handling.

pub mod config;
pub mod responses;
pub mod types;
