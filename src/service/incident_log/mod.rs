pub mod file;

use std::{fmt, ops::Deref, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Local};

use crate::base::types::Void;

// Traits.

/// Generic append-only incident log trait.
///
/// Records are written once and never read back by the bot.
#[async_trait]
pub trait GenericIncidentLog: Send + Sync + 'static {
    /// Append a single record.
    async fn append(&self, record: &IncidentRecord) -> Void;
}

// Structs.

/// A reported incident, as written to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentRecord {
    pub query: String,
    pub reported_at: DateTime<Local>,
}

impl IncidentRecord {
    /// Create a record stamped with the current local time.
    pub fn now(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            reported_at: Local::now(),
        }
    }
}

impl fmt::Display for IncidentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Incident: {}\nDate and Time: {}\n\n", self.query, self.reported_at.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Incident log for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct IncidentLog {
    inner: Arc<dyn GenericIncidentLog>,
}

impl Deref for IncidentLog {
    type Target = dyn GenericIncidentLog;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl IncidentLog {
    pub fn new(inner: Arc<dyn GenericIncidentLog>) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_record_format() {
        let record = IncidentRecord {
            query: "Fire in the kitchen".to_string(),
            reported_at: Local.with_ymd_and_hms(2025, 3, 14, 9, 5, 7).unwrap(),
        };

        assert_eq!(record.to_string(), "Incident: Fire in the kitchen\nDate and Time: 2025-03-14 09:05:07\n\n");
    }
}
