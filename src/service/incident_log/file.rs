//! Plain-text file backend for the incident log.

use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tokio::{fs, io::AsyncWriteExt};
use tracing::instrument;

use crate::base::{config::Config, types::Void};

use super::{GenericIncidentLog, IncidentLog, IncidentRecord};

// Extra methods on `IncidentLog` applied by the file implementation.

impl IncidentLog {
    /// Creates a new file-backed incident log at the configured path.
    pub fn file(config: &Config) -> Self {
        Self::at_path(&config.incident_log_path)
    }

    /// Creates a new file-backed incident log at `path`.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(FileIncidentLog { path: path.into() }),
        }
    }
}

/// Appends records to a single file.
struct FileIncidentLog {
    path: PathBuf,
}

#[async_trait]
impl GenericIncidentLog for FileIncidentLog {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    async fn append(&self, record: &IncidentRecord) -> Void {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::OpenOptions::new().create(true).append(true).open(&self.path).await?;
        file.write_all(record.to_string().as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}
