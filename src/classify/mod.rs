//! Keyword classification of free-text messages.
//!
//! Classification is a pure pipeline: check the length, normalize, then scan
//! the normalized words against the response table.

pub mod incident;
pub mod normalize;
pub mod table;

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::base::types::ClassifyError;

use self::{
    normalize::{check_length, normalize},
    table::ResponseTable,
};

/// Classifies messages against a fixed response table.
///
/// This is trivially cloneable and holds no mutable state.
#[derive(Debug, Clone)]
pub struct Classifier {
    table: Arc<ResponseTable>,
    max_len: usize,
}

impl Classifier {
    /// Create a classifier over the built-in response table.
    pub fn new(max_len: usize) -> Self {
        Self::with_table(ResponseTable::default_table(), max_len)
    }

    /// Create a classifier over a caller-supplied table.
    pub fn with_table(table: Arc<ResponseTable>, max_len: usize) -> Self {
        Self { table, max_len }
    }

    /// Reject oversized input, then normalize what remains.
    pub fn prepare(&self, raw: &str) -> Result<String, ClassifyError> {
        check_length(raw, self.max_len)?;
        Ok(normalize(raw))
    }

    /// Return the response for the first trigger phrase in `raw`.
    #[instrument(skip_all)]
    pub fn classify(&self, raw: &str) -> Result<&str, ClassifyError> {
        let normalized = self.prepare(raw)?;
        let response = self.table.respond(&normalized);

        debug!("Classified `{}` as `{}`.", normalized, response);

        Ok(response)
    }
}
