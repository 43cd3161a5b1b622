//! The response table and the left-to-right phrase scan.

use std::{
    collections::HashMap,
    sync::{Arc, LazyLock},
};

use crate::base::{
    responses::{DEFAULT_RESPONSE, RESPONSES},
    types::Res,
};

use super::normalize::normalize;

static DEFAULT_TABLE: LazyLock<Arc<ResponseTable>> = LazyLock::new(|| {
    Arc::new(ResponseTable::from_entries(RESPONSES.iter().copied()).expect("built-in response table holds only one- and two-word keys"))
});

/// Trigger phrases mapped to responses, partitioned by key width.
#[derive(Debug, Clone, Default)]
pub struct ResponseTable {
    single: HashMap<String, String>,
    pair: HashMap<String, String>,
}

impl ResponseTable {
    /// Build a table from `(phrase, response)` entries.
    ///
    /// Phrases are normalized, and must hold one or two words.
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Res<Self>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = Self::default();

        for (phrase, response) in entries {
            let key = normalize(phrase.as_ref());

            match key.split(' ').filter(|w| !w.is_empty()).count() {
                1 => table.single.insert(key, response.into()),
                2 => table.pair.insert(key, response.into()),
                n => return Err(anyhow::anyhow!("Trigger phrase `{}` has {} words; expected one or two.", phrase.as_ref(), n)),
            };
        }

        Ok(table)
    }

    /// The process-wide built-in table.
    pub fn default_table() -> Arc<ResponseTable> {
        DEFAULT_TABLE.clone()
    }

    /// Find the first trigger in `normalized`, scanning left to right.
    ///
    /// At each position a single word beats the pair starting there, and an
    /// earlier position always beats a later one.
    pub fn find(&self, normalized: &str) -> Option<&str> {
        let words: Vec<&str> = normalized.split(' ').filter(|w| !w.is_empty()).collect();

        for (i, word) in words.iter().enumerate() {
            if let Some(response) = self.single.get(*word) {
                return Some(response);
            }

            if let Some(next) = words.get(i + 1)
                && let Some(response) = self.pair.get(&format!("{word} {next}"))
            {
                return Some(response);
            }
        }

        None
    }

    /// Like [`ResponseTable::find`], falling back to the default response.
    pub fn respond(&self, normalized: &str) -> &str {
        self.find(normalized).unwrap_or(DEFAULT_RESPONSE)
    }
}
