//! Injected translation table for error classes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Locale used when none is configured
pub const DEFAULT_LOCALE: &str = "zh-CN";

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("failed to read translation table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid translation table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Message template with its own substitution values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageTemplate {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub fields: Vec<String>,
}

/// Per-locale templates for one detail id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetailTranslation {
    pub locales: HashMap<String, MessageTemplate>,
}

/// Translation of one error class
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorTranslationEntry {
    /// Localized class labels keyed by locale, e.g. `"zh-CN"`
    #[serde(flatten)]
    pub labels: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, DetailTranslation>,
}

impl ErrorTranslationEntry {
    pub fn label(&self, locale: &str) -> Option<&str> {
        self.labels.get(locale).map(String::as_str)
    }

    pub fn detail_template(&self, id: &str, locale: &str) -> Option<&MessageTemplate> {
        self.details.get(id).and_then(|d| d.locales.get(locale))
    }
}

/// Read-only mapping from error class to its translations
#[derive(Debug, Clone)]
pub struct TranslationTable {
    locale: String,
    entries: HashMap<String, ErrorTranslationEntry>,
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::empty(DEFAULT_LOCALE)
    }
}

impl TranslationTable {
    pub fn new(locale: impl Into<String>, entries: HashMap<String, ErrorTranslationEntry>) -> Self {
        Self {
            locale: locale.into(),
            entries,
        }
    }

    pub fn empty(locale: impl Into<String>) -> Self {
        Self::new(locale, HashMap::new())
    }

    /// Parse a table from its JSON form
    pub fn from_json_str(json: &str, locale: impl Into<String>) -> Result<Self, TranslationError> {
        let entries: HashMap<String, ErrorTranslationEntry> = serde_json::from_str(json)?;
        Ok(Self::new(locale, entries))
    }

    /// Load a table from a JSON file
    pub fn from_path(path: &Path, locale: impl Into<String>) -> Result<Self, TranslationError> {
        let json = std::fs::read_to_string(path).map_err(|source| TranslationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&json, locale)?;
        info!(
            "Loaded {} error translations from {} (locale {})",
            table.len(),
            path.display(),
            table.locale
        );
        Ok(table)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn get(&self, class: &str) -> Option<&ErrorTranslationEntry> {
        self.entries.get(class)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
