//! Input type definitions.

use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// A localization resource found by discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFile {
    pub path: PathBuf,

    /// Locale derived from the file name, used when the file does not declare one.
    pub inferred_locale: String,
}

/// Parsed contents of one [`LocaleFile`].
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleRecord {
    /// Trimmed locale identifier (e.g., "en", "fr-CA").
    pub locale: String,

    pub file_path: PathBuf,

    /// Top-level entries without metadata keys. Values are kept as raw JSON.
    pub translations: HashMap<String, Value>,
}

impl LocaleRecord {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.translations.get(key)
    }
}

#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// Error when listing the directory or one of its entries
    #[error("Failed to list directory: {0}")]
    Io(#[from] std::io::Error),
    /// Error when the file pattern cannot be compiled
    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] globset::Error),
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Expected a JSON object at the top level, found {found}")]
    NotAnObject { found: &'static str },
}
