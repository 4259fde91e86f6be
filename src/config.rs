//! Conversion settings
/// Settings types and validation
mod types;

pub use types::{
    ConfigError,
    ConvertSettings,
    DEFAULT_FILE_EXTENSION,
    DEFAULT_OUTPUT_FILE_NAME,
    DEFAULT_SHEET_NAME,
    PRIORITY_LOCALES,
    ValidationError,
};
