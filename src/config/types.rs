use thiserror::Error;

/// File extension of ARB localization resources.
pub const DEFAULT_FILE_EXTENSION: &str = "arb";

/// Name of the spreadsheet written next to the input files.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "다국어_번역.xlsx";

/// Name of the only worksheet in the output spreadsheet.
pub const DEFAULT_SHEET_NAME: &str = "번역";

/// Locales pinned to the first columns, in this order, when present.
pub const PRIORITY_LOCALES: &[&str] = &["ko", "en"];

/// Excel rejects worksheet names longer than this.
const MAX_SHEET_NAME_LEN: usize = 31;

/// Characters Excel rejects in worksheet names.
const INVALID_SHEET_NAME_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// Name of the offending field (e.g., "sheet_name")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),
}

/// Renders validation errors as a numbered list.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings for a single conversion run.
///
/// The command line tool always runs with [`ConvertSettings::default`].
/// Column order always follows [`PRIORITY_LOCALES`], and the output file name
/// is fixed for library callers as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSettings {
    /// Extension (without the dot) of the files picked up by discovery.
    pub file_extension: String,

    /// File name of the spreadsheet, created inside the working directory.
    pub(crate) output_file_name: String,

    pub sheet_name: String,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
            output_file_name: DEFAULT_OUTPUT_FILE_NAME.to_string(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

impl ConvertSettings {
    /// File name of the spreadsheet, always [`DEFAULT_OUTPUT_FILE_NAME`]
    /// outside this crate.
    #[must_use]
    pub fn output_file_name(&self) -> &str {
        &self.output_file_name
    }

    /// Glob matched against file names during discovery.
    #[must_use]
    pub fn file_pattern(&self) -> String {
        format!("*.{}", self.file_extension)
    }

    /// # Errors
    /// - Required field is empty
    /// - Extension does not form a valid glob pattern
    /// - Output file name is not a bare file name
    /// - Sheet name is not accepted by Excel
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.file_extension.is_empty() {
            errors.push(ValidationError::new(
                "file_extension",
                "The extension cannot be empty. Example: \"arb\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.file_pattern()) {
            errors.push(ValidationError::new(
                "file_extension",
                format!("Invalid glob pattern '{}': {e}", self.file_pattern()),
            ));
        }

        if self.output_file_name.is_empty() {
            errors.push(ValidationError::new(
                "output_file_name",
                "The file name cannot be empty. Example: \"translations.xlsx\"",
            ));
        } else if self.output_file_name.contains(['/', '\\']) {
            errors.push(ValidationError::new(
                "output_file_name",
                format!(
                    "'{}' must be a file name, not a path. The file is always written to the working directory",
                    self.output_file_name
                ),
            ));
        }

        if let Err(message) = check_sheet_name(&self.sheet_name) {
            errors.push(ValidationError::new("sheet_name", message));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Applies Excel's worksheet naming rules.
fn check_sheet_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("The sheet name cannot be empty".to_string());
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(format!(
            "'{name}' is longer than {MAX_SHEET_NAME_LEN} characters, which Excel does not allow"
        ));
    }
    if let Some(c) = name.chars().find(|c| INVALID_SHEET_NAME_CHARS.contains(c)) {
        return Err(format!("'{name}' contains '{c}', which Excel does not allow"));
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(format!("'{name}' cannot start or end with an apostrophe"));
    }
    Ok(())
}
