//! Conversion pipeline: discover, parse, merge, write.

use std::path::{
    Path,
    PathBuf,
};

use crate::config::{
    ConfigError,
    ConvertSettings,
    PRIORITY_LOCALES,
};
use crate::error::ConvertError;
use crate::input::{
    LocaleRecord,
    discover_locale_files,
    parse_locale_file,
};
use crate::ir::OutputTable;
use crate::output::write_workbook;

/// Summary of a completed conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub output_path: PathBuf,
    pub file_count: usize,
    /// Locale columns in output order.
    pub locales: Vec<String>,
    pub key_count: usize,
    /// Cells left empty because a locale lacks the key.
    pub missing_translations: usize,
}

/// Convert every locale file in `dir` into one spreadsheet inside `dir`.
///
/// All files are parsed before anything is written, so a bad input leaves
/// any previous output untouched.
///
/// # Errors
/// - Invalid settings
/// - Directory listing failure
/// - Unreadable file, invalid JSON, or a non-object top level
/// - Spreadsheet write failure
pub fn convert_directory(
    dir: &Path,
    settings: &ConvertSettings,
) -> Result<ConversionReport, ConvertError> {
    settings.validate().map_err(ConfigError::ValidationErrors)?;

    let files = discover_locale_files(dir, settings)
        .map_err(|source| ConvertError::Discovery { path: dir.to_path_buf(), source })?;

    let records = files
        .iter()
        .map(|file| {
            parse_locale_file(file)
                .map_err(|source| ConvertError::Parse { path: file.path.clone(), source })
        })
        .collect::<Result<Vec<LocaleRecord>, _>>()?;

    let table = OutputTable::from_records(&records, PRIORITY_LOCALES);

    let output_path = dir.join(&settings.output_file_name);
    write_workbook(&table, &output_path, &settings.sheet_name)
        .map_err(|source| ConvertError::Write { path: output_path.clone(), source })?;

    Ok(ConversionReport {
        output_path,
        file_count: files.len(),
        locales: table.locales().to_vec(),
        key_count: table.rows().len(),
        missing_translations: table.missing_count(),
    })
}
