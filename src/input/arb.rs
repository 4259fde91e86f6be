//! ARB (Application Resource Bundle) file parsing

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};

use serde_json::{
    Map,
    Value,
};

use super::types::{
    LocaleFile,
    LocaleRecord,
    ParseError,
};

/// Metadata key holding the declared locale.
pub const LOCALE_METADATA_KEY: &str = "@@locale";

/// Keys starting with this character carry metadata, not translations.
pub const METADATA_PREFIX: char = '@';

/// File name prefix of Flutter's default ARB naming (`app_<locale>.arb`).
const APP_PREFIX: &str = "app_";

/// Returns true for keys such as `@@locale` or `@hello` that describe other entries.
#[must_use]
pub fn is_metadata_key(key: &str) -> bool {
    key.starts_with(METADATA_PREFIX)
}

/// Infer the locale of a resource from its file name.
///
/// `app_<locale>.<extension>` (case-insensitive) yields `<locale>`; any other
/// name yields its stem.
///
/// # Examples
/// ```
/// use arb_to_xlsx::input::arb::infer_locale_from_file_name;
///
/// assert_eq!(infer_locale_from_file_name("app_fr.arb", "arb"), "fr");
/// assert_eq!(infer_locale_from_file_name("APP_pt_BR.ARB", "arb"), "pt_BR");
/// assert_eq!(infer_locale_from_file_name("strings.arb", "arb"), "strings");
/// ```
#[must_use]
pub fn infer_locale_from_file_name(file_name: &str, extension: &str) -> String {
    app_locale(file_name, extension).map_or_else(
        || {
            Path::new(file_name)
                .file_stem()
                .map_or_else(|| file_name.to_string(), |stem| stem.to_string_lossy().into_owned())
        },
        str::to_string,
    )
}

/// Extracts `<locale>` from `app_<locale>.<extension>`.
fn app_locale<'a>(file_name: &'a str, extension: &str) -> Option<&'a str> {
    let prefix = file_name.get(..APP_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(APP_PREFIX) {
        return None;
    }

    let split = file_name.len().checked_sub(extension.len() + 1)?;
    let suffix = file_name.get(split..)?;
    let suffix_ext = suffix.strip_prefix('.')?;
    if !suffix_ext.eq_ignore_ascii_case(extension) {
        return None;
    }

    let locale = file_name.get(APP_PREFIX.len()..split)?;
    if locale.is_empty() { None } else { Some(locale) }
}

impl LocaleFile {
    /// Creates a locale file, inferring its locale from the file name.
    #[must_use]
    pub fn new(path: PathBuf, extension: &str) -> Self {
        let file_name =
            path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
        let inferred_locale = infer_locale_from_file_name(&file_name, extension);
        Self { path, inferred_locale }
    }
}

/// Load an ARB file and resolve its locale and translations.
///
/// # Errors
/// Returns error if the file cannot be read, is not valid JSON, or its top
/// level is not an object.
pub fn parse_locale_file(file: &LocaleFile) -> Result<LocaleRecord, ParseError> {
    tracing::debug!(path = %file.path.display(), "Parsing locale file");

    let content = std::fs::read_to_string(&file.path)?;
    let (locale, translations) = parse_arb(&content, &file.inferred_locale)?;

    tracing::debug!(
        path = %file.path.display(),
        locale = %locale,
        keys = translations.len(),
        "Parsed locale file"
    );

    Ok(LocaleRecord { locale, file_path: file.path.clone(), translations })
}

/// Parse ARB text into its locale and translation entries.
///
/// `fallback_locale` is used when `@@locale` is missing, blank or not a string.
///
/// # Errors
/// Returns error if `content` is not a JSON object.
pub fn parse_arb(
    content: &str,
    fallback_locale: &str,
) -> Result<(String, HashMap<String, Value>), ParseError> {
    let object = match serde_json::from_str::<Value>(content)? {
        Value::Object(object) => object,
        other => return Err(ParseError::NotAnObject { found: json_type_name(&other) }),
    };

    let locale = declared_locale(&object).unwrap_or(fallback_locale).trim().to_string();

    let translations = object.into_iter().filter(|(key, _)| !is_metadata_key(key)).collect();

    Ok((locale, translations))
}

/// Returns the trimmed `@@locale` value when it is a non-empty string.
fn declared_locale(object: &Map<String, Value>) -> Option<&str> {
    match object.get(LOCALE_METADATA_KEY)? {
        Value::String(locale) => {
            let locale = locale.trim();
            if locale.is_empty() { None } else { Some(locale) }
        }
        Value::Null => None,
        other => {
            tracing::warn!(
                "Ignoring non-string {LOCALE_METADATA_KEY} value {other}; using the file name instead"
            );
            None
        }
    }
}

/// Article and type name used in error messages.
const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
