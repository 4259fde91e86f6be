//! Locale file discovery

use std::path::Path;

use globset::GlobBuilder;

use super::types::{
    DiscoveryError,
    LocaleFile,
};
use crate::config::ConvertSettings;

/// Find locale files directly inside `dir`.
///
/// Only regular files (or links to them) whose name matches
/// [`ConvertSettings::file_pattern`] are returned, sorted by path.
/// Subdirectories are not searched and dot files are skipped, as a shell
/// glob would.
///
/// # Errors
/// Returns error if the directory cannot be listed.
pub fn discover_locale_files(
    dir: &Path,
    settings: &ConvertSettings,
) -> Result<Vec<LocaleFile>, DiscoveryError> {
    let pattern = settings.file_pattern();
    tracing::debug!(dir = %dir.display(), %pattern, "Discovering locale files");

    let matcher = GlobBuilder::new(&pattern).literal_separator(true).build()?.compile_matcher();

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();

        if file_name.to_string_lossy().starts_with('.') || !matcher.is_match(&file_name) {
            continue;
        }

        let path = entry.path();
        // `is_file` follows symlinks
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "Skipping non-file entry");
            continue;
        }

        paths.push(path);
    }

    paths.sort();
    tracing::debug!(count = paths.len(), "Discovered locale files");

    Ok(paths.into_iter().map(|path| LocaleFile::new(path, &settings.file_extension)).collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    fn file_names(files: &[LocaleFile]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    /// 空のディレクトリ
    #[rstest]
    fn test_discover_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let files = discover_locale_files(temp_dir.path(), &ConvertSettings::default()).unwrap();

        assert_that!(files, is_empty());
    }

    /// 拡張子でフィルタし、パス順にソートする
    #[rstest]
    fn test_discover_filters_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["app_ko.arb", "app_en.arb", "strings.arb", "notes.txt", "app_fr.json"] {
            fs::write(temp_dir.path().join(name), "{}").unwrap();
        }

        let files = discover_locale_files(temp_dir.path(), &ConvertSettings::default()).unwrap();

        assert_that!(
            file_names(&files),
            elements_are![eq("app_en.arb"), eq("app_ko.arb"), eq("strings.arb")]
        );
        assert_eq!(
            files.iter().map(|f| f.inferred_locale.as_str()).collect::<Vec<_>>(),
            ["en", "ko", "strings"]
        );
    }

    /// サブディレクトリは探索しない
    #[rstest]
    fn test_discover_is_not_recursive() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("l10n")).unwrap();
        fs::write(temp_dir.path().join("l10n").join("app_de.arb"), "{}").unwrap();
        fs::create_dir(temp_dir.path().join("folder.arb")).unwrap();
        fs::write(temp_dir.path().join("app_en.arb"), "{}").unwrap();

        let files = discover_locale_files(temp_dir.path(), &ConvertSettings::default()).unwrap();

        assert_that!(file_names(&files), elements_are![eq("app_en.arb")]);
    }

    #[rstest]
    #[case::hidden(".app_en.arb")]
    #[case::upper_extension("app_en.ARB")]
    #[case::backup_suffix("app_en.arb.bak")]
    fn test_discover_skips_non_matching_name(#[case] name: &str) {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(name), "{}").unwrap();

        let files = discover_locale_files(temp_dir.path(), &ConvertSettings::default()).unwrap();

        assert_that!(files, is_empty());
    }

    #[rstest]
    fn test_discover_custom_extension() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("app_en.arb"), "{}").unwrap();
        fs::write(temp_dir.path().join("app_en.json"), "{}").unwrap();
        let settings =
            ConvertSettings { file_extension: "json".to_string(), ..ConvertSettings::default() };

        let files = discover_locale_files(temp_dir.path(), &settings).unwrap();

        assert_that!(file_names(&files), elements_are![eq("app_en.json")]);
        assert_that!(files[0].inferred_locale, eq("en"));
    }

    #[rstest]
    fn test_discover_missing_directory() {
        let temp_dir = TempDir::new().unwrap();

        let result =
            discover_locale_files(&temp_dir.path().join("missing"), &ConvertSettings::default());

        assert!(matches!(result, Err(DiscoveryError::Io(_))));
    }
}
