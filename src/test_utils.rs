//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use std::path::PathBuf;

use serde_json::Value;

use crate::input::LocaleRecord;

/// テスト用の LocaleRecord を作成する
///
/// ファイルパスは `app_<locale>.arb` とする。
pub(crate) fn create_record(locale: &str, entries: &[(&str, Value)]) -> LocaleRecord {
    create_record_at(&format!("app_{locale}.arb"), locale, entries)
}

/// ファイルパスを指定して LocaleRecord を作成する
///
/// # Arguments
/// * `file_path` - 翻訳ファイルのパス
/// * `locale` - ロケール（例: "en", "ko"）
/// * `entries` - キーと値の組
pub(crate) fn create_record_at(
    file_path: &str,
    locale: &str,
    entries: &[(&str, Value)],
) -> LocaleRecord {
    LocaleRecord {
        locale: locale.to_string(),
        file_path: PathBuf::from(file_path),
        translations: entries.iter().map(|(k, v)| ((*k).to_string(), v.clone())).collect(),
    }
}
