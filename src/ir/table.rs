//! Output table assembled from parsed locale records.

use std::collections::HashMap;

use serde_json::Value;

use super::keys::aggregate_keys;
use super::ordering::order_locales;
use crate::input::LocaleRecord;

/// Header of the first column, which holds the translation key.
pub const KEY_COLUMN: &str = "variable";

/// One translation key and its value for every locale column.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub key: String,

    /// Values in locale column order. Missing translations are empty strings.
    pub cells: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputTable {
    /// Locale columns in output order, after the key column.
    locales: Vec<String>,
    /// One row per key, sorted.
    rows: Vec<TableRow>,
    /// Number of cells filled in because the locale lacks the key.
    missing: usize,
}

impl OutputTable {
    /// Builds the table for `records`, given in discovery order.
    ///
    /// When several records share a locale, the last one provides the
    /// column values. Keys of every record still become rows.
    #[must_use]
    pub fn from_records<P: AsRef<str>>(records: &[LocaleRecord], priority: &[P]) -> Self {
        let by_locale = index_by_locale(records);
        let seen: Vec<String> = records.iter().map(|record| record.locale.clone()).collect();

        let locales = order_locales(&seen, priority);
        let keys = aggregate_keys(records);

        Self::build(keys, locales, &by_locale)
    }

    /// Builds rows for `keys` with one cell per entry of `locales`.
    #[must_use]
    pub fn build(
        keys: Vec<String>,
        locales: Vec<String>,
        by_locale: &HashMap<&str, &LocaleRecord>,
    ) -> Self {
        let mut missing = 0;
        let mut rows = Vec::with_capacity(keys.len());
        for key in keys {
            let cells = locales
                .iter()
                .map(|locale| {
                    if let Some(value) =
                        by_locale.get(locale.as_str()).and_then(|record| record.get(&key))
                    {
                        value.clone()
                    } else {
                        missing += 1;
                        Value::String(String::new())
                    }
                })
                .collect();
            rows.push(TableRow { key, cells });
        }

        Self { locales, rows, missing }
    }

    /// Header row: the key column followed by the locales.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        std::iter::once(KEY_COLUMN).chain(self.locales.iter().map(String::as_str)).collect()
    }

    #[must_use]
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    #[must_use]
    pub const fn missing_count(&self) -> usize {
        self.missing
    }

    /// Looks up the cell for `key` in the `locale` column.
    #[must_use]
    pub fn cell(&self, key: &str, locale: &str) -> Option<&Value> {
        let column = self.locales.iter().position(|l| l == locale)?;
        self.rows.iter().find(|row| row.key == key)?.cells.get(column)
    }
}

/// Maps each locale to its record. A later record replaces an earlier one.
fn index_by_locale(records: &[LocaleRecord]) -> HashMap<&str, &LocaleRecord> {
    let mut by_locale = HashMap::new();
    for record in records {
        if let Some(previous) = by_locale.insert(record.locale.as_str(), record) {
            tracing::warn!(
                locale = %record.locale,
                replaced = %previous.file_path.display(),
                by = %record.file_path.display(),
                "Duplicate locale; the later file wins"
            );
        }
    }
    by_locale
}
