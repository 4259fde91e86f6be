//! Translation key aggregation.

use std::collections::BTreeSet;

use crate::input::LocaleRecord;

/// Union of the translation keys of every record, sorted case-insensitively.
///
/// Keys that differ only in case are ordered by their byte value so the
/// result does not depend on hash order.
#[must_use]
pub fn aggregate_keys(records: &[LocaleRecord]) -> Vec<String> {
    let unique: BTreeSet<&str> =
        records.iter().flat_map(|record| record.translations.keys().map(String::as_str)).collect();

    let mut keys: Vec<&str> = unique.into_iter().collect();
    keys.sort_by_cached_key(|key| key.to_lowercase());

    keys.into_iter().map(str::to_string).collect()
}
