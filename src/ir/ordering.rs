//! Column order of locales in the output table.

use std::collections::HashSet;

/// Orders locales for the output columns.
///
/// Duplicates are dropped keeping the first occurrence. Locales listed in
/// `priority` come first, in that order, if present (exact match). The rest
/// follow sorted case-insensitively; ties keep their first-seen order.
#[must_use]
pub fn order_locales<P: AsRef<str>>(locales: &[String], priority: &[P]) -> Vec<String> {
    let mut seen = HashSet::new();
    let unique: Vec<&str> =
        locales.iter().map(String::as_str).filter(|locale| seen.insert(*locale)).collect();

    let is_priority = |locale: &str| priority.iter().any(|p| P::as_ref(p) == locale);

    let mut ordered: Vec<String> = priority
        .iter()
        .map(P::as_ref)
        .filter(|p| seen.contains(*p))
        .map(str::to_string)
        .collect();

    let mut rest: Vec<&str> = unique.into_iter().filter(|&locale| !is_priority(locale)).collect();
    rest.sort_by_cached_key(|locale| locale.to_lowercase());

    ordered.extend(rest.into_iter().map(str::to_string));
    ordered
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::config::PRIORITY_LOCALES;

    fn locales(items: &[&str]) -> Vec<String> {
        items.iter().map(|&s| s.to_string()).collect()
    }

    #[rstest]
    #[case::empty(&[], &[])]
    #[case::priority_first(&["fr", "en", "ko"], &["ko", "en", "fr"])]
    #[case::ko_only(&["de", "ko"], &["ko", "de"])]
    #[case::en_only(&["ja", "en", "de"], &["en", "de", "ja"])]
    #[case::no_priority(&["zh", "Fr", "de"], &["de", "Fr", "zh"])]
    #[case::dedup(&["en", "fr", "en", "ko", "fr"], &["ko", "en", "fr"])]
    // Priority match is case-sensitive
    #[case::case_sensitive_priority(&["EN", "Ko", "en"], &["en", "EN", "Ko"])]
    #[case::region_variants(&["pt_BR", "ko", "pt", "en_US"], &["ko", "en_US", "pt", "pt_BR"])]
    fn test_order_locales(#[case] input: &[&str], #[case] expected: &[&str]) {
        let result = order_locales(&locales(input), PRIORITY_LOCALES);

        assert_eq!(result, locales(expected));
    }

    #[googletest::test]
    fn test_order_locales_case_insensitive_ties_keep_first_seen() {
        let result = order_locales(&locales(&["fr", "FR", "de"]), PRIORITY_LOCALES);

        expect_that!(result, elements_are![eq("de"), eq("fr"), eq("FR")]);
    }

    #[googletest::test]
    fn test_order_locales_custom_priority() {
        let priority = locales(&["ja", "en"]);

        let result = order_locales(&locales(&["ko", "en", "ja"]), &priority);

        expect_that!(result, elements_are![eq("ja"), eq("en"), eq("ko")]);
    }
}
