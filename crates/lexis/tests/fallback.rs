//! Tests for locale ancestry and fallback chains.

use lexis::interpreter::{locale_ancestry, locale_root};
use lexis::resolve_fallbacks;

#[test]
fn ancestry_lists_most_specific_first() {
    assert_eq!(locale_ancestry("en-US-NY"), ["en-US-NY", "en-US", "en"]);
    assert_eq!(locale_ancestry("en"), ["en"]);
}

#[test]
fn root_is_text_before_first_separator() {
    assert_eq!(locale_root("zh-Hant-TW"), "zh");
    assert_eq!(locale_root(""), "");
}

#[test]
fn chain_ends_with_fallback() {
    assert_eq!(resolve_fallbacks(&["de-AT"], "en"), ["de-AT", "de", "en"]);
}

#[test]
fn chain_skips_fallback_already_present() {
    assert_eq!(resolve_fallbacks(&["en-GB"], "en"), ["en-GB", "en"]);
}

#[test]
fn chain_has_no_duplicates() {
    let chain = resolve_fallbacks(&["fr-CA", "fr-FR", "fr"], "en");
    assert_eq!(chain, ["fr-CA", "fr", "fr-FR", "en"]);
}

#[test]
fn empty_fallback_is_not_appended() {
    assert_eq!(resolve_fallbacks(&["ru"], ""), ["ru"]);
}

#[test]
fn no_requested_locales_yields_only_fallback() {
    let requested: [&str; 0] = [];
    assert_eq!(resolve_fallbacks(&requested, "en"), ["en"]);
}

#[test]
fn locales_compare_case_sensitively() {
    assert_eq!(resolve_fallbacks(&["EN"], "en"), ["EN", "en"]);
}
