//! Locale fallback chains.
//!
//! Lookups never stop at the requested locale. `"en-US-NY"` also tries
//! `"en-US"` and `"en"`, and every chain ends with the configured fallback
//! locale. Identifiers are compared as exact, case-sensitive strings.

use std::collections::HashSet;

/// Separator between specificity levels of a locale identifier.
pub const LOCALE_SEPARATOR: char = '-';

/// The root of a locale identifier: everything before the first `-`.
///
/// ```
/// use lexis::interpreter::locale_root;
///
/// assert_eq!(locale_root("pt-BR"), "pt");
/// assert_eq!(locale_root("kab"), "kab");
/// ```
pub fn locale_root(locale: &str) -> &str {
    locale
        .split_once(LOCALE_SEPARATOR)
        .map_or(locale, |(root, _)| root)
}

/// Every prefix of `locale`, most specific first.
///
/// ```
/// use lexis::interpreter::locale_ancestry;
///
/// assert_eq!(locale_ancestry("en-US-NY"), ["en-US-NY", "en-US", "en"]);
/// ```
pub fn locale_ancestry(locale: &str) -> Vec<&str> {
    let mut ancestry: Vec<&str> = locale
        .match_indices(LOCALE_SEPARATOR)
        .map(|(index, _)| &locale[..index])
        .collect();
    ancestry.push(locale);
    ancestry.reverse();
    ancestry
}

/// Expand requested locales into the ordered candidate list used for lookup.
///
/// Ancestries are concatenated in request order with duplicates removed, and
/// `fallback` is appended last unless it is empty or already present.
///
/// # Example
///
/// ```
/// use lexis::interpreter::resolve_fallbacks;
///
/// let chain = resolve_fallbacks(&["fr-CA", "en-GB"], "en");
/// assert_eq!(chain, ["fr-CA", "fr", "en-GB", "en"]);
/// ```
pub fn resolve_fallbacks<S: AsRef<str>>(requested: &[S], fallback: &str) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut chain = Vec::with_capacity(requested.len() * 2 + 1);

    for locale in requested {
        for ancestor in locale_ancestry(locale.as_ref()) {
            if seen.insert(ancestor) {
                chain.push(ancestor.to_string());
            }
        }
    }

    if !fallback.is_empty() && !seen.contains(fallback) {
        chain.push(fallback.to_string());
    }

    chain
}
