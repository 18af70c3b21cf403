//! Resolution of one key in one locale.
//!
//! Each function here returns an empty string when the key is absent from
//! the locale, which tells the caller to move on to the next candidate
//! locale. Malformed plural and variant nodes resolve to a bracketed
//! sentinel instead, so they show up in the UI rather than failing.

use std::iter;

use tracing::trace;

use crate::interpreter::dataset::LocaleDataset;
use crate::interpreter::interpolate::{interpolate, interpolate_positional};
use crate::interpreter::plural::plural_category;
use crate::types::{Map, Value};

pub const PLURAL_NOT_OBJECT: &str = "[plural: data not object]";
pub const PLURAL_MISSING_FORM: &str = "[plural: missing form]";
pub const VARIANT_NOT_OBJECT: &str = "[variant: data not object]";
pub const VARIANT_NO_MATCH: &str = "[variant: no match]";
pub const UNSUPPORTED_NODE: &str = "[unsupported translation type]";

/// Parameter that switches an object node to plural selection.
pub const COUNT_PARAM: &str = "count";

const OTHER_FORM: &str = "other";

/// Pick the plural form of `node` for `count` in `locale`.
///
/// Tries the locale's category, then `"other"`, then the literal count
/// (`"0"`, `"42"`). Only string entries count as forms.
///
/// ```
/// use lexis::{Value, interpreter::plural_form};
///
/// let node = Value::from_json(r#"{"one": "a file", "other": "%{count} files", "0": "none"}"#).unwrap();
/// assert_eq!(plural_form(&node, "en", 1), "a file");
/// assert_eq!(plural_form(&node, "en", 5), "%{count} files");
/// ```
pub fn plural_form<'a>(node: &'a Value, locale: &str, count: i64) -> &'a str {
    let Some(forms) = node.as_object() else {
        return PLURAL_NOT_OBJECT;
    };
    string_entry(forms, plural_category(locale, count))
        .or_else(|| string_entry(forms, OTHER_FORM))
        .or_else(|| string_entry(forms, &count.to_string()))
        .unwrap_or(PLURAL_MISSING_FORM)
}

/// Pick the variant of `node` named by a parameter value.
///
/// Parameter values are tried in order; the first string value that names
/// one of the node's entries wins. Falls back to `"other"`.
///
/// ```
/// use lexis::{Value, interpreter::variant_form, params};
///
/// let node = Value::from_json(r#"{"male": "He", "female": "She", "other": "They"}"#).unwrap();
/// assert_eq!(variant_form(&node, &params! { "gender" => "female" }), "She");
/// assert_eq!(variant_form(&node, &params! { "gender" => "robot" }), "They");
/// ```
pub fn variant_form<'a>(node: &'a Value, params: &Value) -> &'a str {
    let Some(variants) = node.as_object() else {
        return VARIANT_NOT_OBJECT;
    };
    params
        .as_object()
        .into_iter()
        .flat_map(Map::values)
        .filter_map(Value::as_str)
        .find_map(|selector| string_entry(variants, selector))
        .or_else(|| string_entry(variants, OTHER_FORM))
        .unwrap_or(VARIANT_NO_MATCH)
}

/// The form used when an object node is read without a count or selector:
/// `"other"`, else the first string entry.
pub fn default_form(forms: &Map) -> Option<&str> {
    string_entry(forms, OTHER_FORM).or_else(|| forms.values().find_map(Value::as_str))
}

/// The count carried by a parameter tree. Floats truncate; a missing or
/// non-numeric count reads as 1.
pub fn count_param(params: &Value) -> i64 {
    params
        .get(COUNT_PARAM)
        .and_then(Value::to_integer)
        .unwrap_or(1)
}

/// Resolve `key` in `locale` against a parameter tree.
pub fn resolve_tree(dataset: &LocaleDataset, key: &str, locale: &str, params: &Value) -> String {
    let Some(node) = dataset.lookup(key, locale) else {
        return String::new();
    };
    match node {
        Value::String(text) => interpolate(text, params),
        Value::Object(_) if params.get(COUNT_PARAM).is_some() => {
            let count = count_param(params);
            trace!(key, locale, count, "selecting plural form");
            interpolate(plural_form(node, locale, count), params)
        }
        Value::Object(_) => interpolate(variant_form(node, params), params),
        Value::Array(_) => node.to_json(),
        _ => UNSUPPORTED_NODE.to_string(),
    }
}

/// Resolve `key` in `locale` against positional parameters.
///
/// Object nodes use their default form. Nodes that are neither text, object
/// nor array count as absent.
pub fn resolve_positional<S: AsRef<str>>(
    dataset: &LocaleDataset,
    key: &str,
    locale: &str,
    params: &[S],
) -> String {
    let Some(node) = dataset.lookup(key, locale) else {
        return String::new();
    };
    match node {
        Value::String(text) => interpolate_positional(text, params),
        Value::Object(forms) => default_form(forms)
            .map(|text| interpolate_positional(text, params))
            .unwrap_or_default(),
        Value::Array(_) => node.to_json(),
        _ => String::new(),
    }
}

/// Resolve a counted `key` in `locale`.
///
/// The count's decimal text is slot 0; `params` follow from slot 1.
pub fn resolve_counted<S: AsRef<str>>(
    dataset: &LocaleDataset,
    key: &str,
    locale: &str,
    count: i64,
    params: &[S],
) -> String {
    let Some(node) = dataset.lookup(key, locale) else {
        return String::new();
    };
    let counted = counted_params(count, params);
    match node {
        Value::String(text) => interpolate_positional(text, &counted),
        Value::Object(_) => interpolate_positional(plural_form(node, locale, count), &counted),
        Value::Array(_) => node.to_json(),
        _ => String::new(),
    }
}

fn counted_params<S: AsRef<str>>(count: i64, params: &[S]) -> Vec<String> {
    iter::once(count.to_string())
        .chain(params.iter().map(|param| param.as_ref().to_string()))
        .collect()
}

fn string_entry<'a>(forms: &'a Map, key: &str) -> Option<&'a str> {
    forms.get(key).and_then(Value::as_str)
}
