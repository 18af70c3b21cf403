//! Per-locale translation trees.

use std::collections::BTreeMap;

use crate::interpreter::plural::PluralCategory;
use crate::types::{Map, Value};

/// Reserved top-level key holding a locale's format overrides.
///
/// It is stripped from locale data on load and is never a translation key.
pub const FORMATS_KEY: &str = "_formats";

/// Translation trees indexed by locale identifier.
///
/// Each locale owns one object tree. Keys are dotted paths into that tree:
/// `"menu.file.open"` walks `menu` → `file` → `open`.
///
/// # Example
///
/// ```
/// use lexis::{LocaleDataset, Value};
///
/// let mut dataset = LocaleDataset::new();
/// dataset.insert("en", Value::from_json(r#"{"menu": {"open": "Open"}}"#).unwrap());
///
/// assert_eq!(dataset.lookup("menu.open", "en").and_then(Value::as_str), Some("Open"));
/// assert!(dataset.lookup("menu.open.now", "en").is_none());
/// assert!(dataset.lookup("menu.open", "").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleDataset {
    locales: BTreeMap<String, Value>,
}

impl LocaleDataset {
    /// Create a new empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the tree for a locale.
    pub fn get(&self, locale: &str) -> Option<&Value> {
        self.locales.get(locale)
    }

    /// Whether any data was loaded for `locale`.
    pub fn contains(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Loaded locale identifiers, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    pub fn clear(&mut self) {
        self.locales.clear();
    }

    /// Replace the tree for a locale, returning the previous one.
    pub fn insert(&mut self, locale: impl Into<String>, tree: Value) -> Option<Value> {
        self.locales.insert(locale.into(), tree)
    }

    /// Merge `tree` into a locale's existing data.
    ///
    /// Nested objects are flattened into dotted keys and each leaf is written
    /// at its path, so `{"a": {"b": "x"}}` and `{"a.b": "x"}` land in the same
    /// place. Existing leaves on the same path are overwritten; the reserved
    /// `_formats` key at the top level is skipped. Returns the number of
    /// leaves written.
    pub fn merge(&mut self, locale: &str, tree: &Value) -> usize {
        let root = self
            .locales
            .entry(locale.to_string())
            .or_insert_with(Value::object);
        if !root.is_object() {
            *root = Value::object();
        }
        let Some(map) = root.as_object_mut() else {
            return 0;
        };

        let leaves: Vec<(String, &Value)> = flatten(tree)
            .into_iter()
            .filter(|(path, _)| !is_reserved_path(path))
            .collect();
        for (path, leaf) in &leaves {
            let segments: Vec<&str> = path.split('.').collect();
            insert_path(map, &segments, (*leaf).clone());
        }
        leaves.len()
    }

    /// Resolve a dotted key against one locale's tree.
    ///
    /// Returns `None` when the locale is empty or unknown, a segment is
    /// absent, or an intermediate node is not an object.
    pub fn lookup(&self, key: &str, locale: &str) -> Option<&Value> {
        if locale.is_empty() {
            return None;
        }
        self.locales.get(locale)?.get_path(key)
    }

    /// Every translation key of a locale, in document order.
    ///
    /// An object keyed only by plural categories or literal counts is a
    /// plural node and counts as one key. Any other object is walked, so
    /// variant entries are listed individually.
    pub fn translation_keys(&self, locale: &str) -> Vec<String> {
        let mut keys = Vec::new();
        if let Some(tree) = self.locales.get(locale) {
            collect_keys(tree, "", &mut keys);
        }
        keys
    }
}

/// Flatten nested objects into `(dotted path, leaf)` pairs.
///
/// ```
/// use lexis::{Value, interpreter::flatten};
///
/// let tree = Value::from_json(r#"{"a": {"b": "x", "c": [1]}, "d": "y"}"#).unwrap();
/// let paths: Vec<String> = flatten(&tree).into_iter().map(|(path, _)| path).collect();
/// assert_eq!(paths, ["a.b", "a.c", "d"]);
/// ```
pub fn flatten(tree: &Value) -> Vec<(String, &Value)> {
    let mut leaves = Vec::new();
    flatten_into(tree, "", &mut leaves);
    leaves
}

fn flatten_into<'a>(node: &'a Value, prefix: &str, leaves: &mut Vec<(String, &'a Value)>) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(child, &join_path(prefix, key), leaves);
            }
        }
        leaf if !prefix.is_empty() => leaves.push((prefix.to_string(), leaf)),
        _ => {}
    }
}

fn collect_keys(node: &Value, prefix: &str, keys: &mut Vec<String>) {
    match node.as_object() {
        Some(map) if prefix.is_empty() || !is_plural_node(map) => {
            for (key, child) in map {
                collect_keys(child, &join_path(prefix, key), keys);
            }
        }
        _ if !prefix.is_empty() => keys.push(prefix.to_string()),
        _ => {}
    }
}

/// Whether every entry of `map` is a text form keyed by a plural category
/// or a literal count.
fn is_plural_node(map: &Map) -> bool {
    !map.is_empty()
        && map.iter().all(|(key, form)| {
            !form.is_object()
                && (PluralCategory::from_label(key).is_some() || key.parse::<i64>().is_ok())
        })
}

fn insert_path(map: &mut Map, segments: &[&str], leaf: Value) {
    match segments {
        [] => {}
        [last] => {
            map.insert((*last).to_string(), leaf);
        }
        [first, rest @ ..] => {
            let child = map
                .entry((*first).to_string())
                .or_insert_with(Value::object);
            if let Value::Object(child_map) = child {
                insert_path(child_map, rest, leaf);
            } else {
                let mut child_map = Map::new();
                insert_path(&mut child_map, rest, leaf);
                *child = Value::Object(child_map);
            }
        }
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn is_reserved_path(path: &str) -> bool {
    path.split('.').next() == Some(FORMATS_KEY)
}
