//! The user-facing translation API.
//!
//! `Translator` owns the loaded locale data, the active locale list and the
//! format configuration, and routes every lookup through the fallback chain.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use bon::Builder;
use tracing::{debug, trace};

use crate::format::{self, FormatConfig, FormatOverrides};
use crate::interpreter::dataset::{FORMATS_KEY, LocaleDataset};
use crate::interpreter::error::{LoadError, LoadWarning};
use crate::interpreter::fallback::resolve_fallbacks;
use crate::interpreter::interpolate::interpolate;
use crate::interpreter::resolve::{resolve_counted, resolve_positional, resolve_tree};
use crate::interpreter::suggest::compute_suggestions;
use crate::types::{CalendarBreakdown, Value};

/// Fallback locale used until [`Translator::set_fallback_locale`] is called.
pub const DEFAULT_FALLBACK_LOCALE: &str = "en";

/// Parameter naming a locale to try before the active ones.
pub const LOCALE_PARAM: &str = "locale";

/// Parameter holding the text returned when no locale has the key.
pub const DEFAULT_PARAM: &str = "default";

/// Translation lookup over per-locale JSON trees.
///
/// Lookups try every active locale, each locale's less specific ancestors,
/// and finally the fallback locale. The first candidate producing non-empty
/// text wins. A key found nowhere resolves to the key itself, so missing
/// translations are visible in the UI without failing.
///
/// # Example
///
/// ```
/// use lexis::{Translator, params};
///
/// let mut translator = Translator::builder()
///     .locales(vec!["fr-CA".to_string()])
///     .build();
/// translator
///     .load_locale_str("fr", r#"{"inbox": {"one": "%{count} message", "other": "%{count} messages"}}"#)
///     .unwrap();
///
/// assert_eq!(translator.translate("inbox", &params! { "count" => 1 }), "1 message");
/// assert_eq!(translator.translate("inbox", &params! { "count" => 4 }), "4 messages");
/// assert_eq!(translator.translate("outbox", &params! {}), "outbox");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct Translator {
    /// Active locales, most preferred first.
    #[builder(default)]
    locales: Vec<String>,

    /// Locale appended to every fallback chain.
    #[builder(default = DEFAULT_FALLBACK_LOCALE.to_string())]
    fallback_locale: String,

    #[builder(skip)]
    dataset: LocaleDataset,

    /// Per-locale configs built from `_formats` blocks.
    #[builder(skip)]
    formats: HashMap<String, FormatConfig>,

    /// Effective format configuration.
    #[builder(skip)]
    config: FormatConfig,

    /// File paths for reload support: locale -> PathBuf.
    /// Only populated for file-loaded locales.
    #[builder(skip)]
    loaded_paths: HashMap<String, PathBuf>,
}

impl Default for Translator {
    fn default() -> Self {
        Translator::builder().build()
    }
}

impl Translator {
    /// Create a translator with no active locales and `"en"` as fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a translator with a single active locale.
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Translator::builder().locales(vec![locale.into()]).build()
    }

    // =========================================================================
    // Locale Management
    // =========================================================================

    /// The most preferred active locale, or `""` when none is set.
    pub fn locale(&self) -> &str {
        self.locales.first().map_or("", String::as_str)
    }

    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    /// Make `locale` the only active locale.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.set_locales([locale]);
    }

    /// Replace the active locale list.
    ///
    /// When the new primary locale has a `_formats` block, its config becomes
    /// the effective one. Otherwise the current config stays in place.
    pub fn set_locales<I, S>(&mut self, locales: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locales = locales.into_iter().map(Into::into).collect();
        self.refresh_config();
        debug!(locales = ?self.locales, "active locales changed");
    }

    /// Set the locale tried after every active locale. `""` disables it.
    pub fn set_fallback_locale(&mut self, locale: impl Into<String>) {
        self.fallback_locale = locale.into();
        debug!(fallback = %self.fallback_locale, "fallback locale changed");
    }

    /// Candidate locales for a lookup, in the order they are tried.
    pub fn fallback_chain(&self) -> Vec<String> {
        resolve_fallbacks(&self.locales, &self.fallback_locale)
    }

    /// The loaded locale data (read-only).
    pub fn dataset(&self) -> &LocaleDataset {
        &self.dataset
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Load a locale from a JSON file.
    ///
    /// The file path is stored for later [`reload_locale`](Self::reload_locale).
    /// Loading the same locale twice **replaces** its previous data. Returns
    /// the number of translation keys loaded.
    pub fn load_locale(&mut self, locale: &str, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let tree = parse_document(&content, path)?;
        let count = self.install(locale, tree)?;
        self.loaded_paths
            .insert(locale.to_string(), path.to_path_buf());
        Ok(count)
    }

    /// Load a JSON file, naming the locale after the file: `de-AT.json` loads
    /// `"de-AT"`. Returns the locale identifier.
    ///
    /// ```no_run
    /// # use lexis::Translator;
    /// let mut translator = Translator::new();
    /// let locale = translator.load_locale_from_file("locales/pt-BR.json")?;
    /// assert_eq!(locale, "pt-BR");
    /// # Ok::<(), lexis::LoadError>(())
    /// ```
    pub fn load_locale_from_file(&mut self, path: impl AsRef<Path>) -> Result<String, LoadError> {
        let path = path.as_ref();
        let locale = locale_from_path(path).ok_or_else(|| LoadError::NoLocaleInPath {
            path: path.to_path_buf(),
        })?;
        self.load_locale(&locale, path)?;
        Ok(locale)
    }

    /// Load a locale from a JSON string.
    ///
    /// Locales loaded this way cannot be reloaded. Loading the same locale
    /// twice **replaces** its previous data.
    ///
    /// ```
    /// use lexis::Translator;
    ///
    /// let mut translator = Translator::with_locale("de");
    /// let count = translator
    ///     .load_locale_str("de", r#"{"hello": "Hallo!", "menu": {"open": "Öffnen"}}"#)
    ///     .unwrap();
    /// assert_eq!(count, 2);
    /// assert_eq!(translator.tr("menu.open"), "Öffnen");
    /// ```
    pub fn load_locale_str(&mut self, locale: &str, content: &str) -> Result<usize, LoadError> {
        let tree = parse_document(content, &PathBuf::from(format!("<{locale}>")))?;
        let count = self.install(locale, tree)?;
        self.loaded_paths.remove(locale);
        Ok(count)
    }

    /// Reload a locale from the file it was loaded from.
    ///
    /// Returns an error if the locale was loaded from a string.
    pub fn reload_locale(&mut self, locale: &str) -> Result<usize, LoadError> {
        let path = self
            .loaded_paths
            .get(locale)
            .cloned()
            .ok_or_else(|| LoadError::NoPathForReload {
                locale: locale.to_string(),
            })?;
        self.load_locale(locale, path)
    }

    /// Merge a `{locale: tree}` document into the loaded data.
    ///
    /// Unlike the per-locale loaders this never replaces a locale: nested
    /// objects are flattened to dotted keys and written leaf by leaf, and a
    /// `_formats` block is applied on top of the locale's current config.
    /// The whole document is validated before anything is written. Returns
    /// the number of translation keys the touched locales hold afterwards,
    /// counted the same way as the per-locale loaders.
    ///
    /// ```
    /// use lexis::{Translator, Value};
    ///
    /// let mut translator = Translator::with_locale("en");
    /// translator.load_locale_str("en", r#"{"menu": {"open": "Open"}}"#).unwrap();
    /// translator
    ///     .load(&Value::from_json(r#"{"en": {"menu.close": "Close"}}"#).unwrap())
    ///     .unwrap();
    ///
    /// assert_eq!(translator.tr("menu.open"), "Open");
    /// assert_eq!(translator.tr("menu.close"), "Close");
    /// ```
    pub fn load(&mut self, data: &Value) -> Result<usize, LoadError> {
        let Some(locales) = data.as_object() else {
            return Err(LoadError::NotAnObject {
                locale: "<dataset>".to_string(),
            });
        };

        let mut staged = Vec::with_capacity(locales.len());
        for (locale, tree) in locales {
            let Some(map) = tree.as_object() else {
                return Err(LoadError::NotAnObject {
                    locale: locale.clone(),
                });
            };
            let overrides = map
                .get(FORMATS_KEY)
                .map(|raw| parse_overrides(locale, raw))
                .transpose()?;
            staged.push((locale, tree, overrides));
        }

        let mut count = 0;
        for (locale, tree, overrides) in staged {
            let written = self.dataset.merge(locale, tree);
            if let Some(overrides) = overrides {
                self.formats
                    .entry(locale.clone())
                    .or_default()
                    .apply(&overrides);
            }
            count += self.dataset.translation_keys(locale).len();
            debug!(locale, leaves = written, "merged locale data");
        }
        self.refresh_config();
        Ok(count)
    }

    /// Check a target locale against a source locale.
    ///
    /// Reports keys of the target that the source lacks, then keys of the
    /// source that the target lacks. Returns an empty vector if either locale
    /// is not loaded.
    ///
    /// ```
    /// use lexis::{LoadWarning, Translator};
    ///
    /// let mut translator = Translator::new();
    /// translator.load_locale_str("en", r#"{"hello": "Hello", "bye": "Bye"}"#).unwrap();
    /// translator.load_locale_str("ru", r#"{"hello": "Привет", "extra": "Лишнее"}"#).unwrap();
    ///
    /// let warnings = translator.validate_locale("en", "ru");
    /// assert_eq!(warnings.len(), 2);
    /// assert!(matches!(&warnings[0], LoadWarning::UnknownKey { key, .. } if key == "extra"));
    /// assert!(matches!(&warnings[1], LoadWarning::MissingKey { key, .. } if key == "bye"));
    /// ```
    pub fn validate_locale(&self, source: &str, target: &str) -> Vec<LoadWarning> {
        if !self.dataset.contains(source) || !self.dataset.contains(target) {
            return Vec::new();
        }
        let source_keys = self.dataset.translation_keys(source);
        let target_keys = self.dataset.translation_keys(target);

        let unknown = target_keys
            .iter()
            .filter(|key| !source_keys.contains(*key))
            .map(|key| LoadWarning::UnknownKey {
                key: key.clone(),
                locale: target.to_string(),
            });
        let missing = source_keys
            .iter()
            .filter(|key| !target_keys.contains(*key))
            .map(|key| LoadWarning::MissingKey {
                key: key.clone(),
                locale: target.to_string(),
            });
        unknown.chain(missing).collect()
    }

    /// Replace a locale's data and format config.
    fn install(&mut self, locale: &str, mut tree: Value) -> Result<usize, LoadError> {
        let Some(map) = tree.as_object_mut() else {
            return Err(LoadError::NotAnObject {
                locale: locale.to_string(),
            });
        };
        let overrides = map
            .shift_remove(FORMATS_KEY)
            .map(|raw| parse_overrides(locale, &raw))
            .transpose()?;

        self.dataset.insert(locale, tree);
        match overrides {
            Some(overrides) => {
                self.formats
                    .insert(locale.to_string(), FormatConfig::with_overrides(&overrides));
            }
            None => {
                self.formats.remove(locale);
            }
        }
        if self.locale() == locale {
            // The primary locale no longer has its own formats.
            if !self.formats.contains_key(locale) {
                self.config = FormatConfig::default();
            }
            self.refresh_config();
        }

        let count = self.dataset.translation_keys(locale).len();
        debug!(locale, keys = count, "loaded locale data");
        Ok(count)
    }

    fn refresh_config(&mut self) {
        if let Some(config) = self.locales.first().and_then(|l| self.formats.get(l)).cloned() {
            self.config = config;
        }
    }

    // =========================================================================
    // Translation
    // =========================================================================

    /// Resolve `key` with a parameter tree.
    ///
    /// - A string node is filled from `params` (`%{name}`, `%<n>.d`).
    /// - An object node with a `count` parameter selects a plural form.
    /// - Any other object node selects the variant named by a parameter value.
    /// - An array node renders as compact JSON.
    ///
    /// A string `locale` parameter is tried before the active locales. When
    /// no candidate has the key, a string `default` parameter is filled and
    /// returned, and otherwise the key itself. An empty key yields `""`.
    ///
    /// ```
    /// use lexis::{Translator, params};
    ///
    /// let mut translator = Translator::with_locale("en");
    /// translator
    ///     .load_locale_str("en", r#"{"pronoun": {"male": "he", "female": "she", "other": "they"}}"#)
    ///     .unwrap();
    ///
    /// assert_eq!(translator.translate("pronoun", &params! { "gender" => "female" }), "she");
    /// assert_eq!(translator.translate("nope", &params! { "default" => "n/a" }), "n/a");
    /// ```
    pub fn translate(&self, key: &str, params: &Value) -> String {
        if key.is_empty() {
            return String::new();
        }
        let mut requested: Vec<&str> = Vec::with_capacity(self.locales.len() + 1);
        if let Some(locale) = params.get(LOCALE_PARAM).and_then(Value::as_str) {
            requested.push(locale);
        }
        requested.extend(self.locales.iter().map(String::as_str));

        let chain = resolve_fallbacks(&requested, &self.fallback_locale);
        if let Some(text) = first_resolved(&chain, |locale| {
            resolve_tree(&self.dataset, key, locale, params)
        }) {
            return text;
        }
        if let Some(default) = params.get(DEFAULT_PARAM).and_then(Value::as_str) {
            return interpolate(default, params);
        }
        trace!(key, ?chain, "no translation in any candidate locale");
        key.to_string()
    }

    /// Resolve `key` without parameters.
    pub fn tr(&self, key: &str) -> String {
        self.tr_with::<&str>(key, &[])
    }

    /// Resolve `key`, filling `{N}` and `{}` slots from `params`.
    ///
    /// An object node uses its `"other"` entry, else its first text entry.
    ///
    /// ```
    /// use lexis::{Translator, positional};
    ///
    /// let mut translator = Translator::with_locale("en");
    /// translator.load_locale_str("en", r#"{"move": "{1} moved to {0}"}"#).unwrap();
    ///
    /// assert_eq!(translator.tr_with("move", &positional!["B2", "Knight"]), "Knight moved to B2");
    /// ```
    pub fn tr_with<S: AsRef<str>>(&self, key: &str, params: &[S]) -> String {
        if key.is_empty() {
            return String::new();
        }
        self.resolve_in_chain(key, |locale| {
            resolve_positional(&self.dataset, key, locale, params)
        })
    }

    /// Resolve a counted `key`; the count fills slot 0.
    pub fn tr_plural(&self, key: &str, count: i64) -> String {
        self.tr_plural_with::<&str>(key, count, &[])
    }

    /// Resolve a counted `key`. The count's text is slot 0 and `params` fill
    /// slots 1 onward.
    ///
    /// ```
    /// use lexis::{Translator, positional};
    ///
    /// let mut translator = Translator::with_locale("ru");
    /// translator
    ///     .load_locale_str("ru", r#"{"files": {"one": "{} файл в {}", "few": "{} файла в {}", "many": "{} файлов в {}"}}"#)
    ///     .unwrap();
    ///
    /// assert_eq!(translator.tr_plural_with("files", 22, &positional!["/tmp"]), "22 файла в /tmp");
    /// ```
    pub fn tr_plural_with<S: AsRef<str>>(&self, key: &str, count: i64, params: &[S]) -> String {
        if key.is_empty() {
            return String::new();
        }
        self.resolve_in_chain(key, |locale| {
            resolve_counted(&self.dataset, key, locale, count, params)
        })
    }

    /// Whether `key` resolves to a node in any candidate locale.
    pub fn key_exists(&self, key: &str) -> bool {
        !key.is_empty()
            && self
                .fallback_chain()
                .iter()
                .any(|locale| self.dataset.lookup(key, locale).is_some())
    }

    /// Known keys close to `key`, closest first. Keys from every candidate
    /// locale are considered.
    pub fn suggest_keys(&self, key: &str) -> Vec<String> {
        let mut known: Vec<String> = Vec::new();
        for locale in self.fallback_chain() {
            for candidate in self.dataset.translation_keys(&locale) {
                if !known.contains(&candidate) {
                    known.push(candidate);
                }
            }
        }
        compute_suggestions(key, &known)
    }

    fn resolve_in_chain(&self, key: &str, resolve: impl Fn(&str) -> String) -> String {
        let chain = self.fallback_chain();
        first_resolved(&chain, resolve).unwrap_or_else(|| {
            trace!(key, ?chain, "no translation in any candidate locale");
            key.to_string()
        })
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// The effective format configuration.
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// The config built from a locale's `_formats` block, if it had one.
    pub fn locale_config(&self, locale: &str) -> Option<&FormatConfig> {
        self.formats.get(locale)
    }

    /// Apply overrides to the effective format configuration.
    pub fn configure(&mut self, overrides: &FormatOverrides) {
        self.config.apply(overrides);
    }

    pub fn format_number(&self, value: f64) -> String {
        format::format_number(value, &self.config.number)
    }

    pub fn format_price(&self, amount: f64) -> String {
        format::format_price(amount, &self.config.currency)
    }

    /// Render a date with a pattern or alias such as `"short_date"`.
    ///
    /// Without a date, the current UTC time is used.
    pub fn format_date(&self, pattern: Option<&str>, date: Option<&CalendarBreakdown>) -> String {
        let date = date.copied().unwrap_or_else(CalendarBreakdown::now_utc);
        format::format_date(pattern, &date, &self.config)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Drop all loaded data and return to the initial state.
    pub fn reset(&mut self) {
        self.locales.clear();
        self.fallback_locale = DEFAULT_FALLBACK_LOCALE.to_string();
        self.dataset.clear();
        self.formats.clear();
        self.config = FormatConfig::default();
        self.loaded_paths.clear();
        debug!("translator reset");
    }
}

fn first_resolved(chain: &[String], resolve: impl Fn(&str) -> String) -> Option<String> {
    chain
        .iter()
        .map(|locale| resolve(locale.as_str()))
        .find(|text| !text.is_empty())
}

/// Parse a JSON document, reporting syntax errors with their position.
fn parse_document(content: &str, path: &Path) -> Result<Value, LoadError> {
    Value::from_json(content).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    })
}

fn parse_overrides(locale: &str, raw: &Value) -> Result<FormatOverrides, LoadError> {
    FormatOverrides::from_value(raw).map_err(|e| LoadError::Formats {
        locale: locale.to_string(),
        message: e.to_string(),
    })
}

/// The file name up to its last `.`, if that leaves anything.
fn locale_from_path(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let locale = name.rsplit_once('.').map_or(name, |(stem, _)| stem);
    (!locale.is_empty()).then(|| locale.to_string())
}
