//! Translation lookup and resolution.
//!
//! This module holds everything between a key and its rendered text: the
//! per-locale dataset, fallback chains, plural rules, node resolution and
//! placeholder substitution. [`Translator`] ties them together.

mod dataset;
mod error;
mod fallback;
mod interpolate;
mod plural;
mod resolve;
mod suggest;
mod translator;

pub use dataset::{FORMATS_KEY, LocaleDataset, flatten};
pub use error::{LoadError, LoadWarning};
pub use fallback::{LOCALE_SEPARATOR, locale_ancestry, locale_root, resolve_fallbacks};
pub use interpolate::{interpolate, interpolate_positional};
pub use plural::{PluralCategory, PluralFamily, plural_category};
pub use resolve::{
    COUNT_PARAM, PLURAL_MISSING_FORM, PLURAL_NOT_OBJECT, UNSUPPORTED_NODE, VARIANT_NO_MATCH,
    VARIANT_NOT_OBJECT, count_param, default_form, plural_form, resolve_counted,
    resolve_positional, resolve_tree, variant_form,
};
pub use suggest::compute_suggestions;
pub use translator::{DEFAULT_FALLBACK_LOCALE, DEFAULT_PARAM, LOCALE_PARAM, Translator};
