//! CLDR-style plural category resolution.
//!
//! Languages group counts differently: English has "one" and "other", Russian
//! has "one", "few", "many" and "other", and Arabic uses all six categories.
//! Rather than carrying full CLDR data, each language root maps to one of a
//! fixed set of rule families. Unknown roots use the English family.
//!
//! Counts are not normalized. A negative count goes through the same `%`
//! arithmetic as a positive one, and Rust's remainder keeps the sign of the
//! dividend, so most negative counts land in the family's last category.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::interpreter::fallback::locale_root;

/// A plural category label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    /// Parse a label such as `"few"`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == label)
    }

    /// The label used as a key in plural objects.
    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

impl Display for PluralCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A group of languages sharing the same plural rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralFamily {
    /// English-like: "one" for exactly 1.
    OneOther,
    /// Russian, Ukrainian, Belarusian, Serbo-Croatian.
    Slavic,
    Polish,
    CzechSlovak,
    /// French-like: "one" for 0 and 1.
    French,
    Arabic,
}

/// Language roots with non-default rules. Everything else is `OneOther`.
const FAMILY_TABLE: &[(&str, PluralFamily)] = &[
    ("en", PluralFamily::OneOther),
    ("de", PluralFamily::OneOther),
    ("nl", PluralFamily::OneOther),
    ("sv", PluralFamily::OneOther),
    ("da", PluralFamily::OneOther),
    ("no", PluralFamily::OneOther),
    ("nb", PluralFamily::OneOther),
    ("nn", PluralFamily::OneOther),
    ("fo", PluralFamily::OneOther),
    ("es", PluralFamily::OneOther),
    ("pt", PluralFamily::OneOther),
    ("it", PluralFamily::OneOther),
    ("bg", PluralFamily::OneOther),
    ("el", PluralFamily::OneOther),
    ("fi", PluralFamily::OneOther),
    ("et", PluralFamily::OneOther),
    ("he", PluralFamily::OneOther),
    ("eo", PluralFamily::OneOther),
    ("ru", PluralFamily::Slavic),
    ("uk", PluralFamily::Slavic),
    ("be", PluralFamily::Slavic),
    ("hr", PluralFamily::Slavic),
    ("sr", PluralFamily::Slavic),
    ("bs", PluralFamily::Slavic),
    ("sh", PluralFamily::Slavic),
    ("pl", PluralFamily::Polish),
    ("cs", PluralFamily::CzechSlovak),
    ("sk", PluralFamily::CzechSlovak),
    ("fr", PluralFamily::French),
    ("ff", PluralFamily::French),
    ("kab", PluralFamily::French),
    ("ar", PluralFamily::Arabic),
];

impl PluralFamily {
    /// Family for a locale identifier, looked up by its root.
    pub fn for_locale(locale: &str) -> Self {
        let root = locale_root(locale);
        FAMILY_TABLE
            .iter()
            .find(|(code, _)| *code == root)
            .map_or(PluralFamily::OneOther, |(_, family)| *family)
    }

    /// Category of `n` under this family's rules.
    pub fn category(self, n: i64) -> PluralCategory {
        let mod10 = n % 10;
        let mod100 = n % 100;
        match self {
            PluralFamily::OneOther => {
                if n == 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            PluralFamily::Slavic => {
                if mod10 == 1 && mod100 != 11 {
                    PluralCategory::One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    PluralCategory::Few
                } else if mod10 == 0 || (5..=9).contains(&mod10) || (11..=14).contains(&mod100) {
                    PluralCategory::Many
                } else {
                    PluralCategory::Other
                }
            }
            PluralFamily::Polish => {
                if n == 1 {
                    PluralCategory::One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            PluralFamily::CzechSlovak => match n {
                1 => PluralCategory::One,
                2..=4 => PluralCategory::Few,
                _ => PluralCategory::Other,
            },
            PluralFamily::French => {
                if n < 2 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            PluralFamily::Arabic => match n {
                0 => PluralCategory::Zero,
                1 => PluralCategory::One,
                2 => PluralCategory::Two,
                _ if (3..=10).contains(&mod100) => PluralCategory::Few,
                _ if (11..=99).contains(&mod100) => PluralCategory::Many,
                _ => PluralCategory::Other,
            },
        }
    }
}

/// Get the plural category for a count in a given locale.
///
/// Returns one of: "zero", "one", "two", "few", "many", "other".
///
/// # Examples
///
/// ```
/// use lexis::interpreter::plural_category;
///
/// // English: 1 = "one", everything else = "other"
/// assert_eq!(plural_category("en", 1), "one");
/// assert_eq!(plural_category("en-GB", 0), "other");
///
/// // Russian: "one", "few", "many"
/// assert_eq!(plural_category("ru", 21), "one");
/// assert_eq!(plural_category("ru", 22), "few");
/// assert_eq!(plural_category("ru", 25), "many");
/// ```
pub fn plural_category(locale: &str, n: i64) -> &'static str {
    PluralFamily::for_locale(locale).category(n).as_str()
}
