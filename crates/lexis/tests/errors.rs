//! Tests for load errors, warnings and key suggestions.

use std::io::{self, ErrorKind};
use std::path::PathBuf;

use lexis::{LoadError, LoadWarning, compute_suggestions};

#[test]
fn compute_suggestions_finds_similar_keys() {
    let available = vec![
        "one".to_string(),
        "other".to_string(),
        "few".to_string(),
        "many".to_string(),
    ];

    assert_eq!(compute_suggestions("on", &available), vec!["one"]);

    // Longer names allow distance 2, closest first
    let suggestions = compute_suggestions("oter", &available);
    assert_eq!(suggestions[0], "other");
    assert!(suggestions.contains(&"one".to_string()));

    assert!(compute_suggestions("xyz", &available).is_empty());
}

#[test]
fn compute_suggestions_skips_exact_matches() {
    let available = ["menu.open", "menu.opens"];
    assert_eq!(compute_suggestions("menu.open", &available), vec!["menu.opens"]);
}

#[test]
fn compute_suggestions_limits_to_three() {
    let available: Vec<String> = (0..10).map(|i| format!("item{i}")).collect();
    assert_eq!(compute_suggestions("item", &available).len(), 3);
}

#[test]
fn load_error_io_displays_path() {
    let err = LoadError::Io {
        path: PathBuf::from("/path/to/en.json"),
        source: io::Error::new(ErrorKind::NotFound, "file not found"),
    };
    let msg = err.to_string();
    assert!(msg.contains("/path/to/en.json"));
    assert!(msg.contains("file not found"));
}

#[test]
fn load_error_parse_displays_location() {
    let err = LoadError::Parse {
        path: PathBuf::from("locales/ru.json"),
        line: 42,
        column: 15,
        message: "expected value".to_string(),
    };
    assert_eq!(err.to_string(), "locales/ru.json:42:15: expected value");
}

#[test]
fn load_error_no_path_for_reload() {
    let err = LoadError::NoPathForReload {
        locale: "ru".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("ru"));
    assert!(msg.contains("string"));
}

#[test]
fn load_warnings_name_key_and_locale() {
    let missing = LoadWarning::MissingKey {
        key: "menu.edit".to_string(),
        locale: "es".to_string(),
    };
    assert_eq!(missing.to_string(), "'menu.edit' is missing from 'es'");

    let unknown = LoadWarning::UnknownKey {
        key: "extra".to_string(),
        locale: "es".to_string(),
    };
    assert!(unknown.to_string().contains("does not exist in the source locale"));
}
