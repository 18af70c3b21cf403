//! Integration tests for translation lookup.

use lexis::interpreter::{
    PLURAL_MISSING_FORM, PLURAL_NOT_OBJECT, UNSUPPORTED_NODE, VARIANT_NO_MATCH, VARIANT_NOT_OBJECT,
    plural_form, variant_form,
};
use lexis::{Translator, Value, params, positional};

fn translator_with(locale: &str, json: &str) -> Translator {
    let mut translator = Translator::with_locale(locale);
    translator.load_locale_str(locale, json).unwrap();
    translator
}

// =========================================================================
// Builder and Locale Management
// =========================================================================

#[test]
fn translator_defaults() {
    let translator = Translator::new();
    assert_eq!(translator.locale(), "");
    assert!(translator.locales().is_empty());
    assert_eq!(translator.fallback_locale(), "en");
}

#[test]
fn builder_sets_locales_and_fallback() {
    let translator = Translator::builder()
        .locales(vec!["de-AT".to_string(), "fr".to_string()])
        .fallback_locale("es")
        .build();
    assert_eq!(translator.locale(), "de-AT");
    assert_eq!(translator.fallback_chain(), ["de-AT", "de", "fr", "es"]);
}

#[test]
fn set_locale_replaces_active_list() {
    let mut translator = Translator::new();
    translator.set_locales(["pt-BR", "es"]);
    assert_eq!(translator.locales(), ["pt-BR", "es"]);

    translator.set_locale("it");
    assert_eq!(translator.locales(), ["it"]);
}

#[test]
fn empty_fallback_is_skipped() {
    let mut translator = Translator::with_locale("ru");
    translator.set_fallback_locale("");
    assert_eq!(translator.fallback_chain(), ["ru"]);
}

// =========================================================================
// Tree API
// =========================================================================

#[test]
fn translate_string_node() {
    let translator = translator_with("en", r#"{"hello": "Hello, %{name}!"}"#);
    assert_eq!(
        translator.translate("hello", &params! { "name" => "Ana" }),
        "Hello, Ana!"
    );
}

#[test]
fn translate_nested_key() {
    let translator = translator_with("en", r#"{"menu": {"file": {"open": "Open"}}}"#);
    assert_eq!(translator.translate("menu.file.open", &params! {}), "Open");
}

#[test]
fn translate_missing_key_returns_key() {
    let translator = translator_with("en", r#"{"hello": "Hello"}"#);
    assert_eq!(translator.translate("no.such.key", &params! {}), "no.such.key");
}

#[test]
fn translate_empty_key_returns_empty() {
    let translator = translator_with("en", r#"{"": "nothing"}"#);
    assert_eq!(translator.translate("", &params! {}), "");
}

#[test]
fn translate_uses_default_param() {
    let translator = translator_with("en", "{}");
    let p = params! { "default" => "Hi %{name}", "name" => "Bo" };
    assert_eq!(translator.translate("missing", &p), "Hi Bo");
}

#[test]
fn translate_walks_ancestry_then_fallback() {
    let mut translator = Translator::with_locale("en-US");
    translator
        .load_locale_str("en", r#"{"color": "colour", "hello": "Hello"}"#)
        .unwrap();
    translator
        .load_locale_str("en-US", r#"{"color": "color"}"#)
        .unwrap();
    translator
        .load_locale_str("de", r#"{"only_de": "Nur Deutsch"}"#)
        .unwrap();

    assert_eq!(translator.translate("color", &params! {}), "color");
    assert_eq!(translator.translate("hello", &params! {}), "Hello");
    assert_eq!(translator.translate("only_de", &params! {}), "only_de");
}

#[test]
fn translate_locale_param_is_tried_first() {
    let mut translator = Translator::with_locale("en");
    translator.load_locale_str("en", r#"{"yes": "Yes"}"#).unwrap();
    translator.load_locale_str("fr", r#"{"yes": "Oui"}"#).unwrap();

    assert_eq!(translator.translate("yes", &params! { "locale" => "fr" }), "Oui");
    assert_eq!(translator.translate("yes", &params! {}), "Yes");
}

#[test]
fn empty_translation_falls_through() {
    let mut translator = Translator::with_locale("de");
    translator.load_locale_str("de", r#"{"title": ""}"#).unwrap();
    translator.load_locale_str("en", r#"{"title": "Title"}"#).unwrap();
    assert_eq!(translator.translate("title", &params! {}), "Title");
}

#[test]
fn translate_array_node_as_json() {
    let translator = translator_with("en", r#"{"days": ["Mon", "Tue"]}"#);
    assert_eq!(translator.translate("days", &params! {}), r#"["Mon","Tue"]"#);
}

#[test]
fn translate_scalar_node_is_unsupported() {
    let translator = translator_with("en", r#"{"n": 5, "b": true, "z": null}"#);
    assert_eq!(translator.translate("n", &params! {}), UNSUPPORTED_NODE);
    assert_eq!(translator.translate("b", &params! {}), UNSUPPORTED_NODE);
    assert_eq!(translator.translate("z", &params! {}), UNSUPPORTED_NODE);
}

// =========================================================================
// Plural and Variant Nodes
// =========================================================================

#[test]
fn translate_plural_by_count() {
    let translator = translator_with(
        "ru",
        r#"{"apples": {"one": "%{count} яблоко", "few": "%{count} яблока", "many": "%{count} яблок"}}"#,
    );
    assert_eq!(translator.translate("apples", &params! { "count" => 1 }), "1 яблоко");
    assert_eq!(translator.translate("apples", &params! { "count" => 3 }), "3 яблока");
    assert_eq!(translator.translate("apples", &params! { "count" => 5 }), "5 яблок");
}

#[test]
fn plural_count_float_truncates() {
    let translator = translator_with("en", r#"{"items": {"one": "one item", "other": "many items"}}"#);
    assert_eq!(translator.translate("items", &params! { "count" => 1.7 }), "one item");
}

#[test]
fn plural_non_numeric_count_reads_as_one() {
    let translator = translator_with("en", r#"{"items": {"one": "one item", "other": "many items"}}"#);
    assert_eq!(translator.translate("items", &params! { "count" => "lots" }), "one item");
}

#[test]
fn plural_falls_back_to_other_then_literal_count() {
    let translator = translator_with(
        "en",
        r#"{"a": {"other": "other form"}, "b": {"0": "zero literal", "one": "one"}}"#,
    );
    assert_eq!(translator.translate("a", &params! { "count" => 1 }), "other form");
    assert_eq!(translator.translate("b", &params! { "count" => 0 }), "zero literal");
}

#[test]
fn plural_missing_form_sentinel() {
    let translator = translator_with("en", r#"{"a": {"one": "one"}}"#);
    assert_eq!(translator.translate("a", &params! { "count" => 7 }), PLURAL_MISSING_FORM);
}

#[test]
fn plural_non_string_form_counts_as_absent() {
    let translator = translator_with("en", r#"{"a": {"one": 1, "other": "fallback"}}"#);
    assert_eq!(translator.translate("a", &params! { "count" => 1 }), "fallback");
}

#[test]
fn translate_variant_by_param_value() {
    let translator = translator_with(
        "en",
        r#"{"greet": {"morning": "Good morning", "evening": "Good evening", "other": "Hello"}}"#,
    );
    assert_eq!(
        translator.translate("greet", &params! { "time" => "evening" }),
        "Good evening"
    );
    assert_eq!(translator.translate("greet", &params! { "time" => "noon" }), "Hello");
}

#[test]
fn variant_first_matching_param_wins() {
    let translator = translator_with("en", r#"{"v": {"a": "A", "b": "B"}}"#);
    let p = params! { "x" => "zzz", "y" => "b", "z" => "a" };
    assert_eq!(translator.translate("v", &p), "B");
}

#[test]
fn variant_no_match_sentinel() {
    let translator = translator_with("en", r#"{"v": {"a": "A"}}"#);
    assert_eq!(translator.translate("v", &params! { "x" => "q" }), VARIANT_NO_MATCH);
}

#[test]
fn malformed_node_sentinels() {
    let node = Value::from("text");
    assert_eq!(plural_form(&node, "en", 1), PLURAL_NOT_OBJECT);
    assert_eq!(variant_form(&node, &params! {}), VARIANT_NOT_OBJECT);
}

// =========================================================================
// Positional API
// =========================================================================

#[test]
fn tr_without_params() {
    let translator = translator_with("en", r#"{"ok": "OK"}"#);
    assert_eq!(translator.tr("ok"), "OK");
    assert_eq!(translator.tr("missing"), "missing");
    assert_eq!(translator.tr(""), "");
}

#[test]
fn tr_with_positional_params() {
    let translator = translator_with("en", r#"{"move": "{0} to {1}", "seq": "{} then {}"}"#);
    assert_eq!(translator.tr_with("move", &positional!["e2", "e4"]), "e2 to e4");
    assert_eq!(translator.tr_with("seq", &["a", "b"]), "a then b");
}

#[test]
fn tr_object_node_uses_other_then_first() {
    let translator = translator_with(
        "en",
        r#"{"a": {"one": "single", "other": "plural"}, "b": {"x": 1, "y": "why"}}"#,
    );
    assert_eq!(translator.tr("a"), "plural");
    assert_eq!(translator.tr("b"), "why");
}

#[test]
fn tr_plural_fills_count_slot() {
    let translator = translator_with(
        "en",
        r#"{"greeting": {"one": "Hello, friend!", "other": "Hello, {} friends!"}}"#,
    );
    assert_eq!(translator.tr_plural("greeting", 1), "Hello, friend!");
    assert_eq!(translator.tr_plural("greeting", 3), "Hello, 3 friends!");
}

#[test]
fn tr_plural_on_string_node_still_gets_count() {
    let translator = translator_with("en", r#"{"score": "Score: {0}/{1}"}"#);
    assert_eq!(translator.tr_plural_with("score", 7, &["10"]), "Score: 7/10");
}

#[test]
fn tr_plural_missing_key_returns_key() {
    let translator = translator_with("en", "{}");
    assert_eq!(translator.tr_plural("ghost", 2), "ghost");
}

// =========================================================================
// Key Existence and Suggestions
// =========================================================================

#[test]
fn key_exists_follows_fallback_chain() {
    let mut translator = Translator::with_locale("fr");
    translator.load_locale_str("en", r#"{"a": {"b": "x"}}"#).unwrap();

    assert!(translator.key_exists("a.b"));
    assert!(translator.key_exists("a"));
    assert!(!translator.key_exists("a.b.c"));
    assert!(!translator.key_exists(""));
}

#[test]
fn key_exists_without_locales_checks_fallback() {
    let mut translator = Translator::new();
    translator.load_locale_str("en", r#"{"a": "x"}"#).unwrap();
    assert!(translator.key_exists("a"));
}

#[test]
fn key_exists_tolerates_odd_data() {
    let mut translator = Translator::with_locale("en");
    translator
        .load_locale_str("en", r#"{"a": [1, {"b": 2}], "n": null}"#)
        .unwrap();
    assert!(!translator.key_exists("a.b"));
    assert!(translator.key_exists("n"));
    assert!(!translator.key_exists("."));
}

#[test]
fn suggest_keys_offers_close_matches() {
    let translator = translator_with(
        "en",
        r#"{"menu": {"open": "Open", "close": "Close"}, "title": "T"}"#,
    );
    assert_eq!(translator.suggest_keys("menu.opn"), ["menu.open"]);
    assert!(translator.suggest_keys("footer").is_empty());
}

// =========================================================================
// Reset
// =========================================================================

#[test]
fn reset_clears_everything() {
    let mut translator = translator_with("de", r#"{"hi": "Hallo"}"#);
    translator.set_fallback_locale("fr");
    translator.reset();

    assert_eq!(translator.locale(), "");
    assert_eq!(translator.fallback_locale(), "en");
    assert!(translator.dataset().is_empty());
    assert_eq!(translator.tr("hi"), "hi");
}
