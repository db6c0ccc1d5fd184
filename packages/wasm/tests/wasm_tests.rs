//! wasm-bindgen-test integration tests for the stdver WASM bindings.
//!
//! Run with:
//!   wasm-pack test packages/wasm --node
//!
//! These tests compile to WASM and execute in a Node.js process, verifying
//! the exported API surface works end-to-end in a JavaScript host.

use wasm_bindgen_test::*;

// Configure all tests in this file to run in Node.js (no browser required).
wasm_bindgen_test_configure!(run_in_node_experimental);

use stdver_wasm::{bump, explain, hash, modify, parse};

// ---------------------------------------------------------------------------
// parse()
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn parse_returns_field_object() {
    let json = parse("1.2.3.20230801+ABCD-GA").unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["major"].as_u64(), Some(1));
    assert_eq!(parsed["phase"].as_str(), Some("release"));
    assert_eq!(parsed["date"].as_str(), Some("20230801"));
    assert_eq!(parsed["hash"].as_str(), Some("ABCD"));
    assert_eq!(parsed["scope"].as_str(), Some("GA"));
}

#[wasm_bindgen_test]
fn parse_invalid_identifier_returns_err() {
    assert!(parse("1.2x3").is_err(), "unknown phase token should fail parse()");
}

// ---------------------------------------------------------------------------
// bump()
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn bump_minor_defaults_to_level_one() {
    assert_eq!(bump("1.2.3", "N", None).unwrap(), "1.3a0");
}

#[wasm_bindgen_test]
fn bump_minor_at_level_zero() {
    assert_eq!(bump("1.2.3", "N", Some(0)).unwrap(), "1.3.0");
}

#[wasm_bindgen_test]
fn bump_date_uses_host_clock() {
    let next = bump("1.2a3+ABCD", "D", None).unwrap();
    assert!(next.starts_with("1.2a3."), "date should be appended, got {next}");
    assert_eq!(next.len(), "1.2a3.".len() + 8);
}

#[wasm_bindgen_test]
fn bump_rejects_bad_part_and_level() {
    assert!(bump("1.2.3", "Q", None).is_err());
    assert!(bump("1.2.3", "R", Some(3)).is_err());
    assert!(bump("1.2.3", "p", None).is_err(), "release cannot advance phase");
}

// ---------------------------------------------------------------------------
// modify()
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn modify_with_bump_set_and_date() {
    let opts = r#"{"bump":"D","set":{"S":"EA"},"today":"20240101"}"#;
    assert_eq!(modify("1.2a3", opts).unwrap(), "1.2a3.20240101-EA");
}

#[wasm_bindgen_test]
fn modify_rejects_unknown_field_and_bad_json() {
    assert!(modify("1.2a3", r#"{"set":{"X":"1"}}"#).is_err());
    assert!(modify("1.2a3", "not json").is_err());
}

#[wasm_bindgen_test]
fn modify_rejects_mistyped_and_misspelled_options() {
    assert!(modify("1.2.3", r#"{"bump":5,"today":"20240101"}"#).is_err());
    assert!(modify("1.2.3", r#"{"bumpp":"N","today":"20240101"}"#).is_err());
    assert!(modify("1.2.3", r#"{"set":["S","GA"]}"#).is_err());
    assert!(modify("1.2.3", r#"{"bump":"D","today":20240101}"#).is_err());
}

// ---------------------------------------------------------------------------
// explain()
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn explain_text_plain() {
    let text = explain("1.0a0", "text", "plain").unwrap();
    assert!(text.contains("1st alpha release"));
}

#[wasm_bindgen_test]
fn explain_table_html() {
    let html = explain("1.0a0-GA", "table", "html").unwrap();
    assert!(html.starts_with("<table class=\"stdver\">"));
}

#[wasm_bindgen_test]
fn explain_unsupported_mode_returns_err() {
    assert!(explain("1.0a0", "json", "html").is_err());
    assert!(explain("1.0a0", "xml", "plain").is_err());
}

// ---------------------------------------------------------------------------
// hash()
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn hash_is_four_uppercase_hex_digits() {
    let tag = hash(b"content");
    assert_eq!(tag.len(), 4);
    assert!(tag.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    assert_eq!(hash(b""), "8176");
}
