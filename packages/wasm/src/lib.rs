//! WebAssembly bindings for the Standard Versioning codec.
//!
//! Exposes the codec to JavaScript/TypeScript via `wasm-bindgen`. Compile
//! with `wasm-pack build` to produce an npm-ready package that works in
//! browsers, Node.js, and any other WASM host.
//!
//! ```js
//! import init, { parse, bump, modify, explain, hash } from './stdver_wasm.js';
//! await init();
//!
//! bump('1.2.3', 'N');                         // "1.3a0"
//! bump('1.2.3', 'N', 0);                      // "1.3.0"
//! modify('1.2a3', '{"bump":"D","set":{"S":"EA"}}');
//! explain('1.2a3-GA', 'table', 'html');       // "<table class=\"stdver\">…"
//! JSON.parse(parse('1.2a3'));                 // { major: 1, minor: 2, … }
//! hash(new TextEncoder().encode('content'));  // "XXXX"
//! ```
//!
//! Every function throws a descriptive string on failure.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Deserialize;
use stdver::{FieldTag, Level, ModifyOptions, SnapshotDate, StdVerError};
use wasm_bindgen::prelude::*;

/// One-time initialisation called at the start of every exported function.
///
/// Installs the `console_error_panic_hook` when the feature is enabled so
/// that Rust panics are forwarded to the browser console as readable errors
/// rather than appearing as generic "unreachable" WASM traps.
fn setup() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Decode an identifier and return its fields as a JSON object string.
///
/// ```js
/// parse('1.2.3.20230801+ABCD-GA');
/// // '{"major":1,"minor":2,"phase":"release","revision":3,"date":"20230801","hash":"ABCD","scope":"GA"}'
/// ```
#[wasm_bindgen]
pub fn parse(text: &str) -> Result<String, JsValue> {
    setup();
    let version = stdver::decode(text).map_err(to_js)?;
    serde_json::to_string(&version).map_err(to_js)
}

/// Bump one part of an identifier.
///
/// `part` is one of `M`, `N`, `p`, `R`, `D`, `H`, `S`. `level` defaults to 1.
/// Bumping `D` uses the host's current local date.
#[wasm_bindgen]
pub fn bump(text: &str, part: &str, level: Option<u8>) -> Result<String, JsValue> {
    setup();
    let field: FieldTag = part.parse().map_err(to_js)?;
    let level = level.map(Level::try_from).transpose().map_err(to_js)?.unwrap_or_default();
    let mut options = ModifyOptions::bump(field).with_level(level);
    options.today = local_today();
    stdver::modify(text, &options).map_err(to_js)
}

/// Bump and/or set parts of an identifier.
///
/// `options` is a JSON object supporting the following keys, all optional:
/// ```json
/// {
///   "level": 1,
///   "bump": "R",
///   "set": { "S": "GA", "H": "BEEF" },
///   "today": "20240101"
/// }
/// ```
///
/// When `today` is absent the host's current local date is used.
///
/// Unknown keys and wrongly typed values throw.
#[wasm_bindgen]
pub fn modify(text: &str, options: &str) -> Result<String, JsValue> {
    setup();
    let opts: JsModifyOptions = serde_json::from_str(options)
        .map_err(|e| JsValue::from_str(&format!("options parse error: {e}")))?;
    let parsed = opts.into_options().map_err(to_js)?;
    stdver::modify(text, &parsed).map_err(to_js)
}

/// The JSON shape accepted by [`modify`].
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct JsModifyOptions {
    level: Option<u8>,
    bump: Option<String>,
    set: BTreeMap<String, String>,
    today: Option<String>,
}

impl JsModifyOptions {
    fn into_options(self) -> Result<ModifyOptions, StdVerError> {
        let mut parsed = ModifyOptions::default();
        if let Some(level) = self.level {
            parsed.level = Level::try_from(level)?;
        }
        parsed.bump = self.bump.as_deref().map(str::parse::<FieldTag>).transpose()?;
        for (key, value) in self.set {
            parsed = parsed.with_set(&key, value)?;
        }
        parsed.today = match self.today {
            Some(date) => Some(date.parse::<SnapshotDate>().map_err(|reason| {
                StdVerError::InvalidFieldValue {
                    field: FieldTag::Date,
                    value: date.clone(),
                    reason,
                }
            })?),
            None => local_today(),
        };
        Ok(parsed)
    }
}

/// Explain an identifier.
///
/// `format` is one of `text`, `table`, `json`, `yaml`; `markup` one of
/// `plain`, `ansi`, `html`. Unsupported combinations throw.
#[wasm_bindgen]
pub fn explain(text: &str, format: &str, markup: &str) -> Result<String, JsValue> {
    setup();
    let (format, markup) = stdver::render_mode(format, markup).map_err(to_js)?;
    stdver::explain(text, format, markup).map_err(to_js)
}

/// Content-hash tag (four uppercase hex digits) of `bytes`.
#[wasm_bindgen]
pub fn hash(bytes: &[u8]) -> String {
    setup();
    stdver::content_hash(bytes).to_string()
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn local_today() -> Option<SnapshotDate> {
    let today = chrono::Local::now().date_naive();
    SnapshotDate::from_ymd(u32::try_from(today.year()).ok()?, today.month(), today.day())
}
