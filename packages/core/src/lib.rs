//! Standard Versioning identifiers: decoding, encoding, bumping and explaining.
//!
//! An identifier such as `1.2a3.20230801+ABCD-GA` packs a release's major and
//! minor version, maturity phase, revision, snapshot date, content hash and
//! availability scope into one string. This crate is the codec for that
//! string. It is the foundation for the `stdver` CLI and the `stdver-wasm`
//! WebAssembly bindings.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`types`] | The record: [`Version`], [`Phase`], [`Scope`], [`SnapshotDate`], [`ContentHash`], [`FieldTag`] |
//! | [`codec`] | Grammar checking via [`decode`] and canonical text via [`encode`] |
//! | [`modify`] | Bump and explicit-set rules via [`modify()`] and [`ModifyOptions`] |
//! | [`render`] | Text, table, JSON and YAML explanations via [`explain`] |
//! | [`hash`] | SHA-256 based content tags for the H field |
//!
//! # Quick start
//!
//! ```rust
//! use stdver::{explain, modify, FieldTag, Format, Markup, ModifyOptions};
//!
//! let next = modify("1.2.3", &ModifyOptions::bump(FieldTag::Minor)).unwrap();
//! assert_eq!(next, "1.3a0");
//!
//! let text = explain(&next, Format::Text, Markup::Plain).unwrap();
//! assert_eq!(text, "1.3a0 is the 1st alpha release of version 1.3.");
//! ```
//!
//! # Grammar
//!
//! ```text
//! M "." N ("a" | "b" | "rc" | ".") R ["." YYYYMMDD] ["+" HHHH] ["-" ("XA" | "LA" | "EA" | "GA")]
//! ```

pub mod codec;
pub mod error;
pub mod hash;
pub mod modify;
pub mod render;
pub mod types;

pub use codec::{decode, encode};
pub use error::StdVerError;
pub use hash::{content_hash, ContentHasher};
pub use modify::{modify, Level, ModifyOptions};
pub use render::{explain, render_mode, Format, Markup};
pub use types::{ContentHash, FieldTag, Phase, Scope, SnapshotDate, Version};
