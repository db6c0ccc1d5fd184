//! Core data types for Standard Versioning identifiers.
//!
//! This module defines the record that an identifier encodes: [`Version`],
//! together with its field types [`Phase`], [`Scope`], [`SnapshotDate`] and
//! [`ContentHash`], and the [`FieldTag`] used to address individual fields.
//! Every enum carries a fixed, bidirectional mapping to its textual code.

use serde::{Deserialize, Serialize};

use crate::error::StdVerError;

/// Maturity phase of a release. Strictly ordered: alpha < beta < candidate < release.
///
/// Serialises as its lowercase name (e.g. `"candidate"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Alpha,
    Beta,
    Candidate,
    Release,
}

impl Phase {
    /// All phases in progression order.
    pub const ALL: [Phase; 4] = [Phase::Alpha, Phase::Beta, Phase::Candidate, Phase::Release];

    /// The token used inside an identifier: `a`, `b`, `rc` or `.`.
    pub fn token(self) -> &'static str {
        match self {
            Phase::Alpha => "a",
            Phase::Beta => "b",
            Phase::Candidate => "rc",
            Phase::Release => ".",
        }
    }

    /// Inverse of [`Phase::token`].
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.token() == token)
    }

    /// Lowercase name, e.g. `"alpha"`.
    pub fn name(self) -> &'static str {
        match self {
            Phase::Alpha => "alpha",
            Phase::Beta => "beta",
            Phase::Candidate => "candidate",
            Phase::Release => "release",
        }
    }

    /// The next phase, or `None` past `Release`.
    pub fn next(self) -> Option<Self> {
        match self {
            Phase::Alpha => Some(Phase::Beta),
            Phase::Beta => Some(Phase::Candidate),
            Phase::Candidate => Some(Phase::Release),
            Phase::Release => None,
        }
    }
}

/// Formats the phase as its lowercase name.
impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a [`Phase`] from either its identifier token or its name.
impl std::str::FromStr for Phase {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::from_token(s)
            .or_else(|| Phase::ALL.into_iter().find(|p| p.name() == s))
            .ok_or_else(|| {
                format!(
                    "unknown phase {:?}; expected one of: a, b, rc, ., \
                     alpha, beta, candidate, release",
                    s
                )
            })
    }
}

/// Availability scope of a release. Strictly ordered: XA < LA < EA < GA.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scope {
    /// Experimental availability: not available outside the producing team.
    #[serde(rename = "XA")]
    Experimental,
    /// Limited availability: selected users only.
    #[serde(rename = "LA")]
    Limited,
    /// Early availability: open to early adopters.
    #[serde(rename = "EA")]
    Early,
    /// General availability.
    #[serde(rename = "GA")]
    General,
}

impl Scope {
    /// All scopes in progression order.
    pub const ALL: [Scope; 4] = [Scope::Experimental, Scope::Limited, Scope::Early, Scope::General];

    /// The two-letter code, e.g. `"GA"`.
    pub fn code(self) -> &'static str {
        match self {
            Scope::Experimental => "XA",
            Scope::Limited => "LA",
            Scope::Early => "EA",
            Scope::General => "GA",
        }
    }

    /// Adjective used in explanations, e.g. `"general"`.
    pub fn label(self) -> &'static str {
        match self {
            Scope::Experimental => "experimental",
            Scope::Limited => "limited",
            Scope::Early => "early",
            Scope::General => "general",
        }
    }

    /// The next scope, or `None` past `GA`.
    pub fn next(self) -> Option<Self> {
        match self {
            Scope::Experimental => Some(Scope::Limited),
            Scope::Limited => Some(Scope::Early),
            Scope::Early => Some(Scope::General),
            Scope::General => None,
        }
    }
}

/// Formats the scope as its two-letter code.
impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Parses a [`Scope`] from its two-letter code (case-sensitive).
impl std::str::FromStr for Scope {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scope::ALL
            .into_iter()
            .find(|sc| sc.code() == s)
            .ok_or_else(|| format!("unknown scope {:?}; expected one of: XA, LA, EA, GA", s))
    }
}

/// Snapshot date in `YYYYMMDD` form, held as an integer.
///
/// Only the lexical shape is checked (exactly eight digits); the value is not
/// validated against a calendar. Always rendered zero-padded to eight digits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct SnapshotDate(u32);

impl SnapshotDate {
    /// Build from year, month and day components. No calendar check is done.
    pub fn from_ymd(year: u32, month: u32, day: u32) -> Option<Self> {
        if year > 9999 || month > 99 || day > 99 {
            return None;
        }
        Some(Self(year * 10_000 + month * 100 + day))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Hyphenated `YYYY-MM-DD` form used in explanations.
    pub fn iso(self) -> String {
        format!("{:04}-{:02}-{:02}", self.0 / 10_000, self.0 / 100 % 100, self.0 % 100)
    }
}

impl std::fmt::Display for SnapshotDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:08}", self.0)
    }
}

/// Parses exactly eight ASCII digits.
impl std::str::FromStr for SnapshotDate {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("snapshot date must be exactly 8 digits (YYYYMMDD), got {:?}", s));
        }
        s.parse::<u32>().map(Self).map_err(|e| e.to_string())
    }
}

impl TryFrom<String> for SnapshotDate {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SnapshotDate> for String {
    fn from(d: SnapshotDate) -> Self {
        d.to_string()
    }
}

/// 16-bit content-hash tag, rendered as four uppercase hex digits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ContentHash(u16);

impl ContentHash {
    pub fn new(value: u16) -> Self {
        Self(value)
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

/// Parses exactly four hex digits. Lowercase digits are accepted; the value
/// always displays in uppercase.
impl std::str::FromStr for ContentHash {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("content hash must be exactly 4 hex digits, got {:?}", s));
        }
        u16::from_str_radix(s, 16).map(Self).map_err(|e| e.to_string())
    }
}

impl TryFrom<String> for ContentHash {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ContentHash> for String {
    fn from(h: ContentHash) -> Self {
        h.to_string()
    }
}

/// Identifies one field of a [`Version`].
///
/// The declaration order is the identifier's field order, which is also the
/// order explicit sets are applied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldTag {
    Major,
    Minor,
    Phase,
    Revision,
    Date,
    Hash,
    Scope,
}

impl FieldTag {
    pub const ALL: [FieldTag; 7] = [
        FieldTag::Major,
        FieldTag::Minor,
        FieldTag::Phase,
        FieldTag::Revision,
        FieldTag::Date,
        FieldTag::Hash,
        FieldTag::Scope,
    ];

    /// One-letter id: `M`, `N`, `p`, `R`, `D`, `H` or `S`.
    pub fn letter(self) -> &'static str {
        match self {
            FieldTag::Major => "M",
            FieldTag::Minor => "N",
            FieldTag::Phase => "p",
            FieldTag::Revision => "R",
            FieldTag::Date => "D",
            FieldTag::Hash => "H",
            FieldTag::Scope => "S",
        }
    }

    /// Lowercase long name, also used as the structured-output key.
    pub fn name(self) -> &'static str {
        match self {
            FieldTag::Major => "major",
            FieldTag::Minor => "minor",
            FieldTag::Phase => "phase",
            FieldTag::Revision => "revision",
            FieldTag::Date => "date",
            FieldTag::Hash => "hash",
            FieldTag::Scope => "scope",
        }
    }

    /// Title shown in tables.
    pub fn title(self) -> &'static str {
        match self {
            FieldTag::Major => "Major Version",
            FieldTag::Minor => "Minor Version",
            FieldTag::Phase => "Maturity Phase",
            FieldTag::Revision => "Revision",
            FieldTag::Date => "Snapshot Date",
            FieldTag::Hash => "Content Hash",
            FieldTag::Scope => "Availability Scope",
        }
    }
}

impl std::fmt::Display for FieldTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.letter())
    }
}

/// Parses a [`FieldTag`] from its one-letter id or its long name.
impl std::str::FromStr for FieldTag {
    type Err = StdVerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldTag::ALL
            .into_iter()
            .find(|t| t.letter() == s || t.name() == s)
            .ok_or_else(|| StdVerError::UnknownField(s.to_string()))
    }
}

/// A decoded Standard Versioning identifier.
///
/// Records are plain values: they have no identity beyond their fields, and
/// every mutation produces a new record. Use [`crate::decode`] (or `parse`)
/// to build one from text and `Display` (or [`crate::encode`]) to get its
/// canonical form back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Version {
    /// Major version (M).
    pub major: u64,
    /// Minor version (N).
    pub minor: u64,
    /// Maturity phase (p).
    pub phase: Phase,
    /// Revision within the phase (R).
    pub revision: u64,
    /// Snapshot date (D).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<SnapshotDate>,
    /// Content-hash tag (H).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<ContentHash>,
    /// Availability scope (S).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
}

impl Version {
    /// A record with only the required fields set.
    pub fn new(major: u64, minor: u64, phase: Phase, revision: u64) -> Self {
        Self {
            major,
            minor,
            phase,
            revision,
            date: None,
            hash: None,
            scope: None,
        }
    }

    /// The textual value of a field, or `None` for an absent optional field.
    pub fn field(&self, tag: FieldTag) -> Option<String> {
        match tag {
            FieldTag::Major => Some(self.major.to_string()),
            FieldTag::Minor => Some(self.minor.to_string()),
            FieldTag::Phase => Some(self.phase.to_string()),
            FieldTag::Revision => Some(self.revision.to_string()),
            FieldTag::Date => self.date.map(|d| d.to_string()),
            FieldTag::Hash => self.hash.map(|h| h.to_string()),
            FieldTag::Scope => self.scope.map(|s| s.to_string()),
        }
    }
}

// --- tests -------------------------------------------------------------------
