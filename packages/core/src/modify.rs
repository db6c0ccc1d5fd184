//! Bump and explicit-set mutations.
//!
//! Bumping a coarse field resets the finer ones: the snapshot date and the
//! content hash belong to one specific `(M, N, p, R)` tuple, so any change to
//! that tuple clears them. Explicit sets bypass every cascade.

use std::collections::BTreeMap;

use tracing::debug;

use crate::codec::{decode, encode};
use crate::error::StdVerError;
use crate::types::{FieldTag, Phase, Scope, SnapshotDate, Version};

/// Scheme level, controlling which phase a major/minor bump starts in.
///
/// | Level | Scheme | Phase after M/N bump |
/// |-------|--------|----------------------|
/// | 0 | `M.N.R` | release |
/// | 1 | `M.NpR` | alpha |
/// | 2 | `M.NpR.D+H-S` | alpha |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Level {
    Zero,
    #[default]
    One,
    Two,
}

impl Level {
    /// The phase a freshly bumped major or minor version starts in.
    pub fn initial_phase(self) -> Phase {
        match self {
            Level::Zero => Phase::Release,
            Level::One | Level::Two => Phase::Alpha,
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = StdVerError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Level::Zero),
            1 => Ok(Level::One),
            2 => Ok(Level::Two),
            _ => Err(StdVerError::InvalidLevel(n)),
        }
    }
}

/// Everything [`modify`] can be asked to do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyOptions {
    /// Controls phase defaulting after a major/minor bump.
    pub level: Level,
    /// Field to bump, if any.
    pub bump: Option<FieldTag>,
    /// Explicit values, applied after the bump in field order.
    pub set: BTreeMap<FieldTag, String>,
    /// Current date. Only read when bumping [`FieldTag::Date`].
    pub today: Option<SnapshotDate>,
}

impl ModifyOptions {
    /// Options that bump `field` and nothing else.
    pub fn bump(field: FieldTag) -> Self {
        Self {
            bump: Some(field),
            ..Self::default()
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_today(mut self, today: SnapshotDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Add an explicit value for the field named `key` (one-letter id or long name).
    ///
    /// # Errors
    ///
    /// [`StdVerError::UnknownField`] if `key` names no field. The value is
    /// checked later, when it is applied.
    pub fn with_set(mut self, key: &str, value: impl Into<String>) -> Result<Self, StdVerError> {
        let field: FieldTag = key.parse()?;
        self.set.insert(field, value.into());
        Ok(self)
    }
}

impl Version {
    /// Return a copy with `field` bumped and dependent fields reset.
    ///
    /// `today` is only consulted when bumping [`FieldTag::Date`].
    ///
    /// # Errors
    ///
    /// - [`StdVerError::PhaseOverflow`] when bumping the phase of a release.
    /// - [`StdVerError::ScopeOverflow`] when bumping a `GA` scope.
    /// - [`StdVerError::MissingDate`] when bumping the date without `today`.
    /// - [`StdVerError::InvalidFieldValue`] when a number would overflow.
    pub fn bump(
        mut self,
        field: FieldTag,
        level: Level,
        today: Option<SnapshotDate>,
    ) -> Result<Self, StdVerError> {
        match field {
            FieldTag::Major => {
                self.major = increment(field, self.major)?;
                self.minor = 0;
                self.restart(level.initial_phase());
            }
            FieldTag::Minor => {
                self.minor = increment(field, self.minor)?;
                self.restart(level.initial_phase());
            }
            FieldTag::Phase => {
                let next = self.phase.next().ok_or(StdVerError::PhaseOverflow)?;
                self.restart(next);
            }
            FieldTag::Revision => {
                self.revision = increment(field, self.revision)?;
                self.date = None;
                self.hash = None;
            }
            FieldTag::Date => {
                self.date = Some(today.ok_or(StdVerError::MissingDate)?);
                self.hash = None;
            }
            FieldTag::Hash => self.hash = None,
            FieldTag::Scope => {
                self.scope = Some(match self.scope {
                    None => Scope::Experimental,
                    Some(s) => s.next().ok_or(StdVerError::ScopeOverflow)?,
                });
            }
        }
        Ok(self)
    }

    /// Return a copy with `field` assigned from its textual `value`.
    ///
    /// No cascade is applied. For the optional fields D, H and S an empty
    /// `value` removes the field.
    ///
    /// # Errors
    ///
    /// [`StdVerError::InvalidFieldValue`] if `value` is not valid for `field`.
    pub fn set(mut self, field: FieldTag, value: &str) -> Result<Self, StdVerError> {
        let bad = |reason: String| StdVerError::invalid_value(field, value, reason);
        match field {
            FieldTag::Major => self.major = parse_number(field, value)?,
            FieldTag::Minor => self.minor = parse_number(field, value)?,
            FieldTag::Revision => self.revision = parse_number(field, value)?,
            FieldTag::Phase => self.phase = value.parse().map_err(bad)?,
            FieldTag::Date => self.date = parse_optional(value).map_err(bad)?,
            FieldTag::Hash => self.hash = parse_optional(value).map_err(bad)?,
            FieldTag::Scope => self.scope = parse_optional(value).map_err(bad)?,
        }
        Ok(self)
    }

    /// Apply the bump and explicit sets described by `options`.
    pub fn modified(self, options: &ModifyOptions) -> Result<Self, StdVerError> {
        let mut version = self;
        if let Some(field) = options.bump {
            version = version.bump(field, options.level, options.today)?;
            debug!(%field, from = %self, to = %version, "bumped");
        }
        for (&field, value) in &options.set {
            version = version.set(field, value)?;
            debug!(%field, value = value.as_str(), "set");
        }
        Ok(version)
    }

    fn restart(&mut self, phase: Phase) {
        self.phase = phase;
        self.revision = 0;
        self.date = None;
        self.hash = None;
    }
}

/// Decode `text`, apply `options`, and return the new canonical identifier.
///
/// Nothing is produced unless every step succeeds.
pub fn modify(text: &str, options: &ModifyOptions) -> Result<String, StdVerError> {
    let version = decode(text)?.modified(options)?;
    Ok(encode(&version))
}

// --- helpers -----------------------------------------------------------------

fn increment(field: FieldTag, n: u64) -> Result<u64, StdVerError> {
    n.checked_add(1)
        .ok_or_else(|| StdVerError::invalid_value(field, n.to_string(), "value would overflow"))
}

fn parse_number(field: FieldTag, value: &str) -> Result<u64, StdVerError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(StdVerError::invalid_value(field, value, "expected decimal digits"));
    }
    value
        .parse()
        .map_err(|_| StdVerError::invalid_value(field, value, "number too large"))
}

fn parse_optional<T: std::str::FromStr<Err = String>>(value: &str) -> Result<Option<T>, String> {
    if value.is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

// --- tests -------------------------------------------------------------------
