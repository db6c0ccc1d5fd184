//! Decoding and encoding of identifier text.
//!
//! [`decode`] is the only place that decides whether a string is a valid
//! identifier; [`encode`] is the only place that produces identifier text.

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::StdVerError;
use crate::types::{Phase, Version};

/// `M "." N phase R ["." D] ["+" H] ["-" S]`, anchored at both ends.
static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]+)\.([0-9]+)(a|b|rc|\.)([0-9]+)(?:\.([0-9]{8}))?(?:\+([0-9A-F]{4}))?(?:-(XA|LA|EA|GA))?$",
    )
    .expect("invalid identifier regex")
});

/// Parse identifier text into a [`Version`].
///
/// Only the lexical shape is checked. Optional fields are present in the
/// result exactly when their part appears in `text`.
///
/// # Errors
///
/// [`StdVerError::InvalidFormat`] if `text` does not match the grammar, or if
/// a numeric field does not fit in 64 bits.
pub fn decode(text: &str) -> Result<Version, StdVerError> {
    let invalid = || StdVerError::InvalidFormat(text.to_string());
    let caps = IDENTIFIER_RE.captures(text).ok_or_else(invalid)?;

    let number = |i: usize| caps[i].parse::<u64>().map_err(|_| invalid());
    let phase = Phase::from_token(&caps[3]).ok_or_else(invalid)?;

    Ok(Version {
        major: number(1)?,
        minor: number(2)?,
        phase,
        revision: number(4)?,
        date: caps
            .get(5)
            .map(|m| m.as_str().parse())
            .transpose()
            .map_err(|_| invalid())?,
        hash: caps
            .get(6)
            .map(|m| m.as_str().parse())
            .transpose()
            .map_err(|_| invalid())?,
        scope: caps
            .get(7)
            .map(|m| m.as_str().parse())
            .transpose()
            .map_err(|_| invalid())?,
    })
}

/// Produce the canonical identifier text for a [`Version`].
pub fn encode(version: &Version) -> String {
    let mut out = format!(
        "{}.{}{}{}",
        version.major,
        version.minor,
        version.phase.token(),
        version.revision
    );
    // Writing to a String cannot fail.
    if let Some(date) = version.date {
        let _ = write!(out, ".{date}");
    }
    if let Some(hash) = version.hash {
        let _ = write!(out, "+{hash}");
    }
    if let Some(scope) = version.scope {
        let _ = write!(out, "-{scope}");
    }
    out
}

/// Formats the record as its canonical identifier.
impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&encode(self))
    }
}

impl std::str::FromStr for Version {
    type Err = StdVerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentHash, Scope, SnapshotDate};

    #[test]
    fn decodes_minimal_alpha() {
        assert_eq!(decode("1.2a3"), Ok(Version::new(1, 2, Phase::Alpha, 3)));
    }

    #[test]
    fn decodes_full_release() {
        let v = decode("1.2.3.20230801+ABCD-GA").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.phase, Phase::Release);
        assert_eq!(v.revision, 3);
        assert_eq!(v.date, "20230801".parse::<SnapshotDate>().ok());
        assert_eq!(v.hash, Some(ContentHash::new(0xABCD)));
        assert_eq!(v.scope, Some(Scope::General));
    }

    #[test]
    fn decodes_each_phase_token() {
        assert_eq!(decode("0.1b2").unwrap().phase, Phase::Beta);
        assert_eq!(decode("0.1rc2").unwrap().phase, Phase::Candidate);
        assert_eq!(decode("0.1.2").unwrap().phase, Phase::Release);
    }

    #[test]
    fn optional_parts_are_independent() {
        let v = decode("1.0b1-EA").unwrap();
        assert_eq!((v.date, v.hash, v.scope), (None, None, Some(Scope::Early)));
        let v = decode("1.0b1+0F0F").unwrap();
        assert_eq!((v.date, v.hash, v.scope), (None, Some(ContentHash::new(0x0F0F)), None));
    }

    #[test]
    fn rejects_unknown_phase_token() {
        assert_eq!(
            decode("1.2x3"),
            Err(StdVerError::InvalidFormat("1.2x3".into()))
        );
    }

    #[test]
    fn rejects_partial_and_padded_input() {
        for bad in [
            "",
            "1.2",
            "1.2a",
            " 1.2a3",
            "1.2a3 ",
            "1.2a3-ga",
            "1.2a3+abcd",
            "1.2a3+ABC",
            "1.2a3.2023080",
            "1.2a3.202308011",
            "1.2a3-GA+ABCD",
            "1.2A3",
            "v1.2a3",
            "1.2a3-",
        ] {
            assert!(decode(bad).is_err(), "{bad:?} should not decode");
        }
    }

    #[test]
    fn rejects_non_ascii_digits() {
        assert!(decode("١.2a3").is_err());
    }

    #[test]
    fn rejects_numbers_wider_than_u64() {
        assert!(decode("18446744073709551616.0a0").is_err());
        assert!(decode("18446744073709551615.0a0").is_ok());
    }

    #[test]
    fn encodes_in_field_order() {
        let mut v = Version::new(2, 0, Phase::Candidate, 1);
        assert_eq!(encode(&v), "2.0rc1");
        v.scope = Some(Scope::Limited);
        v.date = SnapshotDate::from_ymd(2024, 1, 31);
        v.hash = Some(ContentHash::new(0x1));
        assert_eq!(v.to_string(), "2.0rc1.20240131+0001-LA");
    }

    #[test]
    fn zero_valued_optionals_stay_present() {
        let mut v = Version::new(1, 0, Phase::Release, 0);
        v.date = "00000000".parse().ok();
        v.hash = Some(ContentHash::new(0));
        let text = encode(&v);
        assert_eq!(text, "1.0.0.00000000+0000");
        assert_eq!(decode(&text), Ok(v));
    }

    #[test]
    fn canonical_text_round_trips() {
        for s in ["0.0a0", "1.2a3", "10.20b30", "3.1rc0-XA", "1.2.3.20230801+ABCD-GA"] {
            assert_eq!(encode(&decode(s).unwrap()), s);
        }
    }

    #[test]
    fn leading_zeros_are_not_canonical() {
        assert_eq!(decode("01.2a3").unwrap().to_string(), "1.2a3");
    }
}
