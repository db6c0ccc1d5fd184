//! Human-readable explanations of [`Version`]s.
//!
//! An explanation is generated *from* the decoded record; none of the output
//! formats are ever parsed back. The identifier text stays the only
//! normative form.
//!
//! Values that reach the output come from the identifier grammar (digits,
//! hex digits, fixed codes), so HTML output needs no escaping.

use crate::codec::decode;
use crate::error::StdVerError;
use crate::types::{FieldTag, Phase, Version};

/// Shape of an explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// A single descriptive sentence.
    Text,
    /// One row per present field: name, one-letter id, value.
    Table,
    /// Key-value object as JSON.
    Json,
    /// Key-value object as YAML.
    Yaml,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Text => write!(f, "text"),
            Format::Table => write!(f, "table"),
            Format::Json => write!(f, "json"),
            Format::Yaml => write!(f, "yaml"),
        }
    }
}

impl std::str::FromStr for Format {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Format::Text),
            "table" => Ok(Format::Table),
            "json" => Ok(Format::Json),
            "yaml" => Ok(Format::Yaml),
            _ => Err(format!(
                "unknown format {:?}; expected one of: text, table, json, yaml",
                s
            )),
        }
    }
}

/// Markup applied on top of a [`Format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Plain,
    /// ANSI SGR escape sequences for terminals.
    Ansi,
    /// HTML fragment.
    Html,
}

impl std::fmt::Display for Markup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Markup::Plain => write!(f, "plain"),
            Markup::Ansi => write!(f, "ansi"),
            Markup::Html => write!(f, "html"),
        }
    }
}

impl std::str::FromStr for Markup {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Markup::Plain),
            "ansi" => Ok(Markup::Ansi),
            "html" => Ok(Markup::Html),
            _ => Err(format!(
                "unknown markup {:?}; expected one of: plain, ansi, html",
                s
            )),
        }
    }
}

impl Markup {
    /// Highlight a field value.
    fn value(self, s: &str) -> String {
        match self {
            Markup::Plain => s.to_string(),
            Markup::Ansi => format!("{BLUE}{s}{RESET}"),
            Markup::Html => format!("<b>{s}</b>"),
        }
    }

    /// Highlight the identifier itself.
    fn identifier(self, s: &str) -> String {
        match self {
            Markup::Plain => s.to_string(),
            Markup::Ansi => format!("{BOLD}{s}{RESET}"),
            Markup::Html => format!("<code>{s}</code>"),
        }
    }
}

const BOLD: &str = "\x1b[1m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Resolve format and markup names into a supported render mode.
///
/// # Errors
///
/// [`StdVerError::UnsupportedRenderMode`] if either name is unknown or the
/// pair is not a supported combination.
pub fn render_mode(format: &str, markup: &str) -> Result<(Format, Markup), StdVerError> {
    let unsupported = || StdVerError::UnsupportedRenderMode {
        format: format.to_string(),
        markup: markup.to_string(),
    };
    let f: Format = format.parse().map_err(|_| unsupported())?;
    let m: Markup = markup.parse().map_err(|_| unsupported())?;
    if !is_supported(f, m) {
        return Err(unsupported());
    }
    Ok((f, m))
}

/// Structured formats are emitted as plain text only.
pub fn is_supported(format: Format, markup: Markup) -> bool {
    match format {
        Format::Text | Format::Table => true,
        Format::Json | Format::Yaml => markup == Markup::Plain,
    }
}

/// Decode `text` and render it.
///
/// # Errors
///
/// [`StdVerError::InvalidFormat`] for an invalid identifier and
/// [`StdVerError::UnsupportedRenderMode`] for an unsupported combination.
pub fn explain(text: &str, format: Format, markup: Markup) -> Result<String, StdVerError> {
    let version = decode(text)?;
    render_version(&version, format, markup)
}

/// Render an already decoded [`Version`].
pub fn render_version(
    version: &Version,
    format: Format,
    markup: Markup,
) -> Result<String, StdVerError> {
    if !is_supported(format, markup) {
        return Err(StdVerError::UnsupportedRenderMode {
            format: format.to_string(),
            markup: markup.to_string(),
        });
    }
    match format {
        Format::Text => Ok(render_sentence(version, markup)),
        Format::Table => Ok(render_table(version, markup)),
        Format::Json => serde_json::to_string_pretty(version)
            .map_err(|e| StdVerError::Serialization(e.to_string())),
        Format::Yaml => {
            serde_yaml::to_string(version).map_err(|e| StdVerError::Serialization(e.to_string()))
        }
    }
}

/// One sentence describing every present field.
///
/// ```text
/// 1.2a3.20230801+ABCD-XA is the 4th alpha release of version 1.2, snapshot of
/// 2023-08-01, content hash ABCD, with experimental availability (XA).
/// ```
pub fn render_sentence(version: &Version, markup: Markup) -> String {
    let mut out = format!(
        "{} is the {} {} of version {}",
        markup.identifier(&version.to_string()),
        markup.value(&ordinal(u128::from(version.revision) + 1)),
        markup.value(phase_label(version.phase)),
        markup.value(&format!("{}.{}", version.major, version.minor)),
    );
    if let Some(date) = version.date {
        out.push_str(&format!(", snapshot of {}", markup.value(&date.iso())));
    }
    if let Some(hash) = version.hash {
        out.push_str(&format!(", content hash {}", markup.value(&hash.to_string())));
    }
    if let Some(scope) = version.scope {
        out.push_str(&format!(
            ", with {} availability ({})",
            markup.value(scope.label()),
            markup.value(scope.code())
        ));
    }
    out.push('.');

    match markup {
        Markup::Html => format!("<p class=\"stdver\">{out}</p>"),
        Markup::Plain | Markup::Ansi => out,
    }
}

/// A field / id / value listing of every present field.
///
/// ```text
/// Field           Id  Value
/// --------------  --  -----
/// Major Version   M   1
/// Minor Version   N   2
/// Maturity Phase  p   alpha
/// Revision        R   3
/// ```
pub fn render_table(version: &Version, markup: Markup) -> String {
    let rows: Vec<(FieldTag, String)> = FieldTag::ALL
        .into_iter()
        .filter_map(|tag| version.field(tag).map(|value| (tag, value)))
        .collect();

    if markup == Markup::Html {
        let mut out = String::from("<table class=\"stdver\">\n");
        out.push_str("  <tr><th>Field</th><th>Id</th><th>Value</th></tr>\n");
        for (tag, value) in &rows {
            out.push_str(&format!(
                "  <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                tag.title(),
                tag.letter(),
                value
            ));
        }
        out.push_str("</table>\n");
        return out;
    }

    let name_w = rows
        .iter()
        .map(|(tag, _)| tag.title().len())
        .chain(["Field".len()])
        .max()
        .unwrap_or_default();
    let value_w = rows
        .iter()
        .map(|(_, value)| value.len())
        .chain(["Value".len()])
        .max()
        .unwrap_or_default();

    // Pad before styling so escape sequences do not disturb alignment.
    let header = format!("{:<name_w$}  Id  Value", "Field");
    let rule = format!("{}  --  {}", "-".repeat(name_w), "-".repeat(value_w));
    let mut out = match markup {
        Markup::Ansi => format!("{BOLD}{header}{RESET}\n{rule}\n"),
        _ => format!("{header}\n{rule}\n"),
    };
    for (tag, value) in &rows {
        out.push_str(&format!(
            "{:<name_w$}  {:<2}  {}\n",
            tag.title(),
            tag.letter(),
            markup.value(value)
        ));
    }
    out
}

// --- helpers -----------------------------------------------------------------

/// 1st, 2nd, 3rd, then Nth for everything else (including 11, 12, 13, 21, ...).
fn ordinal(n: u128) -> String {
    match n {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        _ => format!("{n}th"),
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Alpha => "alpha release",
        Phase::Beta => "beta release",
        Phase::Candidate => "release candidate",
        Phase::Release => "final release",
    }
}

// --- tests -------------------------------------------------------------------
