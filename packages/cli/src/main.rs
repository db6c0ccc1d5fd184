//! `stdver` — Standard Versioning command-line interface.
//!
//! Provides four subcommands on top of the `stdver` codec:
//!
//! - **`bump`** (alias `modify`) — bump one field and/or set fields explicitly.
//! - **`explain`** — describe an identifier as text, a table, JSON or YAML.
//! - **`hash`** — compute the content-hash tag (H field) of files or stdin.
//! - **`version`** — print program information.
//!
//! Every failure is reported on stderr and exits with status 1.
//!
//! # Environment variables
//!
//! | Variable | Flag | Default |
//! |----------|------|---------|
//! | `STDVER_LEVEL` | `bump --level` | `1` |
//! | `STDVER_DATE` | `bump --date` | today's local date |
//! | `STDVER_FORMAT` | `explain --format` | `text` |
//! | `STDVER_MARKUP` | `explain --markup` | `plain` |
//! | `STDVER_LOG` | — | `warn` (tracing filter directives) |

use std::fmt::Display;
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use chrono::Datelike;
use clap::{Parser, Subcommand};
use stdver::{
    ContentHasher, FieldTag, Format, Level, Markup, ModifyOptions, SnapshotDate,
};
use tracing::debug;

const EXAMPLES: &str = "\
Examples:
  $ stdver help
  $ stdver version
  $ stdver bump -p N 1.2.3
  $ stdver bump -p D -s S=EA 1.2a3
  $ stdver explain -f table 1.2a3.20230801+ABCD-XA
  $ stdver hash src/*.rs";

/// stdver — Standard Versioning CLI
///
/// Bump, explain and hash Standard Versioning identifiers.
#[derive(Parser)]
#[command(name = "stdver", version, about, long_about = None, after_help = EXAMPLES)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bump one part of an identifier and print the result.
    ///
    /// Bumping a coarse part resets the finer ones: M and N restart the
    /// revision (and phase), and any change to M, N, p or R drops the
    /// snapshot date and content hash. Explicit `--set` values are applied
    /// afterwards and bypass these resets.
    #[command(visible_alias = "modify")]
    Bump {
        /// Standard Versioning identifier to change.
        version: String,

        /// Part to bump: M, N, p, R, D, H or S.
        #[arg(short = 'p', long, value_name = "PART", default_value = "R")]
        part: FieldTag,

        /// Scheme level: 0 (M.N.R), 1 (M.NpR) or 2 (M.NpR.D+H-S).
        #[arg(
            short = 'l',
            long,
            env = "STDVER_LEVEL",
            default_value_t = 1,
            value_parser = clap::value_parser!(u8).range(0..=2)
        )]
        level: u8,

        /// Assign a part explicitly. Repeat for several parts: -s S=GA -s H=BEEF.
        /// An empty value removes D, H or S.
        #[arg(short = 's', long = "set", value_name = "PART=VALUE", value_parser = parse_assignment)]
        set: Vec<(FieldTag, String)>,

        /// Date used when bumping D, as YYYYMMDD. Defaults to today.
        #[arg(short = 'd', long, env = "STDVER_DATE", value_name = "YYYYMMDD")]
        date: Option<SnapshotDate>,

        /// Only apply `--set` values; do not bump any part.
        #[arg(long, conflicts_with = "part")]
        no_bump: bool,
    },

    /// Explain the parts of an identifier.
    Explain {
        /// Standard Versioning identifier to explain.
        version: String,

        /// Output format: text | table | json | yaml
        #[arg(short = 'f', long, env = "STDVER_FORMAT", default_value = "text")]
        format: Format,

        /// Markup: plain | ansi | html (json and yaml support plain only)
        #[arg(short = 'm', long, env = "STDVER_MARKUP", default_value = "plain")]
        markup: Markup,
    },

    /// Compute the content-hash tag (H) of files.
    ///
    /// The files are hashed as one concatenated stream, in the order given.
    /// With no FILE, or when FILE is `-`, standard input is read.
    Hash {
        /// Files to hash.
        files: Vec<PathBuf>,
    },

    /// Print version and license information.
    Version,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("STDVER_LOG")
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Bump {
            version,
            part,
            level,
            set,
            date,
            no_bump,
        } => {
            let level = Level::try_from(level).unwrap_or_else(|e| fatal(&e));
            let options = ModifyOptions {
                level,
                bump: (!no_bump).then_some(part),
                set: set.into_iter().collect(),
                today: date.or_else(local_today),
            };
            debug!(?options, "bump {version}");
            let next = stdver::modify(&version, &options).unwrap_or_else(|e| fatal(&e));
            println!("{next}");
        }

        Command::Explain {
            version,
            format,
            markup,
        } => {
            debug!(%format, %markup, "explain {version}");
            let text = stdver::explain(&version, format, markup).unwrap_or_else(|e| fatal(&e));
            if text.ends_with('\n') {
                print!("{text}");
            } else {
                println!("{text}");
            }
        }

        Command::Hash { files } => {
            let mut hasher = ContentHasher::new();
            if files.is_empty() {
                hash_input(&mut hasher, Path::new("-"));
            }
            for file in &files {
                hash_input(&mut hasher, file);
            }
            println!("{}", hasher.finish());
        }

        Command::Version => {
            println!("stdver {}", env!("CARGO_PKG_VERSION"));
            println!("{}", env!("CARGO_PKG_DESCRIPTION"));
            println!("Copyright (c) 2023 {}", env!("CARGO_PKG_AUTHORS"));
            println!(
                "Licensed under {0} <https://spdx.org/licenses/{0}.html>",
                env!("CARGO_PKG_LICENSE")
            );
        }
    }
}

/// Parse a `--set` argument of the form `PART=VALUE`.
fn parse_assignment(s: &str) -> Result<(FieldTag, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid assignment {:?}: expected PART=VALUE", s))?;
    let field = key.parse::<FieldTag>().map_err(|e| e.to_string())?;
    Ok((field, value.to_string()))
}

/// Today's date in the local time zone.
fn local_today() -> Option<SnapshotDate> {
    let today = chrono::Local::now().date_naive();
    let year = u32::try_from(today.year()).ok()?;
    SnapshotDate::from_ymd(year, today.month(), today.day())
}

/// Feed a file, or stdin when the path is `"-"`, into `hasher`.
fn hash_input(hasher: &mut ContentHasher, path: &Path) {
    debug!("hashing {}", path.display());
    let copied = if path.to_str() == Some("-") {
        io::copy(&mut io::stdin().lock(), hasher)
    } else {
        File::open(path).and_then(|mut file| io::copy(&mut file, hasher))
    };
    if let Err(e) = copied {
        fatal(&format!("failed to read {}: {}", path.display(), e));
    }
}

/// Print an error message to stderr and exit with code 1.
fn fatal(msg: &dyn Display) -> ! {
    let line = format!("stdver: ERROR: {msg}");
    if io::stderr().is_terminal() {
        eprintln!("\x1b[31m{line}\x1b[0m");
    } else {
        eprintln!("{line}");
    }
    process::exit(1);
}
