// std imports
use std::path::PathBuf;

// third-party imports
use clap::{Parser, ValueEnum};

// local imports
use crate::settings;

// ---

/// Filter names by glob-style wildcard patterns.
///
/// Reads names, one per line, and prints those matching PATTERN.
/// The only wildcard is '*', which matches any sequence of characters.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Pattern to match, in multiple mode a list of patterns separated by spaces.
    #[arg(name = "PATTERN")]
    pub pattern: String,

    /// Files to process, '-' means stdin.
    #[arg(name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Matching mode [default: from configuration].
    #[arg(long, short = 'm', env = "STRMATCH_MODE", overrides_with = "mode")]
    #[arg(value_enum)]
    pub mode: Option<MatchMode>,

    /// Print names that do not match.
    #[arg(long, short = 'v', overrides_with = "invert_match")]
    pub invert_match: bool,

    /// Print only the number of selected names.
    #[arg(long, short = 'c', overrides_with = "count")]
    pub count: bool,

    /// Never select names matching any of the space-separated patterns, can be specified multiple times.
    #[arg(long, short = 'x', number_of_values = 1)]
    pub exclude: Vec<String>,

    /// Print whether PATTERN contains wildcards and exit.
    #[arg(long)]
    pub has_wildcards: bool,

    /// Configuration file path, can be specified multiple times, use '-' to disable loading of default configuration files.
    #[arg(long, value_name = "FILE", number_of_values = 1)]
    pub config: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Single,
    Multiple,
}

impl From<MatchMode> for settings::Mode {
    fn from(mode: MatchMode) -> Self {
        match mode {
            MatchMode::Single => Self::Single,
            MatchMode::Multiple => Self::Multiple,
        }
    }
}

/// Splits `--config` values into files to load and whether default files are disabled.
///
/// An empty value or '-' disables default files and drops everything specified before it.
pub fn config_files(config: &[String]) -> (&[String], bool) {
    let (offset, no_default) = config
        .iter()
        .rposition(|x| x.is_empty() || x == "-")
        .map(|x| (x + 1, true))
        .unwrap_or_default();
    (&config[offset..], no_default)
}
