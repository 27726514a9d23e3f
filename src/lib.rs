// public modules
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod settings;

// private modules
mod appdirs;

// public uses
pub use app::{App, Options};
pub use settings::{Mode, Settings};
pub use wildcard::{MultiPattern, Pattern, has_wildcards, matches, matches_multiple};
