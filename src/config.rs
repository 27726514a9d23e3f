// std imports
use std::path::PathBuf;

// local imports
use crate::{
    appdirs::AppDirs,
    error::Result,
    settings::{Settings, Source, SourceFile},
};

// ---

pub const APP_NAME: &str = "strmatch";
pub const ENV_CONFIG: &str = "STRMATCH_CONFIG";

/// Returns a loader for the given configuration files layered on top of the default ones.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    Loader::new(paths.into_iter().map(Into::into).collect())
}

/// Returns application directories, if they can be determined on this platform.
pub fn app_dirs() -> Option<AppDirs> {
    AppDirs::new(APP_NAME)
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            no_default: false,
        }
    }

    /// Disables loading of the user configuration file and the one named by the environment.
    pub fn no_default(self, no_default: bool) -> Self {
        Self { no_default, ..self }
    }

    pub fn load(self) -> Result<Settings> {
        Settings::load(self.sources())
    }

    fn sources(&self) -> Vec<Source> {
        let mut sources = Vec::new();

        if !self.no_default {
            match app_dirs() {
                Some(dirs) => {
                    let filename = dirs.config_dir.join("config");
                    sources.push(Source::File(SourceFile::new(filename).required(false)));
                }
                None => log::debug!("no configuration directory detected"),
            }

            if let Ok(filename) = std::env::var(ENV_CONFIG) {
                if !filename.is_empty() {
                    sources.push(Source::File(SourceFile::new(filename).required(false)));
                }
            }
        }

        sources.extend(self.paths.iter().map(|path| Source::File(SourceFile::new(path.clone()))));

        sources
    }
}

#[cfg(test)]
mod tests;
