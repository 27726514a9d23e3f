// std imports
use std::{
    fmt,
    fs::{self, File},
    io::{self, BufRead, BufReader, stdin},
    path::PathBuf,
};

// local imports
use crate::error::{Error, Result};

// ---

pub type InputStream = Box<dyn BufRead>;

// ---

/// A reference to an input: either stdin or a file.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum InputReference {
    Stdin,
    File(PathBuf),
}

impl InputReference {
    /// Parses a command-line argument, `-` meaning stdin.
    pub fn from_arg(arg: impl Into<PathBuf>) -> Self {
        let path = arg.into();
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }

    /// Opens the input so that missing or unreadable files are reported
    /// before any output is produced.
    pub fn hold(&self) -> Result<Input> {
        let stream: InputStream = match self {
            Self::Stdin => Box::new(BufReader::new(stdin())),
            Self::File(path) => {
                let meta = fs::metadata(path).map_err(|e| self.map_open_error(e))?;
                if meta.is_dir() {
                    return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("{} is a directory", self)).into());
                }
                Box::new(BufReader::new(File::open(path).map_err(|e| self.map_open_error(e))?))
            }
        };

        Ok(Input::new(self.clone(), stream))
    }

    fn map_open_error(&self, e: io::Error) -> Error {
        match (self, e.kind()) {
            (Self::File(path), io::ErrorKind::NotFound) => Error::FileNotFoundError {
                filename: path.to_string_lossy().into(),
            },
            _ => io::Error::new(e.kind(), format!("failed to open {}: {}", self, e)).into(),
        }
    }
}

impl fmt::Display for InputReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::File(path) => write!(f, "file {:?}", path),
        }
    }
}

// ---

/// An opened input.
pub struct Input {
    pub reference: InputReference,
    pub stream: InputStream,
}

impl Input {
    pub fn new(reference: InputReference, stream: InputStream) -> Self {
        Self { reference, stream }
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input").field("reference", &self.reference).finish_non_exhaustive()
    }
}
