//! Dictionary word sources
//!
//! A word source yields the raw lines of a dictionary, one candidate per line,
//! in order. Every call to [`WordSource::words`] starts a fresh pass.

pub mod loader;

use std::fmt;
use std::io;
use std::path::PathBuf;

pub use loader::{FileSource, MemorySource};

/// Default dictionary location, relative to the executable or working directory
pub const DEFAULT_DICTIONARY: &str = "data/gutenberg.txt";

/// Error type for reading a dictionary
#[derive(Debug)]
pub enum SourceError {
    /// The dictionary could not be opened
    Unavailable { path: PathBuf, source: io::Error },
    /// A line could not be read after opening
    Read { path: PathBuf, source: io::Error },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { path, .. } => {
                write!(f, "Dictionary not available at {}", path.display())
            }
            Self::Read { path, .. } => {
                write!(f, "Failed to read dictionary {}", path.display())
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unavailable { source, .. } | Self::Read { source, .. } => Some(source),
        }
    }
}

/// A restartable supplier of dictionary lines
pub trait WordSource {
    /// Iterator over one pass of the dictionary
    type Words<'a>: Iterator<Item = Result<String, SourceError>>
    where
        Self: 'a;

    /// Start a new pass from the first line
    ///
    /// # Errors
    /// Returns `SourceError::Unavailable` if the underlying resource cannot be opened.
    fn words(&self) -> Result<Self::Words<'_>, SourceError>;
}
