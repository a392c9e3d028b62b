//! Word source implementations
//!
//! [`FileSource`] streams a dictionary from disk on every pass.
//! [`MemorySource`] holds the lines in memory, either loaded once from a file
//! or built from a slice of words.

use super::{SourceError, WordSource};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use std::slice;

/// Dictionary read lazily from a file
///
/// # Examples
/// ```no_run
/// use grumble::wordlists::{FileSource, WordSource};
///
/// let source = FileSource::new("data/gutenberg.txt");
/// for line in source.words().unwrap() {
///     println!("{}", line.unwrap());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One pass over a dictionary file
///
/// Owns the open file; the handle is closed when the iterator is dropped.
pub struct FileWords<'a> {
    path: &'a Path,
    lines: Lines<BufReader<File>>,
}

impl Iterator for FileWords<'_> {
    type Item = Result<String, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| {
            line.map_err(|source| SourceError::Read {
                path: self.path.to_path_buf(),
                source,
            })
        })
    }
}

impl WordSource for FileSource {
    type Words<'a>
        = FileWords<'a>
    where
        Self: 'a;

    fn words(&self) -> Result<Self::Words<'_>, SourceError> {
        let file = File::open(&self.path).map_err(|source| SourceError::Unavailable {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "opened dictionary");

        Ok(FileWords {
            path: &self.path,
            lines: BufReader::new(file).lines(),
        })
    }
}

/// Dictionary held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySource {
    lines: Vec<String>,
}

impl MemorySource {
    /// Read a whole dictionary file once and keep its lines
    ///
    /// # Errors
    /// Returns `SourceError` if the file cannot be opened or read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let file = FileSource::new(path.as_ref());
        let lines = file.words()?.collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(
            path = %path.as_ref().display(),
            lines = lines.len(),
            "cached dictionary in memory"
        );

        Ok(Self { lines })
    }

    /// Build a dictionary from a list of words
    ///
    /// # Examples
    /// ```
    /// use grumble::wordlists::MemorySource;
    ///
    /// let source = MemorySource::from_words(&["exams", "baa"]);
    /// assert_eq!(source.len(), 2);
    /// ```
    #[must_use]
    pub fn from_words(words: &[&str]) -> Self {
        Self {
            lines: words.iter().map(|&w| w.to_string()).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One pass over an in-memory dictionary
pub struct MemoryWords<'a> {
    lines: slice::Iter<'a, String>,
}

impl Iterator for MemoryWords<'_> {
    type Item = Result<String, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().cloned().map(Ok)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lines.size_hint()
    }
}

impl WordSource for MemorySource {
    type Words<'a>
        = MemoryWords<'a>
    where
        Self: 'a;

    fn words(&self) -> Result<Self::Words<'_>, SourceError> {
        Ok(MemoryWords {
            lines: self.lines.iter(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn dictionary(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn collect<S: WordSource>(source: &S) -> Vec<String> {
        source
            .words()
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn file_source_yields_lines_in_order() {
        let file = dictionary("exams\nbaa\nété\n");
        let source = FileSource::new(file.path());

        assert_eq!(collect(&source), vec!["exams", "baa", "été"]);
    }

    #[test]
    fn file_source_is_restartable() {
        let file = dictionary("one\ntwo\n");
        let source = FileSource::new(file.path());

        let first = collect(&source);
        let second = collect(&source);
        assert_eq!(first, second);
    }

    #[test]
    fn file_source_sees_changes_between_passes() {
        let mut file = dictionary("one\n");
        let source = FileSource::new(file.path());
        assert_eq!(collect(&source).len(), 1);

        file.write_all(b"two\n").unwrap();
        file.flush().unwrap();
        assert_eq!(collect(&source), vec!["one", "two"]);
    }

    #[test]
    fn file_source_empty_file() {
        let file = dictionary("");
        let source = FileSource::new(file.path());
        assert!(collect(&source).is_empty());
    }

    #[test]
    fn file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.txt"));

        let result = source.words();
        assert!(matches!(result, Err(SourceError::Unavailable { .. })));
    }

    #[test]
    fn file_source_invalid_utf8_is_read_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"good\n\xff\xfe\n").unwrap();
        file.flush().unwrap();
        let source = FileSource::new(file.path());

        let lines: Vec<_> = source.words().unwrap().collect();
        assert!(lines[0].is_ok());
        assert!(matches!(lines[1], Err(SourceError::Read { .. })));
    }

    #[test]
    fn memory_source_matches_file_source() {
        let file = dictionary("porte-monnaie\nÉté\n\nexams\n");
        let streamed = FileSource::new(file.path());
        let cached = MemorySource::load(file.path()).unwrap();

        assert_eq!(cached.len(), 4);
        assert_eq!(collect(&cached), collect(&streamed));
    }

    #[test]
    fn memory_source_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = MemorySource::load(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(SourceError::Unavailable { .. })));
    }

    #[test]
    fn memory_source_from_words() {
        let source = MemorySource::from_words(&["crane", "slate"]);
        assert_eq!(collect(&source), vec!["crane", "slate"]);
        assert_eq!(collect(&source), vec!["crane", "slate"]);
    }

    #[test]
    fn memory_source_empty() {
        let source = MemorySource::from_words(&[]);
        assert!(source.is_empty());
        assert!(collect(&source).is_empty());
    }
}
