//! Dictionary search against a letter pool

use crate::core::{LetterPool, Normalizer, STANDARD, ScoreError, ScoreTable};
use crate::wordlists::{SourceError, WordSource};
use std::fmt;

/// A dictionary word that can be built from the pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Normalized word
    pub word: String,
    pub score: u32,
}

impl Match {
    /// Word length in characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (score: {})", self.word, self.score)
    }
}

/// Error type for a search pass
#[derive(Debug)]
pub enum SearchError {
    /// The dictionary could not be opened or read
    Source(SourceError),
    /// A matched word had a character the score table does not cover
    Score { word: String, source: ScoreError },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(err) => write!(f, "{err}"),
            Self::Score { word, source } => {
                write!(f, "Cannot score '{word}': {source}")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(err) => std::error::Error::source(err),
            Self::Score { source, .. } => Some(source),
        }
    }
}

impl From<SourceError> for SearchError {
    fn from(err: SourceError) -> Self {
        Self::Source(err)
    }
}

/// Finds every dictionary word buildable from a pool of letters
///
/// Holds no state between searches; each call makes a fresh pass over the source.
pub struct SearchEngine<S: WordSource> {
    source: S,
    normalizer: Normalizer,
    table: ScoreTable,
}

impl<S: WordSource> SearchEngine<S> {
    /// Create an engine with the standard diacritic and score tables
    pub fn new(source: S) -> Self {
        Self::with_tables(source, Normalizer::default(), STANDARD)
    }

    /// Create an engine with custom tables
    pub const fn with_tables(source: S, normalizer: Normalizer, table: ScoreTable) -> Self {
        Self {
            source,
            normalizer,
            table,
        }
    }

    /// Collect every word in the source that the pool can form
    ///
    /// Candidates are normalized (hyphens removed, trimmed, folded, lowercased),
    /// filtered by letter availability and by `min_length` characters, then
    /// scored. Matches keep dictionary order and are not de-duplicated.
    ///
    /// # Errors
    /// Returns `SearchError::Source` if the dictionary cannot be opened or read,
    /// and `SearchError::Score` if a matched word contains a character outside
    /// `a`-`z` (only possible when the pool itself holds such characters).
    ///
    /// # Examples
    /// ```
    /// use grumble::core::LetterPool;
    /// use grumble::search::SearchEngine;
    /// use grumble::wordlists::MemorySource;
    ///
    /// let engine = SearchEngine::new(MemorySource::from_words(&["exams", "text", "axe"]));
    /// let matches = engine.search(&LetterPool::new("AXTMES"), 5).unwrap();
    ///
    /// assert_eq!(matches.len(), 1);
    /// assert_eq!(matches[0].word, "exams");
    /// assert_eq!(matches[0].score, 15);
    /// ```
    pub fn search(&self, pool: &LetterPool, min_length: usize) -> Result<Vec<Match>, SearchError> {
        let mut matches = Vec::new();
        let mut scanned = 0_usize;

        for line in self.source.words()? {
            let line = line?;
            scanned += 1;

            let candidate = self.normalizer.candidate(&line);

            if !pool.contains_all(&candidate) || !pool.can_form(&candidate) {
                continue;
            }

            if candidate.chars().count() < min_length {
                continue;
            }

            let score = self
                .table
                .score(&candidate)
                .map_err(|source| SearchError::Score {
                    word: candidate.clone(),
                    source,
                })?;

            matches.push(Match {
                word: candidate,
                score,
            });
        }

        tracing::debug!(
            pool = pool.normalized(),
            min_length,
            scanned,
            matched = matches.len(),
            "search pass complete"
        );

        Ok(matches)
    }
}
