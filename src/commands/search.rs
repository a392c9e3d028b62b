//! Search command
//!
//! Runs one dictionary search and ranks the matches for display.

use crate::core::{LetterPool, PoolError};
use crate::search::{Match, SearchEngine, SearchError};
use crate::wordlists::{DEFAULT_DICTIONARY, WordSource};
use std::fmt;
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Minimum word length used when none (or an unparseable one) is given
pub const DEFAULT_MIN_LENGTH: usize = 5;

/// Number of matches shown by default
pub const DEFAULT_TOP: usize = 10;

/// Configuration for a search run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub letters: String,
    pub min_length: usize,
    pub top: usize,
}

impl SearchConfig {
    #[must_use]
    pub const fn new(letters: String) -> Self {
        Self {
            letters,
            min_length: DEFAULT_MIN_LENGTH,
            top: DEFAULT_TOP,
        }
    }
}

/// Error type for the search command
#[derive(Debug)]
pub enum CommandError {
    /// The letters given cannot be searched
    Letters(PoolError),
    /// The search itself failed
    Search(SearchError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letters(err) => write!(f, "Invalid letters: {err}"),
            Self::Search(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Letters(err) => Some(err),
            Self::Search(err) => std::error::Error::source(err),
        }
    }
}

/// Result of a search run
#[derive(Debug)]
pub struct SearchReport {
    /// Letters as typed, uppercased for display
    pub letters: Vec<char>,
    pub min_length: usize,
    /// Number of matches before truncation
    pub total_matches: usize,
    /// Best matches, highest score first
    pub top: Vec<Match>,
    pub duration: Duration,
}

impl SearchReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }

    /// Highest score among the reported matches
    #[must_use]
    pub fn best_score(&self) -> Option<u32> {
        self.top.first().map(|m| m.score)
    }
}

/// Search the engine's dictionary and keep the best `config.top` matches
///
/// Matches are sorted by score, highest first; equal scores keep dictionary order.
///
/// # Errors
///
/// Returns an error if:
/// - The letters contain something other than (possibly accented) letters
/// - The dictionary cannot be opened or read
pub fn run_search<S: WordSource>(
    config: &SearchConfig,
    engine: &SearchEngine<S>,
) -> Result<SearchReport, CommandError> {
    let pool = LetterPool::parse(&config.letters).map_err(CommandError::Letters)?;

    let start = Instant::now();
    let mut matches = engine
        .search(&pool, config.min_length)
        .map_err(CommandError::Search)?;
    let duration = start.elapsed();

    let total_matches = matches.len();
    rank(&mut matches);
    matches.truncate(config.top);

    Ok(SearchReport {
        letters: display_letters(&config.letters),
        min_length: config.min_length,
        total_matches,
        top: matches,
        duration,
    })
}

/// Letters as shown to the user: uppercased, whitespace removed
#[must_use]
pub fn display_letters(letters: &str) -> Vec<char> {
    letters
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Sort matches by score, highest first, keeping dictionary order for ties
pub fn rank(matches: &mut [Match]) {
    matches.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Interpret a minimum length argument leniently
///
/// Anything that is not an integer falls back to [`DEFAULT_MIN_LENGTH`];
/// negative values admit every length. Integers too large to represent
/// saturate, so they still filter out every word.
///
/// # Examples
/// ```
/// use grumble::commands::parse_min_length;
///
/// assert_eq!(parse_min_length(Some("3")), 3);
/// assert_eq!(parse_min_length(Some("three")), 5);
/// assert_eq!(parse_min_length(Some("-2")), 0);
/// assert_eq!(parse_min_length(None), 5);
/// ```
#[must_use]
pub fn parse_min_length(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_MIN_LENGTH;
    };

    match raw.trim().parse::<i64>() {
        Ok(value) => usize::try_from(value).unwrap_or(0),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => usize::MAX,
        Err(err) if *err.kind() == IntErrorKind::NegOverflow => 0,
        Err(_) => {
            tracing::warn!(
                value = raw,
                default = DEFAULT_MIN_LENGTH,
                "invalid minimum length, using default"
            );
            DEFAULT_MIN_LENGTH
        }
    }
}

/// Pick the dictionary path
///
/// An explicit path wins. Otherwise the default dictionary next to the
/// executable is used when it exists, falling back to the working directory.
#[must_use]
pub fn resolve_dictionary(explicit: Option<&Path>, exe_dir: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "using dictionary from arguments");
        return path.to_path_buf();
    }

    if let Some(dir) = exe_dir {
        let beside_exe = dir.join(DEFAULT_DICTIONARY);
        if beside_exe.is_file() {
            tracing::debug!(path = %beside_exe.display(), "using dictionary next to executable");
            return beside_exe;
        }
    }

    tracing::debug!(path = DEFAULT_DICTIONARY, "using dictionary from working directory");
    PathBuf::from(DEFAULT_DICTIONARY)
}
