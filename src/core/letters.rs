//! Letter pool and multiset containment
//!
//! A pool is the hand of letters a player holds. A word can be built from the
//! pool only if each of its letters appears in the pool at least as many times
//! as in the word.

use super::normalize::Normalizer;
use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for an unusable hand of letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Character that does not fold to an ASCII letter
    InvalidLetter(char),
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter(ch) => {
                write!(f, "'{ch}' is not a letter; only letters A-Z (accents allowed) can be searched")
            }
        }
    }
}

impl std::error::Error for PoolError {}

/// Count occurrences of each character
#[must_use]
pub fn char_counts(text: &str) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for ch in text.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

/// Check that `word` uses no character more often than `pool` provides it
///
/// Both arguments are expected to be normalized already.
///
/// # Examples
/// ```
/// use grumble::core::is_sub_multiset;
///
/// assert!(is_sub_multiset("baa", "aab"));
/// assert!(!is_sub_multiset("bab", "aab"));
/// ```
#[must_use]
pub fn is_sub_multiset(word: &str, pool: &str) -> bool {
    counts_fit(&char_counts(word), &char_counts(pool))
}

fn counts_fit(word: &FxHashMap<char, usize>, pool: &FxHashMap<char, usize>) -> bool {
    word.iter()
        .all(|(ch, &needed)| pool.get(ch).copied().unwrap_or(0) >= needed)
}

/// The hand of letters available to form words
///
/// Keeps the letters as given (for display) next to their normalized form and
/// its letter counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    original: Vec<char>,
    normalized: String,
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build a pool from any text, normalizing it with the standard table
    ///
    /// Whitespace is discarded. Any other character is kept as-is after folding,
    /// so this never fails; use [`LetterPool::parse`] to reject non-letters.
    #[must_use]
    pub fn new(letters: &str) -> Self {
        Self::with_normalizer(letters, &Normalizer::default())
    }

    /// Build a pool using a specific normalizer
    #[must_use]
    pub fn with_normalizer(letters: &str, normalizer: &Normalizer) -> Self {
        let original: Vec<char> = letters.chars().filter(|c| !c.is_whitespace()).collect();
        let raw: String = original.iter().collect();
        let normalized = normalizer.fold_lowercase(&raw);
        let counts = char_counts(&normalized);

        Self {
            original,
            normalized,
            counts,
        }
    }

    /// Build a pool, rejecting anything that does not fold to `a`-`z`
    ///
    /// # Errors
    /// Returns `PoolError::InvalidLetter` with the first offending character
    /// as the user typed it.
    ///
    /// # Examples
    /// ```
    /// use grumble::core::LetterPool;
    ///
    /// let pool = LetterPool::parse("AXTMÉS").unwrap();
    /// assert_eq!(pool.normalized(), "axtmes");
    ///
    /// assert!(LetterPool::parse("AB3").is_err());
    /// ```
    pub fn parse(letters: &str) -> Result<Self, PoolError> {
        let normalizer = Normalizer::default();

        for ch in letters.chars().filter(|c| !c.is_whitespace()) {
            let folded = normalizer.fold_char(ch);
            if !folded.is_ascii_alphabetic() {
                return Err(PoolError::InvalidLetter(ch));
            }
        }

        Ok(Self::with_normalizer(letters, &normalizer))
    }

    /// Letters as supplied, without whitespace
    #[inline]
    #[must_use]
    pub fn original(&self) -> &[char] {
        &self.original
    }

    /// Lowercase folded form used for every comparison
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Number of letters in the pool
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.original.len()
    }

    /// Whether the pool holds no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// How many times `ch` is available
    #[inline]
    #[must_use]
    pub fn count_of(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Cheap pre-check: every character of `word` appears in the pool at all
    #[must_use]
    pub fn contains_all(&self, word: &str) -> bool {
        word.chars().all(|ch| self.counts.contains_key(&ch))
    }

    /// Whether `word` can be built from the pool, respecting multiplicity
    #[must_use]
    pub fn can_form(&self, word: &str) -> bool {
        counts_fit(&char_counts(word), &self.counts)
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.original {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_counts_with_duplicates() {
        let counts = char_counts("speed");
        assert_eq!(counts.get(&'s'), Some(&1));
        assert_eq!(counts.get(&'p'), Some(&1));
        assert_eq!(counts.get(&'e'), Some(&2));
        assert_eq!(counts.get(&'d'), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn char_counts_empty() {
        assert!(char_counts("").is_empty());
    }

    #[test]
    fn sub_multiset_respects_multiplicity() {
        assert!(is_sub_multiset("baa", "aab"));
        assert!(!is_sub_multiset("bab", "aab"));
        assert!(is_sub_multiset("exams", "axtmes"));
        assert!(!is_sub_multiset("exxam", "axtmes"));
    }

    #[test]
    fn sub_multiset_rejects_missing_letters() {
        assert!(!is_sub_multiset("z", "abc"));
        assert!(!is_sub_multiset("a", ""));
    }

    #[test]
    fn empty_word_fits_any_pool() {
        assert!(is_sub_multiset("", ""));
        assert!(is_sub_multiset("", "abc"));
    }

    #[test]
    fn pool_normalizes_once() {
        let pool = LetterPool::new("ÉtÉ");
        assert_eq!(pool.normalized(), "ete");
        assert_eq!(pool.original(), &['É', 't', 'É']);
        assert_eq!(pool.count_of('e'), 2);
        assert_eq!(pool.count_of('t'), 1);
        assert_eq!(pool.count_of('z'), 0);
    }

    #[test]
    fn pool_ignores_whitespace() {
        let pool = LetterPool::new(" a b\tc ");
        assert_eq!(pool.normalized(), "abc");
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.to_string(), "abc");
    }

    #[test]
    fn pool_contains_all_is_membership_only() {
        let pool = LetterPool::new("AAB");
        assert!(pool.contains_all("bab"));
        assert!(!pool.can_form("bab"));
        assert!(pool.can_form("baa"));
        assert!(!pool.contains_all("cab"));
    }

    #[test]
    fn parse_accepts_accented_letters() {
        let pool = LetterPool::parse("Ça Ñ").unwrap();
        assert_eq!(pool.normalized(), "can");
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert_eq!(LetterPool::parse("ab3"), Err(PoolError::InvalidLetter('3')));
        assert_eq!(LetterPool::parse("a-b"), Err(PoolError::InvalidLetter('-')));
        assert_eq!(LetterPool::parse("x²"), Err(PoolError::InvalidLetter('²')));
    }

    #[test]
    fn parse_folds_ordinal_indicator_to_letter() {
        let pool = LetterPool::parse("ª").unwrap();
        assert_eq!(pool.normalized(), "a");
    }

    #[test]
    fn empty_pool() {
        let pool = LetterPool::parse("").unwrap();
        assert!(pool.is_empty());
        assert!(pool.can_form(""));
        assert!(!pool.can_form("a"));
    }
}
