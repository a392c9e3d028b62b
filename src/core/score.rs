//! Letter scoring
//!
//! A word scores the sum of its letter values.

use std::fmt;

/// Error type for scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// Character with no entry in the score table
    InvalidCharacter(char),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter(ch) => {
                write!(f, "No score value for character {ch:?}")
            }
        }
    }
}

impl std::error::Error for ScoreError {}

/// Point value of each lowercase ASCII letter, `a` through `z`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTable {
    values: [u32; 26],
}

/// Standard letter values
pub const STANDARD: ScoreTable = ScoreTable::new([
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 10, 1, 2, // a - m
    1, 1, 3, 8, 1, 1, 1, 1, 4, 10, 10, 10, 10, // n - z
]);

impl ScoreTable {
    /// Create a table from values for `a` through `z`
    #[must_use]
    pub const fn new(values: [u32; 26]) -> Self {
        Self { values }
    }

    /// Value of a single letter
    ///
    /// Returns `None` for anything other than `a`-`z`.
    #[inline]
    #[must_use]
    pub fn value(&self, letter: char) -> Option<u32> {
        if letter.is_ascii_lowercase() {
            Some(self.values[(letter as u8 - b'a') as usize])
        } else {
            None
        }
    }

    /// Score a normalized word
    ///
    /// # Errors
    /// Returns `ScoreError::InvalidCharacter` for the first character outside
    /// `a`-`z`. Words must be normalized before scoring.
    ///
    /// # Examples
    /// ```
    /// use grumble::core::STANDARD;
    ///
    /// assert_eq!(STANDARD.score("exams"), Ok(15));
    /// assert!(STANDARD.score("Exams").is_err());
    /// ```
    pub fn score(&self, word: &str) -> Result<u32, ScoreError> {
        word.chars().try_fold(0, |total, ch| {
            self.value(ch)
                .map(|v| total + v)
                .ok_or(ScoreError::InvalidCharacter(ch))
        })
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_values() {
        let expected = [
            ('a', 1),
            ('b', 3),
            ('c', 3),
            ('d', 2),
            ('e', 1),
            ('f', 4),
            ('g', 2),
            ('h', 4),
            ('i', 1),
            ('j', 8),
            ('k', 10),
            ('l', 1),
            ('m', 2),
            ('n', 1),
            ('o', 1),
            ('p', 3),
            ('q', 8),
            ('r', 1),
            ('s', 1),
            ('t', 1),
            ('u', 1),
            ('v', 4),
            ('w', 10),
            ('x', 10),
            ('y', 10),
            ('z', 10),
        ];
        for (letter, value) in expected {
            assert_eq!(STANDARD.value(letter), Some(value), "letter {letter}");
        }
    }

    #[test]
    fn all_values_positive() {
        for letter in 'a'..='z' {
            assert!(STANDARD.value(letter).unwrap() > 0);
        }
    }

    #[test]
    fn score_sums_letters() {
        // e(1) + x(10) + a(1) + m(2) + s(1)
        assert_eq!(STANDARD.score("exams"), Ok(15));
        assert_eq!(STANDARD.score("baa"), Ok(5));
        assert_eq!(STANDARD.score("jazz"), Ok(29));
    }

    #[test]
    fn empty_word_scores_zero() {
        assert_eq!(STANDARD.score(""), Ok(0));
    }

    #[test]
    fn rejects_unnormalized_characters() {
        assert_eq!(STANDARD.score("Abc"), Err(ScoreError::InvalidCharacter('A')));
        assert_eq!(STANDARD.score("été"), Err(ScoreError::InvalidCharacter('é')));
        assert_eq!(STANDARD.score("ab3"), Err(ScoreError::InvalidCharacter('3')));
    }

    #[test]
    fn custom_table() {
        let flat = ScoreTable::new([1; 26]);
        assert_eq!(flat.score("quiz"), Ok(4));
        assert_eq!(ScoreTable::default(), STANDARD);
    }
}
