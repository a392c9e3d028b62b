//! Character folding
//!
//! Maps accented Latin characters to their unaccented base letter so that
//! dictionary words and the letters in a hand compare equal regardless of
//! diacritics.

/// Standard diacritic table: accented character to base character
///
/// No target is itself a key, which keeps folding idempotent.
pub const DIACRITICS: &[(char, char)] = &[
    ('À', 'A'),
    ('Á', 'A'),
    ('Â', 'A'),
    ('Ã', 'A'),
    ('Ä', 'A'),
    ('à', 'a'),
    ('á', 'a'),
    ('â', 'a'),
    ('ã', 'a'),
    ('ä', 'a'),
    ('ª', 'A'),
    ('È', 'E'),
    ('É', 'E'),
    ('Ê', 'E'),
    ('Ë', 'E'),
    ('è', 'e'),
    ('é', 'e'),
    ('ê', 'e'),
    ('ë', 'e'),
    ('Í', 'I'),
    ('Ì', 'I'),
    ('Î', 'I'),
    ('Ï', 'I'),
    ('í', 'i'),
    ('ì', 'i'),
    ('î', 'i'),
    ('ï', 'i'),
    ('Ò', 'O'),
    ('Ó', 'O'),
    ('Ô', 'O'),
    ('Õ', 'O'),
    ('Ö', 'O'),
    ('ò', 'o'),
    ('ó', 'o'),
    ('ô', 'o'),
    ('õ', 'o'),
    ('ö', 'o'),
    ('º', 'O'),
    ('Ù', 'U'),
    ('Ú', 'U'),
    ('Û', 'U'),
    ('Ü', 'U'),
    ('ù', 'u'),
    ('ú', 'u'),
    ('û', 'u'),
    ('ü', 'u'),
    ('Ñ', 'N'),
    ('ñ', 'n'),
    ('Ç', 'C'),
    ('ç', 'c'),
    ('§', 'S'),
    ('³', '3'),
    ('²', '2'),
    ('¹', '1'),
];

/// Folds characters through a fixed lookup table
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    table: &'static [(char, char)],
}

impl Normalizer {
    /// Create a normalizer over a custom table
    #[must_use]
    pub const fn new(table: &'static [(char, char)]) -> Self {
        Self { table }
    }

    /// Fold a single character
    ///
    /// Characters without a table entry are returned unchanged.
    #[inline]
    #[must_use]
    pub fn fold_char(&self, ch: char) -> char {
        self.table
            .iter()
            .find(|&&(from, _)| from == ch)
            .map_or(ch, |&(_, to)| to)
    }

    /// Fold every character of `text`
    ///
    /// # Examples
    /// ```
    /// use grumble::core::Normalizer;
    ///
    /// let normalizer = Normalizer::default();
    /// assert_eq!(normalizer.fold("Crème brûlée"), "Creme brulee");
    /// ```
    #[must_use]
    pub fn fold(&self, text: &str) -> String {
        text.chars().map(|c| self.fold_char(c)).collect()
    }

    /// Fold then lowercase
    ///
    /// Folding first means table entries with an uppercase target (`ª`, `º`, `§`)
    /// still come out lowercase.
    #[must_use]
    pub fn fold_lowercase(&self, text: &str) -> String {
        self.fold(text).to_lowercase()
    }

    /// Canonical form of a raw dictionary line
    ///
    /// Removes hyphens, trims surrounding whitespace, folds and lowercases.
    #[must_use]
    pub fn candidate(&self, line: &str) -> String {
        let without_hyphens = line.replace('-', "");
        self.fold_lowercase(without_hyphens.trim())
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DIACRITICS)
    }
}

/// Fold `text` with the standard table
#[must_use]
pub fn normalize(text: &str) -> String {
    Normalizer::default().fold(text)
}

/// Canonical form of a dictionary line with the standard table
#[must_use]
pub fn normalize_candidate(line: &str) -> String {
    Normalizer::default().candidate(line)
}
