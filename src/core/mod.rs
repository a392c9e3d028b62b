//! Core matching and scoring types
//!
//! Character folding, letter pools with multiset containment, and letter scores.
//! Everything here is pure and independent of where words come from.

mod letters;
mod normalize;
mod score;

pub use letters::{LetterPool, PoolError, char_counts, is_sub_multiset};
pub use normalize::{DIACRITICS, Normalizer, normalize, normalize_candidate};
pub use score::{STANDARD, ScoreError, ScoreTable};
