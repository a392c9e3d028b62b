//! Word search
//!
//! Scans a dictionary for words that a hand of letters can spell.

mod engine;

pub use engine::{Match, SearchEngine, SearchError};
