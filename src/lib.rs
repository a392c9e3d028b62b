//! Grumble
//!
//! Finds every dictionary word that can be spelled from a hand of letters,
//! respecting how many of each letter are available, and ranks them by letter score.
//!
//! # Quick Start
//!
//! ```rust
//! use grumble::core::LetterPool;
//! use grumble::search::SearchEngine;
//! use grumble::wordlists::MemorySource;
//!
//! let engine = SearchEngine::new(MemorySource::from_words(&["baa", "bab", "été"]));
//!
//! // Two A's are available, only one B
//! let matches = engine.search(&LetterPool::new("AAB"), 1).unwrap();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].word, "baa");
//! ```

// Core domain types
pub mod core;

// Dictionary search
pub mod search;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
