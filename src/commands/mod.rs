//! Command implementations

pub mod search;

pub use search::{
    CommandError, DEFAULT_MIN_LENGTH, DEFAULT_TOP, SearchConfig, SearchReport, display_letters,
    parse_min_length, rank, resolve_dictionary, run_search,
};
