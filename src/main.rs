//! Grumble - CLI
//!
//! Finds the best-scoring dictionary words that can be spelled from a hand of letters.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use grumble::{
    commands::{
        CommandError, DEFAULT_TOP, SearchConfig, display_letters, parse_min_length,
        resolve_dictionary, run_search,
    },
    output::{print_search_header, print_search_result},
    search::SearchEngine,
    wordlists::FileSource,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const USAGE_EXAMPLE: &str = "\
Example:
  Find words made of the letters A, X, T, M, E and S:
    grumble -l AXTMES

  Allow shorter words:
    grumble -l AXTMES --min-size 3";

#[derive(Parser)]
#[command(
    name = "grumble",
    about = "Find the best-scoring dictionary words you can spell with your letters",
    version,
    author,
    after_help = USAGE_EXAMPLE
)]
struct Cli {
    /// Letters in your hand, e.g. AXTMES (accents allowed)
    #[arg(short, long)]
    letters: String,

    /// Minimum word length (default 5; unreadable values fall back to 5)
    #[arg(
        short = 'm',
        long = "min-size",
        alias = "min_size",
        allow_hyphen_values = true
    )]
    min_size: Option<String>,

    /// Number of best matches to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP)]
    top: usize,

    /// Dictionary file, one word per line (default: data/gutenberg.txt)
    #[arg(short, long, env = "GRUMBLE_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("grumble=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SearchConfig {
        letters: cli.letters,
        min_length: parse_min_length(cli.min_size.as_deref()),
        top: cli.top,
    };

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let dictionary = resolve_dictionary(cli.dictionary.as_deref(), exe_dir.as_deref());

    let engine = SearchEngine::new(FileSource::new(&dictionary));

    print_search_header(&display_letters(&config.letters));

    let report = match run_search(&config, &engine) {
        Ok(report) => report,
        Err(CommandError::Letters(err)) => {
            Cli::command().error(ErrorKind::InvalidValue, err).exit()
        }
        Err(err) => {
            return Err(err).with_context(|| {
                format!("Search with dictionary {} failed", dictionary.display())
            });
        }
    };

    print_search_result(&report);
    Ok(())
}
