//! Le Mot - CLI
//!
//! Terminal French word-guessing game: TUI mode by default, a plain
//! line-based mode, and a stats printer.

use anyhow::Result;
use clap::{Parser, Subcommand};
use lemot::{
    commands::{print_stats, run_simple},
    corpus::{WordCorpus, loader::load_from_file},
    interactive::{App, run_tui},
    stats::StatsTracker,
    storage::FileStore,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lemot",
    about = "Terminal French word-guessing game (Wordle rules, AZERTY keyboard)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a custom file (one word per line)
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Directory for saved statistics and preferences (default: ~/.lemot)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Print saved statistics
    Stats,
}

/// Load the corpus based on the -w flag
///
/// With a custom file every word serves as both target and valid guess;
/// the embedded lists keep the target/guess split.
fn load_corpus(wordlist_mode: &str) -> Result<WordCorpus> {
    match wordlist_mode {
        "embedded" => Ok(WordCorpus::embedded()),
        path => {
            let words = load_from_file(path)?;
            Ok(WordCorpus::from_single_list(words))
        }
    }
}

fn default_data_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map_or_else(|| PathBuf::from(".lemot"), |home| PathBuf::from(home).join(".lemot"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let corpus = load_corpus(&cli.wordlist)?;
    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let tracker = StatsTracker::load(FileStore::new(&data_dir));
            let theme_store = FileStore::new(&data_dir);
            let app = App::new(&corpus, tracker, theme_store)?;
            run_tui(app)
        }
        Commands::Simple => {
            let mut tracker = StatsTracker::load(FileStore::new(&data_dir));
            run_simple(&corpus, &mut tracker).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Stats => {
            let tracker = StatsTracker::load(FileStore::new(&data_dir));
            print_stats(tracker.stats());
            Ok(())
        }
    }
}
