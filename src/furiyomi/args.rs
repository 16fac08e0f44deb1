use clap::{ArgAction, Parser, Subcommand};
use once_cell::sync::Lazy;
use std::path::PathBuf;

static VERSION: Lazy<String> = Lazy::new(|| {
    const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");
    if IS_RELEASE == "true" || GIT_HASH.is_empty() {
        PKG_VERSION.to_string()
    } else {
        format!("{}@{}", PKG_VERSION, GIT_HASH)
    }
});

#[derive(Parser, Debug)]
#[command(name = "furiyomi", version = VERSION.as_str())]
#[command(about = "Furigana and unknown-word highlighting for Japanese text", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Highlight unknown words in subtitle files (several files: coverage summary)
    #[command(alias = "hl")]
    Highlight {
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,
    },

    /// Add furigana to text (reads stdin when TEXT is omitted)
    #[command(alias = "f")]
    Furigana { text: Option<String> },

    /// Mark a line as known
    Mark { line: String },

    /// Remove a line from the marked lines
    Unmark { line: String },

    /// Study queue operations
    #[command(subcommand)]
    Queue(QueueCommands),

    /// Flashcard operations
    #[command(subcommand)]
    Cards(CardsCommands),

    /// Compare flashcard kanji with a Kanji Study backup (.ksdata)
    Kanji {
        ksdata: PathBuf,

        /// All card expressions, suspended included, one per line
        #[arg(long)]
        all_cards: Option<PathBuf>,
    },

    /// Collection and vocabulary counts
    Stats,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g. mecab.program)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },

    /// Show where data files live
    Paths,
}

#[derive(Subcommand, Debug)]
pub enum QueueCommands {
    /// Number of entries not taken yet
    Count,

    /// Print the next entry and move past it
    Take,

    /// Append a line to the queue
    Add { line: String },

    /// Remove a line from the queue
    #[command(alias = "rm")]
    Remove { line: String },
}

#[derive(Subcommand, Debug)]
pub enum CardsCommands {
    /// Replace the active cards with the expressions in FILE, one per line
    Import { file: PathBuf },
}
