//! CLI frontend for the vocab study tool.

mod commands;
mod prompt;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vocab",
    about = "vocab — turn word lists into dictionaries and study them as flashcards",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a dictionary file from a newline-separated word list
    Build {
        /// Path to the word list
        #[arg(short, long)]
        source: PathBuf,

        /// Dictionary file to write (default: the source path)
        #[arg(short, long)]
        dest: Option<PathBuf>,

        /// Merge into the existing dictionary instead of overwriting it
        #[arg(long)]
        append: bool,
    },

    /// Run a multiple-choice flashcard quiz over a dictionary
    Quiz {
        /// Dictionary file (or word list with --from-words)
        path: PathBuf,

        /// Treat PATH as a raw word list and look the words up first
        #[arg(long)]
        from_words: bool,

        /// With --from-words, save the generated dictionary here
        #[arg(long, value_name = "DEST")]
        save: Option<PathBuf>,

        /// Number of flashcards to deal (default: every usable entry)
        #[arg(short = 'n', long)]
        cards: Option<usize>,

        /// Options per flashcard
        #[arg(short = 'k', long, default_value_t = vocab_quiz::DEFAULT_CHOICES)]
        choices: usize,

        /// RNG seed for a reproducible deal and shuffle
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the entries of a dictionary file
    List {
        /// Dictionary file
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            source,
            dest,
            append,
        } => commands::build::run(&source, dest.as_deref(), append),
        Commands::Quiz {
            path,
            from_words,
            save,
            cards,
            choices,
            seed,
        } => commands::quiz::run(&path, from_words, save.as_deref(), cards, choices, seed),
        Commands::List { path } => commands::list::run(&path),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
