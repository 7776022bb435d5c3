//! Reads a corpus from a file and prints tweets generated from it.
//!
//! Usage: tweetish <SEED> <SENTENCES> <PATH> [WORDS]

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use env_logger::Env;
use log::LevelFilter;

use tweetish::{make_tweets, Config, WordLimit};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate tweets from a text corpus using a Markov chain")]
struct Cli {
    /// Seed for the random generator
    seed: u64,

    /// Number of sentences to generate
    sentences: usize,

    /// Path to the corpus
    path: PathBuf,

    /// Number of words to read from the corpus (0 or absent reads everything)
    words: Option<usize>,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, action = ArgAction::Count)]
    quiet: u8,
}

fn init_logging(verbose: u8, quiet: u8) {
    let level = match (quiet, verbose) {
        (0, 0) => LevelFilter::Warn,
        (0, 1) => LevelFilter::Info,
        (0, 2) => LevelFilter::Debug,
        (0, _) => LevelFilter::Trace,
        (1, _) => LevelFilter::Error,
        _ => LevelFilter::Off,
    };

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if verbose > 0 || quiet > 0 {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = Config {
        seed: cli.seed,
        sentence_count: cli.sentences,
        word_limit: cli.words.map_or(WordLimit::Unbounded, WordLimit::from),
    };

    let file = File::open(&cli.path)
        .with_context(|| format!("could not open the file {}", cli.path.display()))?;
    log::info!("reading corpus from {}", cli.path.display());

    let summary = make_tweets(&config, BufReader::new(file), io::stdout().lock())
        .context("failed to generate tweets")?;
    log::info!(
        "generated {} tweets from {} words",
        summary.tweets,
        summary.released.words
    );

    Ok(())
}
