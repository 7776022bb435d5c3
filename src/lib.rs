//! Dead simple tweet generation using a first order Markov chain.
//!
//! A corpus is read once into a [`Dictionary`] of unique words, each remembering which words
//! followed it and how often. A [`Generator`] then starts a sentence at a random word (every word
//! not ending in a full stop is equally likely), and keeps appending successors, weighted by how
//! often they followed the previous word, until a word ending in a full stop comes up or the
//! sentence is [`MAX_WORDS_IN_SENTENCE`] words long.
//!
//! ```
//! use rand::SeedableRng;
//! use tweetish::{Dictionary, Generator, TweetRng};
//!
//! let mut db = Dictionary::builder();
//! db.feed_str("the cat sat. the dog ran.").unwrap();
//! let dict = db.build();
//!
//! let mut generator = Generator::new(&dict, TweetRng::seed_from_u64(42));
//! let tweet = generator.generate_sentence().unwrap().to_string();
//! assert!(tweet.ends_with("sat.") || tweet.ends_with("ran."));
//! ```
//!
//! # Features
//!
//! `tweetish` comes with some features that you can disable (or enable) at will. They are:
//!
//! - `small_rng` - Uses [`rand::rngs::SmallRng`] as [`TweetRng`]. Should be faster, but the
//! output for a given seed may differ between platforms and `rand` releases. Without it,
//! [`rand_chacha::ChaCha8Rng`] is used, which is reproducible everywhere.
//! - `inline-more` - Enables the `hashbrown` feature of the same name for the word lookup.
//! Enabled by default.

use std::io::{BufRead, Write};

use rand::SeedableRng;

pub mod builder;
pub mod dictionary;
pub mod error;
pub mod generator;
pub mod selection;
pub mod token;

pub use builder::{DictionaryBuilder, WordLimit};
pub use dictionary::{Dictionary, ReleaseSummary, SuccessorEdge, Word, WordId};
pub use error::{Error, Result};
pub use generator::{Generator, Sentence, MAX_WORDS_IN_SENTENCE};

/// The random source used by [`make_tweets()`].
#[cfg(not(feature = "small_rng"))]
pub type TweetRng = rand_chacha::ChaCha8Rng;

/// The random source used by [`make_tweets()`].
#[cfg(feature = "small_rng")]
pub type TweetRng = rand::rngs::SmallRng;

/// Everything a run needs besides the corpus itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Seeds the random source, once per run.
    pub seed: u64,
    /// How many tweets to generate.
    pub sentence_count: usize,
    /// How many tokens of the corpus to read.
    pub word_limit: WordLimit,
}

/// What a [`make_tweets()`] run produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of tweets written.
    pub tweets: usize,
    /// What was reclaimed when the dictionary was released at the end of the run.
    pub released: ReleaseSummary,
}

/// Reads a corpus from `input` and writes `config.sentence_count` tweets to `output`, one per
/// line, as `Tweet <n>: <words>`. The dictionary is released once everything is written.
///
/// ```
/// # use std::io::Cursor;
/// # use tweetish::{make_tweets, Config};
/// let config = Config {
///     seed: 7,
///     sentence_count: 2,
///     ..Default::default()
/// };
/// let mut out = Vec::new();
/// let summary = make_tweets(&config, Cursor::new("hello world."), &mut out).unwrap();
/// assert_eq!(summary.tweets, 2);
/// assert_eq!(summary.released.words, 2);
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Tweet 1: hello world.\nTweet 2: hello world.\n"
/// );
/// ```
pub fn make_tweets(
    config: &Config,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<RunSummary> {
    let rng = TweetRng::seed_from_u64(config.seed);

    let mut db = DictionaryBuilder::with_limit(config.word_limit);
    db.feed_reader(input)?;
    let dictionary = db.build();

    log::debug!(
        "generating {} tweets with seed {}",
        config.sentence_count,
        config.seed
    );
    let mut generator = Generator::new(&dictionary, rng);
    for n in 1..=config.sentence_count {
        let sentence = generator.generate_sentence()?;
        writeln!(output, "Tweet {n}: {sentence}")?;
    }
    output.flush()?;

    Ok(RunSummary {
        tweets: config.sentence_count,
        released: dictionary.release(),
    })
}
