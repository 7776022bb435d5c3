//! See the top level crate documentation for information about the [`Generator`] type.

use std::fmt;

use itertools::Itertools;
use rand::Rng;

use crate::dictionary::{Dictionary, Word};
use crate::error::Result;
use crate::selection::{draw_start_word, draw_successor};

/// A sentence is cut off after this many words, even if it never reached a full stop.
pub const MAX_WORDS_IN_SENTENCE: usize = 20;

/// A generated sentence, borrowing its words from the [`Dictionary`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sentence<'d> {
    words: Vec<&'d Word>,
}

impl<'d> Sentence<'d> {
    pub fn words(&self) -> &[&'d Word] {
        &self.words
    }

    /// Number of words in the sentence.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Checks if the sentence ended on a full stop rather than on
    /// [`MAX_WORDS_IN_SENTENCE`].
    pub fn is_terminated(&self) -> bool {
        self.words.last().is_some_and(|w| w.is_terminal())
    }
}

/// Words joined by single spaces, exactly as they are stored.
impl fmt::Display for Sentence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.iter().map(|w| w.text()).join(" "))
    }
}

/// Walks a [`Dictionary`] at random, one sentence at a time.
///
/// The generator owns its random source, so two generators seeded the same way over the same
/// dictionary produce the same sentences.
///
/// ```
/// # use tweetish::{Dictionary, Generator};
/// # use rand::SeedableRng;
/// # use rand_chacha::ChaCha8Rng;
/// let mut db = Dictionary::builder();
/// db.feed_str("the cat sat. the dog ran.").unwrap();
/// let dict = db.build();
///
/// let mut generator = Generator::new(&dict, ChaCha8Rng::seed_from_u64(42));
/// let sentence = generator.generate_sentence().unwrap();
/// assert!(sentence.len() >= 2);
/// assert!(sentence.is_terminated());
/// ```
#[derive(Clone, Debug)]
pub struct Generator<'d, R> {
    dictionary: &'d Dictionary,
    rng: R,
}

impl<'d, R: Rng> Generator<'d, R> {
    pub fn new(dictionary: &'d Dictionary, rng: R) -> Self {
        Self { dictionary, rng }
    }

    /// Generates a sentence: a random start word, followed by weighted random successors until
    /// a word ending in a full stop is emitted, or the sentence is [`MAX_WORDS_IN_SENTENCE`]
    /// words long.
    ///
    /// A start word always gets at least one successor, so a sentence has two words or more.
    ///
    /// # Errors
    ///
    /// Fails if the dictionary has no word to start with, or if a word along the way has no
    /// successor to continue with (see [`draw_successor()`]).
    pub fn generate_sentence(&mut self) -> Result<Sentence<'d>> {
        let mut current = draw_start_word(self.dictionary, &mut self.rng)?;
        let mut words = Vec::with_capacity(MAX_WORDS_IN_SENTENCE);
        words.push(current);

        while words.len() < MAX_WORDS_IN_SENTENCE {
            current = draw_successor(self.dictionary, current, &mut self.rng)?;
            words.push(current);
            if current.is_terminal() {
                break;
            }
        }

        log::trace!("generated sentence of {} words", words.len());
        Ok(Sentence { words })
    }

    /// Generates `n` sentences, stopping at the first error.
    pub fn generate_sentences(&mut self, n: usize) -> Result<Vec<Sentence<'d>>> {
        (0..n).map(|_| self.generate_sentence()).collect()
    }

    /// Gives back the random source, advanced past every draw made so far.
    pub fn into_rng(self) -> R {
        self.rng
    }
}
