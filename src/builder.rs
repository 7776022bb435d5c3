//! Builds a [`Dictionary`] by being fed text, keeping track of how often one word follows
//! another.

use std::io::BufRead;
use std::num::NonZeroUsize;

use crate::dictionary::{Dictionary, Word, WordId};
use crate::error::Result;
use crate::token::{tokenize, TokenRef};

/// How many tokens a [`DictionaryBuilder`] accepts before it stops listening.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WordLimit {
    /// Read everything.
    #[default]
    Unbounded,
    AtMost(NonZeroUsize),
}

impl From<Option<NonZeroUsize>> for WordLimit {
    fn from(value: Option<NonZeroUsize>) -> Self {
        match value {
            Some(n) => WordLimit::AtMost(n),
            None => WordLimit::Unbounded,
        }
    }
}

/// A limit of `0` never runs out, so it reads everything.
impl From<usize> for WordLimit {
    fn from(value: usize) -> Self {
        NonZeroUsize::new(value).into()
    }
}

/// Feeds tokens into a [`Dictionary`] in a single forward pass. Feeding more text continues the
/// same pass; the last token of one chunk is followed by the first token of the next.
///
/// ```
/// # use tweetish::Dictionary;
/// let mut db = Dictionary::builder();
/// db.feed_str("the cat sat. the dog").unwrap();
/// db.feed_str("ran.").unwrap();
/// let dict = db.build();
///
/// let the = dict.find("the").unwrap();
/// assert_eq!(the.occurrences(), 2);
/// assert_eq!(the.successors().len(), 2);
/// assert_eq!(dict.find("dog").unwrap().successors().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DictionaryBuilder {
    dictionary: Dictionary,
    limit: WordLimit,
    consumed: usize,
    prev: Option<WordId>,
}

impl Dictionary {
    pub fn builder() -> DictionaryBuilder {
        DictionaryBuilder::new()
    }
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        Self::with_limit(WordLimit::Unbounded)
    }

    pub fn with_limit(limit: WordLimit) -> Self {
        Self {
            dictionary: Dictionary::new(),
            limit,
            consumed: 0,
            prev: None,
        }
    }

    /// Number of tokens taken in so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Checks if the word limit has been reached. A saturated builder ignores anything fed to it.
    pub fn is_saturated(&self) -> bool {
        match self.limit {
            WordLimit::Unbounded => false,
            WordLimit::AtMost(n) => self.consumed >= n.get(),
        }
    }

    /// Adds a single token. Empty tokens are ignored and do not count towards the limit.
    pub fn feed_token(&mut self, token: TokenRef<'_>) -> Result<()> {
        if token.is_empty() || self.is_saturated() {
            return Ok(());
        }

        let current = match self.dictionary.find_id(token) {
            Some(id) => {
                if let Some(word) = self.dictionary.get_mut(id) {
                    word.add_occurrence();
                }
                id
            }
            None => self.dictionary.insert(Word::new(token)?)?,
        };

        if let Some(word) = self.prev.and_then(|prev| self.dictionary.get_mut(prev)) {
            word.add_successor(current)?;
        }

        log::trace!("token #{}: {token:?}", self.consumed);
        self.prev = Some(current);
        self.consumed += 1;
        Ok(())
    }

    /// Feeds the builder with more text, split on whitespace.
    pub fn feed_str(&mut self, content: &str) -> Result<()> {
        for token in tokenize(content) {
            if self.is_saturated() {
                break;
            }
            self.feed_token(token)?;
        }
        Ok(())
    }

    /// Feeds the builder line by line until the reader is exhausted or the limit is reached.
    ///
    /// The corpus does not have to be UTF-8. Invalid byte sequences are replaced by
    /// [`U+FFFD`](char::REPLACEMENT_CHARACTER) and stay part of the token they appear in.
    pub fn feed_reader(&mut self, mut reader: impl BufRead) -> Result<()> {
        let mut line = Vec::new();
        while !self.is_saturated() {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            self.feed_str(&String::from_utf8_lossy(&line))?;
        }
        Ok(())
    }

    /// Uses up the builder and hands over the finished dictionary.
    pub fn build(self) -> Dictionary {
        let dictionary = self.dictionary;
        log::debug!(
            "built dictionary of {} words ({} can start a sentence) from {} tokens",
            dictionary.len(),
            dictionary.count_non_terminal(),
            self.consumed
        );
        if dictionary.count_non_terminal() == 0 {
            log::warn!("no word in the corpus can start a sentence");
        }
        dictionary
    }
}
