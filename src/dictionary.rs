//! The [`Dictionary`] owns every [`Word`] seen in a corpus, and each [`Word`] owns the
//! [`SuccessorEdge`]s recording which words followed it.
//!
//! Edges point at their target by [`WordId`], an index into the dictionary, so the model has a
//! single owner and no reference cycles.

use std::hash::BuildHasher;

use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::HashTable;

use crate::error::{Error, Result};
use crate::token::{is_terminal, to_owned_token, Token, TokenRef};

/// Stable handle of a [`Word`] inside the [`Dictionary`] that created it. Words are never
/// removed, so a handle stays valid for the lifetime of its dictionary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordId(usize);

impl WordId {
    /// Position of the word in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// How often one word was immediately followed by another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuccessorEdge {
    target: WordId,
    occurrences: usize,
}

impl SuccessorEdge {
    pub fn target(&self) -> WordId {
        self.target
    }

    pub fn occurrences(&self) -> usize {
        self.occurrences
    }
}

/// A unique token of the corpus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    text: Token,
    terminal: bool,
    occurrences: usize,
    successors: Vec<SuccessorEdge>,
}

impl Word {
    /// Creates a word seen once. Whether it ends a sentence is decided here, from this first
    /// sighting, and never changes afterwards.
    pub fn new(text: TokenRef<'_>) -> Result<Self> {
        Ok(Self {
            text: to_owned_token(text)?,
            terminal: is_terminal(text),
            occurrences: 1,
            successors: Vec::new(),
        })
    }

    pub fn text(&self) -> TokenRef<'_> {
        &self.text
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Times this word appeared in the corpus. This is also the denominator of the successor draw.
    pub fn occurrences(&self) -> usize {
        self.occurrences
    }

    /// Successors in the order they were first recorded.
    pub fn successors(&self) -> &[SuccessorEdge] {
        &self.successors
    }

    /// Sum of the occurrences of all successor edges.
    pub fn successor_total(&self) -> usize {
        self.successors.iter().map(SuccessorEdge::occurrences).sum()
    }

    pub(crate) fn add_occurrence(&mut self) {
        self.occurrences += 1;
    }

    /// Records that `next` followed this word. Terminal words never get successors.
    pub(crate) fn add_successor(&mut self, next: WordId) -> Result<()> {
        if self.terminal {
            return Ok(());
        }
        match self.successors.iter_mut().find(|e| e.target == next) {
            Some(edge) => {
                edge.occurrences += 1;
            }
            None => {
                self.successors.try_reserve(1)?;
                self.successors.push(SuccessorEdge {
                    target: next,
                    occurrences: 1,
                });
            }
        }
        Ok(())
    }
}

/// What [`Dictionary::release()`] reclaimed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReleaseSummary {
    pub words: usize,
    pub edges: usize,
}

/// Insertion ordered collection of unique [`Word`]s.
///
/// ```
/// # use tweetish::{Dictionary, Word};
/// let mut dict = Dictionary::new();
/// let id = dict.insert(Word::new("cat").unwrap()).unwrap();
/// assert_eq!(dict.find_id("cat"), Some(id));
/// assert!(dict.find("cat.").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    /// Positions in `words`, hashed by the text of the word they point at. Texts are unique, so
    /// a lookup always finds the first match in insertion order.
    index: HashTable<WordId>,
    hash_builder: DefaultHashBuilder,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            index: HashTable::new(),
            hash_builder: DefaultHashBuilder::default(),
        }
    }

    fn hash_text(&self, text: TokenRef<'_>) -> u64 {
        self.hash_builder.hash_one(text)
    }

    /// Looks up a word by its exact text.
    pub fn find(&self, text: TokenRef<'_>) -> Option<&Word> {
        self.find_id(text).and_then(|id| self.get(id))
    }

    pub fn find_id(&self, text: TokenRef<'_>) -> Option<WordId> {
        let hash = self.hash_text(text);
        self.index
            .find(hash, |id| self.words[id.0].text() == text)
            .copied()
    }

    /// Appends a new word to the end of the dictionary.
    ///
    /// Fails if a word with the same text already exists, or if storage cannot grow.
    pub fn insert(&mut self, word: Word) -> Result<WordId> {
        if self.find_id(word.text()).is_some() {
            return Err(Error::DuplicateWord(word.text));
        }
        let hash = self.hash_text(word.text());

        let (words, hash_builder) = (&self.words, &self.hash_builder);
        let rehash = |id: &WordId| hash_builder.hash_one(words[id.0].text());
        self.index.try_reserve(1, rehash)?;
        self.words.try_reserve(1)?;

        let id = WordId(self.words.len());
        self.words.push(word);
        let (words, hash_builder) = (&self.words, &self.hash_builder);
        self.index
            .insert_unique(hash, id, |id| hash_builder.hash_one(words[id.0].text()));
        Ok(id)
    }

    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.words.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: WordId) -> Option<&mut Word> {
        self.words.get_mut(id.0)
    }

    /// Number of words that do not end a sentence, that is, the ones a sentence can start with.
    pub fn count_non_terminal(&self) -> usize {
        self.words.iter().filter(|w| !w.is_terminal()).count()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total number of successor edges over all words.
    pub fn edge_count(&self) -> usize {
        self.words.iter().map(|w| w.successors().len()).sum()
    }

    /// Iterates over all words in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> {
        self.words.iter().enumerate().map(|(i, w)| (WordId(i), w))
    }

    /// Uses up the dictionary, freeing every word and edge it owns.
    pub fn release(self) -> ReleaseSummary {
        let summary = ReleaseSummary {
            words: self.len(),
            edges: self.edge_count(),
        };
        drop(self);
        log::debug!(
            "released {} words and {} successor edges",
            summary.words,
            summary.edges
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_word_flags() {
        let w = Word::new("sat.").unwrap();
        assert!(w.is_terminal());
        assert_eq!(w.occurrences(), 1);
        assert!(w.successors().is_empty());

        let w = Word::new("sat,").unwrap();
        assert!(!w.is_terminal());
    }

    #[test]
    fn insert_keeps_order() {
        let mut dict = Dictionary::new();
        for t in ["b", "a", "c."] {
            dict.insert(Word::new(t).unwrap()).unwrap();
        }
        let texts: Vec<_> = dict.iter().map(|(_, w)| w.text()).collect();
        assert_eq!(texts, vec!["b", "a", "c."]);
        assert_eq!(dict.find_id("a").unwrap().index(), 1);
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.count_non_terminal(), 2);
    }

    #[test]
    fn find_is_exact() {
        let mut dict = Dictionary::new();
        dict.insert(Word::new("Cat").unwrap()).unwrap();
        assert!(dict.find("Cat").is_some());
        assert!(dict.find("cat").is_none());
        assert!(dict.find("Cat.").is_none());
        assert!(dict.find("").is_none());
    }

    #[test]
    fn lookup_survives_growth() {
        let mut dict = Dictionary::new();
        let ids: Vec<_> = (0..5000)
            .map(|i| dict.insert(Word::new(&format!("w{i}")).unwrap()).unwrap())
            .collect();
        for (i, id) in ids.into_iter().enumerate() {
            let text = format!("w{i}");
            assert_eq!(dict.find_id(&text), Some(id));
            assert_eq!(id.index(), i);
            assert_eq!(dict.find(&text).unwrap().text(), text);
        }
        assert!(dict.find_id("w5000").is_none());

        let copy = dict.clone();
        assert_eq!(copy.find_id("w4999"), dict.find_id("w4999"));
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut dict = Dictionary::new();
        dict.insert(Word::new("cat").unwrap()).unwrap();
        let err = dict.insert(Word::new("cat").unwrap()).unwrap_err();
        assert!(matches!(err, Error::DuplicateWord(t) if t == "cat"));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn successors_accumulate() {
        let mut dict = Dictionary::new();
        let a = dict.insert(Word::new("a").unwrap()).unwrap();
        let b = dict.insert(Word::new("b").unwrap()).unwrap();
        let c = dict.insert(Word::new("c").unwrap()).unwrap();

        let word = dict.get_mut(a).unwrap();
        word.add_successor(b).unwrap();
        word.add_successor(c).unwrap();
        word.add_successor(b).unwrap();

        let word = dict.get(a).unwrap();
        assert_eq!(word.successors().len(), 2);
        assert_eq!(word.successors()[0].target(), b);
        assert_eq!(word.successors()[0].occurrences(), 2);
        assert_eq!(word.successors()[1].target(), c);
        assert_eq!(word.successor_total(), 3);
    }

    #[test]
    fn terminal_words_have_no_successors() {
        let mut dict = Dictionary::new();
        let end = dict.insert(Word::new("end.").unwrap()).unwrap();
        let a = dict.insert(Word::new("a").unwrap()).unwrap();
        dict.get_mut(end).unwrap().add_successor(a).unwrap();
        assert!(dict.get(end).unwrap().successors().is_empty());
        assert_eq!(dict.edge_count(), 0);
    }

    #[test]
    fn release_reports_everything() {
        let mut dict = Dictionary::new();
        let a = dict.insert(Word::new("a").unwrap()).unwrap();
        let b = dict.insert(Word::new("b").unwrap()).unwrap();
        dict.get_mut(a).unwrap().add_successor(b).unwrap();
        dict.get_mut(b).unwrap().add_successor(a).unwrap();
        dict.get_mut(b).unwrap().add_successor(b).unwrap();

        assert_eq!(dict.release(), ReleaseSummary { words: 2, edges: 3 });
        assert_eq!(Dictionary::new().release(), ReleaseSummary::default());
    }
}
