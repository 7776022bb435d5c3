//! The two random draws a [`Generator`](crate::Generator) is made of.
//!
//! - [`draw_start_word()`]: every word that does not end a sentence is equally likely.
//! - [`draw_successor()`]: a successor is picked proportionally to how often it followed the
//!   current word, ties going to the successor recorded first.
//!
//! Both take the random source explicitly, so a seeded [`Rng`] gives the same picks every time.

use rand::Rng;

use crate::dictionary::{Dictionary, Word};
use crate::error::{Error, Result};

/// Uniformly picks one of the words that can start a sentence.
///
/// A position `r` is drawn from `0..n`, where `n` is
/// [`Dictionary::count_non_terminal()`], and the `r`-th non-terminal word in insertion order is
/// returned.
///
/// Fails with [`Error::NoStartWords`] if every word ends a sentence, or the dictionary is empty.
pub fn draw_start_word<'d>(dictionary: &'d Dictionary, rng: &mut impl Rng) -> Result<&'d Word> {
    let n = dictionary.count_non_terminal();
    if n == 0 {
        return Err(Error::NoStartWords);
    }
    let position = rng.gen_range(0..n);

    dictionary
        .iter()
        .map(|(_, word)| word)
        .filter(|word| !word.is_terminal())
        .nth(position)
        .ok_or(Error::NoStartWords)
}

/// Picks a word that has followed `word`, weighted by how often it did.
///
/// A position is drawn from `0..word.occurrences()`, and successor edges are summed up in the
/// order they were recorded until the sum passes it.
///
/// Since the denominator is the occurrence count of `word`, and not the sum of its edges, the
/// draw can come up empty for a word whose last occurrence was also the last token of the
/// corpus. That is reported as [`Error::MalformedDrawState`], as is a successor that is not in
/// `dictionary` (which only happens when `word` belongs to a different dictionary). A word
/// without any successors fails with [`Error::NoSuccessors`].
pub fn draw_successor<'d>(
    dictionary: &'d Dictionary,
    word: &Word,
    rng: &mut impl Rng,
) -> Result<&'d Word> {
    if word.successors().is_empty() || word.occurrences() == 0 {
        return Err(Error::NoSuccessors {
            word: word.text().to_string(),
        });
    }
    let position = rng.gen_range(0..word.occurrences());

    let mut covered = 0;
    for edge in word.successors() {
        covered += edge.occurrences();
        if covered > position {
            // An edge pointing outside `dictionary` means `word` came from another one
            return dictionary
                .get(edge.target())
                .ok_or_else(|| Error::MalformedDrawState {
                    word: word.text().to_string(),
                    position,
                    covered,
                });
        }
    }

    Err(Error::MalformedDrawState {
        word: word.text().to_string(),
        position,
        covered,
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn dictionary(corpus: &str) -> Dictionary {
        let mut db = Dictionary::builder();
        db.feed_str(corpus).unwrap();
        db.build()
    }

    #[test]
    fn start_word_is_never_terminal() {
        let dict = dictionary("the cat sat. the dog ran.");
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = Vec::new();
        for _ in 0..1000 {
            let word = draw_start_word(&dict, &mut rng).unwrap();
            assert!(!word.is_terminal());
            if !seen.contains(&word.text()) {
                seen.push(word.text());
            }
        }
        seen.sort_unstable();
        assert_eq!(seen, vec!["cat", "dog", "the"]);
    }

    #[test]
    fn start_word_is_uniform() {
        let dict = dictionary("a b c d. a a a b b c e.");
        let mut rng = ChaCha8Rng::seed_from_u64(1234);
        let mut counts = [0usize; 3];
        let draws = 30_000;
        for _ in 0..draws {
            match draw_start_word(&dict, &mut rng).unwrap().text() {
                "a" => counts[0] += 1,
                "b" => counts[1] += 1,
                "c" => counts[2] += 1,
                other => panic!("unexpected start word {other}"),
            }
        }
        // Occurrence counts do not matter for the start word
        for n in counts {
            assert!((9_000..11_000).contains(&n), "{counts:?}");
        }
    }

    #[test]
    fn start_word_needs_non_terminal_words() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(matches!(
            draw_start_word(&Dictionary::new(), &mut rng),
            Err(Error::NoStartWords)
        ));
        assert!(matches!(
            draw_start_word(&dictionary("only. full. stops."), &mut rng),
            Err(Error::NoStartWords)
        ));
    }

    #[test]
    fn successor_is_weighted() {
        // "a" is followed by "b" three times and by "c." once
        let dict = dictionary("a b a b a b a c.");
        let a = dict.find("a").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut b = 0;
        let draws = 20_000;
        for _ in 0..draws {
            match draw_successor(&dict, a, &mut rng).unwrap().text() {
                "b" => b += 1,
                "c." => {}
                other => panic!("unexpected successor {other}"),
            }
        }
        assert!((14_000..16_000).contains(&b), "{b}");
    }

    #[test]
    fn single_successor_always_wins() {
        let dict = dictionary("the cat sat.");
        let cat = dict.find("cat").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(draw_successor(&dict, cat, &mut rng).unwrap().text(), "sat.");
        }
    }

    #[test]
    fn lone_word_has_no_successors() {
        let dict = dictionary("alone");
        let alone = dict.find("alone").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(matches!(
            draw_successor(&dict, alone, &mut rng),
            Err(Error::NoSuccessors { word }) if word == "alone"
        ));
    }

    #[test]
    fn uncovered_position_is_malformed() {
        // The last "a" has no successor, so half of the draws on "a" come up empty
        let dict = dictionary("a b a");
        let a = dict.find("a").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut malformed = 0;
        for _ in 0..200 {
            match draw_successor(&dict, a, &mut rng) {
                Ok(word) => assert_eq!(word.text(), "b"),
                Err(Error::MalformedDrawState {
                    word,
                    position,
                    covered,
                }) => {
                    assert_eq!(word, "a");
                    assert_eq!(position, 1);
                    assert_eq!(covered, 1);
                    malformed += 1;
                }
                Err(e) => panic!("unexpected error {e}"),
            }
        }
        assert!(malformed > 0 && malformed < 200);
    }

    #[test]
    fn successor_from_another_dictionary_is_malformed() {
        let full = dictionary("a b.");
        let short = dictionary("a");
        let a = full.find("a").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(matches!(
            draw_successor(&short, a, &mut rng),
            Err(Error::MalformedDrawState {
                word,
                position: 0,
                covered: 1,
            }) if word == "a"
        ));
        assert_eq!(draw_successor(&full, a, &mut rng).unwrap().text(), "b.");
    }
}
