//! Word corpus: secret pool and accepted guesses
//!
//! The corpus holds two sets of normalized words: the target pool (words
//! ever drawn as secrets) and the allowed set (every word accepted as a
//! guess, a superset of the targets). The embedded lists are French
//! 5-letter words with diacritics pre-folded.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, TARGETS, TARGETS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for corpus misconfiguration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusError {
    /// The target pool is empty, so no secret can be drawn
    Empty,
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "word corpus has no target words to draw from"),
        }
    }
}

impl std::error::Error for CorpusError {}

/// Secret-word pool plus the full set of acceptable guesses
pub struct WordCorpus {
    targets: Vec<Word>,
    allowed: FxHashSet<String>,
}

impl WordCorpus {
    /// Build a corpus from a target pool and extra allowed guesses
    ///
    /// The allowed set is the union of `targets` and `extra_allowed`, so
    /// every target is always a valid guess.
    #[must_use]
    pub fn new(targets: Vec<Word>, extra_allowed: &[Word]) -> Self {
        let allowed = targets
            .iter()
            .chain(extra_allowed)
            .map(|w| w.text().to_string())
            .collect();

        Self { targets, allowed }
    }

    /// Build the corpus from the embedded word lists
    #[must_use]
    pub fn embedded() -> Self {
        let targets = loader::words_from_slice(TARGETS);
        let allowed = loader::words_from_slice(ALLOWED);
        Self::new(targets, &allowed)
    }

    /// Build a corpus where every word is both a target and a valid guess
    ///
    /// Used for custom word list files, which carry no target/guess split.
    #[must_use]
    pub fn from_single_list(words: Vec<Word>) -> Self {
        Self::new(words, &[])
    }

    /// Draw a secret uniformly at random from the target pool
    ///
    /// Uses the thread-local RNG; uniform but not cryptographic, which is
    /// all a puzzle secret needs.
    ///
    /// # Errors
    /// Returns `CorpusError::Empty` if the target pool is empty.
    pub fn pick_secret(&self) -> Result<Word, CorpusError> {
        self.pick_secret_with(&mut rand::rng())
    }

    /// Draw a secret using the provided RNG (deterministic in tests)
    ///
    /// # Errors
    /// Returns `CorpusError::Empty` if the target pool is empty.
    pub fn pick_secret_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, CorpusError> {
        self.targets
            .choose(rng)
            .cloned()
            .ok_or(CorpusError::Empty)
    }

    /// Check whether a word is accepted as a guess
    ///
    /// Membership is checked against the allowed set; `word` is already
    /// normalized by construction, and wrong-length words cannot exist as
    /// `Word` values at all.
    #[must_use]
    pub fn is_valid_guess(&self, word: &Word) -> bool {
        self.allowed.contains(word.text())
    }

    /// Number of words in the target pool
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Number of words accepted as guesses
    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn small_corpus() -> WordCorpus {
        WordCorpus::new(
            vec![word("plage"), word("fleur"), word("orage")],
            &[word("epees"), word("aimes")],
        )
    }

    #[test]
    fn targets_are_valid_guesses() {
        let corpus = small_corpus();
        assert!(corpus.is_valid_guess(&word("plage")));
        assert!(corpus.is_valid_guess(&word("orage")));
    }

    #[test]
    fn extra_allowed_are_valid_guesses_but_never_secrets() {
        let corpus = small_corpus();
        assert!(corpus.is_valid_guess(&word("epees")));

        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            let secret = corpus.pick_secret_with(&mut rng).unwrap();
            assert_ne!(secret.text(), "epees");
            assert_ne!(secret.text(), "aimes");
        }
    }

    #[test]
    fn unknown_word_rejected() {
        let corpus = small_corpus();
        assert!(!corpus.is_valid_guess(&word("zzzzz")));
    }

    #[test]
    fn lookup_is_normalized() {
        // Accented input folds to the stored form before lookup
        let corpus = small_corpus();
        assert!(corpus.is_valid_guess(&word("ÉPÉES")));
    }

    #[test]
    fn pick_secret_draws_from_targets() {
        let corpus = small_corpus();
        let mut rng = SmallRng::seed_from_u64(42);
        let secret = corpus.pick_secret_with(&mut rng).unwrap();
        assert!(["plage", "fleur", "orage"].contains(&secret.text()));
    }

    #[test]
    fn empty_corpus_fails() {
        let corpus = WordCorpus::new(Vec::new(), &[]);
        assert_eq!(corpus.pick_secret(), Err(CorpusError::Empty));
    }

    #[test]
    fn counts() {
        let corpus = small_corpus();
        assert_eq!(corpus.target_count(), 3);
        assert_eq!(corpus.allowed_count(), 5);
    }

    mod embedded_lists {
        use super::super::*;
        use crate::core::WORD_LEN;

        #[test]
        fn targets_count_matches_const() {
            assert_eq!(TARGETS.len(), TARGETS_COUNT);
        }

        #[test]
        fn allowed_count_matches_const() {
            assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
        }

        #[test]
        fn targets_are_valid_words() {
            // All targets should be 5 letters, lowercase, no accents left
            for &word in TARGETS {
                assert_eq!(word.len(), WORD_LEN, "Word '{word}' is not 5 letters");
                assert!(
                    word.chars().all(|c| c.is_ascii_lowercase()),
                    "Word '{word}' contains non-lowercase chars"
                );
            }
        }

        #[test]
        fn allowed_are_valid_words() {
            for &word in ALLOWED {
                assert_eq!(word.len(), WORD_LEN, "Word '{word}' is not 5 letters");
                assert!(
                    word.chars().all(|c| c.is_ascii_lowercase()),
                    "Word '{word}' contains non-lowercase chars"
                );
            }
        }

        #[test]
        fn targets_subset_of_allowed() {
            let allowed_set: std::collections::HashSet<_> = ALLOWED.iter().collect();

            for &target in TARGETS {
                assert!(
                    allowed_set.contains(&target),
                    "Target '{target}' not in allowed list"
                );
            }
        }

        #[test]
        fn embedded_corpus_builds() {
            let corpus = WordCorpus::embedded();
            assert_eq!(corpus.target_count(), TARGETS_COUNT);
            assert_eq!(corpus.allowed_count(), ALLOWED_COUNT);
        }
    }
}
