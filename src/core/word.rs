//! Word representation and normalization
//!
//! A Word stores a 5-letter word in canonical form: lowercase, with French
//! diacritics folded to base Latin letters.

use rustc_hash::FxHashMap;
use std::fmt;

/// Fixed word length for the game
pub const WORD_LEN: usize = 5;

/// A 5-letter word in canonical form
///
/// Canonicalization policy: input is lowercased, then diacritics are folded
/// to base letters (é/è/ê/ë → e, à/â/ä → a, î/ï → i, ô/ö → o, ù/û/ü → u,
/// ÿ → y, ç → c) before validation. Ligatures (œ, æ) are rejected rather
/// than expanded, since expansion would change the word length; corpus
/// files store pre-folded forms (cœur is listed as "coeur").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidLetter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::InvalidLetter(ch) => write!(f, "Word contains invalid letter '{ch}'"),
        }
    }
}

impl std::error::Error for WordError {}

/// Fold a French diacritic to its base letter
///
/// Letters outside the folding table pass through unchanged.
#[must_use]
pub const fn fold_letter(ch: char) -> char {
    match ch {
        'à' | 'â' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'î' | 'ï' => 'i',
        'ô' | 'ö' => 'o',
        'ù' | 'û' | 'ü' => 'u',
        'ÿ' => 'y',
        'ç' => 'c',
        _ => ch,
    }
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is normalized (lowercase, diacritics folded) before
    /// validation, so "Forêt" and "foret" construct the same Word.
    ///
    /// # Errors
    /// Returns `WordError` if, after normalization:
    /// - Length is not exactly 5
    /// - Any character is outside `a..=z`
    ///
    /// # Examples
    /// ```
    /// use lemot::core::Word;
    ///
    /// let word = Word::new("Forêt").unwrap();
    /// assert_eq!(word.text(), "foret");
    ///
    /// assert!(Word::new("trop long").is_err());
    /// assert!(Word::new("mot5e").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let normalized: String = text
            .as_ref()
            .to_lowercase()
            .chars()
            .map(fold_letter)
            .collect();

        let char_count = normalized.chars().count();
        if char_count != WORD_LEN {
            return Err(WordError::InvalidLength(char_count));
        }

        if let Some(bad) = normalized.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordError::InvalidLetter(bad));
        }

        // All chars are ASCII here, so byte length == char count
        let chars: [u8; WORD_LEN] = normalized
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(char_count))?;

        Ok(Self {
            text: normalized,
            chars,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback evaluation with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("plage").unwrap();
        assert_eq!(word.text(), "plage");
        assert_eq!(word.chars(), b"plage");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("PLAGE").unwrap();
        assert_eq!(word.text(), "plage");

        let word2 = Word::new("PlAgE").unwrap();
        assert_eq!(word2.text(), "plage");
    }

    #[test]
    fn word_creation_diacritics_folded() {
        assert_eq!(Word::new("forêt").unwrap().text(), "foret");
        assert_eq!(Word::new("élève").unwrap().text(), "eleve");
        assert_eq!(Word::new("haïku").unwrap().text(), "haiku");
        assert_eq!(Word::new("FAÇON").unwrap().text(), "facon");
    }

    #[test]
    fn word_creation_ligatures_rejected() {
        // cœurs is 5 chars but œ does not fold; the corpus stores "coeur"
        assert!(matches!(
            Word::new("cœurs"),
            Err(WordError::InvalidLetter('œ'))
        ));
        assert!(Word::new("coeur").is_ok());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("trop long"),
            Err(WordError::InvalidLength(9))
        ));
        assert!(matches!(Word::new("mot"), Err(WordError::InvalidLength(3))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("mot5e").is_err()); // Digit
        assert!(Word::new("mo te").is_err()); // Space
        assert!(Word::new("mote!").is_err()); // Punctuation
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("annee").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b'a'), Some(&1));
        assert_eq!(counts.get(&b'n'), Some(&2));
        assert_eq!(counts.get(&b'e'), Some(&2));
    }

    #[test]
    fn word_char_counts_all_unique() {
        let word = Word::new("plage").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&count| count == 1));
    }

    #[test]
    fn word_display() {
        let word = Word::new("Pluie").unwrap();
        assert_eq!(format!("{word}"), "pluie");
    }

    #[test]
    fn word_equality_is_canonical() {
        let word1 = Word::new("foret").unwrap();
        let word2 = Word::new("FORÊT").unwrap();
        let word3 = Word::new("fleur").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }

    #[test]
    fn fold_letter_table() {
        assert_eq!(fold_letter('é'), 'e');
        assert_eq!(fold_letter('ç'), 'c');
        assert_eq!(fold_letter('ü'), 'u');
        assert_eq!(fold_letter('x'), 'x');
        assert_eq!(fold_letter('œ'), 'œ'); // Not folded, rejected downstream
    }
}
