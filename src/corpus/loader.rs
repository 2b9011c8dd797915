//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded
//! constants. Lines are normalized through [`Word::new`], so files may
//! carry accented forms.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one word per line
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// entries that fail normalization (wrong length, ligatures, digits).
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use lemot::corpus::loader::load_from_file;
///
/// let words = load_from_file("data/targets.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use lemot::corpus::loader::words_from_slice;
/// use lemot::corpus::TARGETS;
///
/// let words = words_from_slice(TARGETS);
/// assert_eq!(words.len(), TARGETS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["plage", "fleur", "orage"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "plage");
        assert_eq!(words[1].text(), "fleur");
        assert_eq!(words[2].text(), "orage");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["plage", "troplong", "mot", "fleur"];
        let words = words_from_slice(input);

        // Only "plage" and "fleur" are valid 5-letter words
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "plage");
        assert_eq!(words[1].text(), "fleur");
    }

    #[test]
    fn words_from_slice_normalizes_accents() {
        let input = &["forêt", "épées"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "foret");
        assert_eq!(words[1].text(), "epees");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_embedded_targets() {
        use crate::corpus::TARGETS;

        let words = words_from_slice(TARGETS);
        assert_eq!(words.len(), TARGETS.len());
    }
}
