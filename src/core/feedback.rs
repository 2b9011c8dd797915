//! Guess feedback evaluation and keyboard state
//!
//! Evaluating a guess against the secret produces one tri-state mark per
//! letter position:
//! - `Absent` (gray): letter not in the word, or all its copies used up
//! - `Present` (yellow): letter in the word, wrong position
//! - `Correct` (green): letter in the correct position
//!
//! Duplicate letters follow the classic Wordle rules: a guessed letter is
//! marked `Correct`/`Present` at most as many times as it occurs in the
//! secret, with exact-position matches served first.

use super::word::{WORD_LEN, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Tri-state mark for one letter position
///
/// The derived ordering (`Absent < Present < Correct`) is the merge priority
/// used by [`KeyFeedback`]: a letter's keyboard state only ever upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

/// Feedback for one committed guess: one mark per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    marks: [Mark; WORD_LEN],
}

impl Feedback {
    /// All greens (winning guess)
    pub const PERFECT: Self = Self {
        marks: [Mark::Correct; WORD_LEN],
    };

    /// Evaluate `guess` against `secret`
    ///
    /// Two-pass algorithm so duplicate letters score correctly:
    /// 1. First pass: mark exact position matches and consume those letters
    ///    from the secret's letter pool
    /// 2. Second pass: mark misplaced letters from whatever remains in the
    ///    pool, leaving the rest `Absent`
    ///
    /// The first pass must fully complete before the second starts;
    /// otherwise a later exact match could be starved by an earlier
    /// misplaced copy of the same letter. Equal word length is guaranteed
    /// by the [`Word`] type.
    ///
    /// # Examples
    /// ```
    /// use lemot::core::{Feedback, Mark, Word};
    ///
    /// let secret = Word::new("plage").unwrap();
    /// let guess = Word::new("glace").unwrap();
    /// let feedback = Feedback::evaluate(&secret, &guess);
    ///
    /// // G(present) L(correct) A(correct) C(absent) E(correct)
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Present, Mark::Correct, Mark::Correct, Mark::Absent, Mark::Correct]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut remaining = secret.char_counts();

        // First pass: exact position matches consume the letter pool
        // Allow: index needed to access guess[i], secret[i], and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.chars()[i] == secret.chars()[i] {
                marks[i] = Mark::Correct;

                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, only while copies remain
        // Allow: index needed to access guess[i] and check/set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if marks[i] == Mark::Absent {
                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter)
                    && *count > 0
                {
                    marks[i] = Mark::Present;
                    *count -= 1;
                }
            }
        }

        Self { marks }
    }

    /// Get the per-position marks
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.marks
    }

    /// Get the mark at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> Mark {
        self.marks[position]
    }

    /// Check if this is a winning guess (all greens)
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.marks == [Mark::Correct; WORD_LEN]
    }

    /// Convert feedback to an emoji share line
    ///
    /// # Examples
    /// ```
    /// use lemot::core::{Feedback, Word};
    ///
    /// let secret = Word::new("plage").unwrap();
    /// let feedback = Feedback::evaluate(&secret, &secret);
    /// assert_eq!(feedback.to_emoji(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks
            .iter()
            .map(|mark| match mark {
                Mark::Correct => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

/// Best known mark per letter, across all attempts of a session
///
/// Backs the on-screen keyboard coloring. Letters never seen in any guess
/// are absent from the map; a letter's mark only ever upgrades
/// (`Absent → Present → Correct`), never downgrades.
#[derive(Debug, Clone, Default)]
pub struct KeyFeedback {
    best: FxHashMap<u8, Mark>,
}

impl KeyFeedback {
    /// Merge one attempt's feedback into the keyboard state
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &mark) in guess.chars().iter().zip(feedback.marks()) {
            self.best
                .entry(letter)
                .and_modify(|current| {
                    if mark > *current {
                        *current = mark;
                    }
                })
                .or_insert(mark);
        }
    }

    /// Best mark observed for a letter, or `None` if never guessed
    #[inline]
    #[must_use]
    pub fn mark_for(&self, letter: u8) -> Option<Mark> {
        self.best.get(&letter).copied()
    }
}
