//! Game session state machine
//!
//! One session owns the secret, the committed attempts, the in-progress
//! input buffer, and the keyboard feedback. All mutation flows through
//! [`GameSession::handle`], which consumes the closed set of input actions
//! (letter, delete, submit).
//!
//! After a successful submit the session is *locked* while the presentation
//! layer drains the per-letter reveal sequence: the attempt itself is
//! committed immediately, only its disclosure is staggered. The core never
//! consults wall-clock time; pacing belongs entirely to the caller.

use crate::core::{Feedback, KeyFeedback, WORD_LEN, Word, fold_letter};
use crate::corpus::{CorpusError, WordCorpus};
use std::fmt;

/// Maximum number of attempts per session
pub const MAX_ATTEMPTS: usize = 6;

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    /// Whether the session has reached a terminal state
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One committed guess and its evaluated feedback
#[derive(Debug, Clone)]
pub struct Attempt {
    word: Word,
    feedback: Feedback,
}

impl Attempt {
    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// The evaluated feedback
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// The closed set of input actions a session consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Append a letter to the input buffer
    Letter(char),
    /// Remove the last letter from the input buffer
    Delete,
    /// Submit the buffer as a guess
    Submit,
}

/// User-correctable submit failures
///
/// Both leave the session completely unchanged; they are surfaced as
/// transient UI messages, never as state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The buffer is shorter than the word length
    IncompleteGuess,
    /// The buffer is not in the corpus of accepted guesses
    UnknownWord,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteGuess => write!(f, "guess is shorter than {WORD_LEN} letters"),
            Self::UnknownWord => write!(f, "word is not in the accepted word list"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Terminal event emitted once when a session ends
#[derive(Debug, Clone)]
pub struct GameOver {
    pub status: Status,
    pub secret: Word,
    pub attempts_used: usize,
    pub history: Vec<Attempt>,
}

/// One step of the staggered reveal sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub position: usize,
    pub letter: u8,
    pub mark: crate::core::Mark,
}

/// Single-session game state machine
///
/// Created `InProgress` with a secret drawn from the corpus; becomes
/// immutable once the status leaves `InProgress`.
pub struct GameSession<'a> {
    corpus: &'a WordCorpus,
    secret: Word,
    attempts: Vec<Attempt>,
    buffer: String,
    status: Status,
    keys: KeyFeedback,
    reveal_remaining: usize,
    game_over: Option<GameOver>,
}

impl<'a> GameSession<'a> {
    /// Start a session with a randomly drawn secret
    ///
    /// # Errors
    /// Returns `CorpusError::Empty` if the corpus has no target words.
    pub fn new(corpus: &'a WordCorpus) -> Result<Self, CorpusError> {
        let secret = corpus.pick_secret()?;
        Ok(Self::with_secret(corpus, secret))
    }

    /// Start a session with a known secret (tests, daily-word mode)
    #[must_use]
    pub fn with_secret(corpus: &'a WordCorpus, secret: Word) -> Self {
        Self {
            corpus,
            secret,
            attempts: Vec::new(),
            buffer: String::new(),
            status: Status::InProgress,
            keys: KeyFeedback::default(),
            reveal_remaining: 0,
            game_over: None,
        }
    }

    /// Apply one input action
    ///
    /// Letter and delete actions never fail: they silently do nothing when
    /// the buffer is full/empty, when the session is locked for a reveal,
    /// or when it has ended. Submit returns the committed feedback on
    /// success and `Ok(None)` when ignored (locked or terminal).
    ///
    /// # Errors
    /// `SubmitError::IncompleteGuess` if the buffer is not full length,
    /// `SubmitError::UnknownWord` if the buffer is not an accepted word.
    /// Both leave attempt count, buffer, and status untouched.
    pub fn handle(&mut self, action: InputAction) -> Result<Option<Feedback>, SubmitError> {
        if self.is_locked() || self.status.is_terminal() {
            return Ok(None);
        }

        match action {
            InputAction::Letter(ch) => {
                // Unicode lowercase first: 'É' must fold the same as 'é'
                let lowered = ch.to_lowercase().next().unwrap_or(ch);
                let folded = fold_letter(lowered);
                if folded.is_ascii_lowercase() && self.buffer.len() < WORD_LEN {
                    self.buffer.push(folded);
                }
                Ok(None)
            }
            InputAction::Delete => {
                self.buffer.pop();
                Ok(None)
            }
            InputAction::Submit => self.submit().map(Some),
        }
    }

    fn submit(&mut self) -> Result<Feedback, SubmitError> {
        if self.buffer.len() < WORD_LEN {
            return Err(SubmitError::IncompleteGuess);
        }

        // The buffer only ever holds folded ASCII letters, so this can only
        // fail for words the corpus does not know anyway
        let word = Word::new(&self.buffer).map_err(|_| SubmitError::UnknownWord)?;
        if !self.corpus.is_valid_guess(&word) {
            return Err(SubmitError::UnknownWord);
        }

        let feedback = Feedback::evaluate(&self.secret, &word);
        self.keys.record(&word, &feedback);
        self.attempts.push(Attempt {
            word: word.clone(),
            feedback,
        });
        self.buffer.clear();

        // Lock until the presentation layer drains the reveal sequence
        self.reveal_remaining = WORD_LEN;

        if word == self.secret {
            self.finish(Status::Won);
        } else if self.attempts.len() == MAX_ATTEMPTS {
            self.finish(Status::Lost);
        }

        Ok(feedback)
    }

    fn finish(&mut self, status: Status) {
        self.status = status;
        self.game_over = Some(GameOver {
            status,
            secret: self.secret.clone(),
            attempts_used: self.attempts.len(),
            history: self.attempts.clone(),
        });
    }

    /// Disclose the next mark of the most recent attempt
    ///
    /// Returns `None` once the sequence is drained; the session unlocks at
    /// that point. The attempt itself was committed at submit time.
    pub fn reveal_step(&mut self) -> Option<RevealStep> {
        if self.reveal_remaining == 0 {
            return None;
        }

        let attempt = self.attempts.last()?;
        let position = WORD_LEN - self.reveal_remaining;
        let step = RevealStep {
            position,
            letter: attempt.word.chars()[position],
            mark: attempt.feedback.mark_at(position),
        };
        self.reveal_remaining -= 1;
        Some(step)
    }

    /// Whether input is currently blocked by an undrained reveal sequence
    #[inline]
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.reveal_remaining > 0
    }

    /// How many marks of the most recent attempt are disclosed so far
    #[inline]
    #[must_use]
    pub const fn revealed(&self) -> usize {
        WORD_LEN - self.reveal_remaining
    }

    /// Take the terminal event, if the session has ended
    ///
    /// The event is yielded exactly once; stats recording hangs off it.
    pub fn take_game_over(&mut self) -> Option<GameOver> {
        self.game_over.take()
    }

    /// Current session status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Current in-progress input buffer
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Committed attempts, oldest first
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Attempts still available
    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts.len()
    }

    /// Best-known keyboard feedback across all attempts
    #[inline]
    #[must_use]
    pub const fn key_feedback(&self) -> &KeyFeedback {
        &self.keys
    }

    /// The secret word, disclosed only once the session is terminal
    #[must_use]
    pub fn secret(&self) -> Option<&Word> {
        if self.status.is_terminal() {
            Some(&self.secret)
        } else {
            None
        }
    }
}
