//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero external
//! collaborators: validated words and guess feedback. All types here are
//! pure and directly testable.

mod feedback;
mod word;

pub use feedback::{Feedback, KeyFeedback, Mark};
pub use word::{WORD_LEN, Word, WordError, fold_letter};
