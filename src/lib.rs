//! Le Mot
//!
//! A terminal French word-guessing game: six attempts to find a hidden
//! 5-letter word, with per-letter feedback after each guess. Word lists are
//! French with diacritics folded to base letters, and the on-screen
//! keyboard follows the AZERTY layout.
//!
//! # Quick Start
//!
//! ```rust
//! use lemot::core::{Feedback, Word};
//!
//! // Words normalize accents away
//! let secret = Word::new("forêt").unwrap();
//! let guess = Word::new("FLEUR").unwrap();
//!
//! // Evaluate a guess
//! let feedback = Feedback::evaluate(&secret, &guess);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod corpus;

// Game session state machine
pub mod game;

// Cumulative statistics
pub mod stats;

// Key-value persistence
pub mod storage;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
