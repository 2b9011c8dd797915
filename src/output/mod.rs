//! Terminal output formatting
//!
//! Shared helpers for the CLI modes and the TUI: the emoji share grid and
//! histogram bars for the guess distribution.

use crate::game::{Attempt, MAX_ATTEMPTS, Status};

/// AZERTY keyboard rows for the French layout
pub const KEYBOARD_ROWS: [&str; 3] = ["azertyuiop", "qsdfghjklm", "wxcvbn"];

/// Format a finished game as a shareable emoji grid
///
/// # Examples
/// ```
/// use lemot::core::Word;
/// use lemot::corpus::WordCorpus;
/// use lemot::game::{GameSession, InputAction, Status};
/// use lemot::output::share_grid;
///
/// let secret = Word::new("plage").unwrap();
/// let corpus = WordCorpus::new(vec![secret.clone()], &[]);
/// let mut session = GameSession::with_secret(&corpus, secret);
/// for ch in "plage".chars() {
///     session.handle(InputAction::Letter(ch)).unwrap();
/// }
/// session.handle(InputAction::Submit).unwrap();
///
/// let grid = share_grid(session.attempts(), Status::Won);
/// assert_eq!(grid, "Le Mot 1/6\n\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_grid(history: &[Attempt], status: Status) -> String {
    let score = if status == Status::Won {
        history.len().to_string()
    } else {
        "X".to_string()
    };

    let mut grid = format!("Le Mot {score}/{MAX_ATTEMPTS}\n");
    for attempt in history {
        grid.push('\n');
        grid.push_str(&attempt.feedback().to_emoji());
    }
    grid
}

/// Create a histogram bar string
#[must_use]
pub fn histogram_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        // Cast is safe: values are clamped to [0, width]
        ((f64::from(value) / f64::from(max)) * width as f64).round() as usize
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
