//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line, colored board and
//! keyboard echo after each attempt.

use crate::core::{Mark, WORD_LEN, Word};
use crate::corpus::WordCorpus;
use crate::game::{GameSession, InputAction, Status, SubmitError};
use crate::output::{KEYBOARD_ROWS, share_grid};
use crate::stats::StatsTracker;
use crate::storage::KvStore;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// corpus cannot supply a secret word.
pub fn run_simple<S: KvStore>(
    corpus: &WordCorpus,
    tracker: &mut StatsTracker<S>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  LE MOT - Mode ligne de commande             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Devinez le mot de 5 lettres en 6 essais.");
    println!("Après chaque essai :");
    println!("  - {} : lettre bien placée", " vert ".black().on_green());
    println!("  - {} : lettre mal placée", " jaune ".black().on_yellow());
    println!("  - lettre grise : absente du mot\n");
    println!("Commandes : 'quit' pour quitter, 'new' pour recommencer\n");

    'games: loop {
        let mut session = GameSession::new(corpus).map_err(|e| e.to_string())?;

        loop {
            let turn = session.attempts().len() + 1;
            let input =
                get_user_input(&format!("Essai {turn}/6"))?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 À bientôt !\n");
                    return Ok(());
                }
                "new" | "n" => {
                    println!("\n🔄 Nouvelle partie !\n");
                    continue 'games;
                }
                guess => {
                    if let Err(err) = submit_guess(&mut session, guess) {
                        println!("❌ {}\n", message_for(err));
                        continue;
                    }

                    print_board(&session);
                    print_keyboard(&session);

                    if let Some(over) = session.take_game_over() {
                        tracker.record_outcome(over.status == Status::Won, over.attempts_used);
                        print_game_over(&session, over.status, &over.secret);
                        print_summary(tracker);

                        match get_user_input("Rejouer ? (oui/non)")?
                            .to_lowercase()
                            .as_str()
                        {
                            "oui" | "o" | "yes" | "y" => {
                                println!("\n🔄 Nouvelle partie !\n");
                                continue 'games;
                            }
                            _ => {
                                println!("\n👋 À bientôt !\n");
                                return Ok(());
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Feed one line of input through the session as letters plus a submit
///
/// The simple mode has no staggered animation, so the reveal sequence is
/// drained immediately after a successful submit.
fn submit_guess(session: &mut GameSession<'_>, guess: &str) -> Result<(), SubmitError> {
    // The whole line is visible up front: reject overlong words here, or
    // the buffer would silently commit their 5-letter prefix
    if guess.chars().count() > WORD_LEN {
        return Err(SubmitError::UnknownWord);
    }

    // Drop any residue from a previously rejected guess; the buffer never
    // holds more than WORD_LEN letters
    for _ in 0..WORD_LEN {
        session.handle(InputAction::Delete)?;
    }

    for ch in guess.chars() {
        session.handle(InputAction::Letter(ch))?;
    }
    session.handle(InputAction::Submit)?;
    while session.reveal_step().is_some() {}
    Ok(())
}

fn message_for(err: SubmitError) -> &'static str {
    match err {
        SubmitError::IncompleteGuess => "Pas assez de lettres !",
        SubmitError::UnknownWord => "Ce mot n'est pas dans la liste !",
    }
}

fn colorize(letter: u8, mark: Mark) -> colored::ColoredString {
    let shown = format!(" {} ", (letter as char).to_ascii_uppercase());
    match mark {
        Mark::Correct => shown.black().on_green(),
        Mark::Present => shown.black().on_yellow(),
        Mark::Absent => shown.white().dimmed(),
    }
}

fn print_board(session: &GameSession<'_>) {
    println!();
    for attempt in session.attempts() {
        let row: String = attempt
            .word()
            .chars()
            .iter()
            .zip(attempt.feedback().marks())
            .map(|(&letter, &mark)| colorize(letter, mark).to_string())
            .collect();
        println!("   {row}");
    }
    println!();
}

fn print_keyboard(session: &GameSession<'_>) {
    let keys = session.key_feedback();
    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let line: String = row
            .bytes()
            .map(|letter| match keys.mark_for(letter) {
                Some(mark) => colorize(letter, mark).to_string(),
                None => format!(" {} ", (letter as char).to_ascii_uppercase()),
            })
            .collect();
        println!("   {}{line}", "  ".repeat(i));
    }
    println!();
}

fn print_game_over(session: &GameSession<'_>, status: Status, secret: &Word) {
    if status == Status::Won {
        let turn = session.attempts().len();
        let praise = match turn {
            1 => "🏆 Coup de maître !",
            2 => "⭐ Magnifique !",
            3 => "💫 Superbe !",
            4 => "✨ Bien joué !",
            5 => "👍 Trouvé !",
            _ => "✓ Ouf, de justesse !",
        };
        println!("{}", praise.bright_green().bold());
    } else {
        println!(
            "{} Le mot était {}",
            "Perdu !".bright_red().bold(),
            secret.text().to_uppercase().bright_white().bold()
        );
    }

    println!("\n{}\n", share_grid(session.attempts(), status));
}

fn print_summary<S: KvStore>(tracker: &StatsTracker<S>) {
    let stats = tracker.stats();
    println!(
        "Parties : {}   Victoires : {}%   Série : {}   Record : {}\n",
        stats.games_played.to_string().bright_cyan(),
        stats.win_percentage().to_string().bright_cyan(),
        stats.current_streak.to_string().bright_cyan(),
        stats.max_streak.to_string().bright_cyan(),
    );
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::WordCorpus;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn overlong_line_rejected_not_truncated() {
        // "plages" must not commit its prefix "plage" as an attempt
        let corpus = WordCorpus::new(vec![word("plage")], &[]);
        let mut session = GameSession::with_secret(&corpus, word("plage"));

        let result = submit_guess(&mut session, "plages");
        assert_eq!(result, Err(SubmitError::UnknownWord));
        assert_eq!(session.attempts().len(), 0);
        assert_eq!(session.status(), Status::InProgress);
        assert_eq!(session.buffer(), "");
    }

    #[test]
    fn exact_length_line_accepted() {
        let corpus = WordCorpus::new(vec![word("plage")], &[]);
        let mut session = GameSession::with_secret(&corpus, word("plage"));

        submit_guess(&mut session, "plage").unwrap();
        assert_eq!(session.status(), Status::Won);
    }

    #[test]
    fn residue_from_rejected_guess_cleared() {
        let corpus = WordCorpus::new(vec![word("plage")], &[]);
        let mut session = GameSession::with_secret(&corpus, word("plage"));

        // The rejected word stays in the buffer...
        assert_eq!(
            submit_guess(&mut session, "zzzzz"),
            Err(SubmitError::UnknownWord)
        );
        assert_eq!(session.buffer(), "zzzzz");

        // ...and must not leak into the next line's attempt
        submit_guess(&mut session, "plage").unwrap();
        assert_eq!(session.attempts().len(), 1);
        assert_eq!(session.attempts()[0].word().text(), "plage");
    }

    #[test]
    fn short_line_reports_incomplete() {
        let corpus = WordCorpus::new(vec![word("plage")], &[]);
        let mut session = GameSession::with_secret(&corpus, word("plage"));

        assert_eq!(
            submit_guess(&mut session, "mot"),
            Err(SubmitError::IncompleteGuess)
        );
        assert_eq!(session.attempts().len(), 0);
    }
}
