//! TUI application state and logic
//!
//! The app owns one game session, the stats tracker, and the theme flag.
//! A poll timeout drives the reveal animation: while the session is locked,
//! each tick discloses one more mark of the last attempt, and input is
//! blocked until the sequence drains.

use crate::corpus::{CorpusError, WordCorpus};
use crate::game::{GameSession, InputAction, Status, SubmitError};
use crate::stats::StatsTracker;
use crate::storage::{KvStore, THEME_KEY};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::warn;

/// Reveal pace: one mark disclosed per tick
const TICK: Duration = Duration::from_millis(180);

/// Application state
pub struct App<'a, S: KvStore> {
    corpus: &'a WordCorpus,
    pub session: GameSession<'a>,
    pub tracker: StatsTracker<S>,
    theme_store: S,
    pub dark_theme: bool,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, S: KvStore> App<'a, S> {
    /// Create the app with a fresh session
    ///
    /// # Errors
    /// Returns `CorpusError::Empty` if no secret can be drawn — a startup
    /// misconfiguration, fatal by design.
    pub fn new(
        corpus: &'a WordCorpus,
        tracker: StatsTracker<S>,
        theme_store: S,
    ) -> Result<Self, CorpusError> {
        let session = GameSession::new(corpus)?;
        let dark_theme = load_theme(&theme_store);

        Ok(Self {
            corpus,
            session,
            tracker,
            theme_store,
            dark_theme,
            input_mode: InputMode::Typing,
            messages: vec![Message {
                text: "Devinez le mot de 5 lettres en 6 essais.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        })
    }

    /// Handle one key press
    pub fn on_key(&mut self, key: KeyEvent) {
        // Global shortcuts first
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.should_quit = true;
                }
                KeyCode::Char('t') => {
                    self.toggle_theme();
                }
                _ => {}
            }
            return;
        }

        match self.input_mode {
            InputMode::Typing => match key.code {
                KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char(c) => {
                    // Session ignores letters while locked or terminal
                    let _ = self.session.handle(InputAction::Letter(c));
                }
                KeyCode::Backspace => {
                    let _ = self.session.handle(InputAction::Delete);
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                _ => {}
            },
        }
    }

    /// Advance the reveal animation by one step
    ///
    /// Called on every poll timeout; a no-op while the session is unlocked.
    pub fn on_tick(&mut self) {
        if !self.session.is_locked() {
            return;
        }

        self.session.reveal_step();
        if !self.session.is_locked() {
            self.after_reveal();
        }
    }

    /// Settle a pending outcome before shutdown
    ///
    /// Quitting while the reveal is still draining must not lose a finished
    /// game: drain the sequence and record the outcome as usual.
    pub fn finalize(&mut self) {
        while self.session.reveal_step().is_some() {}
        self.after_reveal();
    }

    fn submit(&mut self) {
        match self.session.handle(InputAction::Submit) {
            Ok(_) => {}
            Err(SubmitError::IncompleteGuess) => {
                self.add_message("Pas assez de lettres !", MessageStyle::Error);
            }
            Err(SubmitError::UnknownWord) => {
                self.add_message("Ce mot n'est pas dans la liste !", MessageStyle::Error);
            }
        }
    }

    /// The reveal sequence has just drained; settle the attempt
    fn after_reveal(&mut self) {
        let Some(over) = self.session.take_game_over() else {
            return;
        };

        self.tracker
            .record_outcome(over.status == Status::Won, over.attempts_used);
        self.input_mode = InputMode::GameOver;

        if over.status == Status::Won {
            let praise = match over.attempts_used {
                1 => "🏆 Coup de maître !",
                2 => "⭐ Magnifique !",
                3 => "💫 Superbe !",
                4 => "✨ Bien joué !",
                5 => "👍 Trouvé !",
                _ => "✓ Ouf, de justesse !",
            };
            self.add_message(praise, MessageStyle::Success);
        } else {
            self.add_message(
                &format!("Perdu ! Le mot était {}", over.secret.text().to_uppercase()),
                MessageStyle::Error,
            );
        }
        self.add_message("'n' : nouvelle partie, 'q' : quitter", MessageStyle::Info);
    }

    fn new_game(&mut self) {
        match GameSession::new(self.corpus) {
            Ok(session) => {
                self.session = session;
                self.input_mode = InputMode::Typing;
                self.messages.clear();
                self.add_message("Nouvelle partie !", MessageStyle::Info);
            }
            Err(err) => {
                self.add_message(&format!("Impossible de relancer : {err}"), MessageStyle::Error);
            }
        }
    }

    fn toggle_theme(&mut self) {
        self.dark_theme = !self.dark_theme;
        save_theme(&mut self.theme_store, self.dark_theme);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 4 messages
        if self.messages.len() > 4 {
            self.messages.remove(0);
        }
    }
}

/// Read the persisted theme preference; dark by default
fn load_theme<S: KvStore>(store: &S) -> bool {
    store
        .get(THEME_KEY)
        .and_then(|blob| serde_json::from_str(&blob).ok())
        .unwrap_or(true)
}

/// Persist the theme preference; failures are logged, never fatal
fn save_theme<S: KvStore>(store: &mut S, dark: bool) {
    match serde_json::to_string(&dark) {
        Ok(blob) => {
            if let Err(err) = store.set(THEME_KEY, &blob) {
                warn!("failed to persist theme preference: {err}");
            }
        }
        Err(err) => warn!("failed to serialize theme preference: {err}"),
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui<S: KvStore>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: KvStore>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (avoids double input on Windows)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.on_key(key);
            }
        } else {
            app.on_tick();
        }

        if app.should_quit {
            app.finalize();
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::storage::MemoryStore;

    fn corpus() -> WordCorpus {
        WordCorpus::new(
            vec![Word::new("plage").unwrap(), Word::new("fleur").unwrap()],
            &[],
        )
    }

    fn app(corpus: &WordCorpus) -> App<'_, MemoryStore> {
        App::new(
            corpus,
            StatsTracker::load(MemoryStore::new()),
            MemoryStore::new(),
        )
        .unwrap()
    }

    fn press(app: &mut App<'_, MemoryStore>, code: KeyCode) {
        app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn typing_fills_the_buffer() {
        let corpus = corpus();
        let mut app = app(&corpus);

        for ch in "fleur".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        assert_eq!(app.session.buffer(), "fleur");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.buffer(), "fleu");
    }

    #[test]
    fn short_submit_surfaces_a_message() {
        let corpus = corpus();
        let mut app = app(&corpus);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);

        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("Pas assez de lettres"))
        );
        assert_eq!(app.session.attempts().len(), 0);
    }

    #[test]
    fn reveal_ticks_unlock_and_record_outcome() {
        let corpus = WordCorpus::new(vec![Word::new("plage").unwrap()], &[]);
        let mut app = app(&corpus);

        // The only target is "plage", so this submit wins
        for ch in "plage".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        press(&mut app, KeyCode::Enter);
        assert!(app.session.is_locked());
        assert_eq!(app.tracker.stats().games_played, 0);

        // Letters are ignored while the reveal drains
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.session.buffer(), "");

        for _ in 0..5 {
            app.on_tick();
        }

        assert!(!app.session.is_locked());
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.tracker.stats().games_played, 1);
        assert_eq!(app.tracker.stats().games_won, 1);
    }

    #[test]
    fn quit_during_reveal_still_records_outcome() {
        let corpus = WordCorpus::new(vec![Word::new("plage").unwrap()], &[]);
        let mut app = app(&corpus);

        for ch in "plage".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        press(&mut app, KeyCode::Enter);
        assert!(app.session.is_locked());

        // Esc mid-reveal, then the shutdown settling
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
        app.finalize();

        assert_eq!(app.tracker.stats().games_played, 1);
        assert_eq!(app.tracker.stats().games_won, 1);
    }

    #[test]
    fn finalize_without_pending_outcome_is_noop() {
        let corpus = corpus();
        let mut app = app(&corpus);
        app.finalize();
        assert_eq!(app.tracker.stats().games_played, 0);
        assert_eq!(app.input_mode, InputMode::Typing);
    }

    #[test]
    fn new_game_resets_session() {
        let corpus = WordCorpus::new(vec![Word::new("plage").unwrap()], &[]);
        let mut app = app(&corpus);

        for ch in "plage".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        press(&mut app, KeyCode::Enter);
        for _ in 0..5 {
            app.on_tick();
        }

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Typing);
        assert_eq!(app.session.attempts().len(), 0);
        assert_eq!(app.session.status(), Status::InProgress);
    }

    #[test]
    fn theme_toggle_persists() {
        let corpus = corpus();
        let mut app = app(&corpus);
        assert!(app.dark_theme);

        app.on_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
        assert!(!app.dark_theme);
        assert_eq!(app.theme_store.get(THEME_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn theme_loads_from_store() {
        let corpus = corpus();
        let app: App<'_, MemoryStore> = App::new(
            &corpus,
            StatsTracker::load(MemoryStore::new()),
            MemoryStore::with_entry(THEME_KEY, "false"),
        )
        .unwrap();
        assert!(!app.dark_theme);
    }
}
