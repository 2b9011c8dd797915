//! TUI rendering with ratatui
//!
//! Board, keyboard, and stats panels for the game interface.

use super::app::{App, InputMode, Message, MessageStyle};
use crate::core::{Mark, WORD_LEN};
use crate::game::{MAX_ATTEMPTS, Status};
use crate::output::{KEYBOARD_ROWS, histogram_bar};
use crate::storage::KvStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Theme-dependent colors
struct Palette {
    frame: Color,
    text: Color,
    dim: Color,
    correct: Color,
    present: Color,
    absent: Color,
}

fn palette(dark: bool) -> Palette {
    if dark {
        Palette {
            frame: Color::Cyan,
            text: Color::White,
            dim: Color::DarkGray,
            correct: Color::Green,
            present: Color::Yellow,
            absent: Color::DarkGray,
        }
    } else {
        Palette {
            frame: Color::Blue,
            text: Color::Black,
            dim: Color::Gray,
            correct: Color::LightGreen,
            present: Color::LightYellow,
            absent: Color::Gray,
        }
    }
}

fn mark_style(mark: Mark, colors: &Palette) -> Style {
    let bg = match mark {
        Mark::Correct => colors.correct,
        Mark::Present => colors.present,
        Mark::Absent => colors.absent,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// Main UI rendering function
pub fn ui<S: KvStore>(f: &mut Frame, app: &App<'_, S>) {
    let colors = palette(app.dark_theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Board
            Constraint::Length(5),  // Keyboard
            Constraint::Min(6),     // Messages / game-over panel
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0], &colors);
    render_board(f, app, chunks[1], &colors);
    render_keyboard(f, app, chunks[2], &colors);

    if app.input_mode == InputMode::GameOver {
        render_game_over(f, app, chunks[3], &colors);
    } else {
        render_messages(f, &app.messages, chunks[3], &colors);
    }

    render_status(f, app, chunks[4], &colors);
}

fn render_header(f: &mut Frame, area: Rect, colors: &Palette) {
    let header = Paragraph::new("LE MOT")
        .style(
            Style::default()
                .fg(colors.frame)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(colors.frame)),
        );
    f.render_widget(header, area);
}

fn render_board<S: KvStore>(f: &mut Frame, app: &App<'_, S>, area: Rect, colors: &Palette) {
    let session = &app.session;
    let attempts = session.attempts();

    let mut lines: Vec<Line> = Vec::with_capacity(MAX_ATTEMPTS * 2);
    for row in 0..MAX_ATTEMPTS {
        let line = if row < attempts.len() {
            let attempt = &attempts[row];
            // The newest row discloses marks one at a time while locked
            let disclosed = if row + 1 == attempts.len() && session.is_locked() {
                session.revealed()
            } else {
                WORD_LEN
            };

            let spans: Vec<Span> = attempt
                .word()
                .chars()
                .iter()
                .zip(attempt.feedback().marks())
                .enumerate()
                .flat_map(|(i, (&letter, &mark))| {
                    let cell = format!(" {} ", (letter as char).to_ascii_uppercase());
                    let style = if i < disclosed {
                        mark_style(mark, colors)
                    } else {
                        Style::default().fg(colors.text).add_modifier(Modifier::BOLD)
                    };
                    [Span::styled(cell, style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        } else if row == attempts.len() && !session.status().is_terminal() {
            // Active input row
            let buffer = session.buffer().as_bytes();
            let spans: Vec<Span> = (0..WORD_LEN)
                .flat_map(|i| {
                    let cell = buffer.get(i).map_or_else(
                        || " · ".to_string(),
                        |&b| format!(" {} ", (b as char).to_ascii_uppercase()),
                    );
                    [
                        Span::styled(cell, Style::default().fg(colors.text)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        } else {
            Line::from(Span::styled(
                " · ".repeat(WORD_LEN),
                Style::default().fg(colors.dim),
            ))
        };

        lines.push(line.alignment(Alignment::Center));
        lines.push(Line::raw(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(colors.frame)),
    );
    f.render_widget(board, area);
}

fn render_keyboard<S: KvStore>(f: &mut Frame, app: &App<'_, S>, area: Rect, colors: &Palette) {
    let keys = app.session.key_feedback();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|letter| {
                    let cell = format!("{}", (letter as char).to_ascii_uppercase());
                    let style = match keys.mark_for(letter) {
                        Some(mark) => mark_style(mark, colors),
                        None => Style::default().fg(colors.text),
                    };
                    [Span::styled(cell, style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Clavier ")
            .borders(Borders::ALL)
            .style(Style::default().fg(colors.frame)),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, messages: &[Message], area: Rect, colors: &Palette) {
    let items: Vec<ListItem> = messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(colors.text),
                MessageStyle::Success => Style::default().fg(colors.correct),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let list =
        List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_game_over<S: KvStore>(f: &mut Frame, app: &App<'_, S>, area: Rect, colors: &Palette) {
    let stats = app.tracker.stats();
    let session = &app.session;

    let mut lines: Vec<Line> = Vec::new();

    match session.status() {
        Status::Won => lines.push(
            Line::styled(
                "🎉 GAGNÉ !",
                Style::default()
                    .fg(colors.correct)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center),
        ),
        Status::Lost | Status::InProgress => {
            // InProgress never reaches this panel; secret() returns None then
            let secret = session
                .secret()
                .map_or(String::new(), |w| w.text().to_uppercase());
            lines.push(
                Line::styled(
                    format!("Perdu ! Le mot était {secret}"),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center),
            );
        }
    }

    lines.push(Line::raw(""));
    lines.push(
        Line::from(vec![
            Span::raw("Parties "),
            Span::styled(stats.games_played.to_string(), Style::default().fg(colors.frame)),
            Span::raw("   Victoires "),
            Span::styled(
                format!("{}%", stats.win_percentage()),
                Style::default().fg(colors.frame),
            ),
            Span::raw("   Série "),
            Span::styled(
                stats.current_streak.to_string(),
                Style::default().fg(colors.frame),
            ),
            Span::raw("   Record "),
            Span::styled(
                stats.max_streak.to_string(),
                Style::default().fg(colors.frame),
            ),
        ])
        .alignment(Alignment::Center),
    );
    lines.push(Line::raw(""));

    let max = stats.distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.distribution.iter().enumerate() {
        lines.push(
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(colors.dim)),
                Span::styled(
                    histogram_bar(count, max, 16),
                    Style::default().fg(colors.correct),
                ),
                Span::styled(format!(" {count}"), Style::default().fg(colors.text)),
            ])
            .alignment(Alignment::Center),
        );
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Fin de partie ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(colors.frame)),
    );
    f.render_widget(panel, area);
}

fn render_status<S: KvStore>(f: &mut Frame, app: &App<'_, S>, area: Rect, colors: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let attempts_text = format!(
        "Essai {}/{MAX_ATTEMPTS}",
        (app.session.attempts().len() + 1).min(MAX_ATTEMPTS)
    );
    let attempts = Paragraph::new(attempts_text)
        .style(Style::default().fg(colors.text))
        .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let state_text = if app.session.is_locked() {
        "..."
    } else {
        match app.session.status() {
            Status::InProgress => "À vous",
            Status::Won => "Gagné",
            Status::Lost => "Perdu",
        }
    };
    let state = Paragraph::new(state_text)
        .style(Style::default().fg(colors.dim))
        .alignment(Alignment::Center);
    f.render_widget(state, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Typing => "Entrée : valider | Échap : quitter | Ctrl-T : thème",
        InputMode::GameOver => "n : nouvelle partie | q : quitter | Ctrl-T : thème",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors.dim));
    f.render_widget(help, chunks[2]);
}
