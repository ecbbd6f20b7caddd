//! TUI rendering with ratatui
//!
//! Draws the gallows, word, keyboard and feedback panels from the current
//! game state and view configuration.

use super::app::{App, InputMode, MessageStyle};
use super::theme::Palette;
use crate::views::gallows;
use crate::views::keyboard::{self, KeyState};
use crate::views::word::{self, CellState};
use crate::wordlists::Category;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let palette = app.config.theme.palette();

    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(5), // Keyboard
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, &palette, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Gallows
            Constraint::Percentage(60), // Word + feedback
        ])
        .split(chunks[1]);

    render_gallows(f, app, &palette, main_chunks[0]);
    render_game_panel(f, app, &palette, main_chunks[1]);
    render_keyboard(f, app, &palette, chunks[2]);
    render_status(f, app, &palette, chunks[3]);
}

fn render_header(f: &mut Frame, palette: &Palette, area: Rect) {
    let header = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "HANGMAN",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Guess the word before the hangman is complete!",
            Style::default().fg(palette.muted),
        ),
    ])])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(palette.accent)),
    );
    f.render_widget(header, area);
}

fn render_gallows(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let state = app.state();
    let view = gallows::render(state.wrong_count(), state.max_attempts());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(3)])
        .split(area);

    let figure_color = if view.critical {
        palette.wrong
    } else {
        palette.text
    };
    let lines: Vec<Line> = gallows::ascii_art(&view)
        .into_iter()
        .map(|l| Line::styled(l, Style::default().fg(figure_color)))
        .collect();

    let drawing = Paragraph::new(lines).block(
        Block::default()
            .title(" Gallows ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(drawing, chunks[0]);

    let gauge_color = if view.critical {
        palette.wrong
    } else {
        palette.accent
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Wrong guesses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(gauge_color))
        .ratio(view.progress)
        .label(format!(
            "{} / {}",
            state.wrong_count(),
            state.max_attempts()
        ));
    f.render_widget(gauge, chunks[1]);
}

fn render_game_panel(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Categories
            Constraint::Length(3), // Word
            Constraint::Length(4), // Result banner
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_categories(f, app, palette, chunks[0]);
    render_word(f, app, palette, chunks[1]);
    render_result(f, app, palette, chunks[2]);
    render_messages(f, app, palette, chunks[3]);
}

fn render_categories(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let active = app.session.category();
    let locked = app.state().is_over();

    let mut spans = Vec::new();
    for (i, category) in Category::ALL.into_iter().enumerate() {
        let style = if category == active {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if locked {
            Style::default().fg(palette.muted)
        } else {
            Style::default().fg(palette.text)
        };
        spans.push(Span::styled(format!(" {}:{category} ", i + 1), style));
        spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Category: {active} "))
                .borders(Borders::ALL),
        );
    f.render_widget(paragraph, area);
}

fn render_word(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let state = app.state();
    let cells = word::render(state.word(), state.guessed(), state.is_over());

    let spans: Vec<Span> = cells
        .iter()
        .map(|cell| match cell.state {
            CellState::Hidden => Span::styled(" _ ", Style::default().fg(palette.muted)),
            CellState::Guessed => Span::styled(
                format!(" {} ", cell.letter.as_char().to_ascii_uppercase()),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
            CellState::Revealed => Span::styled(
                format!(" {} ", cell.letter.as_char().to_ascii_uppercase()),
                Style::default()
                    .fg(palette.wrong)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Word ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_result(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let (title, lines, color) = match app.input_mode() {
        InputMode::Guessing => (
            " Status ",
            vec![Line::from(format!(
                "{} attempts left",
                app.state().remaining_attempts()
            ))],
            palette.text,
        ),
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 ",
            vec![
                Line::from(confetti(area.width.saturating_sub(2) as usize)),
                Line::from("You guessed it! Press Enter to play again."),
            ],
            palette.correct,
        ),
        InputMode::GameOver => (
            " Game Over ",
            vec![
                Line::from(vec![
                    Span::raw("The word was: "),
                    Span::styled(
                        app.state().word().text().to_uppercase(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from("Press Enter to play again."),
            ],
            palette.wrong,
        ),
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, area);
}

/// A row of confetti glyphs for the win banner
fn confetti(width: usize) -> String {
    const GLYPHS: [char; 5] = ['*', '+', 'o', '.', '~'];
    (0..width).map(|i| GLYPHS[(i * 7 + i / 3) % GLYPHS.len()]).collect()
}

fn render_messages(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let messages: Vec<ListItem> = app
        .log
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(palette.text),
                MessageStyle::Success => Style::default().fg(palette.correct),
                MessageStyle::Error => Style::default().fg(palette.wrong),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let lines: Vec<Line> = keyboard::layout(app.state())
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .map(|key| {
                    let style = match key.state {
                        KeyState::Unused if key.enabled => Style::default()
                            .fg(palette.text)
                            .add_modifier(Modifier::BOLD),
                        KeyState::Unused => Style::default().fg(palette.muted),
                        KeyState::CorrectGuess => Style::default()
                            .fg(palette.correct)
                            .add_modifier(Modifier::DIM),
                        KeyState::WrongGuess => Style::default()
                            .fg(palette.wrong)
                            .add_modifier(Modifier::CROSSED_OUT),
                    };
                    Span::styled(
                        format!("[{}]", key.letter.as_char().to_ascii_uppercase()),
                        style,
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let sound = if app.config.sound_enabled { "on" } else { "off" };
    let help = match app.input_mode() {
        InputMode::Guessing => "a-z: Guess | Tab/1-4: Category | ^T: Theme | ^S: Sound | Esc: Quit",
        InputMode::WinCelebration | InputMode::GameOver => {
            "Enter: New Game | ^T: Theme | ^S: Sound | Esc: Quit"
        }
    };

    let status = Paragraph::new(format!("{help} | Sound: {sound}"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.muted));
    f.render_widget(status, area);
}
