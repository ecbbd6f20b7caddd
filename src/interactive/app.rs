//! TUI application state and logic

use super::sound::SoundEffects;
use super::theme::ViewConfig;
use crate::core::{GameEvent, GameListener, GameState, Letter, Outcome};
use crate::session::Session;
use crate::wordlists::{Category, WordBankError};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App {
    pub session: Session,
    pub config: ViewConfig,
    pub sounds: SoundEffects,
    pub log: MessageLog,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    WinCelebration,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Rolling log of feedback messages, fed by game events
#[derive(Debug, Default)]
pub struct MessageLog {
    pub messages: Vec<Message>,
}

impl MessageLog {
    pub fn add(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.messages.push(Message {
            text: text.into(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

impl GameListener for MessageLog {
    fn on_event(&mut self, state: &GameState, event: &GameEvent) {
        match *event {
            GameEvent::Hit(letter) => {
                let count = state.word().positions_of(letter).len();
                let text = if count == 1 {
                    format!("Nice! '{}' is in the word.", letter.as_char().to_ascii_uppercase())
                } else {
                    format!(
                        "Nice! '{}' appears {count} times.",
                        letter.as_char().to_ascii_uppercase()
                    )
                };
                self.add(text, MessageStyle::Info);
            }
            GameEvent::Miss(letter) => {
                self.add(
                    format!(
                        "No '{}'. {} attempts left.",
                        letter.as_char().to_ascii_uppercase(),
                        state.remaining_attempts()
                    ),
                    MessageStyle::Error,
                );
            }
            GameEvent::Won => {
                self.add(
                    "Congratulations! You've guessed the word correctly!",
                    MessageStyle::Success,
                );
                self.add("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
            }
            GameEvent::Lost => {
                self.add(
                    format!(
                        "Game Over. The word was \"{}\". Better luck next time!",
                        state.word()
                    ),
                    MessageStyle::Error,
                );
                self.add("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
            }
        }
    }
}

impl App {
    #[must_use]
    pub fn new(session: Session, config: ViewConfig) -> Self {
        let mut log = MessageLog::default();
        log.add(
            "Welcome! Guess the word before the hangman is complete.",
            MessageStyle::Info,
        );
        log.add(
            format!("Category: {}. Type letters to guess.", session.category()),
            MessageStyle::Info,
        );

        Self {
            session,
            sounds: SoundEffects::new(config.sound_enabled),
            config,
            log,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        self.session.state()
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        match self.state().outcome() {
            Outcome::InProgress => InputMode::Guessing,
            Outcome::Won => InputMode::WinCelebration,
            Outcome::Lost => InputMode::GameOver,
        }
    }

    pub fn guess(&mut self, letter: Letter) -> Vec<GameEvent> {
        self.session
            .guess_with(letter, &mut [&mut self.log, &mut self.sounds])
    }

    /// # Errors
    /// Propagates a misconfigured (empty) category.
    pub fn new_game(&mut self) -> Result<(), WordBankError> {
        self.session.new_game()?;
        self.log.clear();
        self.log.add(
            format!("New game started! Category: {}", self.session.category()),
            MessageStyle::Info,
        );
        Ok(())
    }

    /// # Errors
    /// Propagates a misconfigured (empty) category.
    pub fn select_category(&mut self, category: Category) -> Result<(), WordBankError> {
        if category == self.session.category() {
            return Ok(());
        }
        if self.session.change_category(category)? {
            self.log.clear();
            self.log
                .add(format!("Category: {category}. New word chosen."), MessageStyle::Info);
        }
        Ok(())
    }

    pub fn toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggled();
    }

    pub fn toggle_sound(&mut self) {
        self.config.sound_enabled = !self.config.sound_enabled;
        self.sounds.enabled = self.config.sound_enabled;
        let text = if self.config.sound_enabled {
            "Sound on"
        } else {
            "Sound off"
        };
        self.log.add(text, MessageStyle::Info);
    }

    /// Apply one key press
    ///
    /// # Errors
    /// Propagates a misconfigured (empty) category when a new game starts.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), WordBankError> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('t') => self.toggle_theme(),
                KeyCode::Char('s') => self.toggle_sound(),
                _ => {}
            }
            return Ok(());
        }

        match self.input_mode() {
            InputMode::WinCelebration | InputMode::GameOver => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter => self.new_game()?,
                _ => {
                    // Game over, other keys ignored
                }
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.select_category(self.session.category().next())?,
                KeyCode::BackTab => self.select_category(self.session.category().previous())?,
                KeyCode::Char(c @ '1'..='4') => {
                    let index = c as usize - '1' as usize;
                    self.select_category(Category::ALL[index])?;
                }
                KeyCode::Char(c) => {
                    if let Ok(letter) = Letter::new(c) {
                        self.guess(letter);
                    }
                }
                _ => {}
            },
        }

        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
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
        tracing::error!(error = %err, "tui exited with error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordBank;

    fn app() -> App {
        let session = Session::with_seed(WordBank::builtin(), Category::Fruits, Some(11)).unwrap();
        App::new(session, ViewConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    /// Distinct letters of the word, in first-seen order
    fn word_letters(app: &App) -> Vec<char> {
        let mut letters: Vec<char> = Vec::new();
        for c in app.state().word().letters().map(Letter::as_char) {
            if !letters.contains(&c) {
                letters.push(c);
            }
        }
        letters
    }

    fn missing_letters(app: &App) -> Vec<char> {
        Letter::all()
            .filter(|&l| !app.state().word().has_letter(l))
            .map(Letter::as_char)
            .take(6)
            .collect()
    }

    #[test]
    fn letter_keys_guess() {
        let mut app = app();
        let first = word_letters(&app)[0];
        press(&mut app, KeyCode::Char(first));
        assert_eq!(app.state().guessed().len(), 1);
        assert_eq!(app.sounds.played_count(), 1);
    }

    #[test]
    fn uppercase_keys_guess_lowercase() {
        let mut app = app();
        let first = word_letters(&app)[0];
        press(&mut app, KeyCode::Char(first.to_ascii_uppercase()));
        assert_eq!(app.state().guessed()[0].as_char(), first);
    }

    #[test]
    fn winning_enters_celebration() {
        let mut app = app();
        for c in word_letters(&app) {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_mode(), InputMode::WinCelebration);
        assert!(
            app.log
                .messages
                .iter()
                .any(|m| m.style == MessageStyle::Success)
        );
    }

    #[test]
    fn losing_reports_word() {
        let mut app = app();
        for c in missing_letters(&app) {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_mode(), InputMode::GameOver);

        let word = app.state().word().to_string();
        assert!(app.log.messages.iter().any(|m| m.text.contains(&word)));
    }

    #[test]
    fn enter_starts_new_game_when_over() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode(), InputMode::Guessing);

        for c in missing_letters(&app) {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode(), InputMode::Guessing);
        assert!(app.state().guessed().is_empty());
    }

    #[test]
    fn letter_keys_ignored_after_win() {
        let mut app = app();
        for c in word_letters(&app) {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_mode(), InputMode::WinCelebration);

        let finished = app.state().clone();
        for l in Letter::all() {
            press(&mut app, KeyCode::Char(l.as_char()));
        }
        assert_eq!(app.state(), &finished);
        assert_eq!(app.input_mode(), InputMode::WinCelebration);
        assert!(!app.should_quit);
    }

    #[test]
    fn letter_keys_ignored_after_loss() {
        let mut app = app();
        for c in missing_letters(&app) {
            press(&mut app, KeyCode::Char(c));
        }
        let finished = app.state().clone();

        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.state(), &finished);
        assert!(!app.should_quit);
    }

    #[test]
    fn escape_quits_when_over() {
        let mut app = app();
        for c in missing_letters(&app) {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn tab_cycles_category() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.category(), Category::Animals);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.session.category(), Category::Fruits);
    }

    #[test]
    fn digit_selects_category() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.session.category(), Category::Countries);
        assert!(app.session.bank().contains(Category::Countries, app.state().word()));
    }

    #[test]
    fn category_keys_ignored_when_over() {
        let mut app = app();
        for c in word_letters(&app) {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.category(), Category::Fruits);
    }

    #[test]
    fn ctrl_toggles_theme_and_sound() {
        let mut app = app();
        let theme = app.config.theme;

        ctrl(&mut app, 't');
        assert_ne!(app.config.theme, theme);

        ctrl(&mut app, 's');
        assert!(!app.config.sound_enabled);
        assert!(!app.sounds.enabled);
        assert_eq!(app.state().guessed().len(), 0);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut a = app();
        press(&mut a, KeyCode::Esc);
        assert!(a.should_quit);

        let mut b = app();
        ctrl(&mut b, 'c');
        assert!(b.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut log = MessageLog::default();
        for i in 0..10 {
            log.add(format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(log.messages.len(), MESSAGE_LIMIT);
        assert_eq!(log.last().unwrap().text, "m9");
    }
}
