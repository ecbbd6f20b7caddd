//! Simple interactive CLI mode
//!
//! Text-based game without TUI

use crate::core::{GameEvent, Letter};
use crate::interactive::sound::SoundEffects;
use crate::output::display::print_game_state;
use crate::session::Session;
use crate::wordlists::Category;
use colored::Colorize;
use std::io::{self, Write};

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Guess(Letter),
    NewGame,
    Category(Category),
    Quit,
    Help,
    Invalid(String),
}

impl SimpleCommand {
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim().to_lowercase();
        let mut parts = input.split_whitespace();

        match (parts.next(), parts.next()) {
            (Some("quit" | "exit"), None) => Self::Quit,
            (Some("new"), None) => Self::NewGame,
            (Some("help" | "?"), None) => Self::Help,
            (Some("category" | "cat"), Some(name)) => match name.parse::<Category>() {
                Ok(category) => Self::Category(category),
                Err(e) => Self::Invalid(e.to_string()),
            },
            (Some(word), None) => match Letter::parse(word) {
                Ok(letter) => Self::Guess(letter),
                Err(_) => Self::Invalid(format!("'{word}' is not a single letter or command")),
            },
            _ => Self::Invalid(format!("Unrecognized input '{input}'")),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a
/// category has no words.
pub fn run_simple(session: &mut Session, sound_enabled: bool) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Hangman - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    print_help();

    let mut sounds = SoundEffects::new(sound_enabled);

    loop {
        print_game_state(session.state());

        let input = get_user_input("Guess a letter (or command)")?;
        match SimpleCommand::parse(&input) {
            SimpleCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            SimpleCommand::Help => print_help(),
            SimpleCommand::NewGame => {
                session.new_game().map_err(|e| e.to_string())?;
                println!("\n🔄 New game started!\n");
            }
            SimpleCommand::Category(category) => {
                if session.change_category(category).map_err(|e| e.to_string())? {
                    println!("\n🗂  Category: {category}. New word chosen.\n");
                } else {
                    println!("Start a new game before changing category.\n");
                }
            }
            SimpleCommand::Invalid(reason) => println!("❌ {reason}\n"),
            SimpleCommand::Guess(letter) => {
                let events = session.guess_with(letter, &mut [&mut sounds]);
                if events.is_empty() {
                    println!("'{}' can't be guessed now.\n", letter.as_char().to_ascii_uppercase());
                    continue;
                }
                report_events(session, &events);

                if session.state().is_over() {
                    print_game_state(session.state());
                    match get_user_input("Play again? (yes/no)")?
                        .to_lowercase()
                        .as_str()
                    {
                        "yes" | "y" => {
                            session.new_game().map_err(|e| e.to_string())?;
                            println!("\n🔄 New game started!\n");
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}

fn report_events(session: &Session, events: &[GameEvent]) {
    let state = session.state();
    for event in events {
        match event {
            GameEvent::Hit(letter) => println!(
                "{}",
                format!("✓ '{}' is in the word!", letter.as_char().to_ascii_uppercase()).green()
            ),
            GameEvent::Miss(letter) => println!(
                "{}",
                format!(
                    "✗ No '{}'. {} attempts left.",
                    letter.as_char().to_ascii_uppercase(),
                    state.remaining_attempts()
                )
                .red()
            ),
            GameEvent::Won => {
                println!("\n{}", "═".repeat(70).bright_cyan());
                println!(
                    "{}",
                    "          🎉  Congratulations! You've guessed the word correctly!  🎉"
                        .bright_green()
                        .bold()
                );
                println!("{}", "═".repeat(70).bright_cyan());
            }
            GameEvent::Lost => {
                println!(
                    "\n{}",
                    format!(
                        "Game Over! The word was \"{}\". Better luck next time!",
                        state.word()
                    )
                    .red()
                    .bold()
                );
            }
        }
    }
}

fn print_help() {
    println!("Type a letter and press Enter to guess it.");
    println!("Commands: 'new' for a new game, 'category <name>' to switch, 'quit' to exit\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
