//! Hangman - CLI
//!
//! Word-guessing game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{Guesser, ReplayConfig, SimulationConfig, replay_game, run_simple, run_simulation},
    logging::{self, LogTarget},
    output::{print_categories, print_replay_result, print_simulation_result},
    session::Session,
    wordlists::{Category, WordBank, loader::load_from_file},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman word-guessing game with TUI and CLI modes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Category: programming (default), fruits, animals, countries
    #[arg(short, long, global = true, default_value = "programming")]
    category: Category,

    /// Replace the selected category's words with those from a file
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for word selection (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple {
        /// Disable sound effects
        #[arg(long)]
        mute: bool,
    },

    /// Play a fixed sequence of letters against a known word
    Replay {
        /// The word to guess
        word: String,

        /// Letters to guess, in order (e.g. "aeiou" or "a,e,i")
        letters: String,
    },

    /// Play many games with an automated guesser
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Guesser: frequency (default) or random
        #[arg(short, long, default_value = "frequency")]
        guesser: Guesser,

        /// Play only the selected category instead of rotating through all
        #[arg(long)]
        only: bool,
    },

    /// List the categories and their words
    Categories,
}

/// Build the word bank, applying `--wordlist` to the selected category
fn load_bank(category: Category, wordlist: Option<&Path>) -> Result<WordBank> {
    let bank = WordBank::builtin();
    let Some(path) = wordlist else {
        return Ok(bank);
    };

    let words = load_from_file(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        words = words.len(),
        %category,
        "loaded custom word list"
    );
    Ok(bank.with_words(category, words)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let fullscreen = matches!(command, Commands::Play);
    logging::init(LogTarget::select(cli.log_file.as_deref(), fullscreen))?;

    let bank = load_bank(cli.category, cli.wordlist.as_deref())?;

    match command {
        Commands::Play => run_play_command(bank, cli.category, cli.seed),
        Commands::Simple { mute } => run_simple_command(bank, cli.category, cli.seed, !mute),
        Commands::Replay { word, letters } => run_replay_command(word, letters, cli.category),
        Commands::Simulate {
            count,
            guesser,
            only,
        } => {
            let mut config = SimulationConfig::new(count, cli.seed.unwrap_or_default());
            config.guesser = guesser;
            config.category = only.then_some(cli.category);
            run_simulate_command(&bank, &config)
        }
        Commands::Categories => {
            print_categories(&bank);
            Ok(())
        }
    }
}

fn run_replay_command(word: String, letters: String, category: Category) -> Result<()> {
    let mut config = ReplayConfig::new(word, letters);
    config.category = category;
    let result = replay_game(config).map_err(|e| anyhow::anyhow!(e))?;

    print_replay_result(&result);
    Ok(())
}

fn run_simulate_command(bank: &WordBank, config: &SimulationConfig) -> Result<()> {
    println!(
        "Simulating {} games with the {} guesser (seed {})...",
        config.games, config.guesser, config.seed
    );

    let result = run_simulation(bank, config)?;
    print_simulation_result(&result);
    Ok(())
}

fn run_simple_command(
    bank: WordBank,
    category: Category,
    seed: Option<u64>,
    sound_enabled: bool,
) -> Result<()> {
    let mut session = Session::with_seed(bank, category, seed)?;
    run_simple(&mut session, sound_enabled).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(bank: WordBank, category: Category, seed: Option<u64>) -> Result<()> {
    use hangman::interactive::{App, ViewConfig, run_tui};

    let session = Session::with_seed(bank, category, seed)?;
    let app = App::new(session, ViewConfig::default());
    run_tui(app)
}
