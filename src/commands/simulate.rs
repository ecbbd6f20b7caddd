//! Simulation command
//!
//! Plays many games with an automated guesser and collects statistics.

use crate::core::{GameState, Letter, Outcome, start_new_game, submit_guess};
use crate::wordlists::{Category, WordBank, WordBankError};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// English letters from most to least frequent
const FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// How the automated player picks its next letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Guesser {
    /// Uniformly among letters not yet guessed
    Random,
    /// Most common English letter not yet guessed
    #[default]
    Frequency,
}

impl Guesser {
    /// Pick the next letter, or `None` if every letter was guessed
    pub fn next_letter<R: Rng + ?Sized>(self, state: &GameState, rng: &mut R) -> Option<Letter> {
        match self {
            Self::Random => {
                let open: Vec<Letter> = Letter::all().filter(|&l| !state.has_guessed(l)).collect();
                open.choose(rng).copied()
            }
            Self::Frequency => FREQUENCY_ORDER
                .chars()
                .filter_map(|c| Letter::new(c).ok())
                .find(|&l| !state.has_guessed(l)),
        }
    }
}

impl fmt::Display for Guesser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => f.write_str("random"),
            Self::Frequency => f.write_str("frequency"),
        }
    }
}

impl FromStr for Guesser {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "frequency" | "freq" => Ok(Self::Frequency),
            other => Err(format!("Unknown guesser '{other}' (expected random or frequency)")),
        }
    }
}

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
    pub guesser: Guesser,
    /// Restrict to one category; `None` rotates through all of them
    pub category: Option<Category>,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            guesser: Guesser::default(),
            category: None,
            show_progress: true,
        }
    }
}

/// Result of one simulated game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub category: Category,
    pub word: String,
    pub outcome: Outcome,
    pub wrong_count: usize,
    pub guesses: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStats {
    pub games: usize,
    pub wins: usize,
}

/// Aggregated statistics of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub guesser: Guesser,
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub total_guesses: usize,
    pub max_attempts: usize,
    pub wrong_distribution: FxHashMap<usize, usize>,
    pub by_category: Vec<(Category, CategoryStats)>,
    pub records: Vec<GameRecord>,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.games as f64
        }
    }
}

/// Play one full game with `guesser`
///
/// # Errors
///
/// Returns `WordBankError::EmptyCategory` if `category` has no words.
pub fn play_game<R: Rng + ?Sized>(
    bank: &WordBank,
    category: Category,
    guesser: Guesser,
    rng: &mut R,
) -> Result<GameRecord, WordBankError> {
    let mut state = start_new_game(bank, category, rng)?;

    while !state.is_over() {
        let Some(letter) = guesser.next_letter(&state, rng) else {
            break;
        };
        state = submit_guess(&state, letter);
    }

    Ok(GameRecord {
        category,
        word: state.word().text().to_string(),
        outcome: state.outcome(),
        wrong_count: state.wrong_count(),
        guesses: state.guessed().len(),
    })
}

/// Play `config.games` games in parallel
///
/// Game `i` uses its own RNG seeded with `config.seed + i`, so results do
/// not depend on thread scheduling.
///
/// # Errors
///
/// Returns `WordBankError::EmptyCategory` if a played category has no words.
pub fn run_simulation(
    bank: &WordBank,
    config: &SimulationConfig,
) -> Result<SimulationResult, WordBankError> {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(format!("{} guesser", config.guesser));

    let records = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let category = config
                .category
                .unwrap_or(Category::ALL[i % Category::ALL.len()]);
            let record = play_game(bank, category, config.guesser, &mut rng);
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");

    let mut wins = 0;
    let mut total_guesses = 0;
    let mut wrong_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut by_category: Vec<(Category, CategoryStats)> = Category::ALL
        .into_iter()
        .map(|c| (c, CategoryStats::default()))
        .collect();

    for record in &records {
        let won = record.outcome == Outcome::Won;
        if won {
            wins += 1;
        }
        total_guesses += record.guesses;
        *wrong_distribution.entry(record.wrong_count).or_insert(0) += 1;

        let stats = &mut by_category[record.category.index()].1;
        stats.games += 1;
        if won {
            stats.wins += 1;
        }
    }

    let duration = start.elapsed();
    tracing::info!(
        games = records.len(),
        wins,
        elapsed_ms = duration.as_millis() as u64,
        "simulation finished"
    );

    Ok(SimulationResult {
        guesser: config.guesser,
        games: records.len(),
        wins,
        losses: records.len() - wins,
        total_guesses,
        max_attempts: crate::core::MAX_ATTEMPTS,
        wrong_distribution,
        by_category,
        records,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn quiet(games: usize, seed: u64, guesser: Guesser) -> SimulationConfig {
        SimulationConfig {
            games,
            seed,
            guesser,
            category: None,
            show_progress: false,
        }
    }

    #[test]
    fn every_game_finishes() {
        let bank = WordBank::builtin();
        let result = run_simulation(&bank, &quiet(40, 1, Guesser::Random)).unwrap();

        assert_eq!(result.games, 40);
        assert_eq!(result.wins + result.losses, 40);
        assert!(result.records.iter().all(|r| r.outcome != Outcome::InProgress));
        assert!(result.records.iter().all(|r| r.wrong_count <= 6));
    }

    #[test]
    fn distribution_sums_to_games() {
        let bank = WordBank::builtin();
        let result = run_simulation(&bank, &quiet(25, 9, Guesser::Frequency)).unwrap();

        assert_eq!(result.wrong_distribution.values().sum::<usize>(), 25);
        let category_games: usize = result.by_category.iter().map(|(_, s)| s.games).sum();
        assert_eq!(category_games, 25);
    }

    #[test]
    fn losses_use_all_attempts() {
        let bank = WordBank::builtin();
        let result = run_simulation(&bank, &quiet(40, 3, Guesser::Random)).unwrap();

        for record in result.records.iter().filter(|r| r.outcome == Outcome::Lost) {
            assert_eq!(record.wrong_count, 6);
        }
    }

    #[test]
    fn same_seed_same_results() {
        let bank = WordBank::builtin();
        let a = run_simulation(&bank, &quiet(30, 77, Guesser::Random)).unwrap();
        let b = run_simulation(&bank, &quiet(30, 77, Guesser::Random)).unwrap();

        let words_a: Vec<&str> = a.records.iter().map(|r| r.word.as_str()).collect();
        let words_b: Vec<&str> = b.records.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words_a, words_b);
        assert_eq!(a.wins, b.wins);
    }

    #[test]
    fn categories_rotate_when_unrestricted() {
        let bank = WordBank::builtin();
        let result = run_simulation(&bank, &quiet(8, 0, Guesser::Frequency)).unwrap();

        for (i, record) in result.records.iter().enumerate() {
            assert_eq!(record.category, Category::ALL[i % 4]);
            assert!(bank.contains(record.category, &Word::new(&record.word).unwrap()));
        }
    }

    #[test]
    fn restricted_category() {
        let bank = WordBank::builtin();
        let mut config = quiet(10, 0, Guesser::Frequency);
        config.category = Some(Category::Countries);
        let result = run_simulation(&bank, &config).unwrap();

        assert!(result.records.iter().all(|r| r.category == Category::Countries));
    }

    #[test]
    fn frequency_guesser_starts_with_e() {
        let state = GameState::new(Word::new("kiwi").unwrap(), Category::Fruits);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Guesser::Frequency.next_letter(&state, &mut rng),
            Some(Letter::new('e').unwrap())
        );
    }

    #[test]
    fn random_guesser_never_repeats() {
        let mut state = GameState::new(Word::new("kiwi").unwrap(), Category::Fruits);
        let mut rng = StdRng::seed_from_u64(5);
        while !state.is_over() {
            let letter = Guesser::Random.next_letter(&state, &mut rng).unwrap();
            assert!(!state.has_guessed(letter));
            state = submit_guess(&state, letter);
        }
    }

    #[test]
    fn guesser_parse() {
        assert_eq!("random".parse::<Guesser>().unwrap(), Guesser::Random);
        assert_eq!("FREQ".parse::<Guesser>().unwrap(), Guesser::Frequency);
        assert!("smart".parse::<Guesser>().is_err());
    }

    #[test]
    fn empty_run() {
        let bank = WordBank::builtin();
        let result = run_simulation(&bank, &quiet(0, 0, Guesser::Random)).unwrap();
        assert_eq!(result.games, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
    }
}
