//! Display functions for command results

use super::formatters::{colored_keyboard, colored_word, create_progress_bar, wrong_letters};
use crate::commands::{ReplayResult, SimulationResult};
use crate::core::{GameState, Outcome, Word};
use crate::views::gallows;
use crate::wordlists::WordBank;
use colored::Colorize;

/// Print the step-by-step result of a replayed game
pub fn print_replay_result(result: &ReplayResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Replaying: {} ({})",
        result.word.to_uppercase().bright_yellow().bold(),
        result.category
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let verdict = if !step.accepted {
            "ignored".bright_black()
        } else if step.hit {
            "hit".green()
        } else {
            "miss".red()
        };

        println!(
            "{:>3}. {}  {:<8} {}  wrong {}/{}  {}",
            i + 1,
            step.letter.to_ascii_uppercase(),
            verdict,
            step.masked,
            step.wrong_count,
            result.max_attempts,
            step.outcome
        );
    }

    println!();
    print_outcome(result.outcome, &result.word, result.steps.len());
}

fn print_outcome(outcome: Outcome, word: &str, steps: usize) {
    match outcome {
        Outcome::Won => println!(
            "{}",
            format!("✅ Won after {steps} guesses!").green().bold()
        ),
        Outcome::Lost => println!(
            "{}",
            format!("❌ Lost. The word was \"{word}\".").red().bold()
        ),
        Outcome::InProgress => println!(
            "{}",
            format!("… Still in progress after {steps} guesses").yellow()
        ),
    }
}

/// Print a game state the way the line-based mode shows it
pub fn print_game_state(state: &GameState) {
    let view = gallows::render(state.wrong_count(), state.max_attempts());

    println!();
    for line in gallows::ascii_art(&view) {
        if view.critical {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
    }

    println!(
        "\n  Category: {}   Wrong: [{}] {}/{}",
        state.category().to_string().bright_magenta(),
        create_progress_bar(view.progress, 1.0, state.max_attempts()),
        state.wrong_count(),
        state.max_attempts()
    );
    println!("  Word:     {}", colored_word(state));

    let wrong = wrong_letters(state);
    if !wrong.is_empty() {
        println!("  Misses:   {}", wrong.red());
    }

    println!();
    for row in colored_keyboard(state) {
        println!("    {row}");
    }
    println!();
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Guesser:          {}", result.guesser);
    println!("   Games played:     {}", result.games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Wins / losses:    {} / {}", result.wins, result.losses);
    println!("   Average guesses:  {:.2}", result.average_guesses());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Wrong-guess distribution:".bright_cyan().bold());
    for wrong in 0..=result.max_attempts {
        let count = result.wrong_distribution.get(&wrong).copied().unwrap_or(0);
        let pct = if result.games > 0 {
            count as f64 / result.games as f64 * 100.0
        } else {
            0.0
        };
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {wrong}: {bar} {count:5} ({pct:5.1}%)");
    }

    println!("\n🗂  {}", "By category:".bright_cyan().bold());
    for (category, stats) in &result.by_category {
        if stats.games == 0 {
            continue;
        }
        println!(
            "   {:<12} {:>5} games  {:>5.1}% won",
            category.to_string(),
            stats.games,
            stats.wins as f64 / stats.games as f64 * 100.0
        );
    }
}

/// Print every category and its words
pub fn print_categories(bank: &WordBank) {
    for (category, words) in bank.categories() {
        println!(
            "{} ({} words)",
            category.to_string().bright_cyan().bold(),
            words.len()
        );
        let list: Vec<&str> = words.iter().map(Word::text).collect();
        println!("  {}", list.join(", "));
    }
}
