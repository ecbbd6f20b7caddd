//! Hangman game state and transition rules
//!
//! [`GameState`] is an immutable value; [`submit_guess`] is a pure reducer that
//! produces the next state. Notifications are never emitted inline; callers
//! derive them from a before/after pair with [`super::transition_events`].

use super::{Letter, Word};
use crate::wordlists::{Category, WordBank, WordBankError};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Wrong guesses allowed before the game is lost
pub const MAX_ATTEMPTS: usize = 6;

/// Status of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// State of a single hangman game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    word: Word,
    category: Category,
    guessed: Vec<Letter>,
    wrong_count: usize,
    max_attempts: usize,
    outcome: Outcome,
}

impl GameState {
    /// Fresh game for a known word
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameState, Outcome, Word};
    /// use hangman::wordlists::Category;
    ///
    /// let state = GameState::new(Word::new("cat").unwrap(), Category::Animals);
    /// assert_eq!(state.outcome(), Outcome::InProgress);
    /// assert_eq!(state.wrong_count(), 0);
    /// ```
    #[must_use]
    pub const fn new(word: Word, category: Category) -> Self {
        Self {
            word,
            category,
            guessed: Vec::new(),
            wrong_count: 0,
            max_attempts: MAX_ATTEMPTS,
            outcome: Outcome::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Guessed letters in the order they were submitted
    #[inline]
    #[must_use]
    pub fn guessed(&self) -> &[Letter] {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub const fn wrong_count(&self) -> usize {
        self.wrong_count
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    #[must_use]
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    /// Wrong guesses left before the game is lost
    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        self.max_attempts.saturating_sub(self.wrong_count)
    }

    /// Letters guessed that are not in the word, in submission order
    pub fn wrong_letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.guessed
            .iter()
            .copied()
            .filter(|&l| !self.word.has_letter(l))
    }
}

/// Start a new game with a word drawn uniformly from `category`
///
/// # Errors
/// Returns `WordBankError::EmptyCategory` if the category has no words.
pub fn start_new_game<R: Rng + ?Sized>(
    bank: &WordBank,
    category: Category,
    rng: &mut R,
) -> Result<GameState, WordBankError> {
    let word = bank
        .words(category)
        .choose(rng)
        .ok_or(WordBankError::EmptyCategory(category))?;

    tracing::debug!(%category, length = word.len(), "starting new game");
    Ok(GameState::new(word.clone(), category))
}

/// Apply one guess and return the resulting state
///
/// Returns an identical state when the game is already over or the letter
/// was guessed before.
#[must_use]
pub fn submit_guess(state: &GameState, letter: Letter) -> GameState {
    if state.is_over() || state.has_guessed(letter) {
        return state.clone();
    }

    let mut next = state.clone();
    next.guessed.push(letter);
    if !next.word.has_letter(letter) {
        next.wrong_count += 1;
    }
    next.outcome = evaluate_outcome(
        &next.word,
        &next.guessed,
        next.wrong_count,
        next.max_attempts,
    );

    tracing::trace!(
        %letter,
        wrong = next.wrong_count,
        outcome = %next.outcome,
        "guess applied"
    );
    next
}

/// Decide the outcome for a set of guesses
///
/// Victory is checked first, so a fully guessed word wins even when the
/// wrong-guess budget is exhausted.
#[must_use]
pub fn evaluate_outcome(
    word: &Word,
    guessed: &[Letter],
    wrong_count: usize,
    max_attempts: usize,
) -> Outcome {
    if word.letters().all(|l| guessed.contains(&l)) {
        Outcome::Won
    } else if wrong_count >= max_attempts {
        Outcome::Lost
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game(word: &str) -> GameState {
        GameState::new(Word::new(word).unwrap(), Category::Animals)
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn play(state: &GameState, letters: &str) -> GameState {
        letters
            .chars()
            .fold(state.clone(), |s, c| submit_guess(&s, letter(c)))
    }

    #[test]
    fn start_new_game_picks_from_category() {
        let bank = WordBank::builtin();
        let mut rng = StdRng::seed_from_u64(7);

        for category in Category::ALL {
            for _ in 0..20 {
                let state = start_new_game(&bank, category, &mut rng).unwrap();
                assert!(bank.contains(category, state.word()));
                assert!(!state.word().is_empty());
                assert_eq!(state.word().text(), state.word().text().to_lowercase());
                assert_eq!(state.category(), category);
                assert_eq!(state.outcome(), Outcome::InProgress);
                assert!(state.guessed().is_empty());
                assert_eq!(state.wrong_count(), 0);
            }
        }
    }

    #[test]
    fn start_new_game_reaches_every_word() {
        let bank = WordBank::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        let words = bank.words(Category::Fruits);

        let mut seen = vec![false; words.len()];
        for _ in 0..500 {
            let state = start_new_game(&bank, Category::Fruits, &mut rng).unwrap();
            let idx = words.iter().position(|w| w == state.word()).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn guessing_every_letter_wins() {
        let start = game("cat");

        let s1 = submit_guess(&start, letter('c'));
        assert_eq!(s1.outcome(), Outcome::InProgress);
        assert_eq!(s1.wrong_count(), 0);

        let s2 = submit_guess(&s1, letter('a'));
        assert_eq!(s2.outcome(), Outcome::InProgress);
        assert_eq!(s2.wrong_count(), 0);

        let s3 = submit_guess(&s2, letter('t'));
        assert_eq!(s3.outcome(), Outcome::Won);
    }

    #[test]
    fn sixth_wrong_guess_loses() {
        let mut state = game("cat");
        for (i, c) in "xyzqwe".chars().enumerate() {
            state = submit_guess(&state, letter(c));
            assert_eq!(state.wrong_count(), i + 1);
            if i < 5 {
                assert_eq!(state.outcome(), Outcome::InProgress);
            }
        }
        assert_eq!(state.outcome(), Outcome::Lost);
        assert_eq!(state.max_attempts(), 6);
    }

    #[test]
    fn repeated_guess_is_noop() {
        let once = submit_guess(&game("dog"), letter('d'));
        let twice = submit_guess(&once, letter('d'));

        assert_eq!(once, twice);
        assert_eq!(twice.wrong_count(), 0);
        assert_eq!(twice.guessed(), &[letter('d')]);
    }

    #[test]
    fn repeated_wrong_guess_counts_once() {
        let state = play(&game("dog"), "zz");
        assert_eq!(state.wrong_count(), 1);
        assert_eq!(state.guessed().len(), 1);
    }

    #[test]
    fn idempotent_for_every_letter() {
        let base = play(&game("giraffe"), "gx");
        for l in Letter::all() {
            let once = submit_guess(&base, l);
            assert_eq!(submit_guess(&once, l), once, "letter {l}");
        }
    }

    #[test]
    fn monotonic_across_guesses() {
        let mut state = game("kangaroo");
        let mut previous_wrong = 0;
        let mut previous_guessed = 0;

        for c in "qkazgxnbrvo".chars() {
            state = submit_guess(&state, letter(c));
            assert!(state.wrong_count() >= previous_wrong);
            assert!(state.guessed().len() >= previous_guessed);
            previous_wrong = state.wrong_count();
            previous_guessed = state.guessed().len();
        }
    }

    #[test]
    fn wrong_count_matches_absent_letters() {
        let state = play(&game("penguin"), "pxeyq");
        assert_eq!(state.wrong_count(), state.wrong_letters().count());
        assert_eq!(state.wrong_count(), 3);
    }

    #[test]
    fn won_iff_all_letters_guessed() {
        let state = play(&game("banana"), "ban");
        assert_eq!(state.outcome(), Outcome::Won);

        let partial = play(&game("banana"), "ba");
        assert_eq!(partial.outcome(), Outcome::InProgress);
    }

    #[test]
    fn terminal_state_rejects_guesses() {
        let won = play(&game("lion"), "lion");
        assert_eq!(won.outcome(), Outcome::Won);
        assert_eq!(submit_guess(&won, letter('z')), won);

        let lost = play(&game("lion"), "abcdef");
        assert_eq!(lost.outcome(), Outcome::Lost);
        let after = play(&lost, "lion");
        assert_eq!(after.word(), lost.word());
        assert_eq!(after.guessed(), lost.guessed());
        assert_eq!(after.wrong_count(), lost.wrong_count());
    }

    #[test]
    fn loss_on_final_attempt_after_correct_guesses() {
        let state = play(&game("tiger"), "tiabcdfh");
        assert_eq!(state.wrong_count(), 6);
        assert_eq!(state.outcome(), Outcome::Lost);
    }

    #[test]
    fn victory_evaluated_before_loss() {
        let word = Word::new("cat").unwrap();
        let guessed: Vec<Letter> = "cat".chars().map(letter).collect();

        assert_eq!(
            evaluate_outcome(&word, &guessed, MAX_ATTEMPTS, MAX_ATTEMPTS),
            Outcome::Won
        );
        assert_eq!(
            evaluate_outcome(&word, &guessed[..2], MAX_ATTEMPTS, MAX_ATTEMPTS),
            Outcome::Lost
        );
        assert_eq!(
            evaluate_outcome(&word, &guessed[..2], MAX_ATTEMPTS - 1, MAX_ATTEMPTS),
            Outcome::InProgress
        );
    }

    #[test]
    fn remaining_attempts_counts_down() {
        let state = play(&game("zebra"), "xq");
        assert_eq!(state.remaining_attempts(), 4);
    }

    #[test]
    fn outcome_display() {
        assert_eq!(Outcome::InProgress.to_string(), "in progress");
        assert_eq!(Outcome::Won.to_string(), "won");
        assert_eq!(Outcome::Lost.to_string(), "lost");
    }
}
