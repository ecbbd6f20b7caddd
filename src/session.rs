//! Game session: the single actor that owns the current game
//!
//! Front ends feed letter selections, category changes and new-game requests
//! into a [`Session`] one at a time. Each request replaces the current
//! [`GameState`] and returns the events derived from that transition.

use crate::core::{GameEvent, GameListener, GameState, Letter, start_new_game, transition_events};
use crate::views::keyboard;
use crate::wordlists::{Category, WordBank, WordBankError};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub struct Session {
    bank: WordBank,
    category: Category,
    state: GameState,
    rng: StdRng,
}

impl Session {
    /// Create a session and start its first game
    ///
    /// # Errors
    /// Returns `WordBankError::EmptyCategory` if `category` has no words.
    pub fn new(bank: WordBank, category: Category, mut rng: StdRng) -> Result<Self, WordBankError> {
        let state = start_new_game(&bank, category, &mut rng)?;
        Ok(Self {
            bank,
            category,
            state,
            rng,
        })
    }

    /// Create a session seeded from `seed`, or from OS entropy when `None`
    ///
    /// # Errors
    /// Returns `WordBankError::EmptyCategory` if `category` has no words.
    pub fn with_seed(
        bank: WordBank,
        category: Category,
        seed: Option<u64>,
    ) -> Result<Self, WordBankError> {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::new(bank, category, rng)
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub const fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Submit a letter selection
    ///
    /// Disabled selections (already guessed, or game over) change nothing and
    /// return no events.
    pub fn guess(&mut self, letter: Letter) -> Vec<GameEvent> {
        self.guess_with(letter, &mut [])
    }

    /// Submit a letter selection and notify `listeners` of every event
    pub fn guess_with(
        &mut self,
        letter: Letter,
        listeners: &mut [&mut dyn GameListener],
    ) -> Vec<GameEvent> {
        let Some(next) = keyboard::select_letter(&self.state, letter) else {
            tracing::debug!(%letter, "ignoring disabled letter");
            return Vec::new();
        };

        let events = transition_events(&self.state, &next);
        self.state = next;

        for event in &events {
            if event.is_outcome() {
                tracing::debug!(
                    word = %self.state.word(),
                    outcome = %self.state.outcome(),
                    wrong = self.state.wrong_count(),
                    "game finished"
                );
            }
            for listener in listeners.iter_mut() {
                listener.on_event(&self.state, event);
            }
        }

        events
    }

    /// Discard the current game and start another in the same category
    ///
    /// # Errors
    /// Returns `WordBankError::EmptyCategory` if the category has no words.
    pub fn new_game(&mut self) -> Result<(), WordBankError> {
        self.state = start_new_game(&self.bank, self.category, &mut self.rng)?;
        Ok(())
    }

    /// Switch category and start a new game in it
    ///
    /// Refused while the current game is over (returns `Ok(false)`); start a
    /// new game first.
    ///
    /// # Errors
    /// Returns `WordBankError::EmptyCategory` if the category has no words.
    pub fn change_category(&mut self, category: Category) -> Result<bool, WordBankError> {
        if self.state.is_over() {
            return Ok(false);
        }
        let state = start_new_game(&self.bank, category, &mut self.rng)?;
        self.category = category;
        self.state = state;
        tracing::debug!(%category, "category changed");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;

    fn session() -> Session {
        Session::with_seed(WordBank::builtin(), Category::Animals, Some(3)).unwrap()
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    /// Guess every letter of the word so the game is won
    fn win(session: &mut Session) -> Vec<GameEvent> {
        let word: Vec<Letter> = session.state().word().letters().collect();
        word.into_iter().flat_map(|l| session.guess(l)).collect()
    }

    /// Guess letters absent from the word until the game is lost
    fn lose(session: &mut Session) {
        let misses: Vec<Letter> = Letter::all()
            .filter(|&l| !session.state().word().has_letter(l))
            .take(6)
            .collect();
        for l in misses {
            session.guess(l);
        }
    }

    #[test]
    fn starts_in_progress_with_category_word() {
        let s = session();
        assert_eq!(s.state().outcome(), Outcome::InProgress);
        assert!(s.bank().contains(Category::Animals, s.state().word()));
    }

    #[test]
    fn same_seed_same_word() {
        let a = session();
        let b = session();
        assert_eq!(a.state().word(), b.state().word());
    }

    #[test]
    fn winning_emits_one_won_event() {
        let mut s = session();
        let events = win(&mut s);
        assert_eq!(s.state().outcome(), Outcome::Won);
        assert_eq!(events.iter().filter(|e| **e == GameEvent::Won).count(), 1);
        assert!(!events.contains(&GameEvent::Lost));
    }

    #[test]
    fn guesses_after_game_over_are_ignored() {
        let mut s = session();
        lose(&mut s);
        assert_eq!(s.state().outcome(), Outcome::Lost);

        let snapshot = s.state().clone();
        let word: Vec<Letter> = snapshot.word().letters().collect();
        for l in word {
            assert!(s.guess(l).is_empty());
        }
        assert_eq!(s.state(), &snapshot);
    }

    #[test]
    fn new_game_resets_state() {
        let mut s = session();
        lose(&mut s);
        s.new_game().unwrap();

        assert_eq!(s.state().outcome(), Outcome::InProgress);
        assert!(s.state().guessed().is_empty());
        assert_eq!(s.state().wrong_count(), 0);
        assert_eq!(s.category(), Category::Animals);
    }

    #[test]
    fn change_category_starts_new_game() {
        let mut s = session();
        s.guess(letter('e'));

        assert!(s.change_category(Category::Countries).unwrap());
        assert_eq!(s.category(), Category::Countries);
        assert_eq!(s.state().category(), Category::Countries);
        assert!(s.state().guessed().is_empty());
        assert!(s.bank().contains(Category::Countries, s.state().word()));
    }

    #[test]
    fn change_category_refused_when_over() {
        let mut s = session();
        win(&mut s);

        assert!(!s.change_category(Category::Fruits).unwrap());
        assert_eq!(s.category(), Category::Animals);
        assert_eq!(s.state().outcome(), Outcome::Won);
    }

    struct Recorder(Vec<GameEvent>);

    impl GameListener for Recorder {
        fn on_event(&mut self, _state: &GameState, event: &GameEvent) {
            self.0.push(*event);
        }
    }

    #[test]
    fn listeners_receive_every_event() {
        let mut s = session();
        let mut recorder = Recorder(Vec::new());

        let first = s.state().word().letters().next().unwrap();
        let returned = s.guess_with(first, &mut [&mut recorder]);
        assert_eq!(recorder.0, returned);
        assert_eq!(recorder.0, [GameEvent::Hit(first)]);

        s.guess_with(first, &mut [&mut recorder]);
        assert_eq!(recorder.0.len(), 1);
    }
}
