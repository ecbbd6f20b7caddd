//! Word bank for hangman categories
//!
//! Maps each [`Category`] to an ordered, non-empty list of candidate words.
//! The built-in lists are embedded at compile time; a category can be
//! overridden with words loaded from a file.

mod embedded;
pub mod loader;

pub use embedded::{ANIMALS, COUNTRIES, FRUITS, PROGRAMMING};

use crate::core::Word;
use loader::words_from_slice;
use std::fmt;
use std::str::FromStr;

/// A named grouping of candidate words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Programming,
    Fruits,
    Animals,
    Countries,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Self; 4] = [
        Self::Programming,
        Self::Fruits,
        Self::Animals,
        Self::Countries,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Programming => "programming",
            Self::Fruits => "fruits",
            Self::Animals => "animals",
            Self::Countries => "countries",
        }
    }

    /// Position in [`Category::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Programming => 0,
            Self::Fruits => 1,
            Self::Animals => 2,
            Self::Countries => 3,
        }
    }

    /// The next category, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous category, wrapping around
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    const fn builtin_words(self) -> &'static [&'static str] {
        match self {
            Self::Programming => PROGRAMMING,
            Self::Fruits => FRUITS,
            Self::Animals => ANIMALS,
            Self::Countries => COUNTRIES,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for unknown category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryError(String);

impl fmt::Display for CategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for CategoryError {}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == needle)
            .ok_or_else(|| CategoryError(s.to_string()))
    }
}

/// Error type for misconfigured word banks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordBankError {
    EmptyCategory(Category),
}

impl fmt::Display for WordBankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory(category) => {
                write!(f, "Category '{category}' has no candidate words")
            }
        }
    }
}

impl std::error::Error for WordBankError {}

/// Static mapping from category to candidate words
///
/// Every category is guaranteed to hold at least one word.
#[derive(Debug, Clone)]
pub struct WordBank {
    lists: [Vec<Word>; 4],
}

impl WordBank {
    /// The embedded word lists
    ///
    /// # Examples
    /// ```
    /// use hangman::wordlists::{Category, WordBank};
    ///
    /// let bank = WordBank::builtin();
    /// assert!(bank.words(Category::Fruits).iter().any(|w| w.text() == "mango"));
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            lists: Category::ALL.map(|c| words_from_slice(c.builtin_words())),
        }
    }

    /// Replace the words of one category
    ///
    /// # Errors
    /// Returns `WordBankError::EmptyCategory` if `words` is empty.
    pub fn with_words(mut self, category: Category, words: Vec<Word>) -> Result<Self, WordBankError> {
        if words.is_empty() {
            return Err(WordBankError::EmptyCategory(category));
        }
        self.lists[category.index()] = words;
        Ok(self)
    }

    /// Candidate words for a category, in their original order
    #[must_use]
    pub fn words(&self, category: Category) -> &[Word] {
        &self.lists[category.index()]
    }

    /// Check whether `word` is a candidate of `category`
    #[must_use]
    pub fn contains(&self, category: Category, word: &Word) -> bool {
        self.words(category).contains(word)
    }

    /// Iterate over `(category, words)` pairs in display order
    pub fn categories(&self) -> impl Iterator<Item = (Category, &[Word])> {
        Category::ALL.into_iter().map(|c| (c, self.words(c)))
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::builtin()
    }
}
