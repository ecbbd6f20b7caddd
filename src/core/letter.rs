//! A single guessable letter

use std::fmt;

/// One lowercase ASCII letter (`a`-`z`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for characters that cannot be guessed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    NotAlphabetic(char),
    /// Input was empty or longer than one character
    NotSingle(String),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAlphabetic(c) => write!(f, "'{c}' is not a letter a-z"),
            Self::NotSingle(input) if input.is_empty() => write!(f, "No letter given"),
            Self::NotSingle(input) => write!(f, "'{input}' is not a single letter"),
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Create a letter from a character, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `LetterError::NotAlphabetic` for anything outside `a-z`/`A-Z`.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::new('Q').unwrap().as_char(), 'q');
    /// assert!(Letter::new('7').is_err());
    /// ```
    pub fn new(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_lowercase() as u8))
        } else {
            Err(LetterError::NotAlphabetic(c))
        }
    }

    /// Parse a single-letter string such as a line typed at a prompt
    ///
    /// # Errors
    /// Returns `LetterError::NotSingle` if the trimmed input is not exactly one
    /// character, or `LetterError::NotAlphabetic` if that character is not a letter.
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(LetterError::NotSingle(trimmed.to_string())),
        }
    }

    /// Construct from a byte already known to be `b'a'..=b'z'`
    pub(crate) const fn from_byte_unchecked(byte: u8) -> Self {
        debug_assert!(byte.is_ascii_lowercase());
        Self(byte)
    }

    /// All 26 letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }

    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
