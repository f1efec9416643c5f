//! Password types and the shared character draw

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::alphabet::{ALPHABET, DIGITS_START, LAST_INDEX, SYMBOLS_START, UPPERCASE_START};
use crate::error::{GeneratorError, Result};

/// Named character-set policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordType {
    /// Letters, digits and symbols
    #[default]
    All,
    /// Only letters
    Alpha,
    /// Only digits
    Numeric,
    /// Letters and digits
    Alphanumeric,
    /// Only symbols
    Symbols,
}

impl PasswordType {
    /// Every password type, in declaration order
    pub const VARIANTS: [PasswordType; 5] = [
        PasswordType::All,
        PasswordType::Alpha,
        PasswordType::Numeric,
        PasswordType::Alphanumeric,
        PasswordType::Symbols,
    ];

    /// Inclusive `(start, end)` index range into [`ALPHABET`]
    pub const fn range(self) -> (usize, usize) {
        match self {
            PasswordType::All => (UPPERCASE_START, LAST_INDEX),
            PasswordType::Alpha => (UPPERCASE_START, DIGITS_START - 1),
            PasswordType::Numeric => (DIGITS_START, SYMBOLS_START - 1),
            PasswordType::Alphanumeric => (UPPERCASE_START, SYMBOLS_START - 1),
            PasswordType::Symbols => (SYMBOLS_START, LAST_INDEX),
        }
    }

    /// Characters this type may draw from
    pub fn chars(self) -> &'static [char] {
        let (start, end) = self.range();
        &ALPHABET[start..=end]
    }

    /// Lowercase name, as used in fixtures and configuration files
    pub const fn name(self) -> &'static str {
        match self {
            PasswordType::All => "all",
            PasswordType::Alpha => "alpha",
            PasswordType::Numeric => "numeric",
            PasswordType::Alphanumeric => "alphanumeric",
            PasswordType::Symbols => "symbols",
        }
    }

    /// Whether `c` is in this type's range
    pub fn contains(self, c: char) -> bool {
        self.chars().contains(&c)
    }

    /// Number of characters left once `excluded` is removed from the range
    pub fn available(self, excluded: &BTreeSet<char>) -> usize {
        self.chars().iter().filter(|&c| !excluded.contains(c)).count()
    }

    /// Draw one random character from this type's range.
    ///
    /// Candidates equal to `previous` or present in `excluded` are rejected and
    /// redrawn. Excluded characters outside the range never match anything.
    ///
    /// # Errors
    /// Returns [`GeneratorError::ExhaustedAlphabet`] when no character in the
    /// range satisfies both rules, since sampling could never terminate.
    pub fn draw_char<R: Rng>(
        self,
        rng: &mut R,
        excluded: &BTreeSet<char>,
        previous: Option<char>,
    ) -> Result<char> {
        let eligible = self
            .chars()
            .iter()
            .filter(|&&c| Some(c) != previous && !excluded.contains(&c))
            .count();

        if eligible == 0 {
            let excluded = self.chars().len() - self.available(excluded);
            log::warn!(
                "Cannot draw a '{}' character: {} excluded, previous {:?}",
                self,
                excluded,
                previous
            );
            return Err(GeneratorError::ExhaustedAlphabet {
                password_type: self,
                excluded,
            });
        }

        let (start, end) = self.range();
        loop {
            let candidate = ALPHABET[rng.random_range(start..=end)];
            if Some(candidate) == previous || excluded.contains(&candidate) {
                continue;
            }
            return Ok(candidate);
        }
    }
}

impl fmt::Display for PasswordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PasswordType {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self> {
        PasswordType::VARIANTS
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| GeneratorError::UnknownPasswordType(s.to_string()))
    }
}
