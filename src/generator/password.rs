//! Password generator
//!
//! Picks a length within the configured range, then draws one character at a
//! time from the configured [`PasswordType`] so that no character is excluded
//! and no two neighbours are equal.

use std::collections::BTreeSet;

use rand::Rng;

use super::config::GenerationConfig;
use crate::charset::PasswordType;
use crate::error::{GeneratorError, Result};

/// Upper bound on the buffer reserved up front; longer passwords grow as they go
const PREALLOC_LIMIT: usize = 256;

/// Configurable password generator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generator {
    config: GenerationConfig,
}

impl Generator {
    /// Create a generator with default settings.
    ///
    /// Defaults:
    /// - type: `All`
    /// - min length: 5
    /// - max length: 10
    /// - excluded characters: none
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(password_type: PasswordType) -> Self {
        Self::from_config(GenerationConfig::default().with_type(password_type))
    }

    pub fn with_min_length(password_type: PasswordType, min_length: usize) -> Self {
        Self::from_config(
            GenerationConfig::default()
                .with_type(password_type)
                .with_min_length(min_length),
        )
    }

    pub fn with_lengths(password_type: PasswordType, min_length: usize, max_length: usize) -> Self {
        Self::from_config(
            GenerationConfig::default()
                .with_type(password_type)
                .with_min_length(min_length)
                .with_max_length(max_length),
        )
    }

    pub fn from_config(config: GenerationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn password_type(&self) -> PasswordType {
        self.config.password_type
    }

    pub fn min_length(&self) -> usize {
        self.config.min_length
    }

    pub fn max_length(&self) -> usize {
        self.config.max_length
    }

    pub fn excluded_chars(&self) -> &BTreeSet<char> {
        &self.config.excluded_chars
    }

    pub fn set_type(&mut self, password_type: PasswordType) -> &mut Self {
        self.config.password_type = password_type;
        self
    }

    /// Set the minimum length; zero is ignored
    pub fn set_min_length(&mut self, min_length: usize) -> &mut Self {
        if min_length > 0 {
            self.config.min_length = min_length;
        }
        self
    }

    /// Set the maximum length; zero is ignored
    pub fn set_max_length(&mut self, max_length: usize) -> &mut Self {
        if max_length > 0 {
            self.config.max_length = max_length;
        }
        self
    }

    /// Exclude a character from generated passwords. Adding it twice is a no-op.
    pub fn add_excluded_char(&mut self, c: char) -> &mut Self {
        self.config.excluded_chars.insert(c);
        self
    }

    pub fn add_excluded_chars<I: IntoIterator<Item = char>>(&mut self, chars: I) -> &mut Self {
        self.config.excluded_chars.extend(chars);
        self
    }

    /// Make a character eligible again. Removing one that is not excluded is a no-op.
    pub fn remove_excluded_char(&mut self, c: char) -> &mut Self {
        self.config.excluded_chars.remove(&c);
        self
    }

    /// Generate a password using the thread-local RNG.
    ///
    /// # Example
    /// ```
    /// use passgen::{Generator, PasswordType};
    ///
    /// let password = Generator::with_lengths(PasswordType::Numeric, 8, 8).generate().unwrap();
    /// assert_eq!(password.len(), 8);
    /// assert!(password.chars().all(|c| c.is_ascii_digit()));
    /// ```
    pub fn generate(&self) -> Result<String> {
        self.generate_with(&mut rand::rng())
    }

    /// Generate a password drawing from `rng`
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Result<String> {
        self.config.validate()?;

        let (min, max) = (self.config.min_length, self.config.max_length);
        let length = if min == max {
            min
        } else {
            rng.random_range(min..=max)
        };

        log::debug!(
            "Generating '{}' password of length {} ({} excluded)",
            self.config.password_type,
            length,
            self.config.excluded_chars.len()
        );

        let password_type = self.config.password_type;
        let available = password_type.available(&self.config.excluded_chars);
        if available == 0 || (available == 1 && length > 1) {
            log::warn!(
                "Cannot build a '{}' password of length {} from {} available characters",
                password_type,
                length,
                available
            );
            return Err(GeneratorError::ExhaustedAlphabet {
                password_type,
                excluded: password_type.chars().len() - available,
            });
        }

        let mut password = String::with_capacity(length.min(PREALLOC_LIMIT));
        let mut previous = None;

        for _ in 0..length {
            let c = password_type.draw_char(rng, &self.config.excluded_chars, previous)?;
            password.push(c);
            previous = Some(c);
        }

        Ok(password)
    }

    /// Generate `count` passwords, stopping at the first error
    pub fn generate_many(&self, count: usize) -> Result<Vec<String>> {
        let mut rng = rand::rng();
        (0..count).map(|_| self.generate_with(&mut rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn assert_no_adjacent_repeats(password: &str) {
        let chars: Vec<char> = password.chars().collect();
        for pair in chars.windows(2) {
            assert_ne!(pair[0], pair[1], "Adjacent repeat in {:?}", password);
        }
    }

    #[test]
    fn test_new_defaults() {
        let generator = Generator::new();
        assert_eq!(generator.password_type(), PasswordType::All);
        assert_eq!(generator.min_length(), 5);
        assert_eq!(generator.max_length(), 10);
        assert!(generator.excluded_chars().is_empty());
    }

    #[test]
    fn test_constructors() {
        let generator = Generator::with_type(PasswordType::Alpha);
        assert_eq!(generator.password_type(), PasswordType::Alpha);
        assert_eq!((generator.min_length(), generator.max_length()), (5, 10));

        let generator = Generator::with_min_length(PasswordType::Numeric, 7);
        assert_eq!((generator.min_length(), generator.max_length()), (7, 10));

        let generator = Generator::with_lengths(PasswordType::Symbols, 2, 3);
        assert_eq!((generator.min_length(), generator.max_length()), (2, 3));

        let generator = Generator::with_lengths(PasswordType::Symbols, 0, 0);
        assert_eq!((generator.min_length(), generator.max_length()), (5, 10));
    }

    #[test]
    fn test_setters_chain() {
        let mut generator = Generator::new();
        generator
            .set_type(PasswordType::Alphanumeric)
            .set_min_length(12)
            .set_max_length(16)
            .add_excluded_chars("O0Il1".chars())
            .remove_excluded_char('I');

        assert_eq!(generator.password_type(), PasswordType::Alphanumeric);
        assert_eq!((generator.min_length(), generator.max_length()), (12, 16));
        assert_eq!(generator.excluded_chars().len(), 4);
        assert!(!generator.excluded_chars().contains(&'I'));
    }

    #[test]
    fn test_zero_lengths_ignored() {
        let mut generator = Generator::new();
        generator.set_min_length(0).set_max_length(0);
        assert_eq!((generator.min_length(), generator.max_length()), (5, 10));
    }

    #[test]
    fn test_add_excluded_char_idempotent() {
        let mut once = Generator::new();
        once.add_excluded_char('a');
        let mut twice = Generator::new();
        twice.add_excluded_char('a').add_excluded_char('a');
        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_absent_char_is_noop() {
        let mut generator = Generator::new();
        generator.add_excluded_char('a').remove_excluded_char('b');
        assert_eq!(generator.excluded_chars().len(), 1);
    }

    #[test]
    fn test_fixed_length() {
        let generator = Generator::with_lengths(PasswordType::All, 12, 12);
        for _ in 0..50 {
            assert_eq!(generator.generate().unwrap().chars().count(), 12);
        }
    }

    #[test]
    fn test_length_within_range() {
        let generator = Generator::with_lengths(PasswordType::Alphanumeric, 3, 9);
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = BTreeSet::new();
        for _ in 0..500 {
            let len = generator.generate_with(&mut rng).unwrap().chars().count();
            assert!((3..=9).contains(&len), "Wrong length {}", len);
            seen.insert(len);
        }
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn test_numeric_scenario() {
        let generator = Generator::with_lengths(PasswordType::Numeric, 8, 8);
        for _ in 0..100 {
            let password = generator.generate().unwrap();
            assert_eq!(password.len(), 8);
            assert!(password.chars().all(|c| c.is_ascii_digit()));
            assert_no_adjacent_repeats(&password);
        }
    }

    #[test]
    fn test_alpha_scenario_with_exclusions() {
        let mut generator = Generator::with_lengths(PasswordType::Alpha, 3, 5);
        generator.add_excluded_chars(['a', 'A']);
        for _ in 0..200 {
            let password = generator.generate().unwrap();
            assert!((3..=5).contains(&password.len()));
            assert!(password.chars().all(|c| c.is_ascii_alphabetic()));
            assert!(!password.contains('a') && !password.contains('A'));
            assert_no_adjacent_repeats(&password);
        }
    }

    #[test]
    fn test_symbols_single_char() {
        let generator = Generator::with_lengths(PasswordType::Symbols, 1, 1);
        for _ in 0..100 {
            let password = generator.generate().unwrap();
            let chars: Vec<char> = password.chars().collect();
            assert_eq!(chars.len(), 1);
            assert!(PasswordType::Symbols.contains(chars[0]));
        }
    }

    #[test]
    fn test_two_candidates_alternate() {
        let mut generator = Generator::with_lengths(PasswordType::Numeric, 6, 6);
        generator.add_excluded_chars("23456789".chars());
        let password = generator.generate().unwrap();
        assert!(password == "010101" || password == "101010", "{}", password);
    }

    #[test]
    fn test_single_candidate_single_char() {
        let mut generator = Generator::with_lengths(PasswordType::Numeric, 1, 1);
        generator.add_excluded_chars("012345678".chars());
        assert_eq!(generator.generate().unwrap(), "9");
    }

    #[test]
    fn test_single_candidate_cannot_repeat() {
        let mut generator = Generator::with_lengths(PasswordType::Numeric, 2, 2);
        generator.add_excluded_chars("012345678".chars());
        assert!(matches!(
            generator.generate(),
            Err(GeneratorError::ExhaustedAlphabet { .. })
        ));
    }

    #[test]
    fn test_all_digits_excluded() {
        let mut generator = Generator::with_lengths(PasswordType::Numeric, 2, 2);
        generator.add_excluded_chars("0123456789".chars());
        match generator.generate() {
            Err(GeneratorError::ExhaustedAlphabet { password_type, excluded }) => {
                assert_eq!(password_type, PasswordType::Numeric);
                assert_eq!(excluded, 10);
            }
            other => panic!("Expected ExhaustedAlphabet, got {:?}", other),
        }
    }

    #[test]
    fn test_exhausted_with_huge_length() {
        let mut generator = Generator::with_lengths(PasswordType::Numeric, usize::MAX, usize::MAX);
        generator.add_excluded_chars("0123456789".chars());
        assert!(matches!(
            generator.generate(),
            Err(GeneratorError::ExhaustedAlphabet { excluded: 10, .. })
        ));

        generator.remove_excluded_char('5');
        assert!(matches!(
            generator.generate(),
            Err(GeneratorError::ExhaustedAlphabet { excluded: 9, .. })
        ));
    }

    #[test]
    fn test_zero_length_config_rejected() {
        let config = GenerationConfig::from_json(r#"{"min_length": 0, "max_length": 0}"#).unwrap();
        assert!(matches!(
            Generator::from_config(config).generate(),
            Err(GeneratorError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_invalid_range() {
        let generator = Generator::with_lengths(PasswordType::All, 10, 5);
        assert!(matches!(
            generator.generate(),
            Err(GeneratorError::InvalidRange { min: 10, max: 5 })
        ));
    }

    #[test]
    fn test_excluded_then_removed_is_eligible_again() {
        let mut generator = Generator::with_lengths(PasswordType::Numeric, 1, 1);
        generator.add_excluded_chars("12345678".chars());
        generator.add_excluded_char('0').remove_excluded_char('0');

        let mut rng = StdRng::seed_from_u64(5);
        let drawn: BTreeSet<String> = (0..200)
            .map(|_| generator.generate_with(&mut rng).unwrap())
            .collect();
        assert!(drawn.contains("0"));
        assert!(drawn.contains("9"));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let generator = Generator::with_lengths(PasswordType::All, 8, 16);
        let a = generator.generate_with(&mut StdRng::seed_from_u64(2024)).unwrap();
        let b = generator.generate_with(&mut StdRng::seed_from_u64(2024)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_many() {
        let generator = Generator::with_lengths(PasswordType::Alpha, 6, 6);
        let passwords = generator.generate_many(25).unwrap();
        assert_eq!(passwords.len(), 25);
        assert!(passwords.iter().all(|p| p.len() == 6));

        let generator = Generator::with_lengths(PasswordType::Alpha, 6, 2);
        assert!(generator.generate_many(3).is_err());
    }
}
