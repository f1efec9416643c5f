//! # passgen
//!
//! Random password generation from named character-set policies.
//!
//! ## Features
//!
//! - Five password types over one fixed 97-character alphabet
//! - Fixed or random length within a min/max range
//! - Excluded characters
//! - No two adjacent characters are equal
//! - JSON fixtures and configuration
//!
//! Randomness comes from `rand`'s thread-local generator. It is not meant
//! for cryptographic secrets.
//!
//! ## Example
//!
//! ```
//! use passgen::{Generator, PasswordType};
//!
//! let mut generator = Generator::with_lengths(PasswordType::Alpha, 3, 5);
//! generator.add_excluded_chars(['a', 'A']);
//!
//! let password = generator.generate().unwrap();
//! assert!((3..=5).contains(&password.len()));
//! assert!(!password.contains('a') && !password.contains('A'));
//! ```

pub mod charset;
pub mod error;
pub mod fixtures;
pub mod generator;

// Re-export main types
pub use charset::{ALPHABET, PasswordType};
pub use error::{GeneratorError, Result};
pub use fixtures::{FixtureSet, PasswordFixture};
pub use generator::{GenerationConfig, Generator};

/// Default minimum password length
pub const DEFAULT_MIN_LENGTH: usize = 5;

/// Default maximum password length
pub const DEFAULT_MAX_LENGTH: usize = 10;
