//! Generation configuration

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::charset::PasswordType;
use crate::error::{GeneratorError, Result};
use crate::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

/// Settings read by a single generation call.
///
/// The `with_*` methods consume the value and return an updated copy, so a
/// base configuration can be shared and specialised without aliasing. Zero
/// lengths are ignored and the previous value is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Character-set policy
    #[serde(default)]
    pub password_type: PasswordType,
    /// Minimum password length
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    /// Maximum password length
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Characters that never appear in the output
    #[serde(default)]
    pub excluded_chars: BTreeSet<char>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            password_type: PasswordType::default(),
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            excluded_chars: BTreeSet::new(),
        }
    }
}

impl GenerationConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    ///
    /// # Example
    /// ```
    /// use passgen::{GenerationConfig, PasswordType};
    ///
    /// let config = GenerationConfig::from_json(r#"{"password_type": "numeric", "max_length": 6}"#).unwrap();
    /// assert_eq!(config.password_type, PasswordType::Numeric);
    /// assert_eq!(config.min_length, 5);
    /// assert_eq!(config.max_length, 6);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_type(mut self, password_type: PasswordType) -> Self {
        self.password_type = password_type;
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        if min_length > 0 {
            self.min_length = min_length;
        }
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        if max_length > 0 {
            self.max_length = max_length;
        }
        self
    }

    pub fn with_excluded_char(mut self, c: char) -> Self {
        self.excluded_chars.insert(c);
        self
    }

    pub fn with_excluded_chars<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.excluded_chars.extend(chars);
        self
    }

    pub fn without_excluded_char(mut self, c: char) -> Self {
        self.excluded_chars.remove(&c);
        self
    }

    /// Check that the length range is usable.
    ///
    /// Zero lengths can only get here through the public fields or JSON, since
    /// the builder ignores them.
    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 || self.max_length == 0 {
            return Err(GeneratorError::InvalidLength {
                min: self.min_length,
                max: self.max_length,
            });
        }
        if self.min_length > self.max_length {
            return Err(GeneratorError::InvalidRange {
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }
}
