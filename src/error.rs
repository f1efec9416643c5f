//! Error types for passgen

use thiserror::Error;

use crate::charset::PasswordType;

/// Main error type for password generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// A configured length is zero
    #[error("Invalid length: min {min} and max {max} must both be positive")]
    InvalidLength { min: usize, max: usize },

    /// Minimum length is greater than maximum length
    #[error("Invalid length range: min {min} is greater than max {max}")]
    InvalidRange { min: usize, max: usize },

    /// Every character of the policy range is excluded
    #[error("No characters left to draw for type '{password_type}' ({excluded} excluded)")]
    ExhaustedAlphabet {
        password_type: PasswordType,
        excluded: usize,
    },

    /// Password type name could not be parsed
    #[error("Unknown password type: {0}")]
    UnknownPasswordType(String),

    /// JSON document is malformed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for GeneratorError {
    fn from(err: serde_json::Error) -> Self {
        GeneratorError::ParseError(err.to_string())
    }
}

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
