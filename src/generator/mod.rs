//! Password generation
//!
//! [`GenerationConfig`] holds the settings and [`Generator`] runs the
//! character-by-character construction loop over them.

mod config;
mod password;

pub use config::GenerationConfig;
pub use password::Generator;
