//! Generation fixtures
//!
//! Loads named generation cases from a JSON document of the form
//! `{"data": [{"type": "numeric", "min": 8, "max": 8, "excluded": ["0"]}]}`
//! and turns each case into a configured [`Generator`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::charset::PasswordType;
use crate::error::Result;
use crate::generator::{GenerationConfig, Generator};

/// A single fixture case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordFixture {
    #[serde(rename = "type")]
    pub password_type: PasswordType,
    pub min: i64,
    pub max: i64,
    /// Only the first character of each entry is used
    #[serde(default)]
    pub excluded: Vec<String>,
}

impl PasswordFixture {
    /// Characters excluded by this fixture; empty entries are skipped
    pub fn excluded_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.excluded.iter().filter_map(|s| s.chars().next())
    }

    /// Build the generation config.
    ///
    /// Non-positive lengths leave the defaults in place, like the setters.
    pub fn to_config(&self) -> GenerationConfig {
        GenerationConfig::default()
            .with_type(self.password_type)
            .with_min_length(positive_length(self.min))
            .with_max_length(positive_length(self.max))
            .with_excluded_chars(self.excluded_chars())
    }

    pub fn to_generator(&self) -> Generator {
        Generator::from_config(self.to_config())
    }
}

fn positive_length(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

/// All cases of a fixture document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureSet {
    pub data: Vec<PasswordFixture>,
}

impl FixtureSet {
    pub fn from_json(json: &str) -> Result<Self> {
        // Strip UTF-8 BOM if present
        let json = json.strip_prefix('\u{feff}').unwrap_or(json);
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a fixture file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let set = Self::from_json(&contents)?;
        log::debug!("Loaded {} fixtures from {}", set.len(), path.display());
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PasswordFixture> {
        self.data.iter()
    }
}

impl<'a> IntoIterator for &'a FixtureSet {
    type Item = &'a PasswordFixture;
    type IntoIter = std::slice::Iter<'a, PasswordFixture>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
