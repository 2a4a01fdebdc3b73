//! Run configuration files.
//!
//! A run is described by a JSON document. Every section is optional and
//! falls back to its defaults:
//!
//! ```json
//! {
//!   "functions": ["add", "subtract", "multiply"],
//!   "evolution": { "population_size": 200, "max_generations": 300 },
//!   "game": { "size": 4, "max_rounds": 50 }
//! }
//! ```

use crate::error::GameError;
use crate::game::GridConfig;
use crate::gp::{EvolutionConfig, Registry, CATALOG};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::Path;

/// Everything needed to start an evolution run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Names of built-in functions available to trees.
    pub functions: Vec<String>,
    /// Evolution parameters.
    pub evolution: EvolutionConfig,
    /// Board used for competitive runs.
    pub game: GridConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            functions: CATALOG.iter().map(|name| (*name).to_string()).collect(),
            evolution: EvolutionConfig::default(),
            game: GridConfig::default(),
        }
    }
}

impl RunConfig {
    /// Read a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or names an
    /// unknown function.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid configuration.
    pub fn from_json(text: &str) -> Result<Self, ConfigFileError> {
        let config: Self = serde_json::from_str(text)?;
        config.registry()?;
        config.game.validate()?;
        Ok(config)
    }

    /// Build the function registry named by `functions`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first unknown function.
    pub fn registry(&self) -> Result<Registry, ConfigFileError> {
        Registry::from_names(&self.functions).map_err(ConfigFileError::UnknownFunction)
    }
}

/// Failure to load a [`RunConfig`].
#[derive(Debug)]
pub enum ConfigFileError {
    /// The file could not be read.
    Io(io::Error),
    /// The contents were not valid configuration JSON.
    Parse(serde_json::Error),
    /// A function name is not built in.
    UnknownFunction(String),
    /// The game section describes an unplayable board.
    Game(GameError),
}

impl fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read configuration: {e}"),
            Self::Parse(e) => write!(f, "invalid configuration: {e}"),
            Self::UnknownFunction(name) => {
                write!(f, "unknown function '{name}', expected one of {}", CATALOG.join(", "))
            }
            Self::Game(e) => write!(f, "invalid game settings: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Game(e) => Some(e),
            Self::UnknownFunction(_) => None,
        }
    }
}

impl From<io::Error> for ConfigFileError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GameError> for ConfigFileError {
    fn from(e: GameError) -> Self {
        Self::Game(e)
    }
}

impl From<serde_json::Error> for ConfigFileError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
