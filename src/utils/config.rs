//! Widget configuration file: RNG seed, motion tunables and the fact book.
use std::path::Path;

use serde::Deserialize;

use dice_core::{ConfigError, DiceConfig};

use crate::utils::facts::{Fact, FactBook, default_facts};

/// Shape of `assets/dice.toml`. Every section is optional.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    // Fixed seed for reproducible spins, entropy when absent.
    pub seed: Option<u64>,
    pub dice: DiceConfig,
    pub facts: Vec<Fact>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            seed: None,
            dice: DiceConfig::default(),
            facts: default_facts(),
        }
    }
}

impl WidgetConfig {
    /// Parses and validates a TOML document, returning the config and its fact book.
    pub fn from_toml_str(source: &str) -> Result<(Self, FactBook), ConfigError> {
        let config: WidgetConfig = toml::from_str(source)?;
        config.dice.validate()?;
        let book = FactBook::new(config.facts.clone())?;
        Ok((config, book))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<(Self, FactBook), ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
