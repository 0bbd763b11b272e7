//! Configuration management for pet defaults and care rules.
//!
//! Structures map to `vivarium.toml`. Every section is optional; missing
//! keys fall back to the values in the `Default` impls.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impl)
//! 2. `vivarium.toml` file (overrides defaults)
//!
//! ## Example `vivarium.toml`
//!
//! ```toml
//! [defaults]
//! name = "Pebble"
//! happiness = 60
//!
//! [species]
//! name = "Turtle"
//! stages = ["Hatchling", "Turtle"]
//! max_lifespan = 150
//! habitat = "Pond"
//!
//! [care]
//! favorite_food = "Lettuce"
//!
//! [evolution]
//! happiness_threshold = 80
//! ```

use crate::error::ValidationError;
use crate::species::SpeciesDescriptor;
use serde::{Deserialize, Serialize};
use std::path::Path;
use vivarium_data::{DEFAULT_AGE, DEFAULT_HAPPINESS, DEFAULT_HEALTH, DEFAULT_PET_NAME, MAX_STAT};

/// Starting values for pets built without explicit stats.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DefaultsConfig {
    pub name: String,
    pub age: i64,
    pub happiness: i64,
    pub health: i64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_PET_NAME.to_string(),
            age: DEFAULT_AGE as i64,
            happiness: i64::from(DEFAULT_HAPPINESS),
            health: i64::from(DEFAULT_HEALTH),
        }
    }
}

/// Species assigned to pets built without one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SpeciesConfig {
    pub name: String,
    pub stages: Vec<String>,
    pub max_lifespan: i64,
    pub habitat: String,
}

impl Default for SpeciesConfig {
    fn default() -> Self {
        let generic = vivarium_data::GENERIC;
        Self {
            name: generic.name.to_string(),
            stages: generic.stages.iter().map(|s| (*s).to_string()).collect(),
            max_lifespan: generic.max_lifespan as i64,
            habitat: generic.habitat.to_string(),
        }
    }
}

/// Stat bonuses granted by feeding and playing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CareConfig {
    pub favorite_food: String,
    pub favorite_food_bonus: i64,
    pub other_food_bonus: i64,
    pub favorite_game: String,
    pub favorite_game_bonus: i64,
    pub other_game_bonus: i64,
}

impl Default for CareConfig {
    fn default() -> Self {
        Self {
            favorite_food: "Meat".to_string(),
            favorite_food_bonus: 10,
            other_food_bonus: 5,
            favorite_game: "Fetch".to_string(),
            favorite_game_bonus: 15,
            other_game_bonus: 8,
        }
    }
}

/// A pet evolves once both stats are strictly above their thresholds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct EvolutionConfig {
    pub happiness_threshold: u8,
    pub health_threshold: u8,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            happiness_threshold: 75,
            health_threshold: 75,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PetConfig {
    pub defaults: DefaultsConfig,
    pub species: SpeciesConfig,
    pub care: CareConfig,
    pub evolution: EvolutionConfig,
}

impl PetConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    ///
    /// # Validation Rules
    /// - The default species must itself be a valid species
    /// - Favorite food and game must not be blank
    /// - Bonuses must be non-negative
    /// - Thresholds must leave room to evolve (below the stat maximum)
    pub fn validate(&self) -> anyhow::Result<()> {
        self.default_species()?;

        anyhow::ensure!(
            !self.care.favorite_food.trim().is_empty(),
            "Favorite food cannot be empty"
        );
        anyhow::ensure!(
            !self.care.favorite_game.trim().is_empty(),
            "Favorite game cannot be empty"
        );
        anyhow::ensure!(
            self.care.favorite_food_bonus >= 0 && self.care.other_food_bonus >= 0,
            "Food bonuses must be non-negative"
        );
        anyhow::ensure!(
            self.care.favorite_game_bonus >= 0 && self.care.other_game_bonus >= 0,
            "Game bonuses must be non-negative"
        );

        anyhow::ensure!(
            self.evolution.happiness_threshold < MAX_STAT,
            "Happiness threshold must be below {MAX_STAT}"
        );
        anyhow::ensure!(
            self.evolution.health_threshold < MAX_STAT,
            "Health threshold must be below {MAX_STAT}"
        );

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields the defaults; an unreadable or invalid file is an
    /// error.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)
            .map_err(|e| e.context(format!("invalid config {}", path.display())))?;
        tracing::info!(path = %path.display(), fingerprint = %config.fingerprint(), "Config loaded");
        Ok(config)
    }

    /// Builds the species descriptor described by `[species]`.
    pub fn default_species(&self) -> Result<SpeciesDescriptor, ValidationError> {
        SpeciesDescriptor::new(
            self.species.name.clone(),
            self.species.stages.clone(),
            self.species.max_lifespan,
            self.species.habitat.clone(),
        )
    }

    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.defaults).as_bytes());
        hasher.update(format!("{:?}", self.species).as_bytes());
        hasher.update(format!("{:?}", self.care).as_bytes());
        hasher.update(format!("{:?}", self.evolution).as_bytes());
        hex::encode(hasher.finalize())
    }
}
