//! The base pet entity.
//!
//! A pet owns its stats and advances through its species' evolution stages.
//! Stage changes are reported as [`PetEvent`]s: queued on the pet for
//! [`PetEntity::take_events`] and pushed to any subscribed listeners.

use crate::config::PetConfig;
use crate::error::ValidationError;
use crate::events::EvolutionListener;
use crate::ids::IdSource;
use crate::rules::CareRules;
use crate::species::SpeciesDescriptor;
use chrono::{DateTime, Utc};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use uuid::Uuid;
use vivarium_data::{
    PetEvent, PetSnapshot, DEFAULT_AGE, DEFAULT_HAPPINESS, DEFAULT_HEALTH, DEFAULT_PET_NAME,
    MAX_STAT, MIN_STAT,
};

/// Clamps a raw stat value into `[MIN_STAT, MAX_STAT]`.
pub fn clamp_stat(value: i64) -> u8 {
    value.clamp(i64::from(MIN_STAT), i64::from(MAX_STAT)) as u8
}

/// Negative ages become zero.
pub fn clamp_age(value: i64) -> u64 {
    value.max(0) as u64
}

/// Collects construction parameters for a [`PetEntity`].
#[derive(Debug, Clone)]
pub struct PetBuilder {
    id: Option<Uuid>,
    name: String,
    species: Option<Arc<SpeciesDescriptor>>,
    age: i64,
    happiness: i64,
    health: i64,
    rules: Arc<CareRules>,
}

impl Default for PetBuilder {
    fn default() -> Self {
        Self {
            id: None,
            name: DEFAULT_PET_NAME.to_string(),
            species: None,
            age: DEFAULT_AGE as i64,
            happiness: i64::from(DEFAULT_HAPPINESS),
            health: i64::from(DEFAULT_HEALTH),
            rules: Arc::new(CareRules::default()),
        }
    }
}

impl PetBuilder {
    /// Starts from the configured defaults, species and rules.
    pub fn from_config(config: &PetConfig) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            name: config.defaults.name.clone(),
            species: Some(Arc::new(config.default_species()?)),
            age: config.defaults.age,
            happiness: config.defaults.happiness,
            health: config.defaults.health,
            rules: Arc::new(CareRules::from_config(config)),
        })
    }

    #[must_use]
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Draws the id from `ids`.
    #[must_use]
    pub fn id_from(self, ids: &mut dyn IdSource) -> Self {
        let id = ids.next_id();
        self.id(id)
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn species(mut self, species: Arc<SpeciesDescriptor>) -> Self {
        self.species = Some(species);
        self
    }

    #[must_use]
    pub fn age(mut self, age: i64) -> Self {
        self.age = age;
        self
    }

    #[must_use]
    pub fn happiness(mut self, happiness: i64) -> Self {
        self.happiness = happiness;
        self
    }

    #[must_use]
    pub fn health(mut self, health: i64) -> Self {
        self.health = health;
        self
    }

    #[must_use]
    pub fn rules(mut self, rules: Arc<CareRules>) -> Self {
        self.rules = rules;
        self
    }

    /// Creates the pet at stage 0. Initial stats are clamped; the evolution
    /// rule is not applied until the first stat change.
    pub fn build(self) -> PetEntity {
        let species = self
            .species
            .unwrap_or_else(|| Arc::new(SpeciesDescriptor::generic()));
        let pet = PetEntity {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            species,
            created_at: Utc::now(),
            name: self.name,
            age: clamp_age(self.age),
            happiness: clamp_stat(self.happiness),
            health: clamp_stat(self.health),
            stage_index: 0,
            rules: self.rules,
            pending: Vec::new(),
            listeners: Vec::new(),
        };
        tracing::debug!(id = %pet.id, name = %pet.name, species = pet.species.name(), "Pet created");
        pet
    }
}

/// A named creature with clamped stats and a forward-only evolution stage.
///
/// Equality and hashing use the id alone.
pub struct PetEntity {
    id: Uuid,
    species: Arc<SpeciesDescriptor>,
    created_at: DateTime<Utc>,
    name: String,
    age: u64,
    happiness: u8,
    health: u8,
    stage_index: usize,
    rules: Arc<CareRules>,
    pending: Vec<PetEvent>,
    listeners: Vec<Box<dyn EvolutionListener>>,
}

impl PetEntity {
    #[must_use]
    pub fn builder() -> PetBuilder {
        PetBuilder::default()
    }

    /// A generic pet with default stats.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::builder().name(name).build()
    }

    #[must_use]
    pub fn with_species(name: impl Into<String>, species: Arc<SpeciesDescriptor>) -> Self {
        Self::builder().name(name).species(species).build()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn species(&self) -> &Arc<SpeciesDescriptor> {
        &self.species
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    pub fn happiness(&self) -> u8 {
        self.happiness
    }

    pub fn health(&self) -> u8 {
        self.health
    }

    pub fn stage_index(&self) -> usize {
        self.stage_index
    }

    /// Label of the current evolution stage.
    pub fn stage(&self) -> &str {
        &self.species.evolution_stages()[self.stage_index]
    }

    pub fn is_fully_evolved(&self) -> bool {
        self.stage_index == self.species.final_stage_index()
    }

    pub fn rules(&self) -> &CareRules {
        &self.rules
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_age(&mut self, age: i64) {
        self.age = clamp_age(age);
    }

    pub fn set_happiness(&mut self, happiness: i64) {
        self.happiness = clamp_stat(happiness);
        self.check_evolution();
    }

    pub fn set_health(&mut self, health: i64) {
        self.health = clamp_stat(health);
        self.check_evolution();
    }

    /// Feeds the pet. The favorite food heals more than anything else.
    pub fn feed(&mut self, food: &str) {
        let bonus = self.rules.food_bonus(food);
        tracing::debug!(pet = %self.name, food, bonus, "Feeding");
        self.set_health(i64::from(self.health).saturating_add(bonus));
    }

    /// Plays with the pet. The favorite game cheers it up more.
    pub fn play(&mut self, game: &str) {
        let bonus = self.rules.game_bonus(game);
        tracing::debug!(pet = %self.name, game, bonus, "Playing");
        self.set_happiness(i64::from(self.happiness).saturating_add(bonus));
    }

    /// Attaches a listener that sees every future event of this pet.
    pub fn subscribe(&mut self, listener: impl EvolutionListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Removes and returns queued events, oldest first.
    pub fn take_events(&mut self) -> Vec<PetEvent> {
        std::mem::take(&mut self.pending)
    }

    // Advances at most one stage per call, even when the stats would
    // qualify for several.
    fn check_evolution(&mut self) {
        if self.is_fully_evolved() || !self.rules.ready_to_evolve(self.happiness, self.health) {
            return;
        }
        self.stage_index += 1;

        let event = PetEvent::Evolved {
            pet_id: self.id,
            name: self.name.clone(),
            stage_index: self.stage_index,
            stage: self.stage().to_string(),
        };
        tracing::info!(id = %self.id, stage_index = self.stage_index, "{event}");
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
        self.pending.push(event);
    }

    /// Short stat line for troubleshooting.
    pub fn debug_state(&self) -> String {
        format!(
            "[DEBUG] {} (H:{}, Happy:{})",
            self.name, self.health, self.happiness
        )
    }

    pub fn snapshot(&self) -> PetSnapshot {
        PetSnapshot {
            id: self.id,
            name: self.name.clone(),
            species: self.species.name().to_string(),
            habitat: self.species.habitat().to_string(),
            max_lifespan: self.species.max_lifespan(),
            stage: self.stage().to_string(),
            stage_index: self.stage_index,
            age: self.age,
            happiness: self.happiness,
            health: self.health,
            created_at: self.created_at,
        }
    }
}

impl PartialEq for PetEntity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PetEntity {}

impl Hash for PetEntity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for PetEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PetEntity")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("species", &self.species.name())
            .field("stage_index", &self.stage_index)
            .field("age", &self.age)
            .field("happiness", &self.happiness)
            .field("health", &self.health)
            .field("pending", &self.pending.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl fmt::Display for PetEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pet{{id='{}', name='{}', stage='{}', species={}, age={}, happiness={}, health={}}}",
            self.id,
            self.name,
            self.stage(),
            self.species,
            self.age,
            self.happiness,
            self.health
        )
    }
}
