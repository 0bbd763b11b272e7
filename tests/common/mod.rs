pub mod macros;

use std::sync::Arc;
use vivarium_lib::{EventLog, PetConfig, PetEntity, SeededIds, SpeciesDescriptor};

#[allow(dead_code)]
pub struct PetFixture {
    config: PetConfig,
    species: Option<Arc<SpeciesDescriptor>>,
    happiness: i64,
    health: i64,
    seed: u64,
}

#[allow(dead_code)]
impl PetFixture {
    pub fn new() -> Self {
        Self {
            config: PetConfig::default(),
            species: None,
            happiness: 50,
            health: 50,
            seed: 42,
        }
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut PetConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_stages(mut self, stages: &[&str]) -> Self {
        let species = SpeciesDescriptor::new("Fixture", stages.iter().copied(), 10, "Test Tank")
            .expect("fixture species must be valid");
        self.species = Some(Arc::new(species));
        self
    }

    pub fn with_stats(mut self, happiness: i64, health: i64) -> Self {
        self.happiness = happiness;
        self.health = health;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the pet with an attached event log.
    pub fn build(self) -> (PetEntity, EventLog) {
        let mut ids = SeededIds::new(self.seed);
        let mut builder = vivarium_lib::PetBuilder::from_config(&self.config)
            .expect("fixture config must be valid")
            .id_from(&mut ids)
            .name("Fixture")
            .happiness(self.happiness)
            .health(self.health);
        if let Some(species) = self.species {
            builder = builder.species(species);
        }
        let mut pet = builder.build();
        let log = EventLog::default();
        pet.subscribe(log.clone());
        (pet, log)
    }
}
