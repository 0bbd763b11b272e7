//! # Vivarium
//!
//! Virtual pets with clamped stats and threshold-driven evolution.
//!
//! The model lives in `vivarium_core`; this crate adds the console demo
//! driven by the `vivarium` binary.

pub mod app;

pub use vivarium_core::{
    config, init_logging, DragonPet, EventLog, EvolutionListener, IdSource, PetBuilder,
    PetConfig, PetEntity, PetEvent, PetSnapshot, RandomIds, RobotPet, SeededIds,
    SpeciesDescriptor, ValidationError, SYSTEM_VERSION,
};
