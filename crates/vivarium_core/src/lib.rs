//! # Vivarium Core
//!
//! Behaviour of the virtual pet model.
//!
//! This crate contains:
//! - Validated species descriptors
//! - The pet entity with stat clamping and the evolution state machine
//! - Dragon and robot variants built by composition around a pet
//! - Configuration, id generation and logging set-up
//!
//! ## Example
//!
//! ```
//! use vivarium_core::PetEntity;
//!
//! let mut pet = PetEntity::new("Buddy");
//! pet.feed("Meat");
//! pet.play("Fetch");
//! assert_eq!(pet.health(), 60);
//! assert_eq!(pet.happiness(), 65);
//! assert_eq!(pet.stage(), "Egg");
//! ```

/// Configuration loaded from `vivarium.toml`
pub mod config;
/// Validation errors and result alias
pub mod error;
/// Evolution listeners
pub mod events;
/// Unique id sources for new pets
pub mod ids;
/// Tracing subscriber set-up
pub mod logging;
/// The base pet entity and its builder
pub mod pet;
/// Care and evolution rules injected into pets
pub mod rules;
/// Validated species descriptors
pub mod species;
/// Dragon and robot pets
pub mod variants;

pub use config::PetConfig;
pub use error::{Result, ValidationError};
pub use events::{EventLog, EvolutionListener};
pub use ids::{IdSource, RandomIds, SeededIds};
pub use logging::init_logging;
pub use pet::{PetBuilder, PetEntity};
pub use rules::CareRules;
pub use species::SpeciesDescriptor;
pub use variants::{DragonPet, RobotPet};
pub use vivarium_data::{PetEvent, PetSnapshot, SYSTEM_VERSION};
