pub mod data;

pub use data::event::PetEvent;
pub use data::snapshot::PetSnapshot;
pub use data::species::{SpeciesTable, DRAGON, GENERIC, ROBOT};
pub use data::stats::{
    DEFAULT_AGE, DEFAULT_HAPPINESS, DEFAULT_HEALTH, DEFAULT_PET_NAME, MAX_STAT, MIN_STAT,
};

/// Version tag of the pet model, reported by the CLI banner.
pub const SYSTEM_VERSION: &str = "2.0";
