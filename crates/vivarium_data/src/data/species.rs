/// Static description of a built-in species.
///
/// The core crate turns these into validated `SpeciesDescriptor` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesTable {
    pub name: &'static str,
    pub stages: &'static [&'static str],
    pub max_lifespan: u64,
    pub habitat: &'static str,
}

/// Species used when a pet is created without one.
pub const GENERIC: SpeciesTable = SpeciesTable {
    name: "Generic",
    stages: &["Egg", "Child", "Adult"],
    max_lifespan: 100,
    habitat: "Home",
};

pub const DRAGON: SpeciesTable = SpeciesTable {
    name: "Dragon",
    stages: &["Wyrmling", "Young Dragon", "Adult Dragon"],
    max_lifespan: 500,
    habitat: "Caves",
};

pub const ROBOT: SpeciesTable = SpeciesTable {
    name: "Robot",
    stages: &["Prototype", "Advanced Model", "AI Overlord"],
    max_lifespan: 9999,
    habitat: "Lab",
};
