use crate::pet::{PetBuilder, PetEntity};
use crate::species::SpeciesDescriptor;
use std::fmt;
use std::sync::Arc;

/// A pet of the Dragon species with a type and a breath weapon.
#[derive(Debug)]
pub struct DragonPet {
    dragon_type: String,
    breath_weapon: String,
    core: PetEntity,
}

impl DragonPet {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        dragon_type: impl Into<String>,
        breath_weapon: impl Into<String>,
    ) -> Self {
        Self::from_builder(PetEntity::builder().name(name), dragon_type, breath_weapon)
    }

    /// Builds the core pet from `builder`, replacing its species with Dragon.
    #[must_use]
    pub fn from_builder(
        builder: PetBuilder,
        dragon_type: impl Into<String>,
        breath_weapon: impl Into<String>,
    ) -> Self {
        Self {
            dragon_type: dragon_type.into(),
            breath_weapon: breath_weapon.into(),
            core: builder.species(Arc::new(SpeciesDescriptor::dragon())).build(),
        }
    }

    pub fn core(&self) -> &PetEntity {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut PetEntity {
        &mut self.core
    }

    pub fn dragon_type(&self) -> &str {
        &self.dragon_type
    }

    pub fn breath_weapon(&self) -> &str {
        &self.breath_weapon
    }
}

impl fmt::Display for DragonPet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DragonPet{{type={}, breathWeapon={}, core={}}}",
            self.dragon_type, self.breath_weapon, self.core
        )
    }
}
