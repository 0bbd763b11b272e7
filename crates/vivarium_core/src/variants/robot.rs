use crate::pet::{PetBuilder, PetEntity};
use crate::species::SpeciesDescriptor;
use std::fmt;
use std::sync::Arc;
use vivarium_data::MAX_STAT;

/// A battery-powered pet of the Robot species.
///
/// The battery is tracked apart from the core pet's stats; neither affects
/// the other.
#[derive(Debug)]
pub struct RobotPet {
    battery_level: u8,
    needs_charging: bool,
    core: PetEntity,
}

impl RobotPet {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_builder(PetEntity::builder().name(name))
    }

    /// Builds the core pet from `builder`, replacing its species with Robot.
    #[must_use]
    pub fn from_builder(builder: PetBuilder) -> Self {
        Self {
            battery_level: MAX_STAT,
            needs_charging: false,
            core: builder.species(Arc::new(SpeciesDescriptor::robot())).build(),
        }
    }

    /// Drains the battery, flooring at zero. Reaching zero flags the robot
    /// for charging.
    pub fn drain_battery(&mut self, amount: u32) {
        let remaining = u32::from(self.battery_level).saturating_sub(amount);
        self.battery_level = remaining as u8;
        if self.battery_level == 0 {
            self.needs_charging = true;
            tracing::debug!(robot = %self.core.name(), "Battery empty");
        }
    }

    pub fn charge_battery(&mut self) {
        self.battery_level = MAX_STAT;
        self.needs_charging = false;
    }

    pub fn battery_level(&self) -> u8 {
        self.battery_level
    }

    pub fn needs_charging(&self) -> bool {
        self.needs_charging
    }

    pub fn core(&self) -> &PetEntity {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut PetEntity {
        &mut self.core
    }
}

impl fmt::Display for RobotPet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RobotPet{{battery={}%, needsCharging={}, core={}}}",
            self.battery_level, self.needs_charging, self.core
        )
    }
}
