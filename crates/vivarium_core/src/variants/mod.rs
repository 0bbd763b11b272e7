//! Specialized pets that wrap a [`PetEntity`](crate::pet::PetEntity) with a
//! fixed species and extra state of their own.

pub mod dragon;
pub mod robot;

pub use dragon::DragonPet;
pub use robot::RobotPet;
