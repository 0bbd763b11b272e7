//! Plain data shared by the Vivarium crates.

pub mod event;
pub mod snapshot;
pub mod species;
pub mod stats;
