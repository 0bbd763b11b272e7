//! Error types for vivarium_core.
//!
//! Only species construction can fail. Numeric input to pets is clamped
//! rather than rejected.

use thiserror::Error;

/// Raised when a species descriptor is built from invalid parts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Validation error: species name cannot be empty")]
    EmptyName,

    #[error("Validation error: evolution_stages must have at least one stage")]
    NoStages,

    #[error("Validation error: max_lifespan must be positive, got {0}")]
    NonPositiveLifespan(i64),

    #[error("Validation error: habitat cannot be empty")]
    EmptyHabitat,
}

/// Result type alias for vivarium_core operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

impl ValidationError {
    /// Name of the field that failed validation.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::NoStages => "evolution_stages",
            Self::NonPositiveLifespan(_) => "max_lifespan",
            Self::EmptyHabitat => "habitat",
        }
    }
}
