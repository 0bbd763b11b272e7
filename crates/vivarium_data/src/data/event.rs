use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Observable things that happen to a pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PetEvent {
    /// The pet advanced to the next evolution stage.
    Evolved {
        pet_id: Uuid,
        name: String,
        stage_index: usize,
        stage: String,
    },
}

impl PetEvent {
    #[must_use]
    pub fn pet_id(&self) -> Uuid {
        match self {
            Self::Evolved { pet_id, .. } => *pet_id,
        }
    }
}

impl fmt::Display for PetEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Evolved { name, stage, .. } => write!(f, "{name} has evolved into {stage}!"),
        }
    }
}
