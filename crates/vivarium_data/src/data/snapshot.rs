use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Point-in-time view of a pet's observable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetSnapshot {
    pub id: Uuid,
    pub name: String,
    pub species: String,
    pub habitat: String,
    pub max_lifespan: u64,
    pub stage: String,
    pub stage_index: usize,
    pub age: u64,
    pub happiness: u8,
    pub health: u8,
    pub created_at: DateTime<Utc>,
}
