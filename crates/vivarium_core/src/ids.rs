use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

/// Hands out ids for new pets.
pub trait IdSource {
    fn next_id(&mut self) -> Uuid;
}

/// Random v4 ids from the thread RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Reproducible v4-shaped ids drawn from a seeded ChaCha8 stream.
#[derive(Debug, Clone)]
pub struct SeededIds {
    rng: ChaCha8Rng,
}

impl SeededIds {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl IdSource for SeededIds {
    fn next_id(&mut self) -> Uuid {
        let bytes: [u8; 16] = self.rng.gen();
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }
}
