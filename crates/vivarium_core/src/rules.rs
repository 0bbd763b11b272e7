use crate::config::{CareConfig, EvolutionConfig, PetConfig};

/// Care bonuses and evolution thresholds a pet is built with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CareRules {
    pub care: CareConfig,
    pub evolution: EvolutionConfig,
}

impl CareRules {
    #[must_use]
    pub fn from_config(config: &PetConfig) -> Self {
        Self {
            care: config.care.clone(),
            evolution: config.evolution,
        }
    }

    /// Health gained from eating `food`. Matching ignores case.
    pub fn food_bonus(&self, food: &str) -> i64 {
        if eq_ignore_case(food, &self.care.favorite_food) {
            self.care.favorite_food_bonus
        } else {
            self.care.other_food_bonus
        }
    }

    /// Happiness gained from playing `game`. Matching ignores case.
    pub fn game_bonus(&self, game: &str) -> i64 {
        if eq_ignore_case(game, &self.care.favorite_game) {
            self.care.favorite_game_bonus
        } else {
            self.care.other_game_bonus
        }
    }

    pub fn ready_to_evolve(&self, happiness: u8, health: u8) -> bool {
        happiness > self.evolution.happiness_threshold && health > self.evolution.health_threshold
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
