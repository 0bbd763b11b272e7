/// Asserts a pet's happiness and health.
#[macro_export]
macro_rules! assert_stats {
    ($pet:expr, happiness = $happiness:expr, health = $health:expr) => {
        assert_eq!(
            ($pet.happiness(), $pet.health()),
            ($happiness, $health),
            "Unexpected stats for {}",
            $pet.debug_state()
        );
    };
}

/// Asserts the pet sits at the given stage label.
#[macro_export]
macro_rules! assert_stage {
    ($pet:expr, $stage:expr) => {
        assert_eq!(
            $pet.stage(),
            $stage,
            "Pet {} is at stage index {}",
            $pet.name(),
            $pet.stage_index()
        );
    };
}
