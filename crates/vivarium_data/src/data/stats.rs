/// Lower bound for happiness and health.
pub const MIN_STAT: u8 = 0;
/// Upper bound for happiness and health.
pub const MAX_STAT: u8 = 100;

pub const DEFAULT_PET_NAME: &str = "Defaulty";
pub const DEFAULT_AGE: u64 = 0;
pub const DEFAULT_HAPPINESS: u8 = 50;
pub const DEFAULT_HEALTH: u8 = 50;
