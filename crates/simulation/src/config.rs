pub const MAP_WIDTH: usize = 256;
pub const MAP_HEIGHT: usize = 256;

/// Number of `FixedUpdate` ticks between two construction-progress steps.
/// A fresh industry tile needs 16 steps to complete.
pub const CONSTRUCTION_TICK_INTERVAL: u32 = 30;

/// Industries placed on the map by `init_world` when no save is loaded.
pub const INITIAL_INDUSTRY_COUNT: u32 = 24;

/// Placement attempts per industry before `init_world` gives up on it.
pub const PLACEMENT_ATTEMPTS: u32 = 64;

/// Fraction of map tiles turned into water by `init_world`.
pub const WATER_FRACTION: f32 = 0.04;

/// Seed of the default `SimRng` and of generated worlds.
pub const WORLD_SEED: u64 = 42;
