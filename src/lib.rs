//! Maze Chase - a tile maze arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `renderer`: Draw list and vertex batches handed to a presentation layer
//! - `settings`: Runner configuration

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Edge length of one maze cell in pixels
    pub const TILE_SIZE: f32 = 32.0;
    /// Maze dimensions, in cells
    pub const ROW_COUNT: usize = 21;
    pub const COLUMN_COUNT: usize = 19;

    /// Fixed simulation period (20 Hz). Movement is per tick, not per second.
    pub const TICK_MS: u64 = 50;

    /// Agent moves a quarter tile per tick
    pub const AGENT_SPEED: f32 = TILE_SIZE / 4.0;
    /// Pursuers are slower than the agent
    pub const PURSUER_SPEED: f32 = TILE_SIZE / 6.0;

    /// Food pellet box, centered in its cell
    pub const FOOD_SIZE: f32 = 4.0;
    pub const FOOD_OFFSET: f32 = 14.0;
    /// Power item box, centered in its cell
    pub const POWER_ITEM_SIZE: f32 = 16.0;
    pub const POWER_ITEM_OFFSET: f32 = 8.0;

    /// Rewards
    pub const FOOD_POINTS: u64 = 10;
    pub const POWER_ITEM_POINTS: u64 = 50;
    pub const PURSUER_POINTS: u64 = 200;

    /// Power-mode lasts this long after the latest power item pickup
    pub const POWER_DURATION_MS: u64 = 10_000;
    /// Delay before a caught pursuer comes back at its spawn
    pub const RESPAWN_DELAY_MS: u64 = 4_000;
    /// Chance per tick that an active pursuer picks a new heading
    pub const TURN_CHANCE: f32 = 0.02;

    pub const STARTING_LIVES: u8 = 3;
}
