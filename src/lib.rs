//! I See You - a shrinking-target reflex game
//!
//! Core modules:
//! - `sim`: Game state machine and countdown (pure, deterministic given an RNG)
//! - `layout`: Target sizing and randomized placement
//! - `ui`: View model for the start / playing / game-over screens
//! - `tuning`: Data-driven game balance
//! - `platform`: Browser glue (viewport, interval timer, DOM)

pub mod layout;
pub mod platform;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use layout::{Viewport, random_position, target_size};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Target edge length at score 0 (pixels)
    pub const BASE_TARGET_SIZE: u32 = 100;
    /// Shrink applied each time the score crosses a step boundary
    pub const TARGET_SIZE_STEP: u32 = 10;
    /// Points needed per shrink step
    pub const SCORE_PER_STEP: u32 = 20;
    /// Smallest the target ever gets
    pub const MIN_TARGET_SIZE: u32 = 20;

    /// Seconds on the clock after a start or a hit
    pub const ROUND_SECONDS: u32 = 3;
    /// Countdown tick period (ms)
    pub const TICK_MS: u32 = 1000;

    /// Game-over commentary thresholds
    pub const IMPRESSIVE_SCORE: u32 = 15;
    pub const GETTING_BETTER_SCORE: u32 = 10;
}
