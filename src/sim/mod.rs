//! Game simulation module
//!
//! All gameplay logic lives here. This module must stay platform-free:
//! - Time only advances through `GameInput::Tick`
//! - Randomness only through the RNG passed in
//! - Viewport passed in, never read

pub mod state;
pub mod tick;

pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{CountdownAction, GameInput, check_expiry, countdown_action, release_action, step};
