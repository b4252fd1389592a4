//! State machine step
//!
//! Every click and every countdown tick goes through [`step`]. Inputs that
//! don't apply to the current phase are dropped without side effects.

use rand::Rng;

use super::state::{GameEvent, GamePhase, GameState};
use crate::layout::Viewport;

/// One input to the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// "Start" control on the start screen
    Start,
    /// "Play again" control on the game-over screen
    PlayAgain,
    /// Click on the target
    HitTarget,
    /// Countdown tick, tagged with the countdown that scheduled it
    Tick { countdown: u64 },
}

/// Apply one input and return what happened
///
/// `viewport` is only read when the target moves.
pub fn step<R: Rng>(
    state: &mut GameState,
    input: GameInput,
    viewport: Viewport,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match (state.phase, input) {
        (GamePhase::NotStarted, GameInput::Start) | (GamePhase::GameOver, GameInput::PlayAgain) => {
            let event = state.begin_episode(viewport, rng);
            log::info!(
                "Episode {} started (best so far: {})",
                state.episode,
                state.high_score
            );
            events.push(event);
        }
        (GamePhase::Playing, GameInput::HitTarget) => {
            state.score += 1;
            state.relocate_target(viewport, rng);
            state.restart_countdown();
            let size = state.target_size();
            log::debug!("Hit! score={} size={}", state.score, size);
            events.push(GameEvent::TargetHit {
                score: state.score,
                size,
            });

            if state.score > state.high_score {
                state.high_score = state.score;
                events.push(GameEvent::HighScoreBeaten {
                    high_score: state.high_score,
                });
            }
        }
        (GamePhase::Playing, GameInput::Tick { countdown }) => {
            if countdown != state.countdown {
                log::debug!(
                    "Ignoring tick from stale countdown {} (current {})",
                    countdown,
                    state.countdown
                );
            } else if state.time_left > 0 {
                state.time_left -= 1;
                log::debug!("Tick: {}s left", state.time_left);
                events.push(GameEvent::TimeTick {
                    time_left: state.time_left,
                });
            }
        }
        (phase, input) => {
            log::trace!("Input {:?} ignored in phase {:?}", input, phase);
        }
    }

    if let Some(event) = check_expiry(state) {
        events.push(event);
    }

    events
}

/// Move to `GameOver` once the clock is empty
///
/// Runs after every step so the transition happens exactly once, whatever
/// changed `time_left`.
pub fn check_expiry(state: &mut GameState) -> Option<GameEvent> {
    if state.phase != GamePhase::Playing || state.time_left > 0 {
        return None;
    }
    state.phase = GamePhase::GameOver;
    log::info!(
        "Game over: score {} (best {})",
        state.score,
        state.high_score
    );
    Some(GameEvent::GameOver {
        final_score: state.score,
        high_score: state.high_score,
    })
}

/// What the driver should do with its interval after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownAction {
    /// The live interval (or lack of one) is already right
    Keep,
    /// Replace any live interval with one for this countdown id
    Arm(u64),
    /// Drop the live interval
    Clear,
}

/// Decide the interval for `state`, given the countdown id currently armed
///
/// At most one interval lives at a time, and only while playing.
pub fn countdown_action(state: &GameState, armed: Option<u64>) -> CountdownAction {
    match (state.is_playing(), armed) {
        (true, Some(id)) if id == state.countdown => CountdownAction::Keep,
        (true, _) => CountdownAction::Arm(state.countdown),
        (false, Some(_)) => CountdownAction::Clear,
        (false, None) => CountdownAction::Keep,
    }
}

/// Decide the interval when the widget is torn down
pub fn release_action(armed: Option<u64>) -> CountdownAction {
    match armed {
        Some(_) => CountdownAction::Clear,
        None => CountdownAction::Keep,
    }
}
