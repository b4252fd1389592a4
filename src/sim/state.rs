//! Game state and core types
//!
//! Everything the widget shows is either stored here or derived from it.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::layout::{Viewport, random_position, target_size};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, nothing running yet
    NotStarted,
    /// Target on screen, countdown running
    Playing,
    /// Countdown ran out
    GameOver,
}

/// Something that happened during a step, for logging and effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new episode began (start or play again)
    EpisodeStarted { episode: u32 },
    /// Target clicked; `size` is the edge length for the new score
    TargetHit { score: u32, size: u32 },
    /// Score passed the previous session best
    HighScoreBeaten { high_score: u32 },
    /// One second came off the clock
    TimeTick { time_left: u32 },
    /// Countdown expired
    GameOver { final_score: u32, high_score: u32 },
}

/// Complete widget state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance values everything is derived from
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Hits this episode
    pub score: u32,
    /// Best score this session (never reset)
    pub high_score: u32,
    /// Seconds until game over
    pub time_left: u32,
    /// Top-left corner of the target
    pub position: Vec2,
    /// Episodes played so far
    pub episode: u32,
    /// Identifies the running countdown. Bumped on every clock reset so ticks
    /// scheduled against an older countdown are ignored.
    pub countdown: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Fresh widget state (start screen)
    pub fn new(tuning: Tuning) -> Self {
        let time_left = tuning.round_seconds;
        Self {
            tuning,
            phase: GamePhase::NotStarted,
            score: 0,
            high_score: 0,
            time_left,
            position: Vec2::ZERO,
            episode: 0,
            countdown: 0,
        }
    }

    /// Target edge length for the current score
    pub fn target_size(&self) -> u32 {
        target_size(self.score, &self.tuning)
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Reset the episode values and enter `Playing`. High score survives.
    pub fn begin_episode<R: Rng>(&mut self, viewport: Viewport, rng: &mut R) -> GameEvent {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.episode += 1;
        self.position = random_position(self.target_size(), viewport, rng);
        self.restart_countdown();
        GameEvent::EpisodeStarted {
            episode: self.episode,
        }
    }

    /// Put the full round back on the clock under a new countdown id
    pub fn restart_countdown(&mut self) {
        self.time_left = self.tuning.round_seconds;
        self.countdown = self.countdown.wrapping_add(1);
    }

    /// Move the target for the current score
    pub fn relocate_target<R: Rng>(&mut self, viewport: Viewport, rng: &mut R) {
        self.position = random_position(self.target_size(), viewport, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_initial_state() {
        let state = GameState::default();
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 0);
        assert_eq!(state.time_left, 3);
        assert_eq!(state.target_size(), 100);
    }

    #[test]
    fn test_begin_episode_keeps_high_score() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = GameState::default();
        state.high_score = 12;
        state.score = 12;
        state.time_left = 0;
        state.phase = GamePhase::GameOver;

        let event = state.begin_episode(Viewport::new(640.0, 480.0), &mut rng);
        assert_eq!(event, GameEvent::EpisodeStarted { episode: 1 });
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_left, 3);
        assert_eq!(state.high_score, 12);
        assert!(state.position.x < 540.0 && state.position.y < 380.0);
    }

    #[test]
    fn test_restart_countdown_bumps_id() {
        let mut state = GameState::default();
        let before = state.countdown;
        state.time_left = 1;
        state.restart_countdown();
        assert_eq!(state.time_left, 3);
        assert_ne!(state.countdown, before);
    }
}
