//! View model for the three screens
//!
//! [`view`] maps the game state to exactly one [`Screen`]. The DOM layer only
//! ever renders a `Screen`, so everything it shows can be tested natively.

use crate::sim::{GamePhase, GameState};
use crate::tuning::Tuning;

pub const TITLE: &str = "I SEE YOU";
pub const START_LABEL: &str = "CATCH ME";
pub const GAME_OVER_TITLE: &str = "Game Over";
pub const NEW_HIGH_SCORE: &str = "New High Score!";
pub const PLAY_AGAIN_LABEL: &str = "PLAY AGAIN";

/// What the widget is showing right now
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Start(StartView),
    Playing(PlayingView),
    GameOver(GameOverView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartView {
    pub title: &'static str,
    /// Two instruction lines
    pub instructions: [String; 2],
    pub button: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayingView {
    pub score: u32,
    pub best: u32,
    /// Countdown readout, e.g. "3s"
    pub time: String,
    pub target: TargetView,
}

/// Absolutely positioned target box (CSS pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetView {
    pub left: f32,
    pub top: f32,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverView {
    pub final_score: u32,
    pub new_high_score: bool,
    pub commentary: Commentary,
}

/// Game-over remark, tiered by final score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commentary {
    Impressive,
    GettingBetter,
    KeepPracticing,
}

impl Commentary {
    pub fn for_score(score: u32, tuning: &Tuning) -> Self {
        if score >= tuning.impressive_score {
            Commentary::Impressive
        } else if score >= tuning.getting_better_score {
            Commentary::GettingBetter
        } else {
            Commentary::KeepPracticing
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Commentary::Impressive => "Impressive reflexes!",
            Commentary::GettingBetter => "Getting better!",
            Commentary::KeepPracticing => "Keep practicing!",
        }
    }
}

impl GameOverView {
    pub fn final_score_text(&self) -> String {
        format!("Final Score: {}", self.final_score)
    }
}

/// Build the screen for the current state
pub fn view(state: &GameState) -> Screen {
    match state.phase {
        GamePhase::NotStarted => Screen::Start(start_view(&state.tuning)),
        GamePhase::Playing => Screen::Playing(PlayingView {
            score: state.score,
            best: state.high_score,
            time: format!("{}s", state.time_left),
            target: TargetView {
                left: state.position.x,
                top: state.position.y,
                size: state.target_size(),
            },
        }),
        GamePhase::GameOver => Screen::GameOver(GameOverView {
            final_score: state.score,
            // Ties with an earlier best still count, as long as something was scored
            new_high_score: state.score == state.high_score && state.score > 0,
            commentary: Commentary::for_score(state.score, &state.tuning),
        }),
    }
}

fn start_view(tuning: &Tuning) -> StartView {
    let seconds = if tuning.round_seconds == 1 {
        "1 second".to_string()
    } else {
        format!("{} seconds", tuning.round_seconds)
    };
    StartView {
        title: TITLE,
        instructions: [
            format!(
                "Test your speed and precision. Target shrinks every {} points!",
                tuning.score_per_step
            ),
            format!("Click within {} to score.", seconds),
        ],
        button: START_LABEL,
    }
}
