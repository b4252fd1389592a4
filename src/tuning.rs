//! Data-driven game balance
//!
//! Defaults come from [`crate::consts`]. A host page may override any subset
//! of the values with a JSON document on the mount element's `data-tuning`
//! attribute; nothing is required.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Numeric balance for one widget instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Target edge length at score 0 (pixels)
    pub base_size: u32,
    /// Shrink per step (pixels)
    pub size_step: u32,
    /// Points per shrink step
    pub score_per_step: u32,
    /// Floor for the target edge length (pixels)
    pub minimum_size: u32,
    /// Countdown length after a start or a hit (seconds)
    pub round_seconds: u32,
    /// Countdown tick period (ms)
    pub tick_ms: u32,
    /// Score at or above which the "impressive" commentary is shown
    pub impressive_score: u32,
    /// Score at or above which the "getting better" commentary is shown
    pub getting_better_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_size: BASE_TARGET_SIZE,
            size_step: TARGET_SIZE_STEP,
            score_per_step: SCORE_PER_STEP,
            minimum_size: MIN_TARGET_SIZE,
            round_seconds: ROUND_SECONDS,
            tick_ms: TICK_MS,
            impressive_score: IMPRESSIVE_SCORE,
            getting_better_score: GETTING_BETTER_SCORE,
        }
    }
}

/// Why a tuning document was rejected
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    /// Not valid JSON for [`Tuning`]
    #[error("tuning is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Parsed, but the values can't drive a game
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}

impl Tuning {
    /// Mount element attribute holding an optional JSON override
    pub const ATTRIBUTE: &'static str = "data-tuning";

    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check the values describe a playable game
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.minimum_size == 0 {
            return Err(TuningError::Invalid("minimum_size must be positive"));
        }
        if self.minimum_size > self.base_size {
            return Err(TuningError::Invalid("minimum_size exceeds base_size"));
        }
        if self.score_per_step == 0 {
            return Err(TuningError::Invalid("score_per_step must be positive"));
        }
        if self.round_seconds == 0 {
            return Err(TuningError::Invalid("round_seconds must be positive"));
        }
        if self.tick_ms == 0 {
            return Err(TuningError::Invalid("tick_ms must be positive"));
        }
        if self.tick_ms > i32::MAX as u32 {
            return Err(TuningError::Invalid("tick_ms exceeds the browser timer range"));
        }
        if self.impressive_score < self.getting_better_score {
            return Err(TuningError::Invalid(
                "impressive_score is below getting_better_score",
            ));
        }
        Ok(())
    }

    /// Resolve an optional override, falling back to defaults on any problem
    pub fn from_override(json: Option<&str>) -> Self {
        match json.map(str::trim).filter(|s| !s.is_empty()) {
            None => Self::default(),
            Some(json) => match Self::from_json(json) {
                Ok(tuning) => {
                    log::info!("Using custom tuning: {:?}", tuning);
                    tuning
                }
                Err(e) => {
                    log::warn!("{}, using defaults", e);
                    Self::default()
                }
            },
        }
    }

    /// Load the override from the mount element (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(host: &web_sys::Element) -> Self {
        Self::from_override(host.get_attribute(Self::ATTRIBUTE).as_deref())
    }
}
