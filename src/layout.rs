//! Target sizing and placement
//!
//! Both are pure: size is derived from the score every time it is needed, and
//! placement takes the viewport and RNG as arguments so it can be replayed.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Visible area the target must stay inside (CSS pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest top-left coordinate that keeps a `size` box on screen.
    /// Clamped at zero when the viewport is smaller than the box.
    pub fn max_origin(&self, size: f32) -> Vec2 {
        Vec2::new((self.width - size).max(0.0), (self.height - size).max(0.0))
    }
}

/// Target edge length for a score
///
/// `max(minimum, base - floor(score / per_step) * step)`
pub fn target_size(score: u32, tuning: &Tuning) -> u32 {
    let steps = score / tuning.score_per_step.max(1);
    let shrink = steps.saturating_mul(tuning.size_step);
    tuning
        .base_size
        .saturating_sub(shrink)
        .max(tuning.minimum_size)
}

/// Uniformly random top-left corner for a `size` box inside the viewport
///
/// Each axis is sampled from `[0, dimension - size)`. An axis with no room
/// left pins the target to 0.
pub fn random_position<R: Rng>(size: u32, viewport: Viewport, rng: &mut R) -> Vec2 {
    let max = viewport.max_origin(size as f32);
    Vec2::new(sample_axis(max.x, rng), sample_axis(max.y, rng))
}

fn sample_axis<R: Rng>(span: f32, rng: &mut R) -> f32 {
    if span > 0.0 {
        rng.random_range(0.0..span)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_size_steps() {
        let t = Tuning::default();
        assert_eq!(target_size(0, &t), 100);
        assert_eq!(target_size(19, &t), 100);
        assert_eq!(target_size(20, &t), 90);
        assert_eq!(target_size(40, &t), 80);
        assert_eq!(target_size(159, &t), 30);
        assert_eq!(target_size(160, &t), 20);
        assert_eq!(target_size(10_000, &t), 20);
        assert_eq!(target_size(u32::MAX, &t), 20);
    }

    #[test]
    fn test_position_inside_viewport() {
        let mut rng = Pcg32::seed_from_u64(7);
        let vp = Viewport::new(800.0, 600.0);
        for _ in 0..10_000 {
            let p = random_position(100, vp, &mut rng);
            assert!(p.x >= 0.0 && p.x < 700.0, "x out of range: {}", p.x);
            assert!(p.y >= 0.0 && p.y < 500.0, "y out of range: {}", p.y);
        }
    }

    #[test]
    fn test_position_covers_range() {
        // Samples should reach both ends of the span, not cluster
        let mut rng = Pcg32::seed_from_u64(11);
        let vp = Viewport::new(1100.0, 1100.0);
        let samples: Vec<Vec2> = (0..5_000).map(|_| random_position(100, vp, &mut rng)).collect();
        assert!(samples.iter().any(|p| p.x < 100.0));
        assert!(samples.iter().any(|p| p.x > 900.0));
        assert!(samples.iter().any(|p| p.y < 100.0));
        assert!(samples.iter().any(|p| p.y > 900.0));
    }

    #[test]
    fn test_viewport_smaller_than_target() {
        let mut rng = Pcg32::seed_from_u64(3);
        let p = random_position(100, Viewport::new(60.0, 40.0), &mut rng);
        assert_eq!(p, Vec2::ZERO);

        // Only the cramped axis is pinned
        let p = random_position(100, Viewport::new(500.0, 80.0), &mut rng);
        assert!(p.x >= 0.0 && p.x < 400.0);
        assert_eq!(p.y, 0.0);
    }

    proptest! {
        #[test]
        fn size_stays_in_bounds(score in any::<u32>()) {
            let t = Tuning::default();
            let size = target_size(score, &t);
            prop_assert!(size >= 20);
            prop_assert!(size <= 100);
        }

        #[test]
        fn size_never_grows(a in 0u32..1_000_000, b in 0u32..1_000_000) {
            let t = Tuning::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(target_size(hi, &t) <= target_size(lo, &t));
            if lo / 20 == hi / 20 {
                prop_assert_eq!(target_size(lo, &t), target_size(hi, &t));
            }
        }

        #[test]
        fn position_respects_any_viewport(
            seed in any::<u64>(),
            score in 0u32..400,
            width in 120.0f32..4000.0,
            height in 120.0f32..4000.0,
        ) {
            let t = Tuning::default();
            let size = target_size(score, &t);
            let mut rng = Pcg32::seed_from_u64(seed);
            let p = random_position(size, Viewport::new(width, height), &mut rng);
            prop_assert!(p.x >= 0.0 && p.x < width - size as f32);
            prop_assert!(p.y >= 0.0 && p.y < height - size as f32);
        }
    }
}
