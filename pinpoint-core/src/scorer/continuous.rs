//! Distance-decay scoring out of 100.

use crate::{DEFAULT_MAX_SELECTIONS, GeoPoint, MatchResult, ScoringStrategy};

/// Best possible total score.
pub const MAX_SCORE: u32 = 100;

/// Distance at which a pick stops earning points, in metres.
pub const DECAY_DISTANCE_METERS: f64 = 1_000.0;

/// Scores each pick by how close it is to any answer.
///
/// Every pick is worth up to `100 / max_selections` points, decaying linearly
/// to zero at [`DECAY_DISTANCE_METERS`] from its closest answer. Answers are
/// not exclusive: several picks may score against the same answer. The sum is
/// rounded to the nearest integer and clamped to `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContinuousScorer {
    max_selections: usize,
}

impl ContinuousScorer {
    /// Create a scorer that spreads 100 points over `max_selections` picks.
    ///
    /// A cap of zero is treated as one.
    #[must_use]
    pub const fn new(max_selections: usize) -> Self {
        Self {
            max_selections: if max_selections == 0 { 1 } else { max_selections },
        }
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "per-pick weight divides the maximum score across picks"
    )]
    fn points_per_pick(self) -> f64 {
        f64::from(MAX_SCORE) / self.max_selections as f64
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "linear decay over distance"
    )]
    fn pick_score(self, closest_meters: f64) -> f64 {
        (self.points_per_pick() * (1.0 - closest_meters / DECAY_DISTANCE_METERS)).max(0.0)
    }
}

impl Default for ContinuousScorer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SELECTIONS)
    }
}

impl ScoringStrategy for ContinuousScorer {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the rounded total is clamped to 0..=100 before the cast"
    )]
    fn score(&self, selection: &[GeoPoint], answers: &[GeoPoint]) -> MatchResult {
        let total: f64 = selection
            .iter()
            .map(|pick| self.pick_score(closest_distance(pick, answers)))
            .sum();
        let rounded = total.round().clamp(0.0, f64::from(MAX_SCORE));
        MatchResult::score(rounded as u32)
    }
}

/// Distance to the closest answer, or infinity when there are none.
fn closest_distance(pick: &GeoPoint, answers: &[GeoPoint]) -> f64 {
    answers
        .iter()
        .map(|answer| pick.distance_to(answer))
        .fold(f64::INFINITY, f64::min)
}
