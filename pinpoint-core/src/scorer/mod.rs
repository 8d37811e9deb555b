//! Score a player's picks against the hidden answer set.
//!
//! The [`ScoringStrategy`] trait is the seam between the game session and the
//! two scoring rules the game ships with:
//!
//! - [`DiscreteScorer`] counts hits by greedily matching each pick, in pick
//!   order, to its nearest unclaimed answer within a tolerance.
//! - [`ContinuousScorer`] awards each pick a share of 100 that decays with the
//!   distance to its closest answer.
//!
//! Use [`strategy_for`] to build the strategy named by a [`RoundConfig`].

use std::collections::BTreeSet;

use crate::{GeoPoint, RoundConfig, ScoringMode};

mod continuous;
mod discrete;

pub use continuous::{ContinuousScorer, DECAY_DISTANCE_METERS, MAX_SCORE};
pub use discrete::DiscreteScorer;

/// Compute a [`MatchResult`] for a set of picks.
///
/// Implementations must be deterministic: the same picks in the same order
/// against the same answers always produce the same result. Scoring is
/// infallible; degenerate inputs such as empty answer sets score zero.
///
/// # Examples
///
/// ```rust
/// use pinpoint_core::{GeoPoint, MatchResult, ScoringStrategy};
///
/// #[derive(Debug)]
/// struct CountPicks;
///
/// impl ScoringStrategy for CountPicks {
///     fn score(&self, selection: &[GeoPoint], _answers: &[GeoPoint]) -> MatchResult {
///         MatchResult::score(u32::try_from(selection.len()).unwrap_or(u32::MAX))
///     }
/// }
///
/// let origin = GeoPoint::new(0.0, 0.0)?;
/// assert_eq!(CountPicks.score(&[origin], &[]), MatchResult::score(1));
/// # Ok::<(), pinpoint_core::GeoPointError>(())
/// ```
pub trait ScoringStrategy: std::fmt::Debug + Send + Sync {
    /// Score `selection` (in pick order) against `answers`.
    fn score(&self, selection: &[GeoPoint], answers: &[GeoPoint]) -> MatchResult;
}

/// Build the strategy configured for a round.
#[must_use]
pub fn strategy_for(config: &RoundConfig) -> Box<dyn ScoringStrategy> {
    match config.mode {
        ScoringMode::Discrete => Box::new(DiscreteScorer::new(config.tolerance_meters)),
        ScoringMode::Continuous => Box::new(ContinuousScorer::new(config.max_selections)),
    }
}

/// Result of scoring a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// Discrete mode: number of answers hit.
    Hits {
        /// Answers matched within tolerance.
        hits: usize,
        /// Number of picks scored.
        out_of: usize,
        /// Indices of the answers that were claimed, one per hit.
        claimed: BTreeSet<usize>,
    },
    /// Continuous mode: a score in `0..=100`.
    Score {
        /// Rounded total score.
        score: u32,
    },
}

impl MatchResult {
    /// Shorthand for a continuous result.
    #[must_use]
    pub const fn score(score: u32) -> Self {
        Self::Score { score }
    }

    /// Value the leaderboard sorts on: hits or the numeric score.
    #[must_use]
    pub fn ranking_value(&self) -> u32 {
        match self {
            Self::Hits { hits, .. } => u32::try_from(*hits).unwrap_or(u32::MAX),
            Self::Score { score } => *score,
        }
    }

    /// Band the result into player feedback.
    ///
    /// Discrete results are perfect when every pick hit; otherwise five or
    /// more hits is excellent and three or more is good. Continuous results
    /// use strict thresholds at 90, 70 and 40.
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        match *self {
            Self::Hits { hits, out_of, .. } => {
                if hits == out_of && out_of > 0 {
                    Feedback::Perfect
                } else if hits >= 5 {
                    Feedback::Excellent
                } else if hits >= 3 {
                    Feedback::Good
                } else {
                    Feedback::KeepTrying
                }
            }
            Self::Score { score } => {
                if score > 90 {
                    Feedback::Excellent
                } else if score > 70 {
                    Feedback::VeryGood
                } else if score > 40 {
                    Feedback::Good
                } else {
                    Feedback::KeepTrying
                }
            }
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hits { hits, out_of, .. } => write!(f, "{hits}/{out_of}"),
            Self::Score { score } => write!(f, "{score}"),
        }
    }
}

/// Qualitative band shown alongside a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Every pick hit an answer.
    Perfect,
    /// Very strong result.
    Excellent,
    /// Strong continuous result.
    VeryGood,
    /// Reasonable result.
    Good,
    /// Weak result.
    KeepTrying,
}

impl Feedback {
    /// Short identifier for the band.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Excellent => "excellent",
            Self::VeryGood => "very good",
            Self::Good => "good",
            Self::KeepTrying => "keep trying",
        }
    }

    /// Message displayed on the result screen.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect! You found every point!",
            Self::Excellent => "Excellent! Your choices were very good!",
            Self::VeryGood => "Very good! You were close on most points.",
            Self::Good => "Good job, but there is room to improve.",
            Self::KeepTrying => "Keep trying! Check where the answer points are.",
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
