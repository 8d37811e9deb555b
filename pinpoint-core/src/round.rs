//! Fixed point sets and configuration for a single round.
//!
//! A [`Round`] bundles the candidate points offered to the player, the hidden
//! answer points used for scoring, and the [`RoundConfig`] chosen when the
//! round was set up. None of these change once the round exists.

use geo::{BoundingRect, MultiPoint, Point, Rect};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::GeoPoint;

/// Number of points a player must pick in the stock game.
pub const DEFAULT_MAX_SELECTIONS: usize = 7;

/// Distance in metres within which a pick counts as a discrete hit.
pub const DEFAULT_TOLERANCE_METERS: f64 = 150.0;

/// Index of a candidate within its [`CandidateSet`].
///
/// Identifiers are zero-based; [`std::fmt::Display`] renders them one-based
/// the way map tooltips label markers.
///
/// # Examples
/// ```
/// use pinpoint_core::CandidateId;
///
/// assert_eq!(CandidateId::new(2).to_string(), "Point 3");
/// assert_eq!(CandidateId::from_label(3), Some(CandidateId::new(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateId(usize);

impl CandidateId {
    /// Wrap a zero-based candidate index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Convert a one-based label back into an identifier.
    ///
    /// Returns `None` for `0`.
    #[must_use]
    pub const fn from_label(label: usize) -> Option<Self> {
        match label.checked_sub(1) {
            Some(index) => Some(Self(index)),
            None => None,
        }
    }

    /// Zero-based index into the candidate set.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// One-based label shown to players.
    #[must_use]
    pub const fn label(self) -> usize {
        self.0.saturating_add(1)
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point {}", self.label())
    }
}

/// Ordered candidate points offered to the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateSet {
    points: Vec<GeoPoint>,
}

impl CandidateSet {
    /// Wrap an ordered list of candidate points.
    #[must_use]
    pub const fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Look up a candidate by identifier.
    #[must_use]
    pub fn get(&self, id: CandidateId) -> Option<GeoPoint> {
        self.points.get(id.index()).copied()
    }

    /// Iterate over candidates together with their identifiers.
    pub fn iter(&self) -> impl Iterator<Item = (CandidateId, GeoPoint)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(index, point)| (CandidateId::new(index), *point))
    }

    /// Number of candidates.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Report whether the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding rectangle (`x = longitude`, `y = latitude`) used to fit the
    /// map viewport around every candidate.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.points
            .iter()
            .copied()
            .map(Point::from)
            .collect::<MultiPoint<f64>>()
            .bounding_rect()
    }
}

/// Ordered answer points considered correct for the round.
///
/// Answers usually coincide with candidates but nothing requires it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    points: Vec<GeoPoint>,
}

impl AnswerSet {
    /// Wrap an ordered list of answer points.
    #[must_use]
    pub const fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Answer points in authoring order.
    #[must_use]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Number of answers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Report whether the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Which scoring strategy a round uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Greedy nearest-match hit counting under a distance tolerance.
    #[default]
    Discrete,
    /// Distance-decay score out of 100.
    Continuous,
}

impl ScoringMode {
    /// Return the mode as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Discrete => "discrete",
            Self::Continuous => "continuous",
        }
    }
}

impl std::fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "discrete" => Ok(Self::Discrete),
            "continuous" => Ok(Self::Continuous),
            _ => Err(format!("unknown scoring mode '{s}'")),
        }
    }
}

/// Tunables fixed at round setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundConfig {
    /// Exact number of picks required before submitting.
    pub max_selections: usize,
    /// Hit radius for discrete scoring, in metres.
    pub tolerance_meters: f64,
    /// Scoring strategy for the round.
    pub mode: ScoringMode,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            max_selections: DEFAULT_MAX_SELECTIONS,
            tolerance_meters: DEFAULT_TOLERANCE_METERS,
            mode: ScoringMode::Discrete,
        }
    }
}

/// Errors returned by [`Round::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoundError {
    /// No candidate points were supplied.
    #[error("a round needs at least one candidate point")]
    NoCandidates,
    /// No answer points were supplied.
    #[error("a round needs at least one answer point")]
    NoAnswers,
    /// The selection cap cannot be met with the available candidates.
    #[error("max selections {max_selections} must be between 1 and the {candidates} candidates")]
    InvalidMaxSelections {
        /// Requested selection cap.
        max_selections: usize,
        /// Number of candidates on offer.
        candidates: usize,
    },
    /// The tolerance was negative or not finite.
    #[error("tolerance {0} must be a finite, non-negative number of metres")]
    InvalidTolerance(f64),
}

/// Everything fixed for one play-through.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    candidates: CandidateSet,
    answers: AnswerSet,
    config: RoundConfig,
}

impl Round {
    /// Validate and construct a [`Round`].
    ///
    /// # Errors
    /// Returns [`RoundError`] when either point set is empty, when
    /// `max_selections` is zero or exceeds the candidate count, or when the
    /// tolerance is unusable.
    pub fn new(
        candidates: CandidateSet,
        answers: AnswerSet,
        config: RoundConfig,
    ) -> Result<Self, RoundError> {
        if candidates.is_empty() {
            return Err(RoundError::NoCandidates);
        }
        if answers.is_empty() {
            return Err(RoundError::NoAnswers);
        }
        if config.max_selections == 0 || config.max_selections > candidates.len() {
            return Err(RoundError::InvalidMaxSelections {
                max_selections: config.max_selections,
                candidates: candidates.len(),
            });
        }
        if !config.tolerance_meters.is_finite() || config.tolerance_meters < 0.0 {
            return Err(RoundError::InvalidTolerance(config.tolerance_meters));
        }
        Ok(Self {
            candidates,
            answers,
            config,
        })
    }

    /// Candidate points on offer.
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Hidden answer points.
    #[must_use]
    pub const fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Round configuration.
    #[must_use]
    pub const fn config(&self) -> &RoundConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::str::FromStr;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).expect("valid point")
    }

    #[fixture]
    fn candidates() -> CandidateSet {
        CandidateSet::new(vec![point(0.0, 0.0), point(1.0, 2.0), point(-1.0, 3.0)])
    }

    #[fixture]
    fn answers() -> AnswerSet {
        AnswerSet::new(vec![point(0.0, 0.0)])
    }

    #[rstest]
    fn candidate_labels_are_one_based() {
        assert_eq!(CandidateId::new(0).label(), 1);
        assert_eq!(CandidateId::from_label(0), None);
    }

    #[rstest]
    fn bounds_cover_every_candidate(candidates: CandidateSet) {
        let bounds = candidates.bounds().expect("non-empty set has bounds");
        assert_eq!(bounds.min().x, 0.0);
        assert_eq!(bounds.max().x, 3.0);
        assert_eq!(bounds.min().y, -1.0);
        assert_eq!(bounds.max().y, 1.0);
    }

    #[rstest]
    fn empty_candidates_have_no_bounds() {
        assert!(CandidateSet::new(Vec::new()).bounds().is_none());
    }

    #[rstest]
    fn round_rejects_empty_answers(candidates: CandidateSet) {
        let err = Round::new(candidates, AnswerSet::new(Vec::new()), RoundConfig::default())
            .expect_err("answers are required");
        assert_eq!(err, RoundError::NoAnswers);
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    fn round_rejects_unreachable_selection_cap(
        candidates: CandidateSet,
        answers: AnswerSet,
        #[case] max_selections: usize,
    ) {
        let config = RoundConfig {
            max_selections,
            ..RoundConfig::default()
        };
        let err = Round::new(candidates, answers, config).expect_err("cap must be reachable");
        assert!(matches!(err, RoundError::InvalidMaxSelections { .. }));
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    fn round_rejects_bad_tolerance(
        candidates: CandidateSet,
        answers: AnswerSet,
        #[case] tolerance_meters: f64,
    ) {
        let config = RoundConfig {
            max_selections: 2,
            tolerance_meters,
            mode: ScoringMode::Discrete,
        };
        let err = Round::new(candidates, answers, config).expect_err("tolerance must be valid");
        assert!(matches!(err, RoundError::InvalidTolerance(_)));
    }

    #[rstest]
    #[case("discrete", ScoringMode::Discrete)]
    #[case(" Continuous ", ScoringMode::Continuous)]
    fn parses_scoring_modes(#[case] raw: &str, #[case] expected: ScoringMode) {
        assert_eq!(ScoringMode::from_str(raw), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_scoring_mode() {
        let err = ScoringMode::from_str("bipartite").expect_err("unknown mode");
        assert!(err.contains("unknown scoring mode"));
    }
}
