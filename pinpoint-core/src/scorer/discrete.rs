//! Tolerance-based hit counting.

use std::collections::BTreeSet;

use crate::{DEFAULT_TOLERANCE_METERS, GeoPoint, MatchResult, ScoringStrategy};

/// Counts picks that land within a tolerance of an unclaimed answer.
///
/// Matching is greedy in pick order: each pick claims its nearest answer that
/// no earlier pick has claimed, provided that answer lies within the
/// tolerance. A pick outside the tolerance claims nothing, leaving the answer
/// for later picks. Because earlier picks claim first, reordering the same
/// picks can change the hit count. Ties on distance go to the answer that
/// appears first in the answer set.
///
/// # Examples
/// ```
/// use pinpoint_core::{DiscreteScorer, GeoPoint, MatchResult, ScoringStrategy};
///
/// # fn main() -> Result<(), pinpoint_core::GeoPointError> {
/// let answer = GeoPoint::new(-23.62909, -46.56753)?;
/// let result = DiscreteScorer::default().score(&[answer], &[answer]);
/// assert!(matches!(result, MatchResult::Hits { hits: 1, out_of: 1, .. }));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscreteScorer {
    tolerance_meters: f64,
}

impl DiscreteScorer {
    /// Create a scorer with the given hit radius in metres.
    #[must_use]
    pub const fn new(tolerance_meters: f64) -> Self {
        Self { tolerance_meters }
    }

    /// Hit radius in metres.
    #[must_use]
    pub const fn tolerance_meters(&self) -> f64 {
        self.tolerance_meters
    }
}

impl Default for DiscreteScorer {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE_METERS)
    }
}

impl ScoringStrategy for DiscreteScorer {
    fn score(&self, selection: &[GeoPoint], answers: &[GeoPoint]) -> MatchResult {
        let mut claimed = BTreeSet::new();
        for pick in selection {
            let Some((index, distance)) = nearest_unclaimed(pick, answers, &claimed) else {
                continue;
            };
            if distance <= self.tolerance_meters {
                claimed.insert(index);
            }
        }
        MatchResult::Hits {
            hits: claimed.len(),
            out_of: selection.len(),
            claimed,
        }
    }
}

/// Find the closest answer not yet claimed.
///
/// Only a strictly smaller distance replaces the current best, so the earliest
/// answer wins an exact tie.
fn nearest_unclaimed(
    pick: &GeoPoint,
    answers: &[GeoPoint],
    claimed: &BTreeSet<usize>,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, answer) in answers.iter().enumerate() {
        if claimed.contains(&index) {
            continue;
        }
        let distance = pick.distance_to(answer);
        if best.is_none_or(|(_, closest)| distance < closest) {
            best = Some((index, distance));
        }
    }
    best
}
