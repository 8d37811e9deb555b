//! Core domain types for the Pinpoint map guessing game.
//!
//! A round offers the player a fixed set of candidate points and hides a set
//! of answer points. The player picks a fixed number of candidates, and a
//! [`ScoringStrategy`] compares the picks with the answers by geographic
//! distance. [`GameSession`] drives the round from name entry to the scored
//! result, and [`RankingStore`] keeps a local leaderboard in any
//! [`BlobStore`].
//!
//! Nothing here depends on a rendering surface: UI adapters call the session's
//! command handlers and render the [`SessionEvent`]s they return.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod geo_point;
pub mod ranking;
mod round;
pub mod scorer;
mod selection;
pub mod session;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use geo_point::{GeoPoint, GeoPointError};
pub use ranking::{
    BackendError, BlobStore, BlobStoreError, RANKING_KEY, RankingEntry, RankingError,
    RankingStore, RecordedOutcome,
};
pub use round::{
    AnswerSet, CandidateId, CandidateSet, DEFAULT_MAX_SELECTIONS, DEFAULT_TOLERANCE_METERS, Round,
    RoundConfig, RoundError, ScoringMode,
};
pub use scorer::{
    ContinuousScorer, DECAY_DISTANCE_METERS, DiscreteScorer, Feedback, MAX_SCORE, MatchResult,
    ScoringStrategy, strategy_for,
};
pub use selection::{SelectionChange, SelectionSet};
pub use session::{
    EMPTY_NAME_MESSAGE, GameSession, PlayerName, RoundOutcome, SessionEvent, SessionState,
    StartError,
};
