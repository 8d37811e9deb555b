//! Facade crate for the Pinpoint map guessing game.
//!
//! This crate re-exports the core game types and exposes the file-backed
//! adapters behind the `files` feature.

#![forbid(unsafe_code)]

pub use pinpoint_core::{
    AnswerSet, BlobStore, BlobStoreError, CandidateId, CandidateSet, ContinuousScorer,
    DiscreteScorer, Feedback, GameSession, GeoPoint, GeoPointError, MatchResult, PlayerName,
    RankingEntry, RankingError, RankingStore, Round, RoundConfig, RoundError, RoundOutcome,
    ScoringMode, ScoringStrategy, SelectionChange, SelectionSet, SessionEvent, SessionState,
    StartError, strategy_for,
};

#[cfg(feature = "files")]
pub use pinpoint_data::{
    Boundary, BoundaryError, FileBlobStore, FileBlobStoreError, RoundDefinition, RoundFileError,
    load_boundary, load_round,
};
