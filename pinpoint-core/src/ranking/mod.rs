//! Local leaderboard persisted as a JSON array in a [`BlobStore`].
//!
//! The list is append-only: every finished round adds an entry, the whole
//! list is re-sorted by score (highest first) and written back. Names are not
//! deduplicated and the list is never capped. A missing or unreadable blob
//! loads as an empty list so a damaged leaderboard never blocks play; the next
//! write replaces it.

use std::cmp::Reverse;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::MatchResult;

mod blob;

pub use blob::{BackendError, BlobStore, BlobStoreError};

/// Blob name the leaderboard is stored under.
pub const RANKING_KEY: &str = "ranking";

/// One leaderboard row.
///
/// Serialises as `{"name": .., "hits": .., "score": "5/7"}` for discrete
/// rounds and `{"name": .., "score": 87}` for continuous rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// Player name as entered at the start screen.
    pub name: String,
    /// Recorded result.
    #[serde(flatten)]
    pub outcome: RecordedOutcome,
}

impl RankingEntry {
    /// Build an entry from a player name and a scored round.
    #[must_use]
    pub fn new(name: impl Into<String>, result: &MatchResult) -> Self {
        Self {
            name: name.into(),
            outcome: RecordedOutcome::from(result),
        }
    }

    /// Value the leaderboard is sorted on.
    #[must_use]
    pub const fn ranking_value(&self) -> u32 {
        self.outcome.ranking_value()
    }
}

/// Result stored in a [`RankingEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordedOutcome {
    /// Discrete round.
    Hits {
        /// Number of hits.
        hits: u32,
        /// Display form such as `"5/7"`.
        score: String,
    },
    /// Continuous round.
    Score {
        /// Score out of 100.
        score: u32,
    },
}

impl RecordedOutcome {
    /// Hits or numeric score.
    #[must_use]
    pub const fn ranking_value(&self) -> u32 {
        match self {
            Self::Hits { hits, .. } => *hits,
            Self::Score { score } => *score,
        }
    }
}

impl From<&MatchResult> for RecordedOutcome {
    fn from(result: &MatchResult) -> Self {
        match result {
            MatchResult::Hits { .. } => Self::Hits {
                hits: result.ranking_value(),
                score: result.to_string(),
            },
            MatchResult::Score { score } => Self::Score { score: *score },
        }
    }
}

impl std::fmt::Display for RecordedOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hits { score, .. } => f.write_str(score),
            Self::Score { score } => write!(f, "{score}"),
        }
    }
}

/// Errors raised by [`RankingStore::record`].
#[derive(Debug, Error)]
pub enum RankingError {
    /// Encoding the leaderboard as JSON failed.
    #[error("failed to encode the leaderboard")]
    Encode(#[source] serde_json::Error),
    /// Writing the encoded leaderboard failed.
    #[error("failed to persist the leaderboard")]
    Persist(#[source] BlobStoreError),
}

/// Read-modify-write access to the leaderboard.
#[derive(Debug, Clone)]
pub struct RankingStore<S> {
    store: S,
    key: String,
}

impl<S: BlobStore> RankingStore<S> {
    /// Use `store` with the default [`RANKING_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, RANKING_KEY)
    }

    /// Use `store` with a custom blob name.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Return the stored leaderboard, or an empty list when it is absent or
    /// cannot be read or decoded.
    #[must_use]
    pub fn load(&self) -> Vec<RankingEntry> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("leaderboard unreadable, starting empty: {err}");
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!("leaderboard blob '{}' is corrupt, starting empty: {err}", self.key);
            Vec::new()
        })
    }

    /// Append `entry`, re-sort highest first and persist the whole list.
    ///
    /// Entries with equal scores keep the order they were recorded in.
    /// Returns the list as written.
    ///
    /// # Errors
    /// Returns [`RankingError`] when the list cannot be encoded or written.
    pub fn record(&mut self, entry: RankingEntry) -> Result<Vec<RankingEntry>, RankingError> {
        let mut entries = self.load();
        entries.push(entry);
        entries.sort_by_key(|entry| Reverse(entry.ranking_value()));
        let encoded = serde_json::to_string(&entries).map_err(RankingError::Encode)?;
        self.store
            .set(&self.key, &encoded)
            .map_err(RankingError::Persist)?;
        Ok(entries)
    }

    /// Borrow the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consume the wrapper and return the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }
}
