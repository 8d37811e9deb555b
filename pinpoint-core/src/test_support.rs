//! Test-only in-memory collaborators and fixtures used by unit and behaviour
//! tests.

use std::collections::HashMap;

use crate::{AnswerSet, BlobStore, BlobStoreError, CandidateSet, GeoPoint, Round, RoundConfig};

/// In-memory [`BlobStore`] that can be told to fail every operation.
#[derive(Debug, Default, Clone)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
    failing: bool,
}

impl MemoryBlobStore {
    /// Create a store holding a single blob.
    #[must_use]
    pub fn with_blob(key: &str, value: &str) -> Self {
        Self {
            blobs: HashMap::from([(key.to_owned(), value.to_owned())]),
            failing: false,
        }
    }

    /// Create a store whose reads and writes always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            blobs: HashMap::new(),
            failing: true,
        }
    }

    /// Return the raw blob stored under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, BlobStoreError> {
        if self.failing {
            return Err(BlobStoreError::Read {
                key: key.to_owned(),
                source: Box::new(std::io::Error::other("storage unavailable")),
            });
        }
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BlobStoreError> {
        if self.failing {
            return Err(BlobStoreError::Write {
                key: key.to_owned(),
                source: Box::new(std::io::Error::other("storage unavailable")),
            });
        }
        self.blobs.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Roughly one metre, expressed in degrees of latitude.
pub const DEGREES_PER_METRE: f64 = 1.0 / 111_195.08;

/// Point `metres` north of the equator on the prime meridian.
///
/// # Panics
/// Panics when the offset leaves the valid latitude range.
#[expect(
    clippy::float_arithmetic,
    reason = "fixtures convert metres into degrees"
)]
#[expect(clippy::expect_used, reason = "fixtures should fail fast")]
#[must_use]
pub fn metres_north(metres: f64) -> GeoPoint {
    GeoPoint::new(metres * DEGREES_PER_METRE, 0.0).expect("offset stays within latitude range")
}

/// A round of `candidates` points spaced one kilometre apart along the prime
/// meridian, with the first `answers` of them as the answer set.
///
/// # Panics
/// Panics when the counts cannot form a valid round.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "fixtures space points by index"
)]
#[expect(clippy::expect_used, reason = "fixtures should fail fast")]
#[must_use]
pub fn spaced_round(candidates: usize, answers: usize, config: RoundConfig) -> Round {
    let points: Vec<GeoPoint> = (0..candidates)
        .map(|index| metres_north(index as f64 * 1_000.0))
        .collect();
    let answer_points = points.iter().copied().take(answers).collect();
    Round::new(
        CandidateSet::new(points),
        AnswerSet::new(answer_points),
        config,
    )
    .expect("fixture round is valid")
}
