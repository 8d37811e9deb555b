//! File-backed adapters for the Pinpoint game.
//!
//! Responsibilities:
//! - Persist named blobs (the leaderboard) as JSON files.
//! - Load round definitions from JSON, with a built-in default round.
//! - Load the optional GeoJSON boundary overlay.
//!
//! Boundaries:
//! - Do not encode game rules (live in `pinpoint-core`).
//! - All filesystem access goes through `pinpoint-fs`.

#![forbid(unsafe_code)]

mod blob_store;
mod boundary;
mod round_file;

pub use blob_store::{FileBlobStore, FileBlobStoreError};
pub use boundary::{Boundary, BoundaryError, load_boundary, load_boundary_or_warn, parse_boundary};
pub use round_file::{
    BUILTIN_TITLE, RoundDefinition, RoundFileError, load_round, read_round_definition,
};
