//! Named string blob storage, the persistence seam for the leaderboard.

use thiserror::Error;

/// Boxed error raised by a storage backend.
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors reported by a [`BlobStore`].
#[derive(Debug, Error)]
pub enum BlobStoreError {
    /// Reading a blob failed.
    #[error("failed to read blob '{key}'")]
    Read {
        /// Blob name.
        key: String,
        /// Backend failure.
        #[source]
        source: BackendError,
    },
    /// Writing a blob failed.
    #[error("failed to write blob '{key}'")]
    Write {
        /// Blob name.
        key: String,
        /// Backend failure.
        #[source]
        source: BackendError,
    },
}

/// Get/set access to named string blobs, like browser local storage.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use pinpoint_core::{BlobStore, BlobStoreError};
///
/// #[derive(Default)]
/// struct MapStore(HashMap<String, String>);
///
/// impl BlobStore for MapStore {
///     fn get(&self, key: &str) -> Result<Option<String>, BlobStoreError> {
///         Ok(self.0.get(key).cloned())
///     }
///
///     fn set(&mut self, key: &str, value: &str) -> Result<(), BlobStoreError> {
///         self.0.insert(key.to_owned(), value.to_owned());
///         Ok(())
///     }
/// }
///
/// let mut store = MapStore::default();
/// store.set("ranking", "[]")?;
/// assert_eq!(store.get("ranking")?.as_deref(), Some("[]"));
/// # Ok::<(), BlobStoreError>(())
/// ```
pub trait BlobStore {
    /// Return the blob stored under `key`, or `None` when absent.
    ///
    /// # Errors
    /// Returns [`BlobStoreError::Read`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, BlobStoreError>;

    /// Replace the blob stored under `key`.
    ///
    /// # Errors
    /// Returns [`BlobStoreError::Write`] when the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), BlobStoreError>;
}
