//! Directory-backed [`BlobStore`]: one `<key>.json` file per blob.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use pinpoint_core::{BlobStore, BlobStoreError};
use thiserror::Error;

/// Errors raised by [`FileBlobStore`] before they are wrapped in
/// [`BlobStoreError`].
#[derive(Debug, Error)]
pub enum FileBlobStoreError {
    /// The key cannot be mapped onto a single file name.
    #[error("blob key {key:?} is not a plain file name")]
    InvalidKey {
        /// Rejected key.
        key: String,
    },
    /// Reading or writing the blob file failed.
    #[error("failed to access {path:?}")]
    Io {
        /// Blob file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },
}

/// Stores each blob as `<dir>/<key>.json`.
///
/// The directory is created on first write. Missing files read as absent
/// blobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlobStore {
    dir: Utf8PathBuf,
}

impl FileBlobStore {
    /// Store blobs under `dir`.
    pub fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the blob files.
    #[must_use]
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    /// File path used for `key`.
    ///
    /// # Errors
    /// Returns [`FileBlobStoreError::InvalidKey`] for empty keys and keys that
    /// contain path separators or parent references.
    pub fn path_for(&self, key: &str) -> Result<Utf8PathBuf, FileBlobStoreError> {
        let plain = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\'])
            && !key.contains("..");
        if plain {
            Ok(self.dir.join(format!("{key}.json")))
        } else {
            Err(FileBlobStoreError::InvalidKey {
                key: key.to_owned(),
            })
        }
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, BlobStoreError> {
        let read_error = |source: FileBlobStoreError| BlobStoreError::Read {
            key: key.to_owned(),
            source: Box::new(source),
        };
        let path = self.path_for(key).map_err(read_error)?;
        debug!("reading blob {key:?} from {path}");
        pinpoint_fs::read_to_string_if_exists(&path)
            .map_err(|source| read_error(FileBlobStoreError::Io { path, source }))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BlobStoreError> {
        let write_error = |source: FileBlobStoreError| BlobStoreError::Write {
            key: key.to_owned(),
            source: Box::new(source),
        };
        let path = self.path_for(key).map_err(write_error)?;
        debug!("writing blob {key:?} to {path}");
        pinpoint_fs::write_string(&path, value)
            .map_err(|source| write_error(FileBlobStoreError::Io { path, source }))
    }
}
