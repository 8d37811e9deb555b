//! City boundary overlay read from a GeoJSON file.
//!
//! The overlay is decoration only. [`load_boundary_or_warn`] logs failures
//! and returns `None` so a missing or broken file never stops a round.

use camino::{Utf8Path, Utf8PathBuf};
use geo::{BoundingRect, GeometryCollection, Rect};
use geojson::GeoJson;
use log::{info, warn};
use thiserror::Error;

/// Errors raised while loading a boundary overlay.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// The file could not be read.
    #[error("failed to read boundary file {path:?}")]
    Read {
        /// Boundary file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid GeoJSON or holds unsupported geometry.
    #[error("failed to decode boundary file {path:?}")]
    Decode {
        /// Boundary file path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: Box<geojson::Error>,
    },
    /// The file decoded but holds no geometry.
    #[error("boundary file {path:?} contains no geometry")]
    Empty {
        /// Boundary file path.
        path: Utf8PathBuf,
    },
}

/// Outline geometry drawn around the play area.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    geometry: GeometryCollection<f64>,
}

impl Boundary {
    /// Wrap decoded geometry.
    #[must_use]
    pub const fn new(geometry: GeometryCollection<f64>) -> Self {
        Self { geometry }
    }

    /// Decoded geometry in `(lon, lat)` coordinates.
    #[must_use]
    pub const fn geometry(&self) -> &GeometryCollection<f64> {
        &self.geometry
    }

    /// Number of top-level shapes.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.geometry.len()
    }

    /// Bounding rectangle of the outline.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.geometry.bounding_rect()
    }
}

/// Parse GeoJSON text into a [`Boundary`].
///
/// `path` is only used to label errors.
///
/// # Errors
/// Returns [`BoundaryError::Decode`] or [`BoundaryError::Empty`].
pub fn parse_boundary(text: &str, path: &Utf8Path) -> Result<Boundary, BoundaryError> {
    let decode_error = |source: geojson::Error| BoundaryError::Decode {
        path: path.to_path_buf(),
        source: Box::new(source),
    };
    let document = text.parse::<GeoJson>().map_err(decode_error)?;
    let geometry: GeometryCollection<f64> =
        geojson::quick_collection(&document).map_err(decode_error)?;
    if geometry.is_empty() {
        return Err(BoundaryError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(Boundary::new(geometry))
}

/// Read and parse the boundary at `path`.
///
/// # Errors
/// Returns [`BoundaryError`] when the file cannot be read or decoded.
pub fn load_boundary(path: &Utf8Path) -> Result<Boundary, BoundaryError> {
    let text = pinpoint_fs::read_to_string_if_exists(path)
        .and_then(|found| {
            found.ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound))
        })
        .map_err(|source| BoundaryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let boundary = parse_boundary(&text, path)?;
    info!(
        "loaded boundary from {path}: {} shape(s)",
        boundary.shape_count()
    );
    Ok(boundary)
}

/// Load the boundary at `path`, logging and discarding any failure.
#[must_use]
pub fn load_boundary_or_warn(path: &Utf8Path) -> Option<Boundary> {
    load_boundary(path)
        .inspect_err(|err| warn!("city boundary unavailable, continuing without it: {err}"))
        .ok()
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        clippy::float_arithmetic,
        reason = "tests should fail fast and compare coordinates"
    )]

    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    const OUTLINE: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {"name": "Test"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[
                    [-46.58, -23.65], [-46.54, -23.65], [-46.54, -23.60],
                    [-46.58, -23.60], [-46.58, -23.65]
                ]]
            }
        }]
    }"#;

    #[rstest]
    fn parses_feature_collections() {
        let boundary = parse_boundary(OUTLINE, Utf8Path::new("outline.geojson")).expect("parse");
        assert_eq!(boundary.shape_count(), 1);
        let bounds = boundary.bounds().expect("bounds");
        assert!((bounds.min().x - -46.58).abs() < 1e-9);
        assert!((bounds.max().y - -23.60).abs() < 1e-9);
    }

    #[rstest]
    #[case::not_json("not geojson")]
    #[case::not_geojson(r#"{"type": "Nothing"}"#)]
    fn rejects_invalid_geojson(#[case] text: &str) {
        let err = parse_boundary(text, Utf8Path::new("bad.geojson")).expect_err("invalid");
        assert!(matches!(err, BoundaryError::Decode { .. }));
    }

    #[rstest]
    fn rejects_empty_collections() {
        let err = parse_boundary(
            r#"{"type": "FeatureCollection", "features": []}"#,
            Utf8Path::new("empty.geojson"),
        )
        .expect_err("empty");
        assert!(matches!(err, BoundaryError::Empty { .. }));
    }

    #[rstest]
    fn loads_from_disk() {
        let dir = TempDir::new().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("SCS.geojson")).expect("utf-8");
        std::fs::write(&path, OUTLINE).expect("write outline");
        assert!(load_boundary(&path).is_ok());
    }

    #[rstest]
    fn missing_files_are_skipped_with_a_warning() {
        assert!(load_boundary_or_warn(Utf8Path::new("missing/SCS.geojson")).is_none());
        let err = load_boundary(Utf8Path::new("missing/SCS.geojson")).expect_err("missing");
        assert!(matches!(err, BoundaryError::Read { .. }));
    }
}
