//! JSON round definitions and the built-in São Caetano do Sul round.
//!
//! A round file looks like:
//!
//! ```json
//! {
//!   "title": "Downtown",
//!   "candidates": [[-23.62909, -46.56753], [-23.62554, -46.57502]],
//!   "answers": [[-23.62909, -46.56753]]
//! }
//! ```
//!
//! Points are `[latitude, longitude]` pairs. The title is optional.

use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use log::info;
use pinpoint_core::{AnswerSet, CandidateSet, GeoPoint, Round, RoundConfig, RoundError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Title of the built-in round.
pub const BUILTIN_TITLE: &str = "São Caetano do Sul";

const BUILTIN_CANDIDATES: [[f64; 2]; 31] = [
    [-23.62909, -46.56753],
    [-23.62554, -46.57502],
    [-23.64662, -46.57615],
    [-23.64019, -46.57460],
    [-23.61782, -46.56961],
    [-23.61835, -46.57463],
    [-23.60667, -46.56602],
    [-23.63209, -46.56488],
    [-23.62274, -46.55676],
    [-23.61319, -46.57705],
    [-23.61590, -46.56925],
    [-23.63309, -46.58313],
    [-23.62187, -46.58150],
    [-23.62503, -46.55721],
    [-23.63547, -46.55407],
    [-23.61743, -46.55275],
    [-23.63500, -46.55839],
    [-23.62896, -46.57504],
    [-23.64273, -46.56068],
    [-23.62710, -46.56801],
    [-23.61073, -46.55121],
    [-23.60359, -46.57058],
    [-23.62600, -46.55724],
    [-23.61255, -46.56821],
    [-23.61148, -46.57334],
    [-23.60232, -46.57687],
    [-23.64809, -46.55629],
    [-23.63880, -46.56394],
    [-23.62168, -46.54903],
    [-23.64842, -46.57071],
    [-23.63652, -46.55885],
];

const BUILTIN_ANSWERS: [[f64; 2]; 7] = [
    [-23.62909, -46.56753],
    [-23.64019, -46.57460],
    [-23.63209, -46.56488],
    [-23.62274, -46.55676],
    [-23.61590, -46.56925],
    [-23.63547, -46.55407],
    [-23.64273, -46.56068],
];

/// Errors raised while loading a round file.
#[derive(Debug, Error)]
pub enum RoundFileError {
    /// The file could not be opened.
    #[error("failed to open round file {path:?}")]
    Open {
        /// Round file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid round definition.
    #[error("failed to parse round file {path:?}")]
    Parse {
        /// Round file path.
        path: Utf8PathBuf,
        /// Decoder failure, including out-of-range coordinates.
        #[source]
        source: serde_json::Error,
    },
    /// The points cannot form a round under the requested configuration.
    #[error("round file {path:?} does not describe a playable round")]
    Invalid {
        /// Round file path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: RoundError,
    },
}

/// Serialised form of a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundDefinition {
    /// Display title for the play area.
    #[serde(default)]
    pub title: Option<String>,
    /// Points the player may pick from.
    pub candidates: CandidateSet,
    /// Hidden points scored against.
    pub answers: AnswerSet,
}

impl RoundDefinition {
    /// The stock São Caetano do Sul round: 31 candidates and 7 answers.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            title: Some(BUILTIN_TITLE.to_owned()),
            candidates: CandidateSet::new(builtin_points(&BUILTIN_CANDIDATES)),
            answers: AnswerSet::new(builtin_points(&BUILTIN_ANSWERS)),
        }
    }

    /// Validate the points against `config` and build a [`Round`].
    ///
    /// # Errors
    /// Returns [`RoundError`] when the round is not playable.
    pub fn into_round(self, config: RoundConfig) -> Result<Round, RoundError> {
        Round::new(self.candidates, self.answers, config)
    }
}

fn builtin_points(raw: &[[f64; 2]]) -> Vec<GeoPoint> {
    raw.iter()
        .filter_map(|pair| GeoPoint::try_from(*pair).ok())
        .collect()
}

/// Decode a [`RoundDefinition`] from `path`.
///
/// # Errors
/// Returns [`RoundFileError::Open`] or [`RoundFileError::Parse`].
pub fn read_round_definition(path: &Utf8Path) -> Result<RoundDefinition, RoundFileError> {
    let file = pinpoint_fs::open_utf8_file(path).map_err(|source| RoundFileError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| RoundFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the round at `path`, or the built-in round when `path` is `None`.
///
/// # Errors
/// Returns [`RoundFileError`] when the file cannot be read or does not form a
/// playable round under `config`.
pub fn load_round(
    path: Option<&Utf8Path>,
    config: RoundConfig,
) -> Result<(RoundDefinition, Round), RoundFileError> {
    let (definition, source) = match path {
        Some(path) => (read_round_definition(path)?, path.to_path_buf()),
        None => (RoundDefinition::builtin(), Utf8PathBuf::from("<built-in>")),
    };
    let round = definition
        .clone()
        .into_round(config)
        .map_err(|err| RoundFileError::Invalid {
            path: source.clone(),
            source: err,
        })?;
    info!(
        "loaded round from {source}: {} candidates, {} answers",
        round.candidates().len(),
        round.answers().len()
    );
    Ok((definition, round))
}

#[cfg(test)]
mod tests {
    #![expect(clippy::expect_used, reason = "tests should fail fast")]

    use super::*;
    use pinpoint_core::{CandidateId, DiscreteScorer, ScoringStrategy};
    use rstest::rstest;
    use tempfile::TempDir;

    fn write_round(contents: &str) -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().expect("tempdir");
        let path =
            Utf8PathBuf::from_path_buf(dir.path().join("round.json")).expect("utf-8 tempdir");
        std::fs::write(&path, contents).expect("write round file");
        (dir, path)
    }

    #[rstest]
    fn builtin_round_has_every_point() {
        let definition = RoundDefinition::builtin();
        assert_eq!(definition.candidates.len(), 31);
        assert_eq!(definition.answers.len(), 7);
    }

    #[rstest]
    fn builtin_answers_are_all_candidates() {
        let definition = RoundDefinition::builtin();
        let picks: Vec<GeoPoint> = [0, 3, 7, 8, 10, 14, 18]
            .into_iter()
            .map(|index| {
                definition
                    .candidates
                    .get(CandidateId::new(index))
                    .expect("candidate exists")
            })
            .collect();
        let result = DiscreteScorer::default().score(&picks, definition.answers.points());
        assert_eq!(result.to_string(), "7/7");
    }

    #[rstest]
    fn missing_path_loads_builtin() {
        let (definition, round) = load_round(None, RoundConfig::default()).expect("builtin");
        assert_eq!(definition.title.as_deref(), Some(BUILTIN_TITLE));
        assert_eq!(round.candidates().len(), 31);
    }

    #[rstest]
    fn loads_round_files() {
        let (_dir, path) = write_round(
            r#"{"candidates": [[0.0, 0.0], [0.0, 0.01]], "answers": [[0.0, 0.0]]}"#,
        );
        let config = RoundConfig {
            max_selections: 1,
            ..RoundConfig::default()
        };
        let (definition, round) = load_round(Some(&path), config).expect("round loads");
        assert_eq!(definition.title, None);
        assert_eq!(round.candidates().len(), 2);
    }

    #[rstest]
    #[case::not_json("candidates")]
    #[case::bad_latitude(r#"{"candidates": [[95.0, 0.0]], "answers": [[0.0, 0.0]]}"#)]
    #[case::missing_answers(r#"{"candidates": [[0.0, 0.0]]}"#)]
    fn malformed_files_fail_to_parse(#[case] contents: &str) {
        let (_dir, path) = write_round(contents);
        let err = load_round(Some(&path), RoundConfig::default()).expect_err("parse failure");
        assert!(matches!(err, RoundFileError::Parse { .. }));
    }

    #[rstest]
    fn too_few_candidates_are_invalid() {
        let (_dir, path) =
            write_round(r#"{"candidates": [[0.0, 0.0]], "answers": [[0.0, 0.0]]}"#);
        let err = load_round(Some(&path), RoundConfig::default()).expect_err("invalid round");
        assert!(matches!(err, RoundFileError::Invalid { .. }));
    }

    #[rstest]
    fn missing_files_fail_to_open() {
        let err = load_round(
            Some(Utf8Path::new("definitely/not/here.json")),
            RoundConfig::default(),
        )
        .expect_err("missing file");
        assert!(matches!(err, RoundFileError::Open { .. }));
    }
}
