//! Focused unit tests covering play configuration and source validation.

use super::*;
use crate::play::{PlayArgs, PlayConfig};
use camino::Utf8PathBuf;
use clap::error::ErrorKind;
use pinpoint_core::{RoundConfig, ScoringMode};
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

#[rstest]
fn converting_without_options_uses_defaults() {
    let config = PlayConfig::try_from(PlayArgs::default()).expect("defaults convert");
    assert_eq!(config.name, None);
    assert_eq!(config.round, RoundConfig::default());
    assert_eq!(config.ranking_dir, Utf8PathBuf::from(DEFAULT_RANKING_DIR));
    assert_eq!(config.round_path, None);
    assert_eq!(config.boundary_path, None);
}

#[rstest]
fn converting_carries_every_override() {
    let args = PlayArgs {
        name: Some("Ana".to_owned()),
        mode: Some("Continuous".to_owned()),
        tolerance_meters: Some(75.0),
        max_selections: Some(3),
        ranking_dir: Some(Utf8PathBuf::from("scores")),
        round: Some(Utf8PathBuf::from("round.json")),
        boundary: Some(Utf8PathBuf::from("SCS.geojson")),
    };
    let config = PlayConfig::try_from(args).expect("overrides convert");
    assert_eq!(config.name.as_deref(), Some("Ana"));
    assert_eq!(config.round.mode, ScoringMode::Continuous);
    assert_eq!(config.round.max_selections, 3);
    assert_eq!(config.round.tolerance_meters.to_bits(), 75.0_f64.to_bits());
    assert_eq!(config.ranking_dir, Utf8PathBuf::from("scores"));
    assert_eq!(config.round_path, Some(Utf8PathBuf::from("round.json")));
    assert_eq!(config.boundary_path, Some(Utf8PathBuf::from("SCS.geojson")));
}

#[rstest]
fn converting_with_unknown_mode_errors() {
    let args = PlayArgs {
        mode: Some("fuzzy".to_owned()),
        ..PlayArgs::default()
    };
    let err = PlayConfig::try_from(args).expect_err("unknown mode should error");
    match err {
        CliError::InvalidArgument { field, env, reason } => {
            assert_eq!(field, ARG_MODE);
            assert_eq!(env, ENV_PLAY_MODE);
            assert!(reason.contains("fuzzy"));
        }
        other => panic!("expected InvalidArgument, found {other:?}"),
    }
}

fn config_with_round(path: Utf8PathBuf) -> PlayConfig {
    PlayConfig {
        round_path: Some(path),
        ..PlayConfig::try_from(PlayArgs::default()).expect("defaults convert")
    }
}

#[rstest]
fn validate_sources_accepts_the_builtin_round() {
    let config = PlayConfig::try_from(PlayArgs::default()).expect("defaults convert");
    assert!(config.validate_sources().is_ok());
}

#[rstest]
fn validate_sources_reports_missing_round_files() {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 tempdir");
    let err = config_with_round(root.join("missing.json"))
        .validate_sources()
        .expect_err("missing round file");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_ROUND),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 tempdir");
    let dir = root.join("rounds");
    fs::create_dir(&dir).expect("create dir");
    let err = config_with_round(dir)
        .validate_sources()
        .expect_err("directory is not a round file");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_ROUND),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
#[case::help("--help", ErrorKind::DisplayHelp)]
#[case::version("--version", ErrorKind::DisplayVersion)]
fn help_and_version_requests_exit_successfully(#[case] flag: &str, #[case] kind: ErrorKind) {
    let err = parse_cli(["pinpoint", flag]).expect_err("clap reports the request as an error");
    match err {
        CliError::ArgumentParsing(clap_err) => {
            assert_eq!(clap_err.kind(), kind);
            assert_eq!(clap_err.exit_code(), 0);
            assert!(!clap_err.use_stderr());
        }
        other => panic!("expected ArgumentParsing, found {other:?}"),
    }
}

#[rstest]
fn unknown_flags_exit_with_a_usage_error() {
    let err = parse_cli(["pinpoint", "--bogus"]).expect_err("unknown flag");
    match err {
        CliError::ArgumentParsing(clap_err) => {
            assert_eq!(clap_err.kind(), ErrorKind::UnknownArgument);
            assert_eq!(clap_err.exit_code(), 2);
            assert!(clap_err.use_stderr());
        }
        other => panic!("expected ArgumentParsing, found {other:?}"),
    }
}
