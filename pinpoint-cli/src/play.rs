//! `play` command: configuration and round wiring.

use std::io::{BufRead, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::warn;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pinpoint_core::{
    DEFAULT_MAX_SELECTIONS, DEFAULT_TOLERANCE_METERS, GameSession, RankingStore, RoundConfig,
    ScoringMode,
};
use pinpoint_data::{FileBlobStore, load_boundary_or_warn, load_round};
use serde::{Deserialize, Serialize};

use crate::ranking::write_leaderboard;
use crate::terminal::Terminal;
use crate::{
    ARG_BOUNDARY, ARG_MAX_SELECTIONS, ARG_MODE, ARG_NAME, ARG_RANKING_DIR, ARG_ROUND,
    ARG_TOLERANCE_METERS, CliError, DEFAULT_RANKING_DIR, ENV_PLAY_MODE,
};

/// CLI arguments for the `play` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "play",
    long_about = "Play a round in the terminal. Pick points by number, then \
                  submit to see how close you came. Options can come from \
                  CLI flags, configuration files, or environment variables.",
    about = "Play a round in the terminal"
)]
#[ortho_config(prefix = "PINPOINT")]
pub(crate) struct PlayArgs {
    /// Player name; prompted for when absent.
    #[arg(long = ARG_NAME, value_name = "name")]
    #[serde(default)]
    pub(crate) name: Option<String>,
    /// Scoring mode: `discrete` or `continuous`.
    #[arg(long = ARG_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<String>,
    /// Hit radius for discrete scoring, in metres.
    #[arg(long = ARG_TOLERANCE_METERS, value_name = "metres")]
    #[serde(default)]
    pub(crate) tolerance_meters: Option<f64>,
    /// Number of points to pick.
    #[arg(long = ARG_MAX_SELECTIONS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_selections: Option<usize>,
    /// Directory holding the leaderboard.
    #[arg(long = ARG_RANKING_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) ranking_dir: Option<Utf8PathBuf>,
    /// JSON round definition; the built-in round is used when absent.
    #[arg(long = ARG_ROUND, value_name = "path")]
    #[serde(default)]
    pub(crate) round: Option<Utf8PathBuf>,
    /// GeoJSON city outline.
    #[arg(long = ARG_BOUNDARY, value_name = "path")]
    #[serde(default)]
    pub(crate) boundary: Option<Utf8PathBuf>,
}

impl PlayArgs {
    fn into_config(self) -> Result<PlayConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlayConfig::try_from(merged)
    }
}

/// Resolved `play` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlayConfig {
    /// Name to start with, if supplied up front.
    pub(crate) name: Option<String>,
    /// Round tunables.
    pub(crate) round: RoundConfig,
    /// Directory holding the leaderboard.
    pub(crate) ranking_dir: Utf8PathBuf,
    /// Round definition file.
    pub(crate) round_path: Option<Utf8PathBuf>,
    /// Boundary overlay file.
    pub(crate) boundary_path: Option<Utf8PathBuf>,
}

impl PlayConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        self.round_path
            .as_deref()
            .map_or(Ok(()), |path| require_existing(path, ARG_ROUND))
    }
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match pinpoint_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

impl TryFrom<PlayArgs> for PlayConfig {
    type Error = CliError;

    fn try_from(args: PlayArgs) -> Result<Self, Self::Error> {
        let mode = args
            .mode
            .as_deref()
            .map_or(Ok(ScoringMode::default()), str::parse)
            .map_err(|reason| CliError::InvalidArgument {
                field: ARG_MODE,
                env: ENV_PLAY_MODE,
                reason,
            })?;
        let round = RoundConfig {
            max_selections: args.max_selections.unwrap_or(DEFAULT_MAX_SELECTIONS),
            tolerance_meters: args.tolerance_meters.unwrap_or(DEFAULT_TOLERANCE_METERS),
            mode,
        };
        Ok(Self {
            name: args.name,
            round,
            ranking_dir: args
                .ranking_dir
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_RANKING_DIR)),
            round_path: args.round,
            boundary_path: args.boundary,
        })
    }
}

pub(crate) fn run_play(
    args: PlayArgs,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    play_with_config(&config, input, output)
}

/// Play one round and, if it is scored, record it and print the leaderboard.
pub(crate) fn play_with_config(
    config: &PlayConfig,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    let (definition, round) = load_round(config.round_path.as_deref(), config.round)?;
    let boundary = config
        .boundary_path
        .as_deref()
        .and_then(load_boundary_or_warn);
    let mut session = GameSession::new(round);
    let mut terminal = Terminal::new(input, output);

    terminal
        .intro(definition.title.as_deref(), boundary.as_ref(), &session)
        .map_err(CliError::Terminal)?;
    let Some(outcome) = terminal
        .play(&mut session, config.name.as_deref())
        .map_err(CliError::Terminal)?
    else {
        return Ok(());
    };

    let mut ranking = RankingStore::new(FileBlobStore::new(config.ranking_dir.clone()));
    let entries = ranking
        .record(outcome.ranking_entry())
        .unwrap_or_else(|err| {
            warn!("result not saved to the leaderboard: {err}");
            ranking.load()
        });

    terminal
        .show_outcome(&outcome, session.round())
        .map_err(CliError::Terminal)?;
    write_leaderboard(terminal.output(), &entries).map_err(CliError::Terminal)
}
