//! `ranking` command: print the local leaderboard.

use std::io::{self, Write};

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pinpoint_core::{RankingEntry, RankingStore};
use pinpoint_data::FileBlobStore;
use serde::{Deserialize, Serialize};

use crate::{ARG_RANKING_DIR, CliError, DEFAULT_RANKING_DIR};

/// CLI arguments for the `ranking` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "ranking", about = "Print the local leaderboard")]
#[ortho_config(prefix = "PINPOINT")]
pub(crate) struct RankingArgs {
    /// Directory holding the leaderboard.
    #[arg(long = ARG_RANKING_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) ranking_dir: Option<Utf8PathBuf>,
}

impl RankingArgs {
    pub(crate) fn into_ranking_dir(self) -> Result<Utf8PathBuf, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(merged
            .ranking_dir
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_RANKING_DIR)))
    }
}

pub(crate) fn run_ranking(args: RankingArgs, output: &mut dyn Write) -> Result<(), CliError> {
    let dir = args.into_ranking_dir()?;
    let entries = RankingStore::new(FileBlobStore::new(dir)).load();
    write_leaderboard(output, &entries).map_err(CliError::Terminal)
}

/// Render `entries` as a numbered table, best first.
pub(crate) fn write_leaderboard(output: &mut dyn Write, entries: &[RankingEntry]) -> io::Result<()> {
    writeln!(output, "Leaderboard")?;
    if entries.is_empty() {
        return writeln!(output, "  No results yet.");
    }
    for (position, entry) in (1_usize..).zip(entries) {
        writeln!(output, "{position:>3}. {:<20} {}", entry.name, entry.outcome)?;
    }
    Ok(())
}
