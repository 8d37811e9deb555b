//! Terminal front end for the Pinpoint map guessing game.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod play;
mod ranking;
mod terminal;

pub use error::CliError;

use play::PlayArgs;
use ranking::RankingArgs;

const ARG_NAME: &str = "name";
const ARG_MODE: &str = "mode";
const ARG_TOLERANCE_METERS: &str = "tolerance-meters";
const ARG_MAX_SELECTIONS: &str = "max-selections";
const ARG_RANKING_DIR: &str = "ranking-dir";
const ARG_ROUND: &str = "round";
const ARG_BOUNDARY: &str = "boundary";
const ENV_PLAY_MODE: &str = "PINPOINT_CMDS_PLAY_MODE";

/// Directory the leaderboard is kept in when none is configured.
const DEFAULT_RANKING_DIR: &str = ".pinpoint";

/// Run the Pinpoint CLI with the current process arguments, environment and
/// standard streams.
///
/// # Errors
/// Returns [`CliError`] when configuration, round loading or terminal IO
/// fails. Help and version requests come back as
/// [`CliError::ArgumentParsing`]; [`clap::Error::exit`] prints them on stdout
/// and exits with status 0.
pub fn run() -> Result<(), CliError> {
    let cli = parse_cli(std::env::args_os())?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Play(args) => {
            let mut stdin = std::io::stdin().lock();
            play::run_play(args, &mut stdin, &mut stdout)
        }
        Command::Ranking(args) => ranking::run_ranking(args, &mut stdout),
    }
}

fn parse_cli<I, T>(args: I) -> Result<Cli, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(CliError::ArgumentParsing)
}

#[derive(Debug, Parser)]
#[command(
    name = "pinpoint",
    about = "Pick the hidden points on the map of São Caetano do Sul",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play a round in the terminal.
    Play(PlayArgs),
    /// Print the local leaderboard.
    Ranking(RankingArgs),
}

#[cfg(test)]
mod tests;
