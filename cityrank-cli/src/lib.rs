//! Command-line interface for ranking cities by park and recreation amenities.
//!
//! `cityrank rank` scores a CSV city table for the caller's important and
//! unimportant amenities; `cityrank amenities` and `cityrank cities` list
//! what a table offers. Options layer CLI flags over `CITYRANK_*`
//! environment variables and configuration files via `ortho_config`.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{ArgAction, Parser, Subcommand};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

mod error;
mod listing;
mod rank;
mod render;

pub use error::CliError;
pub use render::OutputFormat;

use listing::{AmenitiesCommand, CitiesArgs, run_amenities_with, run_cities_with};
use rank::{RankCommand, run_rank_with};

pub(crate) const ARG_DATA: &str = "data";
pub(crate) const ARG_BRACKETS: &str = "brackets";
pub(crate) const ARG_TOP: &str = "top";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_OVERLAP: &str = "overlap";
pub(crate) const ARG_IMPORTANT_WEIGHT: &str = "important-weight";
pub(crate) const ARG_UNIMPORTANT_WEIGHT: &str = "unimportant-weight";
pub(crate) const ARG_IMPORTANT: &str = "important";
pub(crate) const ARG_UNIMPORTANT: &str = "unimportant";
pub(crate) const ARG_CURRENT_CITY: &str = "current-city";
pub(crate) const ENV_RANK_DATA: &str = "CITYRANK_CMDS_RANK_DATA";
pub(crate) const ENV_AMENITIES_DATA: &str = "CITYRANK_CMDS_AMENITIES_DATA";
pub(crate) const ENV_CITIES_DATA: &str = "CITYRANK_CMDS_CITIES_DATA";

/// Run the `cityrank` CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, the data file or the
/// ranking itself are invalid, or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => return Err(CliError::ArgumentParsing(err)),
    };
    init_logging(cli.verbose)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Rank(args) => run_rank_with(args, writer),
        Command::Amenities(args) => run_amenities_with(args, writer),
        Command::Cities(args) => run_cities_with(args, writer),
    }
}

/// Map the number of `-v` flags to a log level.
pub(crate) const fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) -> Result<(), CliError> {
    TermLogger::init(
        level_filter(verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "cityrank",
    about = "Rank US cities by the park and recreation amenities you care about",
    version
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank cities for a set of amenity preferences.
    Rank(RankCommand),
    /// List the amenities a table offers.
    Amenities(AmenitiesCommand),
    /// List the cities in a table.
    Cities(CitiesArgs),
}

#[cfg(test)]
mod tests;
