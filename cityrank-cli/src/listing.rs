//! `amenities` and `cities` listing commands.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Args, Parser};
use cityrank_core::PreferenceSet;
use cityrank_core::preference::unimportant_choices;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::rank::{city_source, load_table, require_existing};
use crate::render::write_lines;
use crate::{ARG_DATA, ARG_IMPORTANT, CliError, ENV_AMENITIES_DATA, ENV_CITIES_DATA};

/// Layered settings for the `amenities` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "amenities", about = "List the amenities a table offers")]
#[ortho_config(prefix = "CITYRANK")]
pub(crate) struct AmenitiesArgs {
    /// Path to the CSV city table.
    #[arg(long = ARG_DATA, value_name = "path")]
    #[serde(default)]
    pub(crate) data: Option<Utf8PathBuf>,
}

/// Arguments of one `amenities` invocation.
#[derive(Debug, Clone, Args, Default)]
pub(crate) struct AmenitiesCommand {
    #[command(flatten)]
    pub(crate) settings: AmenitiesArgs,
    /// Amenity already picked as important; it is left out of the listing.
    #[arg(long = ARG_IMPORTANT, value_name = "amenity")]
    pub(crate) important: Vec<String>,
}

/// Layered settings for the `cities` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "cities", about = "List the cities in a table")]
#[ortho_config(prefix = "CITYRANK")]
pub(crate) struct CitiesArgs {
    /// Path to the CSV city table.
    #[arg(long = ARG_DATA, value_name = "path")]
    #[serde(default)]
    pub(crate) data: Option<Utf8PathBuf>,
}

fn resolve_data(data: Option<Utf8PathBuf>, env: &'static str) -> Result<Utf8PathBuf, CliError> {
    let path = data.ok_or(CliError::MissingArgument {
        field: ARG_DATA,
        env,
    })?;
    require_existing(&path, ARG_DATA)?;
    Ok(path)
}

/// Print the sorted catalog, or the unimportant choices left once
/// `--important` has been picked.
pub(crate) fn run_amenities_with(
    command: AmenitiesCommand,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = command
        .settings
        .load_and_merge()
        .map_err(CliError::Configuration)?;
    let path = resolve_data(merged.data, ENV_AMENITIES_DATA)?;
    let table = load_table(&city_source(&path))?;
    let catalog = table.catalog();
    if command.important.is_empty() {
        return write_lines(writer, catalog.sorted_names());
    }
    let picked = PreferenceSet::new(catalog, command.important, Vec::<String>::new())?;
    write_lines(writer, unimportant_choices(catalog, picked.important()))
}

/// Print each city once, in table order.
pub(crate) fn run_cities_with(args: CitiesArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let path = resolve_data(merged.data, ENV_CITIES_DATA)?;
    let table = load_table(&city_source(&path))?;
    write_lines(writer, table.unique_city_names())
}
