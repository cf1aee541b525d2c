//! `rank` command implementation.

use std::io::Write;
use std::num::NonZeroUsize;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser};
use cityrank_core::{
    BaseOverlap, CachedSource, CityTable, DEFAULT_NUM_BRACKETS, DEFAULT_TOP_N, ImportanceWeights,
    Ranker, RankerConfig, RankingRequest,
};
use cityrank_data::{CsvCitySource, fs::file_is_file};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::render::{OutputFormat, write_rankings};
use crate::{
    ARG_BRACKETS, ARG_CURRENT_CITY, ARG_DATA, ARG_FORMAT, ARG_IMPORTANT, ARG_IMPORTANT_WEIGHT,
    ARG_OVERLAP, ARG_TOP, ARG_UNIMPORTANT, ARG_UNIMPORTANT_WEIGHT, CliError, ENV_RANK_DATA,
};

/// Layered settings for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    long_about = "Score every city in a CSV table, weight the amenities you \
                 care about, and print the leading cities by ranking. Settings \
                 can come from CLI flags, configuration files, or environment \
                 variables.",
    about = "Rank cities for a set of amenity preferences"
)]
#[ortho_config(prefix = "CITYRANK")]
pub(crate) struct RankArgs {
    /// Path to the CSV city table.
    #[arg(long = ARG_DATA, value_name = "path")]
    #[serde(default)]
    pub(crate) data: Option<Utf8PathBuf>,
    /// Number of bracket boundaries per amenity (default 50).
    #[arg(long = ARG_BRACKETS, value_name = "count")]
    #[serde(default)]
    pub(crate) brackets: Option<NonZeroUsize>,
    /// Rows kept when no current city is given (default 10).
    #[arg(long = ARG_TOP, value_name = "count")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// How a base amenity you also selected is scored: compound or override.
    #[arg(long = ARG_OVERLAP, value_name = "policy")]
    #[serde(default)]
    pub(crate) overlap: Option<BaseOverlap>,
    /// Multiplier for important amenities (default 5).
    #[arg(long = ARG_IMPORTANT_WEIGHT, value_name = "weight", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) important_weight: Option<f64>,
    /// Multiplier for unimportant amenities (default -1).
    #[arg(long = ARG_UNIMPORTANT_WEIGHT, value_name = "weight", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) unimportant_weight: Option<f64>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Arguments of one `rank` invocation: layered settings plus per-request
/// selections.
#[derive(Debug, Clone, Args, Default)]
pub(crate) struct RankCommand {
    #[command(flatten)]
    pub(crate) settings: RankArgs,
    /// Amenity you care about; repeat for several.
    #[arg(long = ARG_IMPORTANT, value_name = "amenity")]
    pub(crate) important: Vec<String>,
    /// Amenity to count against a city; repeat for several.
    #[arg(long = ARG_UNIMPORTANT, value_name = "amenity")]
    pub(crate) unimportant: Vec<String>,
    /// Show every city ranked at or above this one instead of the top rows.
    #[arg(long = ARG_CURRENT_CITY, value_name = "city")]
    pub(crate) current_city: Option<String>,
}

impl RankCommand {
    fn request(self) -> RankingRequest {
        RankingRequest {
            important: self.important,
            unimportant: self.unimportant,
            current_city: self.current_city,
        }
    }
}

/// Resolved `rank` configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// CSV city table.
    pub(crate) data: Utf8PathBuf,
    /// Validated ranker parameters.
    pub(crate) ranker: RankerConfig,
    /// Output format.
    pub(crate) format: OutputFormat,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.data, ARG_DATA)
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let data = args.data.ok_or(CliError::MissingArgument {
            field: ARG_DATA,
            env: ENV_RANK_DATA,
        })?;
        let defaults = ImportanceWeights::default();
        let weights = ImportanceWeights {
            important: args.important_weight.unwrap_or(defaults.important),
            unimportant: args.unimportant_weight.unwrap_or(defaults.unimportant),
            ..defaults
        }
        .validate()?;
        Ok(Self {
            data,
            ranker: RankerConfig {
                num_brackets: args.brackets.unwrap_or(DEFAULT_NUM_BRACKETS),
                weights,
                overlap: args.overlap.unwrap_or_default(),
                top_n: args.top.unwrap_or(DEFAULT_TOP_N),
            },
            format: args.format.unwrap_or_default(),
        })
    }
}

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
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

/// Cached CSV source for the table at `path`.
pub(crate) fn city_source(path: &Utf8Path) -> CachedSource<CsvCitySource> {
    CachedSource::new(CsvCitySource::new(path))
}

/// Shared table behind `source`, loading it on first use.
pub(crate) fn load_table(
    source: &CachedSource<CsvCitySource>,
) -> Result<Arc<CityTable>, CliError> {
    source.table().map_err(|err| CliError::LoadTable {
        path: source.source().path().to_path_buf(),
        source: err,
    })
}

pub(crate) fn run_rank_with(command: RankCommand, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = command.settings.clone().into_config()?;
    config.validate_sources()?;
    let table = load_table(&city_source(&config.data))?;
    let ranker = Ranker::new(config.ranker)?;
    let ranked = ranker.rank(&table, &command.request())?;
    write_rankings(writer, &ranked, config.format)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
