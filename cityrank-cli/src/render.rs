//! Output formatting for ranked cities and plain listings.

use std::io::Write;

use clap::ValueEnum;
use cityrank_core::RankedCities;
use serde::{Deserialize, Serialize};

use crate::CliError;

const RANK_HEADER: &str = "rank";
const CITY_HEADER: &str = "city";
const RANKING_HEADER: &str = "ranking";

/// How `rank` prints its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON array of `{city, ranking, total_points}`.
    #[default]
    Json,
    /// Aligned text table with rankings to two decimals.
    Text,
}

/// Write `ranked` to `writer` in `format`.
pub(crate) fn write_rankings(
    writer: &mut dyn Write,
    ranked: &RankedCities,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(writer, ranked),
        OutputFormat::Text => write_table(writer, ranked),
    }
}

fn write_json(writer: &mut dyn Write, ranked: &RankedCities) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(ranked).map_err(CliError::SerialiseRankings)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)
}

fn write_table(writer: &mut dyn Write, ranked: &RankedCities) -> Result<(), CliError> {
    let width = ranked
        .iter()
        .map(|entry| entry.city.chars().count())
        .chain([CITY_HEADER.len()])
        .max()
        .unwrap_or(CITY_HEADER.len());
    writeln!(
        writer,
        "{RANK_HEADER:>4}  {CITY_HEADER:<width$}  {RANKING_HEADER:>7}"
    )
    .map_err(CliError::WriteOutput)?;
    for (position, entry) in (1_usize..).zip(ranked.iter()) {
        writeln!(
            writer,
            "{position:>4}  {city:<width$}  {ranking:>7}",
            city = entry.city,
            ranking = entry.display_ranking(),
        )
        .map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

/// Write one name per line.
pub(crate) fn write_lines<'a>(
    writer: &mut dyn Write,
    lines: impl IntoIterator<Item = &'a str>,
) -> Result<(), CliError> {
    for line in lines {
        writeln!(writer, "{line}").map_err(CliError::WriteOutput)?;
    }
    Ok(())
}
