//! CSV-backed [`CitySource`].
//!
//! The file must carry a header row with a `City` column. Unless `City` is the
//! first column, the first column is a row index and is ignored whatever its
//! header says. Every remaining column is an amenity.

use std::io::Read;

use camino::{Utf8Path, Utf8PathBuf};
use cityrank_core::{AmenityCatalog, CITY_COLUMN, CityRecord, CitySource, CityTable, TableError};
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use thiserror::Error;

use crate::fs::open_utf8_file;

/// Errors raised while loading a city table from CSV.
#[derive(Debug, Error)]
pub enum CsvSourceError {
    /// The file could not be opened.
    #[error("failed to open city table at {path}")]
    Open {
        /// Path that was opened.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The header row could not be read.
    #[error("failed to read the CSV header row")]
    Headers {
        /// Underlying CSV failure.
        #[source]
        source: csv::Error,
    },
    /// A data row could not be read, including rows with the wrong field count.
    #[error("failed to read CSV record {index}")]
    Record {
        /// Zero-based data row index.
        index: usize,
        /// Underlying CSV failure.
        #[source]
        source: csv::Error,
    },
    /// The header row has no `City` column.
    #[error("the CSV header has no \"City\" column")]
    MissingIdentityColumn,
    /// A cell could not be parsed as a number.
    #[error("line {line}: {column:?} value {raw:?} is not a number")]
    InvalidMeasurement {
        /// One-based line number in the file.
        line: u64,
        /// Amenity column holding the cell.
        column: String,
        /// Cell contents as read.
        raw: String,
    },
    /// The parsed rows do not form a valid table.
    #[error(transparent)]
    Table(#[from] TableError),
}

/// City table stored in a CSV file.
///
/// # Examples
/// ```no_run
/// use cityrank_core::CitySource;
/// use cityrank_data::CsvCitySource;
///
/// # fn main() -> Result<(), cityrank_data::CsvSourceError> {
/// let table = CsvCitySource::new("data/cities.csv").load()?;
/// println!("{} cities", table.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvCitySource {
    path: Utf8PathBuf,
}

impl CsvCitySource {
    /// Create a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the CSV file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl CitySource for CsvCitySource {
    type Error = CsvSourceError;

    fn load(&self) -> Result<CityTable, Self::Error> {
        let file = open_utf8_file(&self.path).map_err(|source| CsvSourceError::Open {
            path: self.path.clone(),
            source,
        })?;
        let table = parse_city_table(file)?;
        info!(
            "loaded {} cities with {} amenities from {}",
            table.len(),
            table.catalog().len(),
            self.path
        );
        Ok(table)
    }
}

/// Column layout resolved from the header row.
struct Layout {
    city: usize,
    amenities: Vec<(usize, String)>,
}

impl Layout {
    fn from_headers(headers: &StringRecord) -> Result<Self, CsvSourceError> {
        let city = headers
            .iter()
            .position(|name| name.trim() == CITY_COLUMN)
            .ok_or(CsvSourceError::MissingIdentityColumn)?;
        let skip_index = city != 0;
        if skip_index {
            debug!(
                "ignoring index column {:?}",
                headers.get(0).map(str::trim).unwrap_or_default()
            );
        }
        let mut amenities = Vec::new();
        for (position, header) in headers.iter().enumerate() {
            let name = header.trim();
            if position == city || (skip_index && position == 0) {
                continue;
            }
            if name == CITY_COLUMN {
                return Err(TableError::DuplicateAmenity {
                    amenity: CITY_COLUMN.to_owned(),
                }
                .into());
            }
            amenities.push((position, name.to_owned()));
        }
        Ok(Self { city, amenities })
    }

    fn catalog(&self) -> Result<AmenityCatalog, TableError> {
        AmenityCatalog::from_columns(self.amenities.iter().map(|(_, name)| name.as_str()))
    }

    fn record(&self, row: &StringRecord, line: u64) -> Result<CityRecord, CsvSourceError> {
        let city = row.get(self.city).unwrap_or_default().trim();
        let measurements = self
            .amenities
            .iter()
            .map(|(position, column)| {
                let raw = row.get(*position).unwrap_or_default();
                raw.trim()
                    .parse::<f64>()
                    .map_err(|_| CsvSourceError::InvalidMeasurement {
                        line,
                        column: column.clone(),
                        raw: raw.to_owned(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CityRecord::new(city, measurements))
    }
}

/// Parse a CSV city table from any reader.
///
/// Records are returned sorted by city name; cities sharing a name keep their
/// file order.
///
/// # Errors
/// Returns [`CsvSourceError`] when the header or a record is unreadable, the
/// `City` column is missing, a cell is not numeric or the resulting table
/// fails validation.
///
/// # Examples
/// ```
/// use cityrank_data::parse_city_table;
///
/// # fn main() -> Result<(), cityrank_data::CsvSourceError> {
/// let csv = "\
/// City,Walkable Park Access,Park Units,Walk Score,Transit Score,Bike Score
/// Denver,90,300,60,45,72
/// Boston,100,250,83,72,69
/// ";
/// let table = parse_city_table(csv.as_bytes())?;
/// assert_eq!(table.city_names().collect::<Vec<_>>(), ["Boston", "Denver"]);
/// # Ok(())
/// # }
/// ```
pub fn parse_city_table<R: Read>(input: R) -> Result<CityTable, CsvSourceError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);
    let headers = reader
        .headers()
        .map_err(|source| CsvSourceError::Headers { source })?
        .clone();
    let layout = Layout::from_headers(&headers)?;
    let catalog = layout.catalog()?;

    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let row = result.map_err(|source| CsvSourceError::Record { index, source })?;
        let line = row.position().map_or(0, csv::Position::line);
        records.push(layout.record(&row, line)?);
    }
    Ok(CityTable::new(catalog, records)?.sorted_by_city())
}
