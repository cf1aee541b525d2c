//! Error types raised while validating tables and ranking cities.

use thiserror::Error;

/// Errors raised when a source table does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// The same amenity column appears more than once in the schema.
    #[error("amenity column {amenity:?} appears more than once")]
    DuplicateAmenity {
        /// Repeated column name.
        amenity: String,
    },
    /// A required amenity column is absent from the schema.
    #[error("amenity column {amenity:?} is missing from the source table")]
    MissingAmenity {
        /// Name of the absent column.
        amenity: String,
    },
    /// A record does not carry one measurement per catalog amenity.
    #[error("city {city:?} has {found} measurements but the catalog lists {expected}")]
    MeasurementCount {
        /// Identity of the offending record.
        city: String,
        /// Number of amenities in the catalog.
        expected: usize,
        /// Number of measurements present on the record.
        found: usize,
    },
    /// A measurement is negative or not finite.
    #[error("city {city:?} has invalid {amenity:?} measurement {value}")]
    InvalidMeasurement {
        /// Identity of the offending record.
        city: String,
        /// Amenity column holding the value.
        amenity: String,
        /// Rejected value.
        value: f64,
    },
}

/// Errors raised when a user's amenity preferences are inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// A preference names an amenity that is not in the catalog.
    #[error("unknown amenity {amenity:?}")]
    UnknownAmenity {
        /// Name supplied by the caller.
        amenity: String,
    },
    /// An amenity was marked both important and unimportant.
    #[error("amenity {amenity:?} cannot be both important and unimportant")]
    OverlappingPreference {
        /// Amenity present in both selections.
        amenity: String,
    },
}

/// Errors raised when ranker configuration is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An importance multiplier is NaN or infinite.
    #[error("{field} importance weight must be finite")]
    NonFiniteWeight {
        /// Name of the offending multiplier.
        field: &'static str,
    },
}

/// Errors raised by the ranking pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    /// The source table is malformed.
    #[error(transparent)]
    Table(#[from] TableError),
    /// The requested preferences are inconsistent with the catalog.
    #[error(transparent)]
    Preference(#[from] PreferenceError),
    /// The ranker configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The reference city does not appear in the table.
    #[error("city {city:?} was not found in the table")]
    CityNotFound {
        /// Name supplied by the caller.
        city: String,
    },
    /// No city has a positive total, so rankings cannot be normalised.
    #[error("cannot normalise rankings when the highest total is {max_total}")]
    DegenerateScore {
        /// Highest total points across the table.
        max_total: f64,
    },
}
