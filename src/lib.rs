//! Facade crate for the City Rankings engine.
//!
//! This crate re-exports the core domain types and the ranking pipeline, and
//! exposes the CSV-backed city source behind the `csv-source` feature.

#![forbid(unsafe_code)]

pub use cityrank_core::{
    AmenityCatalog, BaseOverlap, CachedSource, CityRecord, CitySource, CityTable, ConfigError,
    ImportanceWeights, PreferenceError, PreferenceSet, RankedCities, RankedCity, Ranker,
    RankerConfig, RankingError, RankingRequest, Selection, TableError,
};

#[cfg(feature = "csv-source")]
pub use cityrank_data::{CsvCitySource, CsvSourceError};
