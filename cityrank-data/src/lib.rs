//! File-backed city sources for City Rankings.
//!
//! Responsibilities:
//! - Read amenity tables from CSV files into validated
//!   [`CityTable`](cityrank_core::CityTable) values.
//! - Provide capability-based filesystem helpers shared with the CLI.
//!
//! Boundaries:
//! - Do not encode ranking rules (live in `cityrank-core`).
//!
//! Invariants:
//! - Loaded tables are sorted by city name.
//! - No global mutable state.

#![forbid(unsafe_code)]

mod csv_source;
pub mod fs;

pub use csv_source::{CsvCitySource, CsvSourceError, parse_city_table};
