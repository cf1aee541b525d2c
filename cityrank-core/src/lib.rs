//! Core domain types and the ranking pipeline for City Rankings.
//!
//! A [`CityTable`] holds one raw measurement per amenity for every city. The
//! pipeline turns those measurements into bracket points, weights them by the
//! user's [`PreferenceSet`], sums them into a total per city and rescales the
//! totals to a `0..=100` ranking. A final selection step keeps either the
//! leading rows of the table or every city ranked at or above a reference
//! city, ordered by ranking.
//!
//! The crate performs no I/O. Tables arrive through the [`CitySource`] trait,
//! which `cityrank-data` implements for CSV files.
//!
//! # Examples
//!
//! ```
//! use cityrank_core::{AmenityCatalog, CityRecord, CityTable, Ranker, RankingRequest};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = AmenityCatalog::from_columns([
//!     "Walkable Park Access",
//!     "Park Units",
//!     "Walk Score",
//!     "Transit Score",
//!     "Bike Score",
//!     "Dog Parks",
//! ])?;
//! let table = CityTable::new(
//!     catalog,
//!     vec![
//!         CityRecord::new("Austin", vec![60.0, 300.0, 40.0, 35.0, 55.0, 14.0]),
//!         CityRecord::new("Boston", vec![100.0, 250.0, 83.0, 72.0, 69.0, 9.0]),
//!     ],
//! )?;
//! let request = RankingRequest::new().with_important(["Dog Parks"]);
//! let ranked = Ranker::default().rank(&table, &request)?;
//! assert_eq!(ranked.len(), 2);
//! assert_eq!(ranked.as_slice()[0].ranking, 100.0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod amenity;
mod error;
pub mod pipeline;
pub mod points;
pub mod preference;
pub mod score;
pub mod select;
pub mod source;
pub mod table;
pub mod weighting;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use amenity::{AmenityCatalog, BASE_AMENITIES, CITY_COLUMN};
pub use error::{ConfigError, PreferenceError, RankingError, TableError};
pub use pipeline::{Ranker, RankerConfig, RankingRequest};
pub use points::{BracketScale, DEFAULT_NUM_BRACKETS};
pub use preference::{Importance, PreferenceSet};
pub use score::{PointsColumn, RankedCities, RankedCity, ScoreTable};
pub use select::{DEFAULT_TOP_N, Selection};
pub use source::{CachedSource, CitySource};
pub use table::{CityRecord, CityTable};
pub use weighting::{BaseOverlap, ImportanceWeights, ScoringPass};
