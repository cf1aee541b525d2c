//! Synthetic city tables for the ranking benchmarks.
//!
//! Measurements are drawn from a log-normal distribution so every column has
//! a long right tail, like real amenity counts, and a stable median.

use std::error::Error;

use cityrank_core::{AmenityCatalog, BASE_AMENITIES, CityRecord, CityTable};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::LogNormal;

/// Seed for deterministic table generation.
pub const BENCHMARK_SEED: u64 = 42;

/// Amenities offered beyond the base set.
pub const EXTRA_AMENITIES: [&str; 3] = ["Dog Parks", "Basketball Hoops", "Playgrounds"];

/// `exp(3.5)` is roughly 33, a typical score.
const LOG_MEAN: f64 = 3.5;
const LOG_SPREAD: f64 = 0.6;

/// Generate a table of `count` cities with every base and extra amenity.
///
/// # Errors
/// Returns an error if the distribution parameters or the generated schema
/// are rejected.
pub fn generate_table(count: usize, seed: u64) -> Result<CityTable, Box<dyn Error>> {
    let amenities: Vec<&str> = BASE_AMENITIES.into_iter().chain(EXTRA_AMENITIES).collect();
    let catalog = AmenityCatalog::from_columns(amenities.iter().copied())?;
    let distribution = LogNormal::new(LOG_MEAN, LOG_SPREAD)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let records = (0..count)
        .map(|index| {
            let measurements = amenities
                .iter()
                .map(|_| rng.sample(distribution))
                .collect();
            CityRecord::new(format!("City {index:05}"), measurements)
        })
        .collect();
    Ok(CityTable::new(catalog, records)?)
}
