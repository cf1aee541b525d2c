//! Table builders shared by unit and behaviour tests.

use crate::{AmenityCatalog, BASE_AMENITIES, CityRecord, CityTable};

/// Extra amenities carried by [`sample_table`] beyond the base set.
pub const SAMPLE_EXTRAS: [&str; 2] = ["Dog Parks", "Basketball Hoops"];

/// Catalog containing exactly the base amenities.
///
/// # Panics
/// Never in practice; the base names are distinct.
#[expect(
    clippy::expect_used,
    reason = "base amenity names are distinct constants"
)]
#[must_use]
pub fn base_catalog() -> AmenityCatalog {
    AmenityCatalog::from_columns(BASE_AMENITIES).expect("base amenities are distinct")
}

/// Catalog containing the base amenities followed by `extras`.
///
/// # Panics
/// Panics when `extras` repeats a name.
#[expect(
    clippy::expect_used,
    reason = "test fixtures should fail fast on duplicate names"
)]
#[must_use]
pub fn catalog_with(extras: &[&str]) -> AmenityCatalog {
    AmenityCatalog::from_columns(BASE_AMENITIES.iter().chain(extras).copied())
        .expect("fixture amenity names are distinct")
}

/// Build a record from a fixed-size measurement array.
#[must_use]
pub fn record<const N: usize>(name: &str, measurements: [f64; N]) -> CityRecord {
    CityRecord::new(name, measurements.to_vec())
}

/// Twelve cities sorted by name with base amenities plus [`SAMPLE_EXTRAS`].
///
/// Column order: Walkable Park Access, Park Units, Walk Score, Transit Score,
/// Bike Score, Dog Parks, Basketball Hoops.
///
/// # Panics
/// Panics if the fixture rows stop matching the catalog.
#[expect(clippy::expect_used, reason = "fixture rows are known to be valid")]
#[must_use]
pub fn sample_table() -> CityTable {
    let rows = vec![
        record("Arlington", [98.0, 270.0, 74.0, 60.0, 69.0, 8.0, 3.1]),
        record("Atlanta", [77.0, 390.0, 49.0, 45.0, 51.0, 5.0, 2.0]),
        record("Boston", [100.0, 250.0, 83.0, 72.0, 69.0, 9.0, 3.4]),
        record("Charlotte", [50.0, 210.0, 26.0, 25.0, 20.0, 2.0, 1.1]),
        record("Chicago", [98.0, 600.0, 77.0, 65.0, 72.0, 6.0, 1.8]),
        record("Denver", [90.0, 300.0, 60.0, 45.0, 72.0, 11.0, 2.5]),
        record("Fresno", [72.0, 150.0, 48.0, 33.0, 53.0, 1.0, 1.0]),
        record("Mesa", [56.0, 180.0, 40.0, 23.0, 52.0, 3.0, 1.4]),
        record("Portland", [89.0, 310.0, 67.0, 51.0, 83.0, 12.0, 2.2]),
        record("San Francisco", [100.0, 220.0, 89.0, 77.0, 72.0, 10.0, 3.0]),
        record("Seattle", [95.0, 480.0, 74.0, 60.0, 70.0, 14.0, 2.6]),
        record("Tulsa", [45.0, 160.0, 32.0, 19.0, 36.0, 4.0, 1.2]),
    ];
    CityTable::new(catalog_with(&SAMPLE_EXTRAS), rows).expect("sample rows are valid")
}
