//! Table builders shared by the integration tests.

use cityrank_core::{AmenityCatalog, BASE_AMENITIES, CityRecord, CityTable, TableError};

/// Twelve name-sorted cities measured on the base amenities only.
///
/// Seattle and Tulsa sort last so they fall outside the default top ten.
pub fn twelve_cities() -> Result<CityTable, TableError> {
    let rows = [
        ("Arlington", [98.0, 270.0, 74.0, 60.0, 69.0]),
        ("Atlanta", [77.0, 390.0, 49.0, 45.0, 51.0]),
        ("Boston", [100.0, 250.0, 83.0, 72.0, 69.0]),
        ("Charlotte", [50.0, 210.0, 26.0, 25.0, 20.0]),
        ("Chicago", [98.0, 600.0, 77.0, 65.0, 72.0]),
        ("Denver", [90.0, 300.0, 60.0, 45.0, 72.0]),
        ("Fresno", [72.0, 150.0, 48.0, 33.0, 53.0]),
        ("Mesa", [56.0, 180.0, 40.0, 23.0, 52.0]),
        ("Portland", [89.0, 310.0, 67.0, 51.0, 83.0]),
        ("San Francisco", [100.0, 220.0, 89.0, 77.0, 72.0]),
        ("Seattle", [95.0, 480.0, 74.0, 60.0, 70.0]),
        ("Tulsa", [45.0, 160.0, 32.0, 19.0, 36.0]),
    ];
    let records = rows
        .into_iter()
        .map(|(city, values)| CityRecord::new(city, values.to_vec()))
        .collect();
    CityTable::new(AmenityCatalog::from_columns(BASE_AMENITIES)?, records)
}

/// Four cities that tie on every base amenity; Austin has the most dog parks.
pub fn dog_park_cities() -> Result<CityTable, TableError> {
    let catalog =
        AmenityCatalog::from_columns(BASE_AMENITIES.iter().copied().chain(["Dog Parks"]))?;
    let records = [("Austin", 20.0), ("Boston", 5.0), ("Chicago", 5.0), ("Denver", 5.0)]
        .into_iter()
        .map(|(city, dog_parks)| CityRecord::new(city, vec![50.0, 50.0, 50.0, 50.0, 50.0, dog_parks]))
        .collect();
    CityTable::new(catalog, records)
}
