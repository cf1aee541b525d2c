//! The read-only source table: one record per city.

use crate::{AmenityCatalog, BASE_AMENITIES, TableError};

/// A single city row holding one raw measurement per catalog amenity.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRecord {
    name: String,
    measurements: Vec<f64>,
}

impl CityRecord {
    /// Construct a record from a city name and measurements in catalog order.
    #[must_use]
    pub fn new(name: impl Into<String>, measurements: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            measurements,
        }
    }

    /// City identity.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw measurements in catalog order.
    #[must_use]
    pub fn measurements(&self) -> &[f64] {
        &self.measurements
    }

    /// Measurement at catalog position `index`, if present.
    #[must_use]
    pub fn measurement(&self, index: usize) -> Option<f64> {
        self.measurements.get(index).copied()
    }
}

/// Immutable table of city records sharing an [`AmenityCatalog`].
///
/// City names are not required to be unique.
///
/// # Examples
/// ```
/// use cityrank_core::{AmenityCatalog, BASE_AMENITIES, CityRecord, CityTable};
///
/// # fn main() -> Result<(), cityrank_core::TableError> {
/// let catalog = AmenityCatalog::from_columns(BASE_AMENITIES)?;
/// let table = CityTable::new(
///     catalog,
///     vec![CityRecord::new("Denver", vec![90.0, 300.0, 60.0, 45.0, 72.0])],
/// )?;
/// assert_eq!(table.column("Walk Score"), Some(vec![60.0]));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CityTable {
    catalog: AmenityCatalog,
    records: Vec<CityRecord>,
}

impl CityTable {
    /// Validate and construct a table.
    ///
    /// # Errors
    /// - [`TableError::MissingAmenity`] when a base amenity is not in the
    ///   catalog.
    /// - [`TableError::MeasurementCount`] when a record's measurements do not
    ///   line up with the catalog.
    /// - [`TableError::InvalidMeasurement`] for negative or non-finite values.
    pub fn new(catalog: AmenityCatalog, records: Vec<CityRecord>) -> Result<Self, TableError> {
        if let Some(missing) = BASE_AMENITIES
            .iter()
            .find(|amenity| !catalog.contains(amenity))
        {
            return Err(TableError::MissingAmenity {
                amenity: (*missing).to_owned(),
            });
        }
        for record in &records {
            validate_record(&catalog, record)?;
        }
        Ok(Self { catalog, records })
    }

    /// Amenity catalog shared by all records.
    #[must_use]
    pub const fn catalog(&self) -> &AmenityCatalog {
        &self.catalog
    }

    /// Records in table order.
    #[must_use]
    pub fn records(&self) -> &[CityRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Report whether the table holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Collect the measurements of one amenity across all records.
    ///
    /// Returns `None` when the amenity is not in the catalog.
    #[must_use]
    pub fn column(&self, amenity: &str) -> Option<Vec<f64>> {
        let index = self.catalog.position(amenity)?;
        self.records
            .iter()
            .map(|record| record.measurement(index))
            .collect()
    }

    /// Iterate over city names in table order.
    pub fn city_names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(CityRecord::name)
    }

    /// City names with repeats removed, keeping the first occurrence.
    #[must_use]
    pub fn unique_city_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.records.len());
        for name in self.city_names() {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Reorder records by city name, ascending. Equal names keep their order.
    #[must_use]
    pub fn sorted_by_city(mut self) -> Self {
        self.records.sort_by(|left, right| left.name.cmp(&right.name));
        self
    }
}

fn validate_record(catalog: &AmenityCatalog, record: &CityRecord) -> Result<(), TableError> {
    if record.measurements.len() != catalog.len() {
        return Err(TableError::MeasurementCount {
            city: record.name.clone(),
            expected: catalog.len(),
            found: record.measurements.len(),
        });
    }
    let invalid = catalog
        .iter()
        .zip(&record.measurements)
        .find(|(_, value)| !value.is_finite() || **value < 0.0);
    if let Some((amenity, value)) = invalid {
        return Err(TableError::InvalidMeasurement {
            city: record.name.clone(),
            amenity: amenity.to_owned(),
            value: *value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{base_catalog, record};
    use rstest::rstest;

    #[rstest]
    fn missing_base_amenity_is_rejected() {
        let catalog =
            AmenityCatalog::from_columns(["Walkable Park Access", "Park Units"]).expect("catalog");
        let err = CityTable::new(catalog, Vec::new()).expect_err("base amenity missing");
        assert_eq!(
            err,
            TableError::MissingAmenity {
                amenity: "Walk Score".to_owned()
            }
        );
    }

    #[rstest]
    fn short_records_are_rejected() {
        let err = CityTable::new(base_catalog(), vec![CityRecord::new("Reno", vec![1.0])])
            .expect_err("arity mismatch");
        assert!(matches!(
            err,
            TableError::MeasurementCount {
                expected: 5,
                found: 1,
                ..
            }
        ));
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn invalid_measurements_are_rejected(#[case] value: f64) {
        let err = CityTable::new(
            base_catalog(),
            vec![record("Reno", [10.0, 10.0, value, 10.0, 10.0])],
        )
        .expect_err("invalid measurement");
        match err {
            TableError::InvalidMeasurement { city, amenity, .. } => {
                assert_eq!(city, "Reno");
                assert_eq!(amenity, "Walk Score");
            }
            other => panic!("expected InvalidMeasurement, found {other:?}"),
        }
    }

    #[rstest]
    fn negative_zero_is_accepted() {
        let table = CityTable::new(
            base_catalog(),
            vec![record("Reno", [-0.0, 0.0, 0.0, 0.0, 0.0])],
        );
        assert!(table.is_ok());
    }

    #[rstest]
    fn sorting_is_stable_for_repeated_names() {
        let table = CityTable::new(
            base_catalog(),
            vec![
                record("Tulsa", [1.0; 5]),
                record("Columbus", [2.0; 5]),
                record("Austin", [3.0; 5]),
                record("Columbus", [4.0; 5]),
            ],
        )
        .expect("table")
        .sorted_by_city();

        assert_eq!(
            table.city_names().collect::<Vec<_>>(),
            ["Austin", "Columbus", "Columbus", "Tulsa"]
        );
        assert_eq!(table.column("Park Units"), Some(vec![3.0, 2.0, 4.0, 1.0]));
        assert_eq!(table.unique_city_names(), ["Austin", "Columbus", "Tulsa"]);
    }

    #[rstest]
    fn unknown_column_is_none() {
        let table = CityTable::new(base_catalog(), Vec::new()).expect("table");
        assert!(table.column("Dog Parks").is_none());
        assert!(table.is_empty());
    }
}
