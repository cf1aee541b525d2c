//! Amenity names and the catalog derived from a source table's schema.
//!
//! The catalog is never hardcoded: it is whatever columns the source table
//! carries besides [`CITY_COLUMN`]. Only the five [`BASE_AMENITIES`] are fixed,
//! because every ranking scores them.

use std::collections::HashSet;

use crate::TableError;

/// Column holding each city's identity.
pub const CITY_COLUMN: &str = "City";

/// Amenities scored on every request regardless of user preference.
pub const BASE_AMENITIES: [&str; 5] = [
    "Walkable Park Access",
    "Park Units",
    "Walk Score",
    "Transit Score",
    "Bike Score",
];

/// Suffix appended to an amenity name to label its points column.
pub const POINTS_SUFFIX: &str = "_points";

/// Return the label of the points column generated for `amenity`.
///
/// # Examples
/// ```
/// use cityrank_core::amenity::points_column;
///
/// assert_eq!(points_column("Walk Score"), "Walk Score_points");
/// ```
#[must_use]
pub fn points_column(amenity: &str) -> String {
    format!("{amenity}{POINTS_SUFFIX}")
}

/// Report whether `amenity` is one of the [`BASE_AMENITIES`].
#[must_use]
pub fn is_base_amenity(amenity: &str) -> bool {
    BASE_AMENITIES.contains(&amenity)
}

/// Ordered set of amenity columns available in a source table.
///
/// Names keep the order of the source schema, which is also the order of the
/// measurements stored on each [`CityRecord`](crate::CityRecord).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AmenityCatalog {
    names: Vec<String>,
}

impl AmenityCatalog {
    /// Build a catalog from schema column names.
    ///
    /// The identity column is skipped wherever it appears.
    ///
    /// # Errors
    /// Returns [`TableError::DuplicateAmenity`] when a column name repeats.
    pub fn from_columns<I>(columns: I) -> Result<Self, TableError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for column in columns {
            let name: String = column.into();
            if name == CITY_COLUMN {
                continue;
            }
            if !seen.insert(name.clone()) {
                return Err(TableError::DuplicateAmenity { amenity: name });
            }
            names.push(name);
        }
        Ok(Self { names })
    }

    /// Return the schema position of `amenity`, if present.
    #[must_use]
    pub fn position(&self, amenity: &str) -> Option<usize> {
        self.names.iter().position(|name| name == amenity)
    }

    /// Report whether `amenity` is part of the catalog.
    #[must_use]
    pub fn contains(&self, amenity: &str) -> bool {
        self.position(amenity).is_some()
    }

    /// Number of amenities in the catalog.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.names.len()
    }

    /// Report whether the catalog is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over amenity names in schema order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Return amenity names sorted alphabetically, as offered to users.
    #[must_use]
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.iter().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_column_is_skipped() {
        let catalog =
            AmenityCatalog::from_columns(["Walk Score", CITY_COLUMN, "Bike Score"]).expect("catalog");
        assert_eq!(catalog.iter().collect::<Vec<_>>(), ["Walk Score", "Bike Score"]);
        assert!(!catalog.contains(CITY_COLUMN));
    }

    #[rstest]
    fn duplicate_columns_are_rejected() {
        let err = AmenityCatalog::from_columns(["Walk Score", "Walk Score"])
            .expect_err("duplicate column should error");
        assert_eq!(
            err,
            TableError::DuplicateAmenity {
                amenity: "Walk Score".to_owned()
            }
        );
    }

    #[rstest]
    fn sorted_names_are_alphabetical() {
        let catalog =
            AmenityCatalog::from_columns(["Walk Score", "Basketball Hoops", "Park Units"])
                .expect("catalog");
        assert_eq!(
            catalog.sorted_names(),
            ["Basketball Hoops", "Park Units", "Walk Score"]
        );
        assert_eq!(catalog.position("Park Units"), Some(2));
    }

    #[rstest]
    #[case("Walk Score", true)]
    #[case("Dog Parks", false)]
    fn base_amenities_are_recognised(#[case] amenity: &str, #[case] expected: bool) {
        assert_eq!(is_base_amenity(amenity), expected);
    }
}
