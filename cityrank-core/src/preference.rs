//! User amenity preferences.
//!
//! A [`PreferenceSet`] holds two disjoint selections drawn from an
//! [`AmenityCatalog`]: amenities the user cares about and amenities they want
//! downplayed. Anything in neither selection is neutral.

use std::fmt;

use crate::{AmenityCatalog, PreferenceError};

/// How strongly an amenity counts towards a city's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Importance {
    /// Always-scored base amenity at neutral importance.
    Base,
    /// Amenity the user marked as important.
    Important,
    /// Amenity the user marked as unimportant.
    Unimportant,
}

impl Importance {
    /// Return the importance as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Important => "important",
            Self::Unimportant => "unimportant",
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Disjoint important and unimportant amenity selections.
///
/// Selections keep the order in which amenities were supplied; repeats are
/// dropped.
///
/// # Examples
/// ```
/// use cityrank_core::{AmenityCatalog, Importance, PreferenceSet};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = AmenityCatalog::from_columns(["Dog Parks", "Splashpads", "Walk Score"])?;
/// let preferences = PreferenceSet::new(&catalog, ["Dog Parks"], ["Splashpads"])?;
/// assert_eq!(preferences.importance_of("Dog Parks"), Some(Importance::Important));
/// assert_eq!(preferences.importance_of("Walk Score"), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreferenceSet {
    important: Vec<String>,
    unimportant: Vec<String>,
}

impl PreferenceSet {
    /// Validate selections against `catalog`.
    ///
    /// # Errors
    /// - [`PreferenceError::UnknownAmenity`] when a name is not in the catalog.
    /// - [`PreferenceError::OverlappingPreference`] when a name appears in both
    ///   selections.
    pub fn new<I, U>(
        catalog: &AmenityCatalog,
        important: I,
        unimportant: U,
    ) -> Result<Self, PreferenceError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
        U: IntoIterator,
        U::Item: Into<String>,
    {
        let important = collect_known(catalog, important)?;
        let unimportant = collect_known(catalog, unimportant)?;
        if let Some(amenity) = unimportant.iter().find(|name| important.contains(*name)) {
            return Err(PreferenceError::OverlappingPreference {
                amenity: amenity.clone(),
            });
        }
        Ok(Self {
            important,
            unimportant,
        })
    }

    /// Amenities marked important.
    #[must_use]
    pub fn important(&self) -> &[String] {
        &self.important
    }

    /// Amenities marked unimportant.
    #[must_use]
    pub fn unimportant(&self) -> &[String] {
        &self.unimportant
    }

    /// The user's selection for `amenity`, if any.
    #[must_use]
    pub fn importance_of(&self, amenity: &str) -> Option<Importance> {
        if self.important.iter().any(|name| name == amenity) {
            Some(Importance::Important)
        } else if self.unimportant.iter().any(|name| name == amenity) {
            Some(Importance::Unimportant)
        } else {
            None
        }
    }

    /// Report whether neither selection holds any amenity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.important.is_empty() && self.unimportant.is_empty()
    }
}

/// Amenities still available as unimportant choices once `important` has
/// been picked, sorted alphabetically.
#[must_use]
pub fn unimportant_choices<'a, S>(catalog: &'a AmenityCatalog, important: &[S]) -> Vec<&'a str>
where
    S: AsRef<str>,
{
    catalog
        .sorted_names()
        .into_iter()
        .filter(|name| !important.iter().any(|picked| picked.as_ref() == *name))
        .collect()
}

fn collect_known<I>(catalog: &AmenityCatalog, names: I) -> Result<Vec<String>, PreferenceError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut collected: Vec<String> = Vec::new();
    for name in names {
        let amenity: String = name.into();
        if !catalog.contains(&amenity) {
            return Err(PreferenceError::UnknownAmenity { amenity });
        }
        if !collected.contains(&amenity) {
            collected.push(amenity);
        }
    }
    Ok(collected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{SAMPLE_EXTRAS, catalog_with};
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> AmenityCatalog {
        catalog_with(&SAMPLE_EXTRAS)
    }

    #[rstest]
    fn unknown_amenity_is_rejected(catalog: AmenityCatalog) {
        let err = PreferenceSet::new(&catalog, ["Ski Lifts"], Vec::<String>::new())
            .expect_err("unknown amenity");
        assert_eq!(
            err,
            PreferenceError::UnknownAmenity {
                amenity: "Ski Lifts".to_owned()
            }
        );
    }

    #[rstest]
    fn overlapping_selections_are_rejected(catalog: AmenityCatalog) {
        let err = PreferenceSet::new(&catalog, ["Dog Parks"], ["Dog Parks"])
            .expect_err("overlap should error");
        assert!(matches!(
            err,
            PreferenceError::OverlappingPreference { amenity } if amenity == "Dog Parks"
        ));
    }

    #[rstest]
    fn repeats_are_dropped_in_order(catalog: AmenityCatalog) {
        let preferences = PreferenceSet::new(
            &catalog,
            ["Dog Parks", "Walk Score", "Dog Parks"],
            ["Basketball Hoops"],
        )
        .expect("preferences");
        assert_eq!(preferences.important(), ["Dog Parks", "Walk Score"]);
        assert_eq!(preferences.unimportant(), ["Basketball Hoops"]);
        assert_eq!(
            preferences.importance_of("Basketball Hoops"),
            Some(Importance::Unimportant)
        );
        assert!(!preferences.is_empty());
    }

    #[rstest]
    fn unimportant_choices_exclude_important(catalog: AmenityCatalog) {
        let choices = unimportant_choices(&catalog, &["Walk Score", "Dog Parks"]);
        assert_eq!(
            choices,
            [
                "Basketball Hoops",
                "Bike Score",
                "Park Units",
                "Transit Score",
                "Walkable Park Access"
            ]
        );
    }
}
