//! Decide which amenities are scored, and at what importance.

use std::str::FromStr;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{BASE_AMENITIES, ConfigError, Importance, PreferenceSet};

/// Multipliers applied to an amenity's points for each [`Importance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportanceWeights {
    /// Multiplier for always-scored base amenities.
    pub base: f64,
    /// Multiplier for amenities the user marked important.
    pub important: f64,
    /// Multiplier for amenities the user marked unimportant.
    pub unimportant: f64,
}

impl Default for ImportanceWeights {
    fn default() -> Self {
        Self {
            base: 1.0,
            important: 5.0,
            unimportant: -1.0,
        }
    }
}

impl ImportanceWeights {
    /// Validate the weights and return a copy.
    ///
    /// Negative multipliers are allowed; they subtract from a city's total.
    ///
    /// # Errors
    /// Returns [`ConfigError::NonFiniteWeight`] when a multiplier is NaN or
    /// infinite.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let fields = [
            ("base", self.base),
            ("important", self.important),
            ("unimportant", self.unimportant),
        ];
        fields
            .iter()
            .find(|(_, weight)| !weight.is_finite())
            .map_or(Ok(self), |(field, _)| {
                Err(ConfigError::NonFiniteWeight { field: *field })
            })
    }

    /// Multiplier for `importance`.
    #[must_use]
    pub const fn multiplier(self, importance: Importance) -> f64 {
        match importance {
            Importance::Base => self.base,
            Importance::Important => self.important,
            Importance::Unimportant => self.unimportant,
        }
    }
}

/// How a base amenity that the user also selected is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BaseOverlap {
    /// Score the base pass and the user's pass, summing both.
    #[default]
    Compound,
    /// Score only the user's pass for that amenity.
    Override,
}

impl BaseOverlap {
    /// Return the policy as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compound => "compound",
            Self::Override => "override",
        }
    }
}

impl FromStr for BaseOverlap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compound" => Ok(Self::Compound),
            "override" => Ok(Self::Override),
            _ => Err(format!("unknown base overlap policy '{s}'")),
        }
    }
}

/// One scoring pass: an amenity column and its multiplier.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringPass {
    /// Amenity column to score.
    pub amenity: String,
    /// Why the amenity is scored.
    pub importance: Importance,
    /// Multiplier applied to the amenity's bracket points.
    pub multiplier: f64,
}

/// Plan the scoring passes for a request.
///
/// Passes run in a fixed order: base amenities, then important amenities,
/// then unimportant amenities. Amenities in no selection and outside the base
/// set are not scored.
///
/// # Examples
/// ```
/// use cityrank_core::weighting::scoring_passes;
/// use cityrank_core::{BaseOverlap, ImportanceWeights, PreferenceSet};
///
/// let passes = scoring_passes(
///     &PreferenceSet::default(),
///     ImportanceWeights::default(),
///     BaseOverlap::Compound,
/// );
/// assert_eq!(passes.len(), 5);
/// ```
#[must_use]
pub fn scoring_passes(
    preferences: &PreferenceSet,
    weights: ImportanceWeights,
    overlap: BaseOverlap,
) -> Vec<ScoringPass> {
    let base = BASE_AMENITIES
        .iter()
        .copied()
        .filter(|amenity| match overlap {
            BaseOverlap::Compound => true,
            BaseOverlap::Override => preferences.importance_of(amenity).is_none(),
        })
        .map(|amenity| (amenity, Importance::Base));
    let important = preferences
        .important()
        .iter()
        .map(|amenity| (amenity.as_str(), Importance::Important));
    let unimportant = preferences
        .unimportant()
        .iter()
        .map(|amenity| (amenity.as_str(), Importance::Unimportant));

    let passes: Vec<ScoringPass> = base
        .chain(important)
        .chain(unimportant)
        .map(|(amenity, importance)| ScoringPass {
            amenity: amenity.to_owned(),
            importance,
            multiplier: weights.multiplier(importance),
        })
        .collect();
    debug!(
        "planned {} scoring passes with {} base overlap",
        passes.len(),
        overlap.as_str()
    );
    passes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{SAMPLE_EXTRAS, catalog_with};
    use rstest::rstest;

    fn preferences(important: &[&str], unimportant: &[&str]) -> PreferenceSet {
        PreferenceSet::new(
            &catalog_with(&SAMPLE_EXTRAS),
            important.iter().copied(),
            unimportant.iter().copied(),
        )
        .expect("valid preferences")
    }

    fn summary(passes: &[ScoringPass]) -> Vec<(&str, f64)> {
        passes
            .iter()
            .map(|pass| (pass.amenity.as_str(), pass.multiplier))
            .collect()
    }

    #[rstest]
    fn neutral_request_scores_base_amenities_once() {
        let passes = scoring_passes(
            &PreferenceSet::default(),
            ImportanceWeights::default(),
            BaseOverlap::Compound,
        );
        assert_eq!(
            summary(&passes),
            BASE_AMENITIES.map(|amenity| (amenity, 1.0))
        );
    }

    #[rstest]
    fn selections_follow_base_passes() {
        let passes = scoring_passes(
            &preferences(&["Dog Parks"], &["Basketball Hoops"]),
            ImportanceWeights::default(),
            BaseOverlap::Compound,
        );
        let tail: Vec<_> = summary(&passes).into_iter().skip(5).collect();
        assert_eq!(tail, [("Dog Parks", 5.0), ("Basketball Hoops", -1.0)]);
        assert_eq!(passes.last().map(|pass| pass.importance), Some(Importance::Unimportant));
    }

    #[rstest]
    #[case(BaseOverlap::Compound, 7)]
    #[case(BaseOverlap::Override, 5)]
    fn base_overlap_controls_repeat_passes(#[case] overlap: BaseOverlap, #[case] expected: usize) {
        let passes = scoring_passes(
            &preferences(&["Walk Score"], &["Bike Score"]),
            ImportanceWeights::default(),
            overlap,
        );
        assert_eq!(passes.len(), expected);
        let walk_passes = passes
            .iter()
            .filter(|pass| pass.amenity == "Walk Score")
            .count();
        let expected_walk = if overlap == BaseOverlap::Compound { 2 } else { 1 };
        assert_eq!(walk_passes, expected_walk);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn non_finite_weights_are_rejected(#[case] weight: f64) {
        let err = ImportanceWeights {
            important: weight,
            ..ImportanceWeights::default()
        }
        .validate()
        .expect_err("non-finite weight");
        assert_eq!(err, ConfigError::NonFiniteWeight { field: "important" });
    }

    #[rstest]
    #[case("compound", BaseOverlap::Compound)]
    #[case("Override", BaseOverlap::Override)]
    fn overlap_parses_case_insensitively(#[case] raw: &str, #[case] expected: BaseOverlap) {
        assert_eq!(raw.parse::<BaseOverlap>(), Ok(expected));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(BaseOverlap::Compound, "\"compound\"")]
    #[case(BaseOverlap::Override, "\"override\"")]
    fn overlap_serialises_in_lowercase(#[case] overlap: BaseOverlap, #[case] expected: &str) {
        let encoded = serde_json::to_string(&overlap).expect("serialise overlap");
        assert_eq!(encoded, expected);
        let decoded: BaseOverlap = serde_json::from_str(expected).expect("decode overlap");
        assert_eq!(decoded, overlap);
    }
}
