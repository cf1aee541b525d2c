//! Aggregate per-amenity points into totals and normalise them to rankings.
//!
//! A [`ScoreTable`] is derived from a [`CityTable`] for a single request and
//! discarded afterwards. It never writes back into the source table.

use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::amenity::points_column;
use crate::points::threshold;
use crate::{BracketScale, CityTable, Importance, RankingError, ScoringPass, TableError};

/// Ranking of the best city in a table.
pub const TOP_RANKING: f64 = 100.0;

/// Points generated for one scoring pass, one value per city.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsColumn {
    amenity: String,
    importance: Importance,
    points: Vec<f64>,
}

impl PointsColumn {
    /// Amenity the points were derived from.
    #[must_use]
    pub fn amenity(&self) -> &str {
        &self.amenity
    }

    /// Importance the pass was scored at.
    #[must_use]
    pub const fn importance(&self) -> Importance {
        self.importance
    }

    /// Points in table order.
    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Column label, `<amenity>_points`.
    #[must_use]
    pub fn label(&self) -> String {
        points_column(&self.amenity)
    }
}

/// A city's final score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankedCity {
    /// City identity.
    pub city: String,
    /// Normalised ranking in `0..=100` for non-negative totals.
    pub ranking: f64,
    /// Sum of every generated points column.
    pub total_points: f64,
}

impl RankedCity {
    /// Ranking rounded to two decimals for display.
    ///
    /// # Examples
    /// ```
    /// use cityrank_core::RankedCity;
    ///
    /// let city = RankedCity {
    ///     city: "Boston".into(),
    ///     ranking: 87.456,
    ///     total_points: 402.0,
    /// };
    /// assert_eq!(city.display_ranking(), "87.46");
    /// ```
    #[must_use]
    pub fn display_ranking(&self) -> String {
        format!("{:.2}", self.ranking)
    }
}

/// Ordered list of ranked cities handed to a renderer.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RankedCities {
    cities: Vec<RankedCity>,
}

impl RankedCities {
    /// Wrap an already ordered list.
    #[must_use]
    pub const fn new(cities: Vec<RankedCity>) -> Self {
        Self { cities }
    }

    /// Cities in display order.
    #[must_use]
    pub const fn as_slice(&self) -> &[RankedCity] {
        self.cities.as_slice()
    }

    /// Iterate over cities in display order.
    pub fn iter(&self) -> impl Iterator<Item = &RankedCity> {
        self.cities.iter()
    }

    /// Number of cities.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cities.len()
    }

    /// Report whether no city was selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// First entry for `city`, if selected.
    #[must_use]
    pub fn get(&self, city: &str) -> Option<&RankedCity> {
        self.cities.iter().find(|entry| entry.city == city)
    }

    /// Consume the wrapper and return the list.
    #[must_use]
    pub fn into_inner(self) -> Vec<RankedCity> {
        self.cities
    }
}

/// Per-request scores for every city in a table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreTable {
    cities: Vec<String>,
    columns: Vec<PointsColumn>,
    totals: Vec<f64>,
    rankings: Vec<f64>,
}

impl ScoreTable {
    /// Score `table` for the planned `passes`.
    ///
    /// # Errors
    /// - [`RankingError::Table`] when a pass names an amenity that is missing
    ///   from the table.
    /// - [`RankingError::DegenerateScore`] when no city has a positive total.
    pub fn build(
        table: &CityTable,
        passes: &[ScoringPass],
        scale: BracketScale,
    ) -> Result<Self, RankingError> {
        let columns = passes
            .iter()
            .map(|pass| score_pass(table, pass, scale))
            .collect::<Result<Vec<_>, _>>()?;
        let totals = total_points(&columns, table.len());
        let rankings = normalise_rankings(&totals)?;
        Ok(Self {
            cities: table.city_names().map(str::to_owned).collect(),
            columns,
            totals,
            rankings,
        })
    }

    /// Number of scored cities.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cities.len()
    }

    /// Report whether the table scored no cities.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Generated points columns in pass order.
    #[must_use]
    pub fn columns(&self) -> &[PointsColumn] {
        &self.columns
    }

    /// Total points per city in table order.
    #[must_use]
    pub fn totals(&self) -> &[f64] {
        &self.totals
    }

    /// Rankings per city in table order.
    #[must_use]
    pub fn rankings(&self) -> &[f64] {
        &self.rankings
    }

    /// Ranked rows in table order.
    #[must_use]
    pub fn rows(&self) -> Vec<RankedCity> {
        self.cities
            .iter()
            .zip(&self.totals)
            .zip(&self.rankings)
            .map(|((city, total), ranking)| RankedCity {
                city: city.clone(),
                ranking: *ranking,
                total_points: *total,
            })
            .collect()
    }
}

fn score_pass(
    table: &CityTable,
    pass: &ScoringPass,
    scale: BracketScale,
) -> Result<PointsColumn, RankingError> {
    let values = table
        .column(&pass.amenity)
        .ok_or_else(|| TableError::MissingAmenity {
            amenity: pass.amenity.clone(),
        })?;
    if !values.is_empty() && threshold(&values) <= 0.0 {
        warn!(
            "{} has a zero median; every city at or below it gets the minimum bracket",
            pass.amenity
        );
    }
    debug!(
        "scoring {} as {} with multiplier {}",
        pass.amenity, pass.importance, pass.multiplier
    );
    Ok(PointsColumn {
        amenity: pass.amenity.clone(),
        importance: pass.importance,
        points: scale.assign(&values, pass.multiplier),
    })
}

/// Sum every points column per city.
///
/// Each column contributes once; a city absent from a short column gains
/// nothing from it.
#[expect(clippy::float_arithmetic, reason = "totals sum bracket points")]
#[must_use]
pub fn total_points(columns: &[PointsColumn], len: usize) -> Vec<f64> {
    let mut totals = vec![0.0_f64; len];
    for column in columns {
        for (total, points) in totals.iter_mut().zip(&column.points) {
            *total += *points;
        }
    }
    totals
}

/// Rescale totals so the best city ranks exactly [`TOP_RANKING`].
///
/// An empty slice normalises to an empty list.
///
/// # Errors
/// Returns [`RankingError::DegenerateScore`] when the highest total is zero or
/// negative.
///
/// # Examples
/// ```
/// use cityrank_core::score::normalise_rankings;
///
/// # fn main() -> Result<(), cityrank_core::RankingError> {
/// assert_eq!(normalise_rankings(&[50.0, 100.0])?, vec![50.0, 100.0]);
/// # Ok(())
/// # }
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "normalising rankings divides by the maximum total"
)]
pub fn normalise_rankings(totals: &[f64]) -> Result<Vec<f64>, RankingError> {
    let Some(max_total) = totals.iter().copied().reduce(f64::max) else {
        return Ok(Vec::new());
    };
    if max_total <= 0.0 || !max_total.is_finite() {
        return Err(RankingError::DegenerateScore { max_total });
    }
    Ok(totals
        .iter()
        .map(|total| (total / max_total) * TOP_RANKING)
        .collect())
}
