//! End-to-end ranking: preferences in, ordered cities out.
//!
//! [`Ranker`] runs weighting, point assignment, aggregation, normalisation
//! and selection in that order. Each call builds a fresh [`ScoreTable`]; the
//! input [`CityTable`] is only read.

use std::num::NonZeroUsize;

use log::info;

use crate::select::select;
use crate::weighting::scoring_passes;
use crate::{
    BaseOverlap, BracketScale, CityTable, ConfigError, DEFAULT_NUM_BRACKETS, DEFAULT_TOP_N,
    ImportanceWeights, PreferenceSet, RankedCities, RankingError, ScoreTable, Selection,
};

/// Tunable parameters for a [`Ranker`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankerConfig {
    /// Bracket boundaries per amenity column.
    pub num_brackets: NonZeroUsize,
    /// Multipliers for each importance.
    pub weights: ImportanceWeights,
    /// Treatment of base amenities the user also selected.
    pub overlap: BaseOverlap,
    /// Rows kept when no reference city is given.
    pub top_n: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            num_brackets: DEFAULT_NUM_BRACKETS,
            weights: ImportanceWeights::default(),
            overlap: BaseOverlap::default(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// A user's ranking request.
///
/// # Examples
/// ```
/// use cityrank_core::RankingRequest;
///
/// let request = RankingRequest::new()
///     .with_important(["Dog Parks"])
///     .with_unimportant(["Splashpads"])
///     .with_current_city("Denver");
/// assert_eq!(request.current_city.as_deref(), Some("Denver"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankingRequest {
    /// Amenities the user cares about.
    pub important: Vec<String>,
    /// Amenities the user wants downplayed.
    pub unimportant: Vec<String>,
    /// City whose ranking sets the inclusion threshold.
    pub current_city: Option<String>,
}

impl RankingRequest {
    /// Create a neutral request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the important selection.
    #[must_use]
    pub fn with_important<I>(mut self, amenities: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.important = amenities.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the unimportant selection.
    #[must_use]
    pub fn with_unimportant<I>(mut self, amenities: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.unimportant = amenities.into_iter().map(Into::into).collect();
        self
    }

    /// Set the reference city.
    #[must_use]
    pub fn with_current_city(mut self, city: impl Into<String>) -> Self {
        self.current_city = Some(city.into());
        self
    }

    /// Validate the selections against `table`'s catalog.
    ///
    /// # Errors
    /// Returns [`crate::PreferenceError`] wrapped in
    /// [`RankingError::Preference`] for unknown or overlapping amenities.
    pub fn preferences(&self, table: &CityTable) -> Result<PreferenceSet, RankingError> {
        Ok(PreferenceSet::new(
            table.catalog(),
            self.important.iter().map(String::as_str),
            self.unimportant.iter().map(String::as_str),
        )?)
    }
}

/// Ranks the cities of a table for a request.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    config: RankerConfig,
}

impl Ranker {
    /// Construct a ranker after validating `config`.
    ///
    /// # Errors
    /// Returns [`ConfigError::NonFiniteWeight`] when a weight is NaN or
    /// infinite.
    pub fn new(config: RankerConfig) -> Result<Self, ConfigError> {
        config.weights.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Score every city without selecting or sorting.
    ///
    /// # Errors
    /// Propagates missing columns and degenerate totals as [`RankingError`].
    pub fn score(
        &self,
        table: &CityTable,
        preferences: &PreferenceSet,
    ) -> Result<ScoreTable, RankingError> {
        let passes = scoring_passes(preferences, self.config.weights, self.config.overlap);
        ScoreTable::build(table, &passes, BracketScale::new(self.config.num_brackets))
    }

    /// Rank `table` for `request`.
    ///
    /// # Errors
    /// - [`RankingError::Preference`] for invalid selections.
    /// - [`RankingError::DegenerateScore`] when no city has a positive total.
    /// - [`RankingError::CityNotFound`] when the reference city is absent.
    pub fn rank(
        &self,
        table: &CityTable,
        request: &RankingRequest,
    ) -> Result<RankedCities, RankingError> {
        let preferences = request.preferences(table)?;
        let scores = self.score(table, &preferences)?;
        let selection = request
            .current_city
            .as_deref()
            .map_or(Selection::Leading(self.config.top_n), Selection::AtOrAbove);
        let ranked = select(scores.rows(), selection)?;
        info!(
            "ranked {} of {} cities ({} important, {} unimportant)",
            ranked.len(),
            table.len(),
            preferences.important().len(),
            preferences.unimportant().len()
        );
        Ok(ranked)
    }
}
