//! Choose which ranked cities are shown and in what order.

use log::debug;

use crate::{RankedCities, RankedCity, RankingError};

/// Rows kept when no reference city is given.
pub const DEFAULT_TOP_N: usize = 10;

/// Which rows of a scored table reach the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// Keep the first `n` rows in table order.
    ///
    /// Rows are cut before sorting, so this is not a global top `n`.
    Leading(usize),
    /// Keep every city ranked at or above the named reference city.
    AtOrAbove(&'a str),
}

impl Default for Selection<'_> {
    fn default() -> Self {
        Self::Leading(DEFAULT_TOP_N)
    }
}

/// Apply `selection` to rows in table order and sort the survivors by
/// descending ranking.
///
/// When the reference city appears more than once, its first row sets the
/// threshold. Cities with equal rankings keep their table order.
///
/// # Errors
/// Returns [`RankingError::CityNotFound`] when the reference city is absent.
///
/// # Examples
/// ```
/// use cityrank_core::select::select;
/// use cityrank_core::{RankedCity, Selection};
///
/// # fn main() -> Result<(), cityrank_core::RankingError> {
/// let rows = vec![
///     RankedCity { city: "Austin".into(), ranking: 40.0, total_points: 40.0 },
///     RankedCity { city: "Boston".into(), ranking: 100.0, total_points: 100.0 },
///     RankedCity { city: "Chicago".into(), ranking: 70.0, total_points: 70.0 },
/// ];
/// let ranked = select(rows, Selection::AtOrAbove("Chicago"))?;
/// let names: Vec<_> = ranked.iter().map(|row| row.city.as_str()).collect();
/// assert_eq!(names, ["Boston", "Chicago"]);
/// # Ok(())
/// # }
/// ```
pub fn select(rows: Vec<RankedCity>, selection: Selection<'_>) -> Result<RankedCities, RankingError> {
    let mut kept = match selection {
        Selection::Leading(count) => rows.into_iter().take(count).collect(),
        Selection::AtOrAbove(city) => at_or_above(rows, city)?,
    };
    sort_descending(&mut kept);
    Ok(RankedCities::new(kept))
}

fn at_or_above(rows: Vec<RankedCity>, city: &str) -> Result<Vec<RankedCity>, RankingError> {
    let mut matches = rows.iter().filter(|row| row.city == city);
    let reference = matches
        .next()
        .map(|row| row.ranking)
        .ok_or_else(|| RankingError::CityNotFound {
            city: city.to_owned(),
        })?;
    let repeats = matches.count();
    if repeats > 0 {
        debug!("{city} appears {} times; using its first ranking {reference}", repeats + 1);
    }
    Ok(rows
        .into_iter()
        .filter(|row| row.ranking >= reference)
        .collect())
}

/// Stable sort by descending ranking.
pub fn sort_descending(rows: &mut [RankedCity]) {
    rows.sort_by(|left, right| right.ranking.total_cmp(&left.ranking));
}
