//! Bracket-based point assignment for a single amenity column.
//!
//! Values are bucketed into equal-width brackets spanning `[0, 2 × median]`.
//! Anything above that threshold earns the flat ceiling of
//! [`MAX_POINTS`] before the importance multiplier is applied.

use std::num::NonZeroUsize;

/// Default number of bracket boundaries.
pub const DEFAULT_NUM_BRACKETS: NonZeroUsize = match NonZeroUsize::new(50) {
    Some(count) => count,
    None => NonZeroUsize::MIN,
};

/// Points awarded to a value above the threshold at unit importance.
pub const MAX_POINTS: f64 = 100.0;

/// Equal-width bracket scale over `[0, threshold]`.
///
/// The scale places `num_brackets` linearly spaced boundaries on the range,
/// producing `num_brackets - 1` sub-intervals. Sub-interval `j` (zero based)
/// awards `(j + 1) × (100 / num_brackets)` points.
///
/// # Examples
/// ```
/// use cityrank_core::BracketScale;
///
/// let points = BracketScale::default().assign(&[0.0, 0.0, 100.0], 1.0);
/// assert_eq!(points, vec![2.0, 2.0, 100.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BracketScale {
    num_brackets: NonZeroUsize,
}

impl Default for BracketScale {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_BRACKETS)
    }
}

impl BracketScale {
    /// Construct a scale with `num_brackets` boundaries.
    #[must_use]
    pub const fn new(num_brackets: NonZeroUsize) -> Self {
        Self { num_brackets }
    }

    /// Number of bracket boundaries.
    #[must_use]
    pub const fn num_brackets(self) -> NonZeroUsize {
        self.num_brackets
    }

    /// Points contributed by each bracket step at unit importance.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "bracket width is a ratio of the point ceiling"
    )]
    #[must_use]
    pub fn points_per_bracket(self) -> f64 {
        MAX_POINTS / self.num_brackets.get() as f64
    }

    /// Assign points to every value of one amenity column.
    ///
    /// The threshold is twice the median of `values`. The output has the same
    /// length and order as the input. Values matching no sub-interval, which
    /// only happens for negative input or a single-boundary scale, score zero.
    #[expect(
        clippy::float_arithmetic,
        reason = "importance is a multiplier on bracket points"
    )]
    #[must_use]
    pub fn assign(self, values: &[f64], importance: f64) -> Vec<f64> {
        let threshold = threshold(values);
        let boundaries = self.boundaries(threshold);
        values
            .iter()
            .map(|&value| self.unit_points(value, threshold, &boundaries) * importance)
            .collect()
    }

    /// Boundary values for the given threshold, ascending.
    ///
    /// Matches a linear spacing that includes both end points; the final
    /// boundary is exactly `threshold`.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "boundaries are evenly spaced fractions of the threshold"
    )]
    #[must_use]
    pub fn boundaries(self, threshold: f64) -> Vec<f64> {
        let count = self.num_brackets.get();
        let Some(intervals) = count.checked_sub(1).filter(|n| *n > 0) else {
            return vec![0.0];
        };
        let step = threshold / intervals as f64;
        let mut boundaries: Vec<f64> = (0..count).map(|index| index as f64 * step).collect();
        if let Some(last) = boundaries.last_mut() {
            *last = threshold;
        }
        boundaries
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "bracket points scale with the bracket index"
    )]
    fn unit_points(self, value: f64, threshold: f64, boundaries: &[f64]) -> f64 {
        if value > threshold {
            return MAX_POINTS;
        }
        bracket_index(boundaries, value).map_or(0.0, |index| {
            (index + 1) as f64 * self.points_per_bracket()
        })
    }
}

/// Index of the first sub-interval containing `value`, inclusive at both
/// ends, scanning from the lowest boundary.
fn bracket_index(boundaries: &[f64], value: f64) -> Option<usize> {
    boundaries.windows(2).position(|pair| match pair {
        [low, high] => *low <= value && value <= *high,
        _ => false,
    })
}

/// Twice the median of `values`; zero for an empty column.
#[expect(
    clippy::float_arithmetic,
    reason = "the threshold doubles the median"
)]
#[must_use]
pub fn threshold(values: &[f64]) -> f64 {
    median(values).map_or(0.0, |middle| middle * 2.0)
}

/// Median of `values`, averaging the two middle values for even lengths.
#[expect(
    clippy::float_arithmetic,
    clippy::integer_division,
    reason = "median selection halves the length and averages middle values"
)]
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let upper = sorted.len() / 2;
    if !sorted.len().is_multiple_of(2) {
        return sorted.get(upper).copied();
    }
    let high = sorted.get(upper).copied()?;
    let low = sorted.get(upper.checked_sub(1)?).copied()?;
    Some(f64::midpoint(low, high))
}
