//! Tri-state samples.
//!
//! Every derived series is a `Vec<Sample>`: `None` marks a position where the
//! statistic is undefined (insufficient history, zero variance, non-finite
//! input). A `Some` produced by this workspace always holds a finite value.

/// A single output slot: a number or the undefined marker.
pub type Sample = Option<f64>;

/// Returns the value when the sample is defined and finite.
#[inline]
#[must_use]
pub fn finite(sample: Sample) -> Option<f64> {
    sample.filter(|v| v.is_finite())
}

/// Number of defined slots in a series.
#[must_use]
pub fn count_defined(series: &[Sample]) -> usize {
    series.iter().filter(|s| s.is_some()).count()
}

/// Last defined slot as `(index, value)`.
#[must_use]
pub fn last_defined(series: &[Sample]) -> Option<(usize, f64)> {
    series
        .iter()
        .enumerate()
        .rev()
        .find_map(|(idx, s)| s.map(|v| (idx, v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_filters_nan_and_inf() {
        assert_eq!(finite(Some(1.5)), Some(1.5));
        assert_eq!(finite(Some(f64::NAN)), None);
        assert_eq!(finite(Some(f64::INFINITY)), None);
        assert_eq!(finite(None), None);
    }

    #[test]
    fn test_count_defined() {
        let series = vec![None, Some(0.0), Some(-1.0), None];
        assert_eq!(count_defined(&series), 2);
        assert_eq!(count_defined(&[]), 0);
    }

    #[test]
    fn test_last_defined_skips_trailing_gaps() {
        let series = vec![Some(0.2), Some(0.4), None, None];
        assert_eq!(last_defined(&series), Some((1, 0.4)));
        assert_eq!(last_defined(&[None, None]), None);
    }

    #[test]
    fn test_zero_is_distinct_from_undefined() {
        let series = vec![Some(0.0)];
        assert_eq!(last_defined(&series), Some((0, 0.0)));
    }
}
