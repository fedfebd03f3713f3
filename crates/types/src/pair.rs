//! Overlapping view over two index-aligned series.

/// Two series compared index-by-index.
///
/// Only the overlapping prefix (`min(len(a), len(b))`) is visible; any tail
/// of the longer series is ignored.
#[derive(Debug, Clone, Copy)]
pub struct PairSeries<'a> {
    a: &'a [f64],
    b: &'a [f64],
    truncated: bool,
}

impl<'a> PairSeries<'a> {
    /// Creates a view over the overlapping prefix of `a` and `b`.
    #[must_use]
    pub fn new(a: &'a [f64], b: &'a [f64]) -> Self {
        let len = a.len().min(b.len());
        Self {
            a: &a[..len],
            b: &b[..len],
            truncated: a.len() != b.len(),
        }
    }

    /// Overlapping length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Returns true when there is no overlap.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Returns true when the inputs had different lengths.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// First series, truncated to the overlap.
    #[must_use]
    pub fn a(&self) -> &'a [f64] {
        self.a
    }

    /// Second series, truncated to the overlap.
    #[must_use]
    pub fn b(&self) -> &'a [f64] {
        self.b
    }

    /// Returns the pair at `idx`.
    #[must_use]
    pub fn pair_at(&self, idx: usize) -> Option<(f64, f64)> {
        Some((*self.a.get(idx)?, *self.b.get(idx)?))
    }

    /// Returns the pair at `idx` if both values are finite.
    #[must_use]
    pub fn finite_pair_at(&self, idx: usize) -> Option<(f64, f64)> {
        self.pair_at(idx)
            .filter(|(a, b)| a.is_finite() && b.is_finite())
    }

    /// Iterates over the pairs where both values are finite, in index order.
    pub fn finite_pairs(&self) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.a
            .iter()
            .zip(self.b.iter())
            .map(|(&a, &b)| (a, b))
            .filter(|(a, b)| a.is_finite() && b.is_finite())
    }
}
