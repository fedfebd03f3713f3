//! Neighbor-averaging smoother

use pairstat_types::{Sample, effective_radius, finite};

/// Symmetric moving average over a series with gaps.
///
/// Each defined position becomes the mean of the defined, finite values in
/// `[idx - radius, idx + radius]` (clipped to the series bounds). Undefined
/// positions stay undefined; they are never filled from neighbors.
#[derive(Debug, Clone)]
pub struct NeighborSmoother {
    /// Effective radius (0 = identity)
    pub radius: usize,
}

impl NeighborSmoother {
    /// Creates a smoother with the given radius.
    #[must_use]
    pub fn new(radius: usize) -> Self {
        Self { radius }
    }

    /// Creates a smoother from a raw, unnormalized radius value.
    #[must_use]
    pub fn from_raw(radius: f64) -> Self {
        Self::new(effective_radius(radius))
    }

    /// Smooths `values`, returning a series of the same length.
    #[must_use]
    pub fn smooth(&self, values: &[Sample]) -> Vec<Sample> {
        if self.radius == 0 {
            return values.to_vec();
        }

        let len = values.len();
        values
            .iter()
            .enumerate()
            .map(|(idx, value)| {
                if value.is_none() {
                    return None;
                }

                let start = idx.saturating_sub(self.radius);
                let end = idx.saturating_add(self.radius).min(len - 1);

                let (sum, count) = values[start..=end]
                    .iter()
                    .filter_map(|v| finite(*v))
                    .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));

                // A defined but non-finite center with no finite neighbors
                (count > 0).then(|| sum / count as f64)
            })
            .collect()
    }
}

/// Smooths `values` with a raw radius (floored, clamped to >= 0).
#[must_use]
pub fn smooth_series(values: &[Sample], radius: f64) -> Vec<Sample> {
    NeighborSmoother::from_raw(radius).smooth(values)
}
