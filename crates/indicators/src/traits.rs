//! Indicator traits and specifications.

use pairstat_types::{NonFinitePolicy, Sample};

/// Specification for an indicator including name and parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndicatorSpec {
    /// Indicator name (e.g., "CORRELATION").
    pub name: String,
    /// Parameters for the indicator
    pub params: IndicatorParams,
}

impl IndicatorSpec {
    /// Creates a new indicator specification.
    #[must_use]
    pub fn new(name: impl Into<String>, params: IndicatorParams) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

/// Parameters for indicator configuration.
///
/// Windows are effective (already floored and clamped) so the type stays
/// hashable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IndicatorParams {
    /// Sliding correlation parameters.
    Correlation {
        /// Effective window length.
        window: usize,
        /// Non-finite handling inside the window.
        policy: NonFinitePolicy,
    },
}

/// Trait for indicators over a pair of index-aligned series.
///
/// Output length always equals the overlapping input length
/// (`min(a.len(), b.len())`). Undefined positions are `None`.
pub trait PairIndicator: Send + Sync {
    /// Computes the indicator over the overlapping prefix of `a` and `b`.
    fn compute(&self, a: &[f64], b: &[f64]) -> Vec<Sample>;

    /// Name of the indicator (e.g., "CORRELATION").
    fn name(&self) -> &str;

    /// First index that can hold a defined value.
    fn warmup_periods(&self) -> usize;
}
