//! Sliding Pearson correlation

use crate::statistics::population_cov_var;
use crate::traits::PairIndicator;
use pairstat_types::{MIN_CORRELATION_WINDOW, NonFinitePolicy, PairSeries, Sample, effective_window};

/// Sliding Pearson correlation between two series.
///
/// Index `i` correlates the `window` samples *preceding* it
/// (`i - window .. i`); the current sample is not part of its own window.
/// Indices `< window` are undefined, as are windows where either side has
/// zero population variance.
#[derive(Debug, Clone)]
pub struct SlidingCorrelation {
    /// Effective window length (>= 1)
    pub window: usize,
    /// Non-finite handling inside the window
    pub policy: NonFinitePolicy,
}

impl SlidingCorrelation {
    /// Creates a correlation with the given window (clamped to >= 1).
    #[must_use]
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(MIN_CORRELATION_WINDOW),
            policy: NonFinitePolicy::Propagate,
        }
    }

    /// Creates a correlation from a raw, unnormalized window value.
    #[must_use]
    pub fn from_raw(window: f64) -> Self {
        Self::new(effective_window(window, MIN_CORRELATION_WINDOW))
    }

    /// Sets the non-finite policy.
    #[must_use]
    pub fn with_policy(mut self, policy: NonFinitePolicy) -> Self {
        self.policy = policy;
        self
    }

    fn window_coefficient(&self, a: &[f64], b: &[f64]) -> Sample {
        match self.policy {
            NonFinitePolicy::Propagate => {
                let (cov, var_a, var_b) = population_cov_var(a, b);
                coefficient(cov, var_a, var_b)
            }
            NonFinitePolicy::PairwiseComplete => {
                let (kept_a, kept_b): (Vec<f64>, Vec<f64>) = a
                    .iter()
                    .zip(b.iter())
                    .filter(|(x, y)| x.is_finite() && y.is_finite())
                    .map(|(&x, &y)| (x, y))
                    .unzip();
                if kept_a.len() < 2 {
                    return None;
                }
                let (cov, var_a, var_b) = population_cov_var(&kept_a, &kept_b);
                coefficient(cov, var_a, var_b)
            }
        }
    }
}

/// Pearson coefficient from population moments.
///
/// Undefined when either standard deviation is exactly zero or the result
/// is not finite. The denominator is `sqrt(var_a * var_b)` (exact for a
/// series against itself) with `std_a * std_b` as fallback when that
/// product under- or overflows.
fn coefficient(cov: f64, var_a: f64, var_b: f64) -> Sample {
    let std_a = var_a.sqrt();
    let std_b = var_b.sqrt();
    if std_a == 0.0 || std_b == 0.0 {
        return None;
    }

    let denom = match (var_a * var_b).sqrt() {
        d if d.is_finite() && d > 0.0 => d,
        _ => std_a * std_b,
    };
    let r = cov / denom;

    r.is_finite().then_some(r.clamp(-1.0, 1.0))
}

impl PairIndicator for SlidingCorrelation {
    fn compute(&self, a: &[f64], b: &[f64]) -> Vec<Sample> {
        let pair = PairSeries::new(a, b);
        let len = pair.len();
        let mut result = vec![None; len];

        if len <= self.window {
            return result;
        }

        let (a, b) = (pair.a(), pair.b());
        for (i, slot) in result.iter_mut().enumerate().skip(self.window) {
            let start = i - self.window;
            *slot = self.window_coefficient(&a[start..i], &b[start..i]);
        }

        result
    }

    fn name(&self) -> &str {
        "CORRELATION"
    }

    fn warmup_periods(&self) -> usize {
        self.window
    }
}

/// Sliding correlation with a raw window value.
///
/// `window` is floored and clamped to at least 1. Non-finite values
/// propagate: a window containing one is undefined.
#[must_use]
pub fn sliding_correlation(a: &[f64], b: &[f64], window: f64) -> Vec<Sample> {
    SlidingCorrelation::from_raw(window).compute(a, b)
}
