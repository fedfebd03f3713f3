//! Cointegration Z-Score indicator

use crate::statistics::population_mean_std;
use crate::traits::PairIndicator;
use pairstat_types::{
    MIN_COINTEGRATION_WINDOW, PairSeries, RegressionParams, Sample, effective_window, finite,
};

/// Cointegration Z-Score
///
/// Steps:
/// 1. Fit one global OLS regression of A on B over every finite pair
/// 2. Calculate residuals `a - (intercept + slope * b)`
/// 3. Compute Z-Score of each residual over the trailing window
///    `[i - (window - 1), i]` (current index included, population std)
#[derive(Debug, Clone)]
pub struct CointegrationZScore {
    /// Window size for the residual Z-Score (>= 2)
    pub window: usize,
}

impl CointegrationZScore {
    /// Creates a new Cointegration Z-Score (window clamped to >= 2).
    #[must_use]
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(MIN_COINTEGRATION_WINDOW),
        }
    }

    /// Creates the indicator from a raw, unnormalized window value.
    #[must_use]
    pub fn from_raw(window: f64) -> Self {
        Self::new(effective_window(window, MIN_COINTEGRATION_WINDOW))
    }

    /// Rolling Z-Score over an already computed residual series.
    #[must_use]
    pub fn score_residuals(&self, residuals: &[Sample]) -> Vec<Sample> {
        let len = residuals.len();
        let mut result = vec![None; len];
        let mut window_values = Vec::with_capacity(self.window.min(len));

        for (i, slot) in result.iter_mut().enumerate().skip(self.window - 1) {
            let Some(current) = residuals[i] else {
                continue;
            };

            let start = i.saturating_sub(self.window - 1);
            window_values.clear();
            window_values.extend(residuals[start..=i].iter().filter_map(|r| finite(*r)));
            if window_values.len() < 2 {
                continue;
            }

            let Some((mean, std)) = population_mean_std(&window_values) else {
                continue;
            };
            if std.is_finite() && std > 0.0 {
                *slot = finite(Some((current - mean) / std));
            }
        }

        result
    }
}

impl PairIndicator for CointegrationZScore {
    fn compute(&self, a: &[f64], b: &[f64]) -> Vec<Sample> {
        let fit = fit_regression(a, b);
        let residuals = regression_residuals(a, b, fit.as_ref());
        self.score_residuals(&residuals)
    }

    fn name(&self) -> &str {
        "COINT_Z"
    }

    fn warmup_periods(&self) -> usize {
        self.window - 1
    }
}

/// Ordinary least squares of A on B over the finite pairs of the overlap.
///
/// Pairs with a non-finite member are dropped entirely. Returns `None` when
/// fewer than two pairs remain or when the sums overflow into a non-finite
/// slope or intercept. When B has zero variance the slope falls back to 0
/// and the intercept to the mean of A.
#[must_use]
pub fn fit_regression(a: &[f64], b: &[f64]) -> Option<RegressionParams> {
    let pair = PairSeries::new(a, b);

    let mut pairs = 0_usize;
    let (mut sum_a, mut sum_b, mut sum_ab, mut sum_bb) = (0.0, 0.0, 0.0, 0.0);
    for (x, y) in pair.finite_pairs() {
        pairs += 1;
        sum_a += x;
        sum_b += y;
        sum_ab += x * y;
        sum_bb += y * y;
    }

    if pairs < 2 {
        return None;
    }

    let n = pairs as f64;
    let denom = n * sum_bb - sum_b * sum_b;
    let (slope, intercept) = if denom == 0.0 {
        (0.0, sum_a / n)
    } else {
        let slope = (n * sum_ab - sum_a * sum_b) / denom;
        (slope, (sum_a - slope * sum_b) / n)
    };
    if !slope.is_finite() || !intercept.is_finite() {
        return None;
    }

    Some(RegressionParams {
        intercept,
        slope,
        pairs,
    })
}

/// Residuals of the overlap against a fit.
///
/// Positions with a non-finite input, or every position when there is no
/// fit, are undefined.
#[must_use]
pub fn regression_residuals(a: &[f64], b: &[f64], fit: Option<&RegressionParams>) -> Vec<Sample> {
    let pair = PairSeries::new(a, b);
    let Some(fit) = fit else {
        return vec![None; pair.len()];
    };

    (0..pair.len())
        .map(|i| pair.finite_pair_at(i).map(|(x, y)| x - fit.predict(y)))
        .collect()
}

/// Rolling residual Z-Score with a raw window (floored, clamped to >= 2).
#[must_use]
pub fn rolling_residual_z_score(residuals: &[Sample], window: f64) -> Vec<Sample> {
    CointegrationZScore::from_raw(window).score_residuals(residuals)
}

/// Cointegration Z-Score with a raw window (floored, clamped to >= 2).
#[must_use]
pub fn cointegration_z_score(a: &[f64], b: &[f64], window: f64) -> Vec<Sample> {
    CointegrationZScore::from_raw(window).compute(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fit_exact_line() {
        // a = 1 + 2b
        let b = [0.0, 1.0, 2.0, 3.0, 4.0];
        let a: Vec<f64> = b.iter().map(|x| 1.0 + 2.0 * x).collect();
        let fit = fit_regression(&a, &b).unwrap();

        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 1.0, epsilon = 1e-12);
        assert_eq!(fit.pairs, 5);
    }

    #[test]
    fn test_self_regression_is_identity() {
        let a = [1.5, 2.25, 0.75, 4.0, 3.5, 2.0];
        let fit = fit_regression(&a, &a).unwrap();

        assert_eq!(fit.slope, 1.0);
        assert_eq!(fit.intercept, 0.0);

        let residuals = regression_residuals(&a, &a, Some(&fit));
        assert!(residuals.iter().all(|r| *r == Some(0.0)));
        assert!(cointegration_z_score(&a, &a, 3.0).iter().all(Option::is_none));
    }

    #[test]
    fn test_fit_drops_non_finite_pairs() {
        let a = [1.0, f64::NAN, 3.0, 5.0, 100.0];
        let b = [0.0, 1.0, 1.0, 2.0, f64::INFINITY];
        let fit = fit_regression(&a, &b).unwrap();

        // Retained: (1,0), (3,1), (5,2) -> a = 1 + 2b
        assert_eq!(fit.pairs, 3);
        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fit_requires_two_pairs() {
        assert!(fit_regression(&[1.0], &[2.0]).is_none());
        assert!(fit_regression(&[1.0, f64::NAN], &[2.0, 3.0]).is_none());
        assert!(fit_regression(&[], &[]).is_none());
    }

    #[test]
    fn test_fit_with_overflowing_sums_is_invalid() {
        let a = [1e308, -1e308, 1e308, 0.0];
        let b = [0.0, 1.0, 2.0, 3.0];

        assert!(fit_regression(&a, &b).is_none());
        assert_eq!(regression_residuals(&a, &b, None), vec![None; 4]);
        assert_eq!(cointegration_z_score(&a, &b, 2.0), vec![None; 4]);

        // Mean of A overflows on the zero-variance fallback
        assert!(fit_regression(&[1e308, 1e308], &[5.0, 5.0]).is_none());
    }

    #[test]
    fn test_fit_zero_variance_b_falls_back_to_mean() {
        let a = [1.0, 2.0, 6.0];
        let b = [5.0, 5.0, 5.0];
        let fit = fit_regression(&a, &b).unwrap();

        assert_eq!(fit.slope, 0.0);
        assert_relative_eq!(fit.intercept, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_residuals_undefined_without_fit() {
        let a = [1.0, 2.0, 3.0];
        let residuals = regression_residuals(&a, &a, None);
        assert_eq!(residuals, vec![None, None, None]);
    }

    #[test]
    fn test_residuals_undefined_at_non_finite_inputs() {
        let fit = RegressionParams {
            intercept: 0.0,
            slope: 1.0,
            pairs: 2,
        };
        let residuals = regression_residuals(&[1.0, f64::NAN, 4.0], &[0.5, 1.0, 4.0], Some(&fit));
        assert_eq!(residuals, vec![Some(0.5), None, Some(0.0)]);
    }

    #[test]
    fn test_zscore_includes_current_index() {
        // Window [1, 2, 3]: mean 2, population std sqrt(2/3)
        let residuals = vec![Some(1.0), Some(2.0), Some(3.0)];
        let result = rolling_residual_z_score(&residuals, 3.0);

        assert_eq!(result[0], None);
        assert_eq!(result[1], None);
        assert_relative_eq!(result[2].unwrap(), 1.0 / (2.0_f64 / 3.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_zscore_skips_undefined_residuals_in_window() {
        let residuals = vec![Some(1.0), None, Some(3.0)];
        let result = rolling_residual_z_score(&residuals, 3.0);

        // Window keeps [1, 3]: mean 2, std 1
        assert_relative_eq!(result[2].unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zscore_undefined_current_residual() {
        let residuals = vec![Some(1.0), Some(2.0), None, Some(5.0)];
        let result = rolling_residual_z_score(&residuals, 2.0);

        assert!(result[1].is_some());
        assert_eq!(result[2], None);
        // Window [None, 5] has a single finite residual
        assert_eq!(result[3], None);
    }

    #[test]
    fn test_zscore_overflowing_std_is_undefined() {
        // Mean is 0 but the squared deviations overflow to +inf
        let residuals = vec![Some(1e200), Some(-1e200), Some(1.0), Some(3.0)];
        let result = rolling_residual_z_score(&residuals, 2.0);

        assert_eq!(result[1], None);
        assert_eq!(result[2], None);
        assert_relative_eq!(result[3].unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zscore_window_clamped_to_two() {
        for raw in [0.0, 1.0, -3.0, 1.9] {
            assert_eq!(CointegrationZScore::from_raw(raw).window, 2);
        }
        // Window 2: z is always +1 or -1 for distinct neighbors
        let residuals = vec![Some(0.0), Some(2.0), Some(1.0)];
        let result = rolling_residual_z_score(&residuals, 0.0);
        assert_eq!(result[0], None);
        assert_relative_eq!(result[1].unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(result[2].unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cointegration_output_length_is_overlap() {
        let a = [1.0, 2.0, 4.0, 3.0, 5.0];
        let b = [1.0, 1.5, 2.0];
        assert_eq!(cointegration_z_score(&a, &b, 2.0).len(), 3);
    }

    #[test]
    fn test_cointegration_insufficient_pairs_all_undefined() {
        let a = [1.0, f64::NAN, f64::NAN, 4.0];
        let b = [1.0, 2.0, 3.0, f64::NAN];
        let result = cointegration_z_score(&a, &b, 2.0);
        assert_eq!(result, vec![None; 4]);
    }

    #[test]
    fn test_cointegration_flags_divergence() {
        // a tracks 2b except for a spike at the end
        let b: Vec<f64> = (0..20).map(f64::from).collect();
        let mut a: Vec<f64> = b
            .iter()
            .enumerate()
            .map(|(i, x)| 2.0 * x + if i % 2 == 0 { 0.1 } else { -0.1 })
            .collect();
        a[19] += 5.0;

        let indicator = CointegrationZScore::new(10);
        let result = indicator.compute(&a, &b);

        assert_eq!(indicator.warmup_periods(), 9);
        assert!(result[..9].iter().all(Option::is_none));
        assert!(result[19].unwrap() > 2.0);
    }
}
