//! Population statistics shared by the windowed indicators.
//!
//! All sums accumulate left to right so that identical inputs give
//! bit-identical outputs.

/// Arithmetic mean. NaN for an empty slice.
#[inline]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population mean and standard deviation (divisor = count).
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn population_mean_std(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }

    let mean = mean(values);
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64;

    Some((mean, variance.sqrt()))
}

/// Population covariance and variances of two equal-length slices.
///
/// Returns `(cov, var_a, var_b)`, each divided by the slice length.
#[must_use]
pub fn population_cov_var(a: &[f64], b: &[f64]) -> (f64, f64, f64) {
    debug_assert_eq!(a.len(), b.len());

    let mean_a = mean(a);
    let mean_b = mean(b);

    let (cov, var_a, var_b) =
        a.iter()
            .zip(b.iter())
            .fold((0.0, 0.0, 0.0), |(cov, va, vb), (&x, &y)| {
                let dx = x - mean_a;
                let dy = y - mean_b;
                (cov + dx * dy, va + dx * dx, vb + dy * dy)
            });

    let n = a.len() as f64;
    (cov / n, var_a / n, var_b / n)
}
