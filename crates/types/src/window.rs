//! Window and radius normalization.
//!
//! Raw window values come straight from configuration and are never
//! rejected: they are floored and clamped to a per-operation minimum.

/// Smallest effective window for the sliding correlation.
pub const MIN_CORRELATION_WINDOW: usize = 1;

/// Smallest effective window for the residual z-score.
pub const MIN_COINTEGRATION_WINDOW: usize = 2;

/// Floors `raw` and clamps it to at least `min`.
///
/// NaN and negative values normalize to `min`; `+inf` saturates to
/// `usize::MAX`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn effective_window(raw: f64, min: usize) -> usize {
    if raw.is_nan() {
        return min;
    }
    let floored = raw.floor();
    if floored <= 0.0 {
        return min;
    }
    // `as` saturates for values beyond usize::MAX
    (floored as usize).max(min)
}

/// Floors `raw` and clamps it to at least 0.
#[must_use]
pub fn effective_radius(raw: f64) -> usize {
    effective_window(raw, 0)
}
