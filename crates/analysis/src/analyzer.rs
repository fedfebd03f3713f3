//! Pair analysis pipeline.

use std::sync::Arc;

use pairstat_indicators::{
    CointegrationZScore, IndicatorParams, IndicatorRegistry, IndicatorSpec, NeighborSmoother,
    PairIndicator, fit_regression, regression_residuals,
};
use pairstat_types::{
    AnalysisConfig, AnalysisResult, MIN_COINTEGRATION_WINDOW, MIN_CORRELATION_WINDOW,
    PairSeries, ResultMeta, count_defined, effective_radius, effective_window, last_defined,
};

use crate::error::AnalysisError;

/// Runs the correlation and cointegration pipeline for one configuration.
///
/// Raw window values are normalized once, at construction. The analyzer
/// holds no per-call state and can be shared across threads.
pub struct PairAnalyzer {
    include_residuals: bool,
    correlation_window: usize,
    smoothing_radius: usize,
    cointegration_window: usize,
    correlation: Arc<dyn PairIndicator>,
    smoother: NeighborSmoother,
    cointegration: CointegrationZScore,
}

impl PairAnalyzer {
    /// Creates an analyzer using the default indicator registry.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Indicator`] if the correlation indicator
    /// cannot be created.
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        Self::with_registry(config, &IndicatorRegistry::with_defaults())
    }

    /// Creates an analyzer resolving the correlation stage from `registry`.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Indicator`] if `registry` has no usable
    /// `CORRELATION` entry.
    pub fn with_registry(
        config: AnalysisConfig,
        registry: &IndicatorRegistry,
    ) -> Result<Self, AnalysisError> {
        let correlation_window =
            effective_window(config.correlation_window, MIN_CORRELATION_WINDOW);
        let smoothing_radius = effective_radius(config.smoothing_radius);
        let cointegration_window =
            effective_window(config.cointegration_window, MIN_COINTEGRATION_WINDOW);

        tracing::debug!(
            "effective parameters: correlation_window={} smoothing_radius={} cointegration_window={} policy={:?}",
            correlation_window,
            smoothing_radius,
            cointegration_window,
            config.non_finite_policy
        );

        let correlation = registry.create(&IndicatorSpec::new(
            "CORRELATION",
            IndicatorParams::Correlation {
                window: correlation_window,
                policy: config.non_finite_policy,
            },
        ))?;

        Ok(Self {
            include_residuals: config.include_residuals,
            correlation_window,
            smoothing_radius,
            cointegration_window,
            correlation,
            smoother: NeighborSmoother::new(smoothing_radius),
            cointegration: CointegrationZScore::new(cointegration_window),
        })
    }

    /// Analyzes two index-aligned series.
    ///
    /// Only the overlapping prefix is processed; every output series has the
    /// overlap length.
    #[must_use]
    pub fn analyze(&self, a: &[f64], b: &[f64]) -> AnalysisResult {
        let pair = PairSeries::new(a, b);
        if pair.is_truncated() {
            tracing::warn!(
                "series lengths differ ({} vs {}), using overlap of {} samples",
                a.len(),
                b.len(),
                pair.len()
            );
        }

        let correlation = self.correlation.compute(pair.a(), pair.b());
        let smoothed = self.smoother.smooth(&correlation);

        let regression = fit_regression(pair.a(), pair.b());
        if regression.is_none() {
            tracing::warn!(
                "cointegration fit unavailable: fewer than 2 finite pairs or non-finite coefficients in {} samples",
                pair.len()
            );
        }
        let residuals = regression_residuals(pair.a(), pair.b(), regression.as_ref());
        let cointegration_z = self.cointegration.score_residuals(&residuals);

        let meta = ResultMeta {
            overlap_len: pair.len(),
            truncated: pair.is_truncated(),
            correlation_window: self.correlation_window,
            smoothing_radius: self.smoothing_radius,
            cointegration_window: self.cointegration_window,
            defined_correlation: count_defined(&smoothed),
            defined_cointegration_z: count_defined(&cointegration_z),
            latest_correlation: last_defined(&smoothed).map(|(_, value)| value),
            latest_cointegration_z: last_defined(&cointegration_z).map(|(_, value)| value),
        };

        tracing::info!(
            "analysis complete: {} samples, {} correlation / {} z-score values defined",
            meta.overlap_len,
            meta.defined_correlation,
            meta.defined_cointegration_z
        );

        AnalysisResult {
            ok: true,
            error: None,
            correlation: Some(correlation),
            smoothed_correlation: Some(smoothed),
            cointegration_z: Some(cointegration_z),
            residuals: self.include_residuals.then_some(residuals),
            regression,
            meta: Some(meta),
        }
    }
}
