use crate::sample::Sample;

/// Analysis result container.
///
/// Undefined samples serialize as `null`.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct AnalysisResult {
    /// Success flag
    pub ok: bool,
    /// Error information if not ok
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResult>,
    /// Raw sliding correlation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<Vec<Sample>>,
    /// Correlation after neighbor smoothing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoothed_correlation: Option<Vec<Sample>>,
    /// Rolling z-score of the regression residuals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cointegration_z: Option<Vec<Sample>>,
    /// Regression residuals (only when requested)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residuals: Option<Vec<Sample>>,
    /// Global regression fit, absent when no usable fit exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regression: Option<RegressionParams>,
    /// Result metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResultMeta>,
}

/// Error result information
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ErrorResult {
    /// Error category
    pub category: String,
    /// Error message
    pub message: String,
    /// Additional error details
    #[serde(default)]
    pub details: serde_json::Value,
}

/// Ordinary least squares fit of A on B: `a ≈ intercept + slope * b`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RegressionParams {
    /// Intercept (alpha)
    pub intercept: f64,
    /// Slope (beta)
    pub slope: f64,
    /// Number of finite pairs the fit used
    pub pairs: usize,
}

impl RegressionParams {
    /// Value predicted for `b`.
    #[inline]
    #[must_use]
    pub fn predict(&self, b: f64) -> f64 {
        self.intercept + self.slope * b
    }
}

/// Effective parameters and summary counts of one analysis run.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResultMeta {
    /// Overlapping input length
    pub overlap_len: usize,
    /// Input lengths differed
    pub truncated: bool,
    /// Effective correlation window
    pub correlation_window: usize,
    /// Effective smoothing radius
    pub smoothing_radius: usize,
    /// Effective z-score window
    pub cointegration_window: usize,
    /// Defined slots in the smoothed correlation
    pub defined_correlation: usize,
    /// Defined slots in the cointegration z-score
    pub defined_cointegration_z: usize,
    /// Last defined smoothed correlation, the "current" reading
    pub latest_correlation: Option<f64>,
    /// Last defined cointegration z-score
    pub latest_cointegration_z: Option<f64>,
}
