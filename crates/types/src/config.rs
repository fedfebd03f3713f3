/// Analysis configuration.
///
/// Window and radius values are raw: they are floored and clamped when the
/// analysis is built, never rejected.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisConfig {
    /// Requested span of the sliding correlation window
    #[serde(default = "default_correlation_window")]
    pub correlation_window: f64,
    /// Neighbor radius applied to the correlation output
    #[serde(default = "default_smoothing_radius")]
    pub smoothing_radius: f64,
    /// Requested span of the residual z-score window
    #[serde(default = "default_cointegration_window")]
    pub cointegration_window: f64,
    /// Treatment of non-finite values inside a correlation window
    #[serde(default)]
    pub non_finite_policy: NonFinitePolicy,
    /// Also return the regression residuals
    #[serde(default)]
    pub include_residuals: bool,
}

fn default_correlation_window() -> f64 {
    20.0
}

fn default_smoothing_radius() -> f64 {
    2.0
}

fn default_cointegration_window() -> f64 {
    30.0
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            correlation_window: default_correlation_window(),
            smoothing_radius: default_smoothing_radius(),
            cointegration_window: default_cointegration_window(),
            non_finite_policy: NonFinitePolicy::default(),
            include_residuals: false,
        }
    }
}

/// How the sliding correlation treats non-finite values in its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonFinitePolicy {
    /// Non-finite values enter the arithmetic; a poisoned window is undefined.
    #[default]
    Propagate,
    /// Pairs with a non-finite member are dropped from the window.
    PairwiseComplete,
}

/// Analysis request: configuration plus two index-aligned series.
///
/// In JSON the series are arrays of numbers or `null`; a `null` becomes a
/// non-finite sample (`NaN`).
#[derive(Debug, Clone, serde::Serialize)]
pub struct AnalysisRequest {
    /// Analysis configuration
    pub config: AnalysisConfig,
    /// First series
    pub series_a: Vec<f64>,
    /// Second series
    pub series_b: Vec<f64>,
}

#[derive(Debug, Clone, serde::Deserialize)]
struct AnalysisRequestRaw {
    #[serde(default)]
    pub config: AnalysisConfig,
    pub series_a: Vec<Option<f64>>,
    pub series_b: Vec<Option<f64>>,
}

fn nulls_to_nan(values: Vec<Option<f64>>) -> Vec<f64> {
    values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect()
}

impl From<AnalysisRequestRaw> for AnalysisRequest {
    fn from(raw: AnalysisRequestRaw) -> Self {
        Self {
            config: raw.config,
            series_a: nulls_to_nan(raw.series_a),
            series_b: nulls_to_nan(raw.series_b),
        }
    }
}

impl<'de> serde::Deserialize<'de> for AnalysisRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = AnalysisRequestRaw::deserialize(deserializer)?;
        Ok(raw.into())
    }
}
