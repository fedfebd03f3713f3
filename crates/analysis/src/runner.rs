//! JSON entry point.

use pairstat_types::AnalysisRequest;

use crate::analyzer::PairAnalyzer;
use crate::error::AnalysisError;

/// Main entry point: receives request JSON, returns result JSON.
///
/// # Errors
/// - [`AnalysisError::RequestParse`] when JSON parsing fails.
/// - [`AnalysisError::Indicator`] if the pipeline cannot be built.
/// - [`AnalysisError::ResultSerialize`] if the result cannot be encoded.
pub fn run_analysis_from_json(request_json: &str) -> Result<String, AnalysisError> {
    let request: AnalysisRequest = serde_json::from_str(request_json)
        .map_err(|e| AnalysisError::RequestParse(e.to_string()))?;

    let analyzer = PairAnalyzer::new(request.config)?;
    let result = analyzer.analyze(&request.series_a, &request.series_b);

    serde_json::to_string(&result).map_err(|e| AnalysisError::ResultSerialize(e.to_string()))
}
