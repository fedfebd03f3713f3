//! Analysis error types.

use pairstat_types::{AnalysisResult, ErrorResult};
use serde_json::json;
use thiserror::Error;

/// Errors that can occur at the analysis boundary.
///
/// Degenerate numeric conditions are never errors; they surface as
/// undefined samples in the result.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// JSON request parse error
    #[error("request parse error: {0}")]
    RequestParse(String),

    /// Result serialization error
    #[error("result serialization error: {0}")]
    ResultSerialize(String),

    /// Indicator construction error
    #[error("indicator error: {0}")]
    Indicator(#[from] pairstat_indicators::IndicatorError),
}

impl AnalysisError {
    /// Returns true if this is a request parse error.
    #[must_use]
    pub fn is_request_error(&self) -> bool {
        matches!(self, AnalysisError::RequestParse(_))
    }

    /// Returns the error category for the output contract.
    /// Categories: `request`, `runtime`
    #[must_use]
    pub fn error_category(&self) -> &'static str {
        match self {
            AnalysisError::RequestParse(_) => "request",
            AnalysisError::ResultSerialize(_) | AnalysisError::Indicator(_) => "runtime",
        }
    }
}

impl From<AnalysisError> for ErrorResult {
    fn from(err: AnalysisError) -> Self {
        Self {
            category: err.error_category().to_string(),
            message: err.to_string(),
            details: json!({}),
        }
    }
}

/// Serializes an analysis error into a JSON response with `ok: false`.
#[must_use]
pub fn serialize_error(err: AnalysisError) -> String {
    let error_result = AnalysisResult {
        ok: false,
        error: Some(ErrorResult::from(err)),
        ..AnalysisResult::default()
    };

    serde_json::to_string(&error_result).unwrap_or_else(|_| {
        r#"{"ok":false,"error":{"category":"runtime","message":"serialization_failed"}}"#
            .to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairstat_indicators::IndicatorError;

    #[test]
    fn test_error_category_request() {
        let err = AnalysisError::RequestParse("invalid json".to_string());
        assert_eq!(err.error_category(), "request");
        assert!(err.is_request_error());
    }

    #[test]
    fn test_error_category_runtime() {
        let err = AnalysisError::ResultSerialize("json error".to_string());
        assert_eq!(err.error_category(), "runtime");
        assert!(!err.is_request_error());

        let err: AnalysisError = IndicatorError::UnknownIndicator("X".to_string()).into();
        assert_eq!(err.error_category(), "runtime");
    }

    #[test]
    fn test_error_result_conversion() {
        let err = AnalysisError::RequestParse("missing field `series_a`".to_string());
        let result: ErrorResult = err.into();
        assert_eq!(result.category, "request");
        assert!(result.message.contains("series_a"));
    }

    #[test]
    fn test_serialize_error_shape() {
        let json = serialize_error(AnalysisError::RequestParse("bad".to_string()));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["ok"], serde_json::Value::Bool(false));
        assert_eq!(parsed["error"]["category"], "request");
        assert!(parsed.get("correlation").is_none());
    }
}
