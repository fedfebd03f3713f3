//! Indicator error types.

use thiserror::Error;

/// Errors that can occur during registry operations.
///
/// Numeric computation itself never fails: undefined results are reported
/// as `None` samples.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// Unknown indicator name requested from registry
    #[error("unknown indicator: {0}")]
    UnknownIndicator(String),
}
