//! Pairstat Types
//!
//! Core data structures for rolling pair statistics.
//! This crate provides the sample tri-state, the overlapping pair view,
//! window normalization, configuration, and the request/result contracts.

#![deny(clippy::all)]

pub mod config;
pub mod pair;
pub mod result;
pub mod sample;
pub mod window;

// Re-export main types for convenience
pub use config::{AnalysisConfig, AnalysisRequest, NonFinitePolicy};
pub use pair::PairSeries;
pub use result::{AnalysisResult, ErrorResult, RegressionParams, ResultMeta};
pub use sample::{Sample, count_defined, finite, last_defined};
pub use window::{
    MIN_COINTEGRATION_WINDOW, MIN_CORRELATION_WINDOW, effective_radius, effective_window,
};
