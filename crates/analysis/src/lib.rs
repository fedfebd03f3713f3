//! Pairstat Analysis
//!
//! Composes the pair indicators into the analysis pipeline: raw series are
//! correlated and smoothed, and independently scored against a global
//! cointegration fit. Exposes a JSON entry point for hosts.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

pub mod analyzer;
pub mod error;
pub mod runner;

pub use analyzer::PairAnalyzer;
pub use error::{AnalysisError, serialize_error};
pub use runner::run_analysis_from_json;
