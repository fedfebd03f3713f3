//! Pairstat Indicators
//!
//! Rolling statistics over a pair of index-aligned numeric series.
//! Every function is pure: outputs are recomputed from scratch on each call
//! and undefined positions are reported as `None`, never as NaN.
//!
//! # Available Indicators
//! - Sliding Correlation: Pearson coefficient over the trailing window
//! - Neighbor Smoother: gap-aware symmetric moving average
//! - Cointegration Z-Score: rolling Z-Score of global OLS residuals

pub mod error;
pub mod impl_;
pub mod registry;
pub mod statistics;
pub mod traits;

// Re-export main types
pub use error::IndicatorError;
pub use registry::IndicatorRegistry;
pub use traits::{IndicatorParams, IndicatorSpec, PairIndicator};

// Re-export indicator implementations
pub use impl_::{
    cointegration::{
        CointegrationZScore, cointegration_z_score, fit_regression, regression_residuals,
        rolling_residual_z_score,
    },
    correlation::{SlidingCorrelation, sliding_correlation},
    smoothing::{NeighborSmoother, smooth_series},
};
