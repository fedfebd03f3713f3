//! Indicator implementations

pub mod cointegration;
pub mod correlation;
pub mod smoothing;
