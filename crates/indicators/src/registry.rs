//! Indicator registry for dynamic indicator creation.

use crate::error::IndicatorError;
use crate::impl_::correlation::SlidingCorrelation;
use crate::traits::{IndicatorParams, IndicatorSpec, PairIndicator};
use std::collections::HashMap;
use std::sync::Arc;

/// Factory function type for creating indicators from parameters.
pub type IndicatorFactory =
    Box<dyn Fn(&IndicatorParams) -> Result<Arc<dyn PairIndicator>, IndicatorError> + Send + Sync>;

/// Registry for indicator factories.
///
/// Allows dynamic creation of pair indicators by name and parameters.
pub struct IndicatorRegistry {
    /// Indicator factories by name.
    factories: HashMap<String, IndicatorFactory>,
}

impl IndicatorRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers an indicator factory.
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn(&IndicatorParams) -> Result<Arc<dyn PairIndicator>, IndicatorError>
            + Send
            + Sync
            + 'static,
    {
        self.factories.insert(name.to_string(), Box::new(factory));
    }

    /// Creates an indicator from a specification.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::UnknownIndicator`] if the name is not registered.
    pub fn create(&self, spec: &IndicatorSpec) -> Result<Arc<dyn PairIndicator>, IndicatorError> {
        let factory = self
            .factories
            .get(&spec.name)
            .ok_or_else(|| IndicatorError::UnknownIndicator(spec.name.clone()))?;
        factory(&spec.params)
    }

    /// Checks if an indicator is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Returns list of registered indicator names.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Creates a registry with the sliding correlation pre-registered as
    /// `CORRELATION`.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register("CORRELATION", |params| match params {
            IndicatorParams::Correlation { window, policy } => {
                Ok(Arc::new(SlidingCorrelation::new(*window).with_policy(*policy)))
            }
        });

        registry
    }
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
