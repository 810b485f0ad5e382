//! Configuration for quote loading and selection.

/// Source label that marks house-written filler quotes in the bundled data.
pub const DEFAULT_HOUSE_SOURCE: &str = "Tarot Wisdom";

/// Configuration shared by [`QuoteStore`](crate::QuoteStore) and
/// [`QuoteSelector`](crate::QuoteSelector).
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteConfig {
    /// Quotes whose source equals this label are classed as generic filler.
    pub house_source: String,
    /// Seed used in place of a NaN or infinite seed.
    pub fallback_seed: f64,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            house_source: DEFAULT_HOUSE_SOURCE.to_string(),
            fallback_seed: 0.0,
        }
    }
}

impl QuoteConfig {
    /// Set the house filler source label.
    pub fn with_house_source(mut self, label: impl Into<String>) -> Self {
        self.house_source = label.into();
        self
    }

    /// Set the fallback seed. Non-finite values are replaced by `0.0`.
    pub fn with_fallback_seed(mut self, seed: f64) -> Self {
        self.fallback_seed = if seed.is_finite() { seed } else { 0.0 };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = QuoteConfig::default();
        assert_eq!(cfg.house_source, "Tarot Wisdom");
        assert_eq!(cfg.fallback_seed, 0.0);
    }

    #[test]
    fn builder_methods() {
        let cfg = QuoteConfig::default()
            .with_house_source("In-House")
            .with_fallback_seed(0.25);
        assert_eq!(cfg.house_source, "In-House");
        assert_eq!(cfg.fallback_seed, 0.25);
    }

    #[test]
    fn fallback_seed_must_be_finite() {
        let cfg = QuoteConfig::default().with_fallback_seed(f64::NAN);
        assert_eq!(cfg.fallback_seed, 0.0);
        let cfg = QuoteConfig::default().with_fallback_seed(f64::INFINITY);
        assert_eq!(cfg.fallback_seed, 0.0);
    }
}
