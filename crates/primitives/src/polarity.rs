//! Factor polarity and the registry driving all scoring.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Orientation of a factor: whether lower or higher raw values are favorable.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Smaller raw values are better (e.g. valuation ratios, volatility).
    #[display("lower_is_better")]
    LowerIsBetter,
    /// Larger raw values are better (e.g. momentum, profitability).
    #[display("higher_is_better")]
    HigherIsBetter,
}

impl Polarity {
    /// Orient a standardized value so that larger is always better.
    ///
    /// `LowerIsBetter` factors are negated; `HigherIsBetter` factors pass
    /// through unchanged. Applying this uniformly before summation gives the
    /// composite z-score a single consistent direction.
    #[must_use]
    pub const fn orient(self, z: f64) -> f64 {
        match self {
            Self::LowerIsBetter => -z,
            Self::HigherIsBetter => z,
        }
    }
}

/// Ordered mapping from factor name to polarity.
///
/// Static for the lifetime of a scoring run. Insertion order determines
/// factor column order in cleaned and scored tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityRegistry {
    entries: Vec<(String, Polarity)>,
}

impl PolarityRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Registry for the standard nine-factor set of the rebalancing pipeline.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register("Beta", Polarity::LowerIsBetter);
        registry.register("Momentum_1Y", Polarity::HigherIsBetter);
        registry.register("Momentum_3Y", Polarity::HigherIsBetter);
        registry.register("Value_PBR", Polarity::LowerIsBetter);
        registry.register("Volatility_1Y", Polarity::LowerIsBetter);
        registry.register("Volatility_3Y", Polarity::LowerIsBetter);
        registry.register("Size_MarketCap", Polarity::LowerIsBetter);
        registry.register("Profitability_ROE", Polarity::HigherIsBetter);
        registry.register("Investment_AssetGrowth", Polarity::LowerIsBetter);

        registry
    }

    /// Register a factor, replacing any existing entry with the same name.
    pub fn register(&mut self, name: impl Into<String>, polarity: Polarity) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = polarity;
        } else {
            self.entries.push((name, polarity));
        }
    }

    /// Get the polarity registered for a factor name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Polarity> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, p)| *p)
    }

    /// Whether a factor name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Registered factor names in insertion order.
    #[must_use]
    pub fn factor_names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Iterate over `(name, polarity)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Polarity)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), *p))
    }

    /// Number of registered factors.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no factors.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
