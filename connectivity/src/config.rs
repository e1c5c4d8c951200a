use crate::variant::Variant;

/// Settings for a multi-size random saturation experiment.
///
/// With the `serde` feature this loads from TOML:
///
/// ```toml
/// variant = "wqu-ph"
/// sizes = [1000, 10000]
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SaturationConfig {
    pub variant: Variant,
    pub sizes: Vec<usize>,
    /// Fixed seed; `None` draws one from the thread-local entropy source.
    pub seed: Option<u64>,
}

impl Default for SaturationConfig {
    fn default() -> Self {
        Self {
            variant: Variant::WeightedHalving,
            sizes: vec![1_000, 10_000, 100_000, 1_000_000],
            seed: None,
        }
    }
}

impl SaturationConfig {
    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Parse a TOML document; missing keys fall back to [`Default`].
    #[cfg(feature = "serde")]
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError(e.to_string()))
    }
}

#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(pub String);
