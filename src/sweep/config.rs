//! Sweep configuration presets and TOML scenario files.
//!
//! A [`SweepConfig`] bundles the two swept ranges; a [`ScenarioConfig`] adds
//! the base market parameters so a whole computation request can live in one
//! TOML file. Presets cover the common cases without hand-writing ranges.

use crate::params::MarketParams;
use crate::sweep::types::SweepRange;

/// The two swept dimensions of a sensitivity grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepConfig {
    /// Spot-price sweep
    #[cfg_attr(feature = "serde", serde(default = "default_spot_range"))]
    pub spot_range: SweepRange,
    /// Volatility sweep
    #[cfg_attr(feature = "serde", serde(default = "default_vol_range"))]
    pub vol_range: SweepRange,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            spot_range: default_spot_range(),
            vol_range: default_vol_range(),
        }
    }
}

impl SweepConfig {
    /// 5x5 grid for quick checks and unit tests.
    pub fn coarse() -> Self {
        Self {
            spot_range: SweepRange::new(80.0, 120.0, 5),
            vol_range: SweepRange::new(0.1, 0.3, 5),
        }
    }

    /// 50x50 grid for smooth surface plots.
    pub fn fine() -> Self {
        Self {
            spot_range: SweepRange::new(80.0, 120.0, 50),
            vol_range: SweepRange::new(0.1, 0.3, 50),
        }
    }
}

fn default_spot_range() -> SweepRange {
    SweepRange::new(80.0, 120.0, 10)
}

fn default_vol_range() -> SweepRange {
    SweepRange::new(0.1, 0.3, 10)
}

/// A full computation request: base quote parameters plus sweep ranges.
///
/// # Example TOML
///
/// ```toml
/// [params]
/// spot = 100.0
/// strike = 100.0
/// maturity = 1.0
/// rate = 0.05
/// volatility = 0.2
///
/// [sweep.spot_range]
/// min = 80.0
/// max = 120.0
/// samples = 10
///
/// [sweep.vol_range]
/// min = 0.1
/// max = 0.3
/// samples = 10
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioConfig {
    /// Base market parameters for the headline quote and the fixed
    /// dimensions of the sweep
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: MarketParams,
    /// Sweep ranges
    #[cfg_attr(feature = "serde", serde(default))]
    pub sweep: SweepConfig,
}

#[cfg(feature = "serde")]
impl ScenarioConfig {
    /// Parse a scenario from TOML text.
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a scenario from a TOML file.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        use anyhow::Context;
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario file {}", path.display()))?;
        Self::from_toml_str(&text)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_falls_back_to_defaults() {
        let config = ScenarioConfig::from_toml_str("").unwrap();
        assert_eq!(config, ScenarioConfig::default());
        assert_eq!(config.sweep.spot_range.samples, 10);
    }

    #[test]
    fn partial_toml_overrides_only_named_sections() {
        let text = r#"
            [sweep.vol_range]
            min = 0.05
            max = 0.5
            samples = 25
        "#;
        let config = ScenarioConfig::from_toml_str(text).unwrap();
        assert_eq!(config.params, MarketParams::default());
        assert_eq!(config.sweep.spot_range, SweepRange::new(80.0, 120.0, 10));
        assert_eq!(config.sweep.vol_range, SweepRange::new(0.05, 0.5, 25));
    }
}
