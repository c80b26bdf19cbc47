//! TOML defaults for the water optimizer.
//!
//! Every key is optional; anything left out keeps the built-in default and
//! anything given on the command line wins over the file. Selector values
//! are matched ignoring case.
//!
//! ```toml
//! crop_type = "rice"
//! area_hectares = 40.0          # or area_acres, not both
//! irrigation_method = "sprinkler"
//! soil_type = "sandy"
//! water_cost_per_cubic_meter = 1.0
//! seed = 42                     # fixes the demo trend chart
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use water_core::calculations::units::hectares_to_acres;
use water_core::{CropType, FarmInput, IrrigationMethod, SoilType};

/// Errors that can occur while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML, has an unknown key, or an enum value
    /// outside the accepted set.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config sets both area_acres and area_hectares")]
    ConflictingArea,
}

/// Scenario defaults read from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FarmConfig {
    pub crop_type: Option<CropType>,
    pub area_acres: Option<f64>,
    pub area_hectares: Option<f64>,
    pub irrigation_method: Option<IrrigationMethod>,
    pub soil_type: Option<SoilType>,
    pub water_cost_per_cubic_meter: Option<f64>,
    pub seed: Option<u64>,
}

impl FarmConfig {
    /// Overlays the configured fields on `base`.
    pub fn apply_to(
        &self,
        base: FarmInput,
    ) -> FarmInput {
        let area_acres = self
            .area_acres
            .or_else(|| self.area_hectares.map(hectares_to_acres))
            .unwrap_or(base.area_acres);

        FarmInput {
            crop_type: self.crop_type.unwrap_or(base.crop_type),
            area_acres,
            irrigation_method: self.irrigation_method.unwrap_or(base.irrigation_method),
            soil_type: self.soil_type.unwrap_or(base.soil_type),
            water_cost_per_cubic_meter: self
                .water_cost_per_cubic_meter
                .unwrap_or(base.water_cost_per_cubic_meter),
        }
    }
}

/// Parse configuration from TOML text.
pub fn load_from_str(input: &str) -> Result<FarmConfig, ConfigError> {
    let config: FarmConfig = toml::from_str(input)?;
    if config.area_acres.is_some() && config.area_hectares.is_some() {
        return Err(ConfigError::ConflictingArea);
    }
    Ok(config)
}

/// Read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<FarmConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = load_from_str(&contents)?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_config_keeps_base() {
        let config = load_from_str("").unwrap();

        assert_eq!(config, FarmConfig::default());
        assert_eq!(config.apply_to(FarmInput::default()), FarmInput::default());
    }

    #[test]
    fn full_config_overrides_every_field() {
        let config = load_from_str(
            r#"
crop_type = "rice"
area_acres = 100.0
irrigation_method = "sprinkler"
soil_type = "sandy"
water_cost_per_cubic_meter = 1.0
seed = 7
"#,
        )
        .unwrap();

        let input = config.apply_to(FarmInput::default());

        assert_eq!(input.crop_type, CropType::Rice);
        assert_eq!(input.area_acres, 100.0);
        assert_eq!(input.irrigation_method, IrrigationMethod::Sprinkler);
        assert_eq!(input.soil_type, SoilType::Sandy);
        assert_eq!(input.water_cost_per_cubic_meter, 1.0);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn hectares_are_converted_to_acres() {
        let config = load_from_str("area_hectares = 10.0").unwrap();

        let input = config.apply_to(FarmInput::default());

        assert!((input.area_acres - 24.7105).abs() < 1e-9);
    }

    #[test]
    fn both_area_units_is_an_error() {
        let result = load_from_str("area_acres = 10.0\narea_hectares = 4.0");

        assert!(matches!(result, Err(ConfigError::ConflictingArea)));
    }

    #[test]
    fn unknown_soil_is_a_parse_error() {
        let result = load_from_str(r#"soil_type = "peat""#);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn selector_keys_ignore_case() {
        let config = load_from_str(
            r#"
crop_type = "Rice"
irrigation_method = "SPRINKLER"
soil_type = " Clay "
"#,
        )
        .unwrap();

        assert_eq!(config.crop_type, Some(CropType::Rice));
        assert_eq!(config.irrigation_method, Some(IrrigationMethod::Sprinkler));
        assert_eq!(config.soil_type, Some(SoilType::Clay));
    }

    #[test]
    fn unknown_key_is_a_parse_error() {
        let result = load_from_str("acreage = 10.0");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
