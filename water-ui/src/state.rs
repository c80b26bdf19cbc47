//! Scenario state for the water optimizer UI.
//!
//! [`FarmForm`] holds the operator's current selections. Numeric fields are
//! clamped into their documented bounds on the way in, so everything handed
//! to the calculations is a valid [`FarmInput`].

use tracing::{debug, warn};
use water_core::calculations::units::{acres_to_hectares, hectares_to_acres};
use water_core::{CropType, FarmInput, IrrigationMethod, SoilType};

/// Clamps `value` into `[min, max]`, substituting `default` for NaN.
fn clamp_field(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
    default: f64,
) -> f64 {
    if value.is_nan() {
        warn!(field, default, "not a number, using default");
        return default;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!(field, value, clamped, "value out of range, clamped");
    }
    clamped
}

/// Clamps a field size into the accepted acreage range.
pub fn clamp_area_acres(acres: f64) -> f64 {
    clamp_field(
        "area_acres",
        acres,
        FarmInput::MIN_AREA_ACRES,
        FarmInput::MAX_AREA_ACRES,
        FarmInput::DEFAULT_AREA_ACRES,
    )
}

/// Clamps a water price into the accepted range.
pub fn clamp_water_cost(price: f64) -> f64 {
    clamp_field(
        "water_cost_per_cubic_meter",
        price,
        FarmInput::MIN_WATER_COST,
        FarmInput::MAX_WATER_COST,
        FarmInput::DEFAULT_WATER_COST,
    )
}

/// The operator's current what-if selections.
#[derive(Debug, Clone, Default)]
pub struct FarmForm {
    input: FarmInput,
}

impl FarmForm {
    /// Create a form from a scenario, clamping its numeric fields.
    pub fn new(input: FarmInput) -> Self {
        if !input.is_within_bounds() {
            debug!(?input, "scenario outside bounds, clamping");
        }
        Self {
            input: FarmInput {
                area_acres: clamp_area_acres(input.area_acres),
                water_cost_per_cubic_meter: clamp_water_cost(input.water_cost_per_cubic_meter),
                ..input
            },
        }
    }

    /// Current scenario; always within bounds.
    pub fn input(&self) -> FarmInput {
        self.input
    }

    /// Field size in hectares, for display next to the acreage.
    pub fn area_hectares(&self) -> f64 {
        acres_to_hectares(self.input.area_acres)
    }

    pub fn set_crop(
        &mut self,
        crop: CropType,
    ) {
        self.input.crop_type = crop;
    }

    /// Sets the field size and returns the value actually stored.
    pub fn set_area_acres(
        &mut self,
        acres: f64,
    ) -> f64 {
        self.input.area_acres = clamp_area_acres(acres);
        self.input.area_acres
    }

    /// Sets the field size from hectares; returns the stored acreage.
    pub fn set_area_hectares(
        &mut self,
        hectares: f64,
    ) -> f64 {
        self.set_area_acres(hectares_to_acres(hectares))
    }

    pub fn set_method(
        &mut self,
        method: IrrigationMethod,
    ) {
        self.input.irrigation_method = method;
    }

    pub fn set_soil(
        &mut self,
        soil: SoilType,
    ) {
        self.input.soil_type = soil;
    }

    /// Sets the water price and returns the value actually stored.
    pub fn set_water_cost(
        &mut self,
        price: f64,
    ) -> f64 {
        self.input.water_cost_per_cubic_meter = clamp_water_cost(price);
        self.input.water_cost_per_cubic_meter
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clamp_area_acres_limits_both_ends() {
        assert_eq!(clamp_area_acres(0.2), 1.0);
        assert_eq!(clamp_area_acres(5000.0), 2500.0);
        assert_eq!(clamp_area_acres(640.0), 640.0);
    }

    #[test]
    fn clamp_water_cost_limits_both_ends() {
        assert_eq!(clamp_water_cost(0.0), 0.1);
        assert_eq!(clamp_water_cost(12.5), 10.0);
        assert_eq!(clamp_water_cost(0.75), 0.75);
    }

    #[test]
    fn nan_falls_back_to_default() {
        assert_eq!(clamp_area_acres(f64::NAN), 25.0);
        assert_eq!(clamp_water_cost(f64::NAN), 0.5);
    }

    #[test]
    fn new_clamps_out_of_range_input() {
        let form = FarmForm::new(FarmInput {
            area_acres: -3.0,
            water_cost_per_cubic_meter: 50.0,
            ..FarmInput::default()
        });

        assert_eq!(form.input().area_acres, 1.0);
        assert_eq!(form.input().water_cost_per_cubic_meter, 10.0);
        assert!(form.input().is_within_bounds());
    }

    #[test]
    fn set_area_hectares_converts_to_acres() {
        let mut form = FarmForm::default();

        let stored = form.set_area_hectares(40.0);

        assert!((stored - 98.842).abs() < 1e-9);
        assert!((form.area_hectares() - 40.0).abs() < 1e-3);
    }

    #[test]
    fn set_area_hectares_clamps_after_conversion() {
        let mut form = FarmForm::default();

        assert_eq!(form.set_area_hectares(2000.0), 2500.0);
    }

    #[test]
    fn selectors_replace_enum_fields() {
        let mut form = FarmForm::default();

        form.set_crop(CropType::Rice);
        form.set_method(IrrigationMethod::Sprinkler);
        form.set_soil(SoilType::Clay);

        let input = form.input();
        assert_eq!(input.crop_type, CropType::Rice);
        assert_eq!(input.irrigation_method, IrrigationMethod::Sprinkler);
        assert_eq!(input.soil_type, SoilType::Clay);
    }
}
