use serde::{Deserialize, Serialize};

use super::{CropType, IrrigationMethod, SoilType};

/// One what-if scenario as entered by the farm operator.
///
/// Numeric bounds are enforced by the input layer (by clamping), not here;
/// the calculations accept any finite value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FarmInput {
    pub crop_type: CropType,
    pub area_acres: f64,
    pub irrigation_method: IrrigationMethod,
    pub soil_type: SoilType,
    /// Price of water in dollars per cubic meter.
    pub water_cost_per_cubic_meter: f64,
}

impl FarmInput {
    pub const MIN_AREA_ACRES: f64 = 1.0;
    pub const MAX_AREA_ACRES: f64 = 2500.0;
    pub const DEFAULT_AREA_ACRES: f64 = 25.0;

    pub const MIN_WATER_COST: f64 = 0.1;
    pub const MAX_WATER_COST: f64 = 10.0;
    pub const DEFAULT_WATER_COST: f64 = 0.5;

    /// Returns true when both numeric fields sit inside their documented bounds.
    pub fn is_within_bounds(&self) -> bool {
        (Self::MIN_AREA_ACRES..=Self::MAX_AREA_ACRES).contains(&self.area_acres)
            && (Self::MIN_WATER_COST..=Self::MAX_WATER_COST)
                .contains(&self.water_cost_per_cubic_meter)
    }
}

impl Default for FarmInput {
    fn default() -> Self {
        Self {
            crop_type: CropType::default(),
            area_acres: Self::DEFAULT_AREA_ACRES,
            irrigation_method: IrrigationMethod::default(),
            soil_type: SoilType::default(),
            water_cost_per_cubic_meter: Self::DEFAULT_WATER_COST,
        }
    }
}
