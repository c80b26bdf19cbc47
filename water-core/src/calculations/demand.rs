//! Annual irrigation water demand.
//!
//! Demand is the crop's base requirement scaled by field size and soil
//! retention, then divided by the delivery efficiency of the irrigation
//! method:
//!
//! ```text
//! gallons = base_water_per_acre(crop) * area_acres * soil_factor(soil)
//!           / irrigation_efficiency(method)
//! ```
//!
//! | Crop     | Gallons / acre / year |
//! |----------|-----------------------|
//! | corn     | 600,000               |
//! | wheat    | 480,000               |
//! | soybeans | 450,000               |
//! | rice     | 800,000               |
//! | cotton   | 640,000               |
//!
//! | Soil  | Factor | | Method    | Efficiency |
//! |-------|--------|-|-----------|------------|
//! | sandy | 0.85   | | drip      | 0.90       |
//! | loamy | 1.00   | | sprinkler | 0.75       |
//! | clay  | 1.15   | | flood     | 0.50       |
//!
//! # Example
//!
//! ```
//! use water_core::calculations::compute_annual_water_gallons;
//! use water_core::{CropType, IrrigationMethod, SoilType};
//!
//! let gallons = compute_annual_water_gallons(
//!     CropType::Corn,
//!     25.0,
//!     IrrigationMethod::Flood,
//!     SoilType::Loamy,
//! );
//!
//! assert_eq!(gallons, 30_000_000.0);
//! ```

use crate::{CropType, IrrigationMethod, SoilType};

/// Base annual water requirement for one acre of the crop, in gallons.
pub fn base_water_per_acre(crop: CropType) -> f64 {
    match crop {
        CropType::Corn => 600_000.0,
        CropType::Wheat => 480_000.0,
        CropType::Soybeans => 450_000.0,
        CropType::Rice => 800_000.0,
        CropType::Cotton => 640_000.0,
    }
}

/// Multiplier for how well the soil holds water.
pub fn soil_factor(soil: SoilType) -> f64 {
    match soil {
        SoilType::Sandy => 0.85,
        SoilType::Loamy => 1.0,
        SoilType::Clay => 1.15,
    }
}

/// Fraction of applied water that actually reaches the crop.
pub fn irrigation_efficiency(method: IrrigationMethod) -> f64 {
    match method {
        IrrigationMethod::Drip => 0.90,
        IrrigationMethod::Sprinkler => 0.75,
        IrrigationMethod::Flood => 0.50,
    }
}

/// Annual water volume, in gallons, needed to irrigate the field.
///
/// Linear in `area_acres`; an area of zero needs no water. Negative areas
/// are not meaningful and are expected to be rejected by the caller.
pub fn compute_annual_water_gallons(
    crop: CropType,
    area_acres: f64,
    method: IrrigationMethod,
    soil: SoilType,
) -> f64 {
    base_water_per_acre(crop) * area_acres * soil_factor(soil) / irrigation_efficiency(method)
}
