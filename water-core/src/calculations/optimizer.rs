//! Irrigation method recommendation.
//!
//! Holding crop, area and soil fixed, the optimizer evaluates the demand of
//! every [`IrrigationMethod`] in declaration order and picks the smallest
//! volume. On an exact tie the method evaluated first wins.

use tracing::debug;

use crate::calculations::cost::compute_cost;
use crate::calculations::demand::compute_annual_water_gallons;
use crate::calculations::units::gallons_to_cubic_meters;
use crate::{
    CropType, FarmInput, IrrigationMethod, MethodComparison, OptimizationResult, SoilType,
};

/// Annual demand of every irrigation method for the same crop, area and soil.
pub fn compare_methods(
    crop: CropType,
    area_acres: f64,
    soil: SoilType,
) -> Vec<MethodComparison> {
    IrrigationMethod::all()
        .iter()
        .map(|&method| MethodComparison {
            method,
            volume_gallons: compute_annual_water_gallons(crop, area_acres, method, soil),
        })
        .collect()
}

fn lowest_demand(comparisons: &[MethodComparison]) -> MethodComparison {
    comparisons.iter().skip(1).fold(comparisons[0], |best, candidate| {
        if candidate.volume_gallons < best.volume_gallons {
            *candidate
        } else {
            best
        }
    })
}

/// Recommends the irrigation method with the lowest annual demand.
///
/// `current_volume_gallons` is the demand already computed for
/// `current_method`. Savings are reported as zero when the current method is
/// already the best one, and are never negative otherwise.
///
/// # Example
///
/// ```
/// use water_core::calculations::recommend;
/// use water_core::{CropType, IrrigationMethod, SoilType};
///
/// let result = recommend(
///     CropType::Corn,
///     25.0,
///     SoilType::Loamy,
///     IrrigationMethod::Flood,
///     30_000_000.0,
///     0.5,
/// );
///
/// assert_eq!(result.best_method, IrrigationMethod::Drip);
/// assert!(!result.is_already_optimal());
/// ```
pub fn recommend(
    crop: CropType,
    area_acres: f64,
    soil: SoilType,
    current_method: IrrigationMethod,
    current_volume_gallons: f64,
    water_cost_per_cubic_meter: f64,
) -> OptimizationResult {
    let best = lowest_demand(&compare_methods(crop, area_acres, soil));

    let savings_gallons = if best.method == current_method {
        0.0
    } else {
        (current_volume_gallons - best.volume_gallons).max(0.0)
    };

    debug!(
        current = %current_method,
        best = %best.method,
        savings_gallons,
        "compared irrigation methods"
    );

    OptimizationResult {
        current_method,
        best_method: best.method,
        best_volume_gallons: best.volume_gallons,
        current_volume_gallons,
        savings_gallons,
        savings_cubic_meters: gallons_to_cubic_meters(savings_gallons),
        savings_cost_dollars: compute_cost(savings_gallons, water_cost_per_cubic_meter),
    }
}

/// [`recommend`] for a whole scenario, computing the current demand itself.
pub fn recommend_for(input: &FarmInput) -> OptimizationResult {
    let current_volume_gallons = compute_annual_water_gallons(
        input.crop_type,
        input.area_acres,
        input.irrigation_method,
        input.soil_type,
    );

    recommend(
        input.crop_type,
        input.area_acres,
        input.soil_type,
        input.irrigation_method,
        current_volume_gallons,
        input.water_cost_per_cubic_meter,
    )
}
