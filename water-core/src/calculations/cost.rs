//! Water cost and the per-scenario usage summary.

use tracing::debug;

use crate::calculations::demand::compute_annual_water_gallons;
use crate::calculations::units::gallons_to_cubic_meters;
use crate::{FarmInput, WaterUsageResult};

/// Cost in dollars of `gallons` at the given price per cubic meter.
///
/// ```
/// use water_core::calculations::compute_cost;
///
/// let dollars = compute_cost(30_000_000.0, 0.5);
/// assert!((dollars - 56_781.15).abs() < 1e-6);
/// ```
pub fn compute_cost(
    gallons: f64,
    price_per_cubic_meter: f64,
) -> f64 {
    gallons_to_cubic_meters(gallons) * price_per_cubic_meter
}

/// Annual volume and cost for the scenario's current irrigation method.
pub fn evaluate_usage(input: &FarmInput) -> WaterUsageResult {
    let volume_gallons = compute_annual_water_gallons(
        input.crop_type,
        input.area_acres,
        input.irrigation_method,
        input.soil_type,
    );
    let result = WaterUsageResult {
        volume_gallons,
        volume_cubic_meters: gallons_to_cubic_meters(volume_gallons),
        cost_dollars: compute_cost(volume_gallons, input.water_cost_per_cubic_meter),
    };

    debug!(
        crop = %input.crop_type,
        method = %input.irrigation_method,
        soil = %input.soil_type,
        area_acres = input.area_acres,
        gallons = result.volume_gallons,
        cost = result.cost_dollars,
        "evaluated water usage"
    );

    result
}
