use serde::{Deserialize, Serialize};

/// Annual water volume and what it costs.
///
/// Built by [`evaluate_usage`](crate::calculations::evaluate_usage); the
/// metric volume and the cost are always derived from `volume_gallons`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterUsageResult {
    pub volume_gallons: f64,
    pub volume_cubic_meters: f64,
    pub cost_dollars: f64,
}

impl WaterUsageResult {
    /// Annual gallons per acre of the given field size.
    pub fn gallons_per_acre(
        &self,
        area_acres: f64,
    ) -> f64 {
        self.volume_gallons / area_acres
    }

    /// Annual cost per acre of the given field size.
    pub fn cost_per_acre(
        &self,
        area_acres: f64,
    ) -> f64 {
        self.cost_dollars / area_acres
    }
}
