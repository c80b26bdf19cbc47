use serde::{Deserialize, Serialize};

use super::IrrigationMethod;

/// Outcome of comparing the current irrigation method against all others.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub current_method: IrrigationMethod,
    pub best_method: IrrigationMethod,
    pub best_volume_gallons: f64,
    pub current_volume_gallons: f64,
    /// Zero when the current method is already the best one.
    pub savings_gallons: f64,
    pub savings_cubic_meters: f64,
    pub savings_cost_dollars: f64,
}

impl OptimizationResult {
    /// True when switching methods would not save any water.
    pub fn is_already_optimal(&self) -> bool {
        self.current_method == self.best_method
    }

    pub fn savings_cost_per_acre(
        &self,
        area_acres: f64,
    ) -> f64 {
        self.savings_cost_dollars / area_acres
    }
}

/// Annual demand of a single irrigation method, all other inputs held fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodComparison {
    pub method: IrrigationMethod,
    pub volume_gallons: f64,
}
