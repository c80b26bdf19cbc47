//! The single-screen report: current usage, recommendation, trend and tips.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use water_core::calculations::units::acres_to_hectares;
use water_core::calculations::{compare_methods, evaluate_usage, recommend};
use water_core::tips::conservation_tips;
use water_core::trend::{DemoTrendGenerator, TrendPoint};
use water_core::{FarmInput, MethodComparison, OptimizationResult, WaterUsageResult};

use crate::utils::{format_currency, format_whole};

/// Width of the longest bar in the trend chart, in characters.
const CHART_WIDTH: usize = 40;

/// Everything computed for one render of the screen.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub input: FarmInput,
    pub area_hectares: f64,
    pub usage: WaterUsageResult,
    pub gallons_per_acre: f64,
    pub cost_per_acre: f64,
    pub optimization: OptimizationResult,
    pub savings_cost_per_acre: f64,
    pub methods: Vec<MethodComparison>,
    /// Demo data only, regenerated on every render.
    pub trend: Vec<TrendPoint>,
    pub tips: Vec<&'static str>,
}

impl Report {
    /// Runs usage, cost and optimization for `input`, then draws a fresh
    /// demo trend ending at `today`.
    pub fn build(
        input: &FarmInput,
        trend: &mut DemoTrendGenerator,
        today: NaiveDate,
    ) -> Self {
        let usage = evaluate_usage(input);
        let optimization = recommend(
            input.crop_type,
            input.area_acres,
            input.soil_type,
            input.irrigation_method,
            usage.volume_gallons,
            input.water_cost_per_cubic_meter,
        );

        Self {
            input: *input,
            area_hectares: acres_to_hectares(input.area_acres),
            usage,
            gallons_per_acre: usage.gallons_per_acre(input.area_acres),
            cost_per_acre: usage.cost_per_acre(input.area_acres),
            optimization,
            savings_cost_per_acre: optimization.savings_cost_per_acre(input.area_acres),
            methods: compare_methods(input.crop_type, input.area_acres, input.soil_type),
            trend: trend.generate(usage.volume_gallons, today),
            tips: conservation_tips(input.irrigation_method).to_vec(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn write_usage(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "== Current Water Usage Analysis ==")?;
        writeln!(
            f,
            "{} on {:.2} acres ({:.2} hectares), {} soil, {} irrigation",
            self.input.crop_type.label(),
            self.input.area_acres,
            self.area_hectares,
            self.input.soil_type,
            self.input.irrigation_method,
        )?;
        writeln!(
            f,
            "Annual Water Usage:           {} gallons",
            format_whole(self.usage.volume_gallons)
        )?;
        writeln!(
            f,
            "Annual Water Usage (Metric):  {} cubic meters",
            format_whole(self.usage.volume_cubic_meters)
        )?;
        writeln!(
            f,
            "Annual Water Cost:            {}",
            format_currency(self.usage.cost_dollars)
        )?;
        writeln!(
            f,
            "Water Usage per Acre:         {} gallons",
            format_whole(self.gallons_per_acre)
        )?;
        writeln!(
            f,
            "Cost per Acre:                {}",
            format_currency(self.cost_per_acre)
        )
    }

    fn write_recommendation(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "== Optimization Recommendations ==")?;
        let opt = &self.optimization;
        if opt.is_already_optimal() {
            return writeln!(
                f,
                "You're already using the most efficient irrigation method!"
            );
        }

        writeln!(
            f,
            "Recommended: Switch to {} irrigation",
            opt.best_method
        )?;
        writeln!(
            f,
            "Potential Water Savings:          {} gallons",
            format_whole(opt.savings_gallons)
        )?;
        writeln!(
            f,
            "Potential Water Savings (Metric): {} cubic meters",
            format_whole(opt.savings_cubic_meters)
        )?;
        writeln!(
            f,
            "Potential Cost Savings:           {}",
            format_currency(opt.savings_cost_dollars)
        )?;
        writeln!(
            f,
            "Savings per Acre:                 {}",
            format_currency(self.savings_cost_per_acre)
        )?;
        for comparison in &self.methods {
            writeln!(
                f,
                "  {:<10} {:>15} gallons",
                comparison.method.label(),
                format_whole(comparison.volume_gallons)
            )?;
        }
        Ok(())
    }

    fn write_trend(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "== Water Usage Trends ==")?;
        let max = self
            .trend
            .iter()
            .map(|p| p.volume_gallons)
            .fold(0.0_f64, f64::max);
        for point in &self.trend {
            writeln!(
                f,
                "{} |{:<width$}| {} gallons",
                point.month_end.format("%Y-%m"),
                "#".repeat(bar_length(point.volume_gallons, max)),
                format_whole(point.volume_gallons),
                width = CHART_WIDTH,
            )?;
        }
        Ok(())
    }

    fn write_tips(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "== Water Conservation Tips ==")?;
        for tip in &self.tips {
            writeln!(f, "• {tip}")?;
        }
        Ok(())
    }
}

/// Number of chart cells for `value` when `max` fills the whole width.
fn bar_length(
    value: f64,
    max: f64,
) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * CHART_WIDTH as f64).round().min(CHART_WIDTH as f64) as usize
}

impl fmt::Display for Report {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        self.write_usage(f)?;
        writeln!(f)?;
        self.write_recommendation(f)?;
        writeln!(f)?;
        self.write_trend(f)?;
        writeln!(f)?;
        self.write_tips(f)
    }
}
