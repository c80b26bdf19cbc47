//! CSV loader for batches of independent what-if scenarios.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). Header
//! names are case-sensitive; enum values are not.
//!
//! | Column                       | Type    | Notes                                         |
//! |------------------------------|---------|-----------------------------------------------|
//! | `crop_type`                  | string  | `corn`, `wheat`, `soybeans`, `rice`, `cotton` |
//! | `area_acres`                 | decimal | clamped to 1 – 2500                           |
//! | `irrigation_method`          | string  | `drip`, `sprinkler`, `flood`                  |
//! | `soil_type`                  | string  | `sandy`, `loamy`, `clay`                      |
//! | `water_cost_per_cubic_meter` | decimal | clamped to 0.1 – 10.0                         |
//!
//! ```csv
//! crop_type,area_acres,irrigation_method,soil_type,water_cost_per_cubic_meter
//! corn,25,flood,loamy,0.5
//! rice,100,sprinkler,sandy,1.0
//! ```
//!
//! Each row is evaluated on its own; rows are never combined.

use std::fmt;

use serde::Deserialize;
use water_core::calculations::{evaluate_usage, recommend};
use water_core::{
    CropType, FarmInput, InvalidInput, IrrigationMethod, OptimizationResult, SoilType,
    WaterUsageResult,
};

use crate::state::FarmForm;
use crate::utils::{format_currency, format_whole};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    crop_type: String,
    area_acres: f64,
    irrigation_method: String,
    soil_type: String,
    water_cost_per_cubic_meter: f64,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioLoadError {
    /// The file could not be read.
    #[error("cannot read scenario file: {0}")]
    Io(#[from] std::io::Error),

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A selector cell held a value outside its closed set. `row` is
    /// 1-based, not counting the header.
    #[error("row {row}: {source}")]
    InvalidInput {
        row: usize,
        #[source]
        source: InvalidInput,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<FarmInput, ScenarioLoadError> {
    let invalid = |source| ScenarioLoadError::InvalidInput {
        row: row_number,
        source,
    };

    let input = FarmInput {
        crop_type: row.crop_type.parse::<CropType>().map_err(invalid)?,
        area_acres: row.area_acres,
        irrigation_method: row
            .irrigation_method
            .parse::<IrrigationMethod>()
            .map_err(invalid)?,
        soil_type: row.soil_type.parse::<SoilType>().map_err(invalid)?,
        water_cost_per_cubic_meter: row.water_cost_per_cubic_meter,
    };

    Ok(FarmForm::new(input).input())
}

/// Parse CSV text and return the clamped scenarios in file order.
///
/// # Errors
///
/// * [`ScenarioLoadError::Parse`] – structurally invalid CSV or a
///   non-numeric area/price.
/// * [`ScenarioLoadError::InvalidInput`] – an unknown crop, method or soil.
pub fn load_from_str(input: &str) -> Result<Vec<FarmInput>, ScenarioLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &std::path::Path) -> Result<Vec<FarmInput>, ScenarioLoadError> {
    let contents = std::fs::read_to_string(path)?;
    let scenarios = load_from_str(&contents)?;
    tracing::info!(path = %path.display(), count = scenarios.len(), "loaded scenarios");
    Ok(scenarios)
}

// ---------------------------------------------------------------------------
// Per-row evaluation
// ---------------------------------------------------------------------------

/// One evaluated scenario, rendered as a single line.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ScenarioSummary {
    pub input: FarmInput,
    pub usage: WaterUsageResult,
    pub optimization: OptimizationResult,
}

impl ScenarioSummary {
    pub fn evaluate(input: &FarmInput) -> Self {
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
            usage,
            optimization,
        }
    }
}

impl fmt::Display for ScenarioSummary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{} {:.2} ac {} {}: {} gal, {}",
            self.input.crop_type,
            self.input.area_acres,
            self.input.soil_type,
            self.input.irrigation_method,
            format_whole(self.usage.volume_gallons),
            format_currency(self.usage.cost_dollars),
        )?;
        if self.optimization.is_already_optimal() {
            write!(f, " (already optimal)")
        } else {
            write!(
                f,
                " -> {} saves {} gal, {}",
                self.optimization.best_method,
                format_whole(self.optimization.savings_gallons),
                format_currency(self.optimization.savings_cost_dollars),
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const TWO_ROWS: &str = "\
crop_type,area_acres,irrigation_method,soil_type,water_cost_per_cubic_meter
corn,25,flood,loamy,0.5
Rice, 100 ,SPRINKLER,sandy,1.0
";

    #[test]
    fn load_two_rows_in_file_order() {
        let scenarios = load_from_str(TWO_ROWS).unwrap();

        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].crop_type, CropType::Corn);
        assert_eq!(scenarios[1].crop_type, CropType::Rice);
        assert_eq!(scenarios[1].irrigation_method, IrrigationMethod::Sprinkler);
        assert_eq!(scenarios[1].area_acres, 100.0);
    }

    #[test]
    fn columns_may_be_reordered() {
        let csv = "\
soil_type,crop_type,water_cost_per_cubic_meter,irrigation_method,area_acres
clay,cotton,2.0,drip,640
";
        let scenarios = load_from_str(csv).unwrap();

        assert_eq!(scenarios[0].soil_type, SoilType::Clay);
        assert_eq!(scenarios[0].area_acres, 640.0);
    }

    #[test]
    fn out_of_range_numbers_are_clamped() {
        let csv = "\
crop_type,area_acres,irrigation_method,soil_type,water_cost_per_cubic_meter
wheat,9000,flood,sandy,0.01
";
        let scenarios = load_from_str(csv).unwrap();

        assert_eq!(scenarios[0].area_acres, 2500.0);
        assert_eq!(scenarios[0].water_cost_per_cubic_meter, 0.1);
    }

    #[test]
    fn unknown_method_reports_row_number() {
        let csv = "\
crop_type,area_acres,irrigation_method,soil_type,water_cost_per_cubic_meter
corn,25,flood,loamy,0.5
corn,25,pivot,loamy,0.5
";
        let err = load_from_str(csv).unwrap_err();

        match err {
            ScenarioLoadError::InvalidInput { row, source } => {
                assert_eq!(row, 2);
                assert_eq!(source.value, "pivot");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_column_is_a_parse_error() {
        let csv = "crop_type,area_acres\ncorn,25\n";

        assert!(matches!(load_from_str(csv), Err(ScenarioLoadError::Parse(_))));
    }

    #[test]
    fn summary_line_for_flood_mentions_switch() {
        let scenarios = load_from_str(TWO_ROWS).unwrap();

        let line = ScenarioSummary::evaluate(&scenarios[0]).to_string();

        assert_eq!(
            line,
            "corn 25.00 ac loamy flood: 30,000,000 gal, $56,781.15 -> drip saves 13,333,333 gal, $25,236.07"
        );
    }

    #[test]
    fn summary_line_for_drip_is_already_optimal() {
        let input = FarmInput::default();

        let line = ScenarioSummary::evaluate(&input).to_string();

        assert!(line.ends_with("(already optimal)"));
    }
}
