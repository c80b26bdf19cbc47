use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use water_core::{CropType, IrrigationMethod, SoilType};

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Farm water usage optimizer.
///
/// Estimates annual irrigation water use and cost for a crop, field and soil,
/// and recommends the irrigation method that uses the least water. Flags
/// override values from `--config`, which override the built-in defaults.
#[derive(Debug, Parser)]
#[command(name = "water-optimizer", version)]
pub struct Cli {
    /// Crop grown on the field.
    #[arg(long)]
    pub crop: Option<CropType>,

    /// Field size in acres (clamped to 1 - 2500).
    #[arg(long, conflicts_with = "hectares")]
    pub area: Option<f64>,

    /// Field size in hectares, converted to acres.
    #[arg(long)]
    pub hectares: Option<f64>,

    /// Irrigation method currently in use.
    #[arg(long)]
    pub method: Option<IrrigationMethod>,

    /// Soil texture.
    #[arg(long)]
    pub soil: Option<SoilType>,

    /// Water price in dollars per cubic meter (clamped to 0.1 - 10.0).
    #[arg(long)]
    pub price: Option<f64>,

    /// TOML file with default scenario values.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Seed for the demo trend chart; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Read what-if commands from stdin and re-render after each one.
    #[arg(long, short, conflicts_with = "scenarios")]
    pub interactive: bool,

    /// Evaluate every row of a scenario CSV file, one line each.
    #[arg(long)]
    pub scenarios: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Also append log records to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_text_at_warn() {
        let cli = Cli::try_parse_from(["water-optimizer"]).unwrap();

        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.interactive);
    }

    #[test]
    fn parses_selectors() {
        let cli = Cli::try_parse_from([
            "water-optimizer",
            "--crop",
            "rice",
            "--method",
            "sprinkler",
            "--soil",
            "sandy",
            "--area",
            "100",
        ])
        .unwrap();

        assert_eq!(cli.crop, Some(CropType::Rice));
        assert_eq!(cli.method, Some(IrrigationMethod::Sprinkler));
        assert_eq!(cli.soil, Some(SoilType::Sandy));
        assert_eq!(cli.area, Some(100.0));
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn rejects_unknown_crop() {
        let result = Cli::try_parse_from(["water-optimizer", "--crop", "barley"]);

        assert!(result.is_err());
    }

    #[test]
    fn area_conflicts_with_hectares() {
        let result =
            Cli::try_parse_from(["water-optimizer", "--area", "10", "--hectares", "4"]);

        assert!(result.is_err());
    }
}
