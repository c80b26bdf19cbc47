//! Glue between the command line, the configuration file and the report.

use std::io::{BufRead, Write};

use anyhow::Context;
use chrono::{Local, NaiveDate};
use tracing::{debug, info};
use water_core::FarmInput;
use water_core::calculations::units::hectares_to_acres;
use water_core::trend::DemoTrendGenerator;

use crate::cli::{Cli, OutputFormat};
use crate::config::{self, FarmConfig};
use crate::report::Report;
use crate::scenarios::{self, ScenarioSummary};
use crate::session::Session;
use crate::state::FarmForm;

/// Merges flags over the config file over the defaults, then clamps.
pub fn resolve_form(
    cli: &Cli,
    config: &FarmConfig,
) -> FarmForm {
    let base = config.apply_to(FarmInput::default());
    let area_acres = cli
        .area
        .or_else(|| cli.hectares.map(hectares_to_acres))
        .unwrap_or(base.area_acres);

    FarmForm::new(FarmInput {
        crop_type: cli.crop.unwrap_or(base.crop_type),
        area_acres,
        irrigation_method: cli.method.unwrap_or(base.irrigation_method),
        soil_type: cli.soil.unwrap_or(base.soil_type),
        water_cost_per_cubic_meter: cli.price.unwrap_or(base.water_cost_per_cubic_meter),
    })
}

pub fn trend_generator(seed: Option<u64>) -> DemoTrendGenerator {
    match seed {
        Some(seed) => DemoTrendGenerator::from_seed(seed),
        None => DemoTrendGenerator::from_entropy(),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<FarmConfig> {
    match &cli.config {
        Some(path) => config::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(FarmConfig::default()),
    }
}

/// Runs one invocation of the tool against the given stdin/stdout.
pub fn run(
    cli: &Cli,
    input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<()> {
    run_on(cli, Local::now().date_naive(), input, &mut out)
}

/// [`run`] with a fixed "today" for the trend chart.
pub fn run_on(
    cli: &Cli,
    today: NaiveDate,
    input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let seed = cli.seed.or(config.seed);
    let mut trend = trend_generator(seed);

    if let Some(path) = &cli.scenarios {
        let summaries: Vec<ScenarioSummary> = scenarios::load_from_file(path)
            .with_context(|| format!("loading scenarios {}", path.display()))?
            .iter()
            .map(ScenarioSummary::evaluate)
            .collect();
        match cli.format {
            OutputFormat::Text => {
                for summary in &summaries {
                    writeln!(out, "{summary}")?;
                }
            }
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&summaries)?)?,
        }
        return Ok(());
    }

    let form = resolve_form(cli, &config);
    debug!(input = ?form.input(), ?seed, "resolved scenario");

    if cli.interactive {
        let mut session = Session::new(form, trend, today, cli.format);
        session.run(input, out)?;
        return Ok(());
    }

    let report = Report::build(&form.input(), &mut trend, today);
    match cli.format {
        OutputFormat::Text => write!(out, "{report}")?,
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }
    info!(
        crop = %form.input().crop_type,
        method = %form.input().irrigation_method,
        "report written"
    );
    Ok(())
}
