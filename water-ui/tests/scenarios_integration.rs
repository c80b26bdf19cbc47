//! Integration tests that exercise the scenario loader and the CLI batch
//! mode against an on-disk fixture file.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Parser;
use water_core::{CropType, IrrigationMethod, SoilType};
use water_ui::{Cli, app, scenarios};

/// Path to the sample CSV shipped with the test fixtures.
fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_scenarios.csv")
}

#[test]
fn test_load_fixture_file_succeeds() {
    let inputs = scenarios::load_from_file(&fixture_path())
        .expect("fixture file should load without error");

    assert_eq!(inputs.len(), 3);
}

#[test]
fn test_load_fixture_third_row_rice() {
    let inputs = scenarios::load_from_file(&fixture_path()).unwrap();
    let rice = &inputs[2];

    assert_eq!(rice.crop_type, CropType::Rice);
    assert_eq!(rice.area_acres, 100.0);
    assert_eq!(rice.irrigation_method, IrrigationMethod::Sprinkler);
    assert_eq!(rice.soil_type, SoilType::Sandy);
    assert_eq!(rice.water_cost_per_cubic_meter, 1.0);
}

#[test]
fn test_load_nonexistent_file_returns_err() {
    let result = scenarios::load_from_file(Path::new("/this/path/does/not/exist.csv"));

    assert!(matches!(result, Err(scenarios::ScenarioLoadError::Io(_))));
}

#[test]
fn test_batch_mode_prints_one_line_per_row() {
    let fixture = fixture_path();
    let cli = Cli::try_parse_from([
        "water-optimizer",
        "--scenarios",
        fixture.to_str().unwrap(),
    ])
    .unwrap();
    let mut out = Vec::new();

    app::run_on(
        &cli,
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        std::io::empty(),
        &mut out,
    )
    .unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("-> drip saves 13,333,333 gal"));
    assert!(lines[1].ends_with("(already optimal)"));
    assert!(lines[2].contains("-> drip saves 15,111,111 gal, $57,201.75"));
}

#[test]
fn test_batch_mode_json_is_an_array() {
    let fixture = fixture_path();
    let cli = Cli::try_parse_from([
        "water-optimizer",
        "--format",
        "json",
        "--scenarios",
        fixture.to_str().unwrap(),
    ])
    .unwrap();
    let mut out = Vec::new();

    app::run(&cli, std::io::empty(), &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(value.as_array().map(Vec::len), Some(3));
    assert_eq!(value[2]["optimization"]["best_method"], "drip");
}
