//! Load, profile and export through the library surface of the CLI.

use std::io::Write;

use fin_cli::config::load_options;
use fin_cli::output::export_csv;
use fin_ingest::load_table;
use fin_profile::{DatasetProfiler, Orientation};
use tempfile::Builder;

fn write_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn profile_then_export_normalized_csv() {
    let input = write_file(
        ".csv",
        "Metric,2023,2024\nRevenue,\"$26,914\",\"$30,100\"\nNet Income,\"($1,500)\",125.9%\n",
    );
    let table = load_table(input.path()).unwrap();
    let (profile, mut normalized) = DatasetProfiler::new().profile(&table.frame, &table.file_name);

    assert_eq!(profile.orientation, Orientation::Wide);
    assert_eq!(profile.metrics, ["Revenue", "Net Income"]);

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("normalized.csv");
    export_csv(&mut normalized, Some(output.as_path())).unwrap();

    let written = load_table(&output).unwrap();
    let y2023 = written.frame.column("2023").unwrap().str().unwrap();
    assert_eq!(y2023.get(0).map(|v| v.parse::<f64>().unwrap()), Some(26914.0));
    assert_eq!(y2023.get(1).map(|v| v.parse::<f64>().unwrap()), Some(-1500.0));
    let metric = written.frame.column("Metric").unwrap().str().unwrap();
    assert_eq!(metric.get(1), Some("Net Income"));
}

#[test]
fn config_file_overrides_orientation() {
    let config = write_file(".toml", "[profiler]\norientation = \"long\"\nsample_rows = 1\n");
    let options = load_options(Some(config.path())).unwrap();

    let input = write_file(".csv", "Year,Revenue\n2023,$10\n2024,$12\n");
    let table = load_table(input.path()).unwrap();
    let (profile, _) = DatasetProfiler::with_options(options).profile(&table.frame, &table.file_name);

    assert_eq!(profile.orientation, Orientation::Long);
    assert_eq!(profile.periods, ["2023", "2024"]);
    assert_eq!(profile.metrics, ["Revenue"]);
    assert_eq!(profile.sample_rows.len(), 1);
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_options(Some(dir.path().join("absent.toml").as_path()));
    assert!(result.is_err());
}

#[test]
fn no_config_means_defaults() {
    let options = load_options(None).unwrap();
    assert_eq!(options.sample_rows, 3);
}
