use anyhow::{Context, Result};
use tracing::info_span;

use fin_cli::config::load_options;
use fin_cli::output::export_csv;
use fin_ingest::{LoadedTable, load_table};
use fin_profile::DatasetProfiler;

use crate::cli::{AuditArgs, NormalizeArgs, ProfileArgs};
use crate::summary::{print_audit, print_profile};

fn load(path: &std::path::Path) -> Result<LoadedTable> {
    load_table(path).with_context(|| format!("load {}", path.display()))
}

pub fn run_profile(args: &ProfileArgs) -> Result<()> {
    let options = load_options(args.config.as_deref())?;
    let table = load(&args.file)?;
    let span = info_span!("profile_command", file = %table.file_name);
    let _guard = span.enter();

    let profiler = DatasetProfiler::with_options(options);
    let (profile, _) = profiler.profile(&table.frame, &table.file_name);

    if args.json {
        let json = serde_json::to_string_pretty(&profile).context("serialize profile")?;
        println!("{json}");
    } else {
        print_profile(&profile);
    }
    Ok(())
}

pub fn run_audit(args: &AuditArgs) -> Result<()> {
    let table = load(&args.file)?;
    let audit = DatasetProfiler::new().audit(&table.frame);

    if args.json {
        let json = serde_json::to_string_pretty(&audit).context("serialize audit")?;
        println!("{json}");
    } else {
        print_audit(&table.file_name, &audit);
    }
    Ok(())
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let options = load_options(args.config.as_deref())?;
    let table = load(&args.file)?;
    let profiler = DatasetProfiler::with_options(options);
    let (_, mut normalized) = profiler.profile(&table.frame, &table.file_name);
    export_csv(&mut normalized, args.output.as_deref())
}
