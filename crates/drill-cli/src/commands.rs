use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use drill_cli::config::{RunFile, RunSettings};
use drill_cli::pipeline::{MissingInputs, run_rules};
use drill_cli::store::DatasetStore;
use drill_model::{RuleKind, RunReport};
use drill_report::{SUMMARY_FILE_NAME, write_json_summary};

use crate::cli::RunArgs;
use crate::render::{print_lookup_tables, print_result_table, print_run_summary};

/// Runs one rule by name; its inputs must have been supplied.
pub fn run_rule_command(rule: RuleKind, args: &RunArgs) -> Result<RunReport> {
    run_with(&[rule], args, MissingInputs::Fail)
}

/// Runs every rule whose inputs were supplied.
pub fn run_all(args: &RunArgs) -> Result<RunReport> {
    run_with(&RuleKind::ALL, args, MissingInputs::Skip)
}

pub fn run_tables() {
    print_lookup_tables();
}

fn run_with(rules: &[RuleKind], args: &RunArgs, missing: MissingInputs) -> Result<RunReport> {
    let settings = resolve_settings(args)?;
    let store = DatasetStore::load(&settings.datasets);
    if let Some(dir) = &settings.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output directory {}", dir.display()))?;
    }

    let (report, runs) = run_rules(
        &store,
        rules,
        &settings.hole,
        settings.output_dir.as_deref(),
        missing,
    );
    for run in &runs {
        if let Some(table) = &run.table {
            print_result_table(run.report.rule, table);
        }
    }
    print_run_summary(&report);

    if settings.json_summary {
        let path = summary_path(settings.output_dir.as_deref());
        write_json_summary(&path, &report)
            .with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "wrote run summary");
    }
    Ok(report)
}

fn resolve_settings(args: &RunArgs) -> Result<RunSettings> {
    let file = match &args.config {
        Some(path) => Some(RunFile::load(path).context("load run file")?),
        None => None,
    };
    Ok(RunSettings::resolve(file, args.overrides())?)
}

fn summary_path(output_dir: Option<&Path>) -> PathBuf {
    output_dir.unwrap_or(Path::new(".")).join(SUMMARY_FILE_NAME)
}
