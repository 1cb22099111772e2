//! Rule dispatch: runs rules against a [`DatasetStore`], writes exports, and
//! records the outcome of each action.

use std::path::Path;

use drill_ingest::{any_to_string, column_text};
use drill_model::{
    ActionOutcome, ActionReport, CheckError, DatasetKind, HoleId, Result, RuleKind, RuleSummary,
    RunReport, Severity, is_pass_status,
};
use drill_report::write_rule_csv;
use drill_validate::{
    check_interval_sources, check_rock_types, merge_samples_and_standards, standards_ratio,
    summarize, validate_alteration, validate_geology,
};
use polars::prelude::DataFrame;
use tracing::{info_span, trace, warn};

use crate::logging::redact_value;
use crate::store::DatasetStore;

/// How a rule whose inputs were not supplied is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInputs {
    /// Report `MissingInput` (a rule the user asked for by name).
    Fail,
    /// Record the rule as skipped (part of `all`).
    Skip,
}

/// One executed action: its report, plus the result table when it produced one.
#[derive(Debug)]
pub struct RuleRun {
    pub report: ActionReport,
    pub table: Option<DataFrame>,
}

/// Datasets a rule cannot run without.
pub fn required_inputs(rule: RuleKind) -> &'static [DatasetKind] {
    match rule {
        RuleKind::Geology => &[DatasetKind::Geology],
        RuleKind::SampleStandards | RuleKind::StandardsRatio => {
            &[DatasetKind::Sample, DatasetKind::Standards]
        }
        RuleKind::Alteration => &[DatasetKind::Alteration],
        RuleKind::Intervals => &[DatasetKind::Sample],
        RuleKind::RockType => &[DatasetKind::Geology, DatasetKind::Major],
    }
}

/// Runs one rule; failures are captured in the report, never propagated.
pub fn run_rule(
    store: &DatasetStore,
    rule: RuleKind,
    hole: &HoleId,
    output_dir: Option<&Path>,
    missing: MissingInputs,
) -> RuleRun {
    let span = info_span!("rule", rule = %rule, hole = %hole);
    let _guard = span.enter();

    let mut report = ActionReport {
        rule,
        outcome: ActionOutcome::Skipped {
            reason: String::new(),
        },
        notes: Vec::new(),
        output: None,
    };

    if let Some(kind) = required_inputs(rule)
        .iter()
        .copied()
        .find(|kind| !store.is_supplied(*kind))
    {
        let error = CheckError::MissingInput { dataset: kind };
        report.outcome = match missing {
            MissingInputs::Fail => ActionOutcome::failed(&error),
            MissingInputs::Skip => ActionOutcome::Skipped {
                reason: error.to_string(),
            },
        };
        return RuleRun {
            report,
            table: None,
        };
    }

    let table = match execute(store, rule, hole, &mut report) {
        Ok(Some(table)) => table,
        Ok(None) => {
            return RuleRun {
                report,
                table: None,
            };
        }
        Err(error) => {
            if error.is_warning() {
                warn!(error = %error, "rule produced no rows");
            } else {
                warn!(error = %error, "rule failed");
            }
            report.outcome = ActionOutcome::failed(&error);
            return RuleRun {
                report,
                table: None,
            };
        }
    };

    let summary = match rule {
        RuleKind::StandardsRatio => RuleSummary {
            rows: table.height(),
            ..RuleSummary::default()
        },
        _ => summarize(rule, &table),
    };
    if tracing::enabled!(tracing::Level::TRACE) {
        trace_flagged_rows(rule, &table);
    }
    report.outcome = ActionOutcome::Completed { summary };
    if let Some(dir) = output_dir {
        match write_rule_csv(dir, rule, hole, &table) {
            Ok(path) => report.output = Some(path),
            Err(error) => {
                warn!(error = %error, "export failed");
                report.outcome = ActionOutcome::Failed {
                    severity: Severity::Error,
                    message: error.to_string(),
                    dataset: None,
                };
            }
        }
    }
    RuleRun {
        report,
        table: Some(table),
    }
}

fn execute(
    store: &DatasetStore,
    rule: RuleKind,
    hole: &HoleId,
    report: &mut ActionReport,
) -> Result<Option<DataFrame>> {
    let table = match rule {
        RuleKind::Geology => validate_geology(store.get(DatasetKind::Geology)?, hole)?,
        RuleKind::SampleStandards => merge_samples_and_standards(
            store.get(DatasetKind::Sample)?,
            store.get(DatasetKind::Standards)?,
            hole,
        )?,
        RuleKind::Alteration => validate_alteration(store.get(DatasetKind::Alteration)?, hole)?,
        RuleKind::RockType => check_rock_types(
            store.get(DatasetKind::Geology)?,
            store.get(DatasetKind::Major)?,
            hole,
        )?,
        RuleKind::StandardsRatio => standards_ratio(
            store.get(DatasetKind::Sample)?,
            store.get(DatasetKind::Standards)?,
            hole,
        )?
        .to_frame()
        .map_err(|error| CheckError::Validation {
            rule,
            message: error.to_string(),
        })?,
        RuleKind::Intervals => return run_intervals(store, hole, report),
    };
    Ok(Some(table))
}

/// Checks every supplied secondary source; sources that fail become notes
/// as long as at least one source produced rows.
fn run_intervals(
    store: &DatasetStore,
    hole: &HoleId,
    report: &mut ActionReport,
) -> Result<Option<DataFrame>> {
    let samples = store.get(DatasetKind::Sample)?;
    let mut failures = Vec::new();
    let mut sources = Vec::new();
    for kind in DatasetKind::INTERVAL_SOURCES {
        if !store.is_supplied(kind) {
            continue;
        }
        match store.get(kind) {
            Ok(frame) => sources.push((kind, frame)),
            Err(error) => failures.push(error),
        }
    }
    if sources.is_empty() && failures.is_empty() {
        report.outcome = ActionOutcome::Skipped {
            reason: "no secondary interval datasets supplied".to_string(),
        };
        return Ok(None);
    }

    let batch = check_interval_sources(samples, &sources, hole);
    failures.extend(batch.failures);
    match batch.frame {
        Some(frame) => {
            report.notes = failures.iter().map(ToString::to_string).collect();
            Ok(Some(frame))
        }
        None => {
            let mut failures = failures.into_iter();
            let first = failures.next().unwrap_or(CheckError::EmptyResult {
                dataset: DatasetKind::Sample,
                hole: hole.clone(),
            });
            report.notes = failures.as_slice().iter().map(ToString::to_string).collect();
            Err(first)
        }
    }
}

/// Traces each flagged row; cell values are redacted unless `--log-data` is set.
fn trace_flagged_rows(rule: RuleKind, table: &DataFrame) {
    let Some(column) = rule.status_column() else {
        return;
    };
    let Ok(statuses) = column_text(table, column) else {
        return;
    };
    for (idx, status) in statuses.iter().enumerate() {
        let Some(status) = status.as_deref().filter(|status| !is_pass_status(status)) else {
            continue;
        };
        let values = table
            .get_columns()
            .iter()
            .map(|col| col.get(idx).map(any_to_string).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(", ");
        trace!(row = idx, status, values = redact_value(&values), "flagged row");
    }
}

/// Runs `rules` in order and collects every action into a run report.
pub fn run_rules(
    store: &DatasetStore,
    rules: &[RuleKind],
    hole: &HoleId,
    output_dir: Option<&Path>,
    missing: MissingInputs,
) -> (RunReport, Vec<RuleRun>) {
    let mut report = RunReport::new(hole.clone());
    let mut runs = Vec::with_capacity(rules.len());
    for rule in rules {
        let run = run_rule(store, *rule, hole, output_dir, missing);
        report.push(run.report.clone());
        runs.push(run);
    }
    (report, runs)
}
