// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Batch plan checking
//!
//! Runs the parser and comparator over many statements captured from two
//! engine versions and collects one outcome per statement.

pub mod config;
pub mod input;

pub use config::{CheckConfig, ErrorPolicy};
pub use input::{read_check_file, read_check_path, CheckCase};

use crate::compare::compare;
use crate::error::PlanResult;
use crate::explain::split_explain_text;
use crate::parser::parse_rows;
use crate::plan::{Plan, PlanVersion};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Result of checking one statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    Same,
    Changed { reason: String },
    /// One of the plans could not be parsed; only produced under
    /// [`ErrorPolicy::SkipAndLog`]
    Failed { error: String },
}

impl CheckOutcome {
    pub fn is_same(&self) -> bool {
        matches!(self, CheckOutcome::Same)
    }
}

/// Outcome of one case, in input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    pub index: usize,
    /// Database the statement was explained in; empty when unknown
    pub schema: String,
    pub sql: String,
    pub outcome: CheckOutcome,
}

/// Per-case outcomes and their totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    pub cases: Vec<CaseReport>,
    pub total: usize,
    pub same: usize,
    pub changed: usize,
    pub failed: usize,
}

impl CheckReport {
    pub fn new(cases: Vec<CaseReport>) -> Self {
        let count = |pred: fn(&CheckOutcome) -> bool| cases.iter().filter(|c| pred(&c.outcome)).count();
        let same = count(|o| matches!(o, CheckOutcome::Same));
        let changed = count(|o| matches!(o, CheckOutcome::Changed { .. }));
        let failed = count(|o| matches!(o, CheckOutcome::Failed { .. }));
        Self {
            total: cases.len(),
            cases,
            same,
            changed,
            failed,
        }
    }

    /// Whether any statement changed plan or failed to parse
    pub fn has_differences(&self) -> bool {
        self.changed > 0 || self.failed > 0
    }

    pub fn to_json(&self) -> PlanResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Parse both plans of `case` and compare them
pub fn check_case(case: &CheckCase, config: &CheckConfig) -> PlanResult<CheckOutcome> {
    let (base_version, target_version) = config.resolve_versions()?;
    run_case(case, base_version, target_version, config.ignore_projection)
}

fn run_case(
    case: &CheckCase,
    base_version: PlanVersion,
    target_version: PlanVersion,
    ignore_projection: bool,
) -> PlanResult<CheckOutcome> {
    let base = parse_plan(case, &case.base_plan, base_version)?;
    let target = parse_plan(case, &case.target_plan, target_version)?;

    let (reason, same) = compare(&base, &target, ignore_projection);
    if same {
        Ok(CheckOutcome::Same)
    } else {
        Ok(CheckOutcome::Changed { reason })
    }
}

fn parse_plan(case: &CheckCase, explain_text: &str, version: PlanVersion) -> PlanResult<Plan> {
    let rows = split_explain_text(explain_text)?;
    Ok(parse_rows(version, &case.sql, &rows)?
        .with_schema(case.schema.as_str())
        .with_plan_text(explain_text))
}

/// Check every case and collect the outcomes in input order.
///
/// Under [`ErrorPolicy::Strict`] the first case that fails to parse aborts
/// the run with its error; under [`ErrorPolicy::SkipAndLog`] it is logged
/// together with both raw plans and reported as [`CheckOutcome::Failed`].
pub fn check_cases(cases: &[CheckCase], config: &CheckConfig) -> PlanResult<CheckReport> {
    let (base_version, target_version) = config.resolve_versions()?;
    let run = |case: &CheckCase| {
        run_case(case, base_version, target_version, config.ignore_projection)
    };

    let results: Vec<PlanResult<CheckOutcome>> = if config.parallel {
        cases.par_iter().map(run).collect()
    } else {
        cases.iter().map(run).collect()
    };

    let mut reports = Vec::with_capacity(cases.len());
    for (index, (case, result)) in cases.iter().zip(results).enumerate() {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) if config.error_policy == ErrorPolicy::SkipAndLog => {
                log::warn!(
                    "Skipping case {}: {}\nSchema: {}\nSQL: {}\nBase plan:\n{}\nTarget plan:\n{}",
                    index,
                    err,
                    case.schema,
                    case.sql,
                    case.base_plan,
                    case.target_plan
                );
                CheckOutcome::Failed {
                    error: err.to_string(),
                }
            }
            Err(err) => return Err(err),
        };

        if let CheckOutcome::Changed { reason } = &outcome {
            log::debug!("Plan changed for {}: {}", case.sql, reason);
        }
        reports.push(CaseReport {
            index,
            schema: case.schema.clone(),
            sql: case.sql.clone(),
            outcome,
        });
    }

    let report = CheckReport::new(reports);
    log::info!(
        "Checked {} statements: {} same, {} changed, {} failed",
        report.total,
        report.same,
        report.changed,
        report.failed
    );
    Ok(report)
}
