// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command handlers for plancheck

use colored::Colorize;
use std::path::{Path, PathBuf};

use super::commands::{CheckArgs, OutputFormat};
use super::output::{PlanFormatter, ReportFormatter};
use plancheck::check::{check_cases, read_check_path};
use plancheck::{parse_text, CheckConfig, CheckReport, ErrorPolicy};

/// Handle the check command
///
/// Configuration is layered: defaults, then the JSON file given with
/// `--config`, then individual flags.
pub fn handle_check(args: CheckArgs) -> Result<CheckReport, Box<dyn std::error::Error>> {
    let config = build_config(&args)?;
    log::debug!("Check configuration: {:?}", config);

    let cases = read_check_path(&args.path)?;
    if cases.is_empty() {
        eprintln!(
            "{}",
            format!("No plan pairs found in {}", args.path.display()).yellow()
        );
    }

    let report = match check_cases(&cases, &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            return Err(e.into());
        }
    };

    println!("{}", ReportFormatter::format(&report, &cases, args.format));
    Ok(report)
}

fn build_config(args: &CheckArgs) -> Result<CheckConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => CheckConfig::from_json_file(path)?,
        None => CheckConfig::default(),
    };

    if let Some(version) = &args.base_version {
        config.base_version = version.clone();
    }
    if let Some(version) = &args.target_version {
        config.target_version = version.clone();
    }
    if args.strict {
        config.error_policy = ErrorPolicy::Strict;
    }
    if args.no_ignore_projection {
        config.ignore_projection = false;
    }
    if args.parallel {
        config.parallel = true;
    }
    Ok(config)
}

/// Handle the explain command
pub fn handle_explain(
    path: PathBuf,
    version: String,
    sql: String,
    schema: String,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let explain_text = read_explain_file(&path)?;

    match parse_text(&sql, &explain_text, &version) {
        Ok(plan) => {
            let plan = plan.with_schema(schema);
            println!("{}", PlanFormatter::format(&plan, format));
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            Err(e.into())
        }
    }
}

fn read_explain_file(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("Explain file not found at {:?}", path).into());
    }
    Ok(std::fs::read_to_string(path)?)
}
