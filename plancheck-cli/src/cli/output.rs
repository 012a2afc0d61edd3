// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Report and plan formatting for CLI output

use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use plancheck::{CheckCase, CheckOutcome, CheckReport, Operator, OperatorDetail, Plan};

use super::commands::OutputFormat;

const SQL_PREVIEW_CHARS: usize = 60;
const SEPARATOR: &str =
    "==============================================================================";

/// Check report formatter for different output formats
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format a check report; `cases` supplies the raw plans shown for
    /// changed statements
    pub fn format(report: &CheckReport, cases: &[CheckCase], format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => Self::format_table(report, cases),
            OutputFormat::Json => Self::format_json(report),
        }
    }

    fn format_table(report: &CheckReport, cases: &[CheckCase]) -> String {
        let mut output = String::new();

        for case_report in &report.cases {
            let CheckOutcome::Changed { reason } = &case_report.outcome else {
                continue;
            };
            let Some(case) = cases.get(case_report.index) else {
                continue;
            };
            output.push_str(&format!("{}\n", SEPARATOR));
            if !case.schema.is_empty() {
                output.push_str(&format!("{} {}\n", "Schema:".bold(), case.schema));
            }
            output.push_str(&format!("{} {}\n", "SQL:".bold(), case.sql));
            output.push_str(&format!("{}\n{}\n", "Plan1:".bold(), case.base_plan));
            output.push_str(&format!("{}\n{}\n", "Plan2:".bold(), case.target_plan));
            output.push_str(&format!("{} {}\n\n", "Reason:".bold(), reason.yellow()));
        }

        output.push_str(&format!("{}\n", "Plan Check Results".bold().green()));
        output.push_str(&format!(
            "Statements: {}, same: {}, changed: {}, failed: {}\n\n",
            report.total,
            report.same.to_string().green(),
            report.changed.to_string().yellow(),
            report.failed.to_string().red()
        ));

        if report.cases.is_empty() {
            output.push_str(&format!("{}\n", "No statements checked".yellow()));
            return output;
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(
            ["#", "SQL", "Outcome", "Detail"]
                .iter()
                .map(|col| Cell::new(col).fg(Color::Green))
                .collect::<Vec<_>>(),
        );

        for case_report in &report.cases {
            let (outcome, color, detail) = match &case_report.outcome {
                CheckOutcome::Same => ("same", Color::Green, ""),
                CheckOutcome::Changed { reason } => ("changed", Color::Yellow, reason.as_str()),
                CheckOutcome::Failed { error } => ("failed", Color::Red, error.as_str()),
            };
            table.add_row(vec![
                Cell::new(case_report.index + 1),
                Cell::new(sql_preview(&case_report.sql)),
                Cell::new(outcome).fg(color),
                Cell::new(detail),
            ]);
        }

        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    fn format_json(report: &CheckReport) -> String {
        report.to_json().unwrap_or_else(|e| {
            format!(
                "{{\"status\": \"error\", \"error\": {}}}",
                serde_json::Value::String(e.to_string())
            )
        })
    }
}

/// Parsed plan formatter
pub struct PlanFormatter;

impl PlanFormatter {
    pub fn format(plan: &Plan, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => Self::format_table(plan),
            OutputFormat::Json => serde_json::to_string_pretty(plan).unwrap_or_else(|e| {
                format!(
                    "{{\"status\": \"error\", \"error\": {}}}",
                    serde_json::Value::String(e.to_string())
                )
            }),
        }
    }

    fn format_table(plan: &Plan) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} ({} layout, {} operators)\n",
            "Parsed Plan".bold().green(),
            plan.version(),
            plan.root().size()
        ));
        if !plan.schema().is_empty() {
            output.push_str(&format!("Schema: {}\n", plan.schema()));
        }
        if !plan.sql().is_empty() {
            output.push_str(&format!("SQL: {}\n", plan.sql()));
        }
        output.push('\n');

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(
            ["Operator", "Kind", "Task", "Est. Rows", "Access"]
                .iter()
                .map(|col| Cell::new(col).fg(Color::Green))
                .collect::<Vec<_>>(),
        );
        Self::add_operator_rows(&mut table, plan.root(), 0);

        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    fn add_operator_rows(table: &mut Table, op: &Operator, depth: usize) {
        let access = match op.detail() {
            OperatorDetail::Join { join_type } => format!("{:?}", join_type),
            OperatorDetail::TableScan { table } | OperatorDetail::PointGet { table } => {
                format!("table:{}", table)
            }
            OperatorDetail::IndexScan {
                table,
                index,
                columns,
            } if !columns.is_empty() => {
                format!("table:{}, index:{}({})", table, index, columns.join(", "))
            }
            OperatorDetail::IndexScan { table, index, .. } => {
                format!("table:{}, index:{}", table, index)
            }
            OperatorDetail::None => String::new(),
        };

        table.add_row(vec![
            Cell::new(format!("{}{}", "  ".repeat(depth), op.id())),
            Cell::new(op.kind()),
            Cell::new(op.task()),
            Cell::new(format!("{:.2}", op.est_rows())),
            Cell::new(access),
        ]);

        for child in op.children() {
            Self::add_operator_rows(table, child, depth + 1);
        }
    }
}

fn sql_preview(sql: &str) -> String {
    if sql.chars().count() <= SQL_PREVIEW_CHARS {
        sql.to_string()
    } else {
        let preview: String = sql.chars().take(SQL_PREVIEW_CHARS).collect();
        format!("{}...", preview)
    }
}
