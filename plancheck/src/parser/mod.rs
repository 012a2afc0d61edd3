// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Version-specific explain parsers
//!
//! Each engine release line prints explain results in its own layout, so
//! every layout has its own parser module. They share only the reader-level
//! helpers in [`crate::explain::reader`]: field extraction and join
//! canonicalization differ in subtle ways and are kept apart.

mod v2;
mod v3;
mod v4;

use crate::error::{PlanError, PlanResult};
use crate::explain::{
    extract_operator_id, first_unreached_row, format_explain_rows, split_explain_text,
};
use crate::plan::{Operator, Plan, PlanVersion};

/// Parse bordered explain text produced by the engine identified by
/// `version`. The raw text is kept on the returned plan.
pub fn parse_text(sql: &str, explain_text: &str, version: &str) -> PlanResult<Plan> {
    let rows = split_explain_text(explain_text)?;
    Ok(parse(version, sql, &rows)?.with_plan_text(explain_text))
}

/// Parse explain rows already split into columns, e.g. by a SQL driver.
pub fn parse(version: &str, sql: &str, rows: &[Vec<String>]) -> PlanResult<Plan> {
    parse_rows(PlanVersion::from_tag(version), sql, rows)
}

/// Parse explain rows with an already resolved layout
pub fn parse_rows(version: PlanVersion, sql: &str, rows: &[Vec<String>]) -> PlanResult<Plan> {
    let sql = normalize_sql(sql);
    let result = match version {
        PlanVersion::V2 => v2::parse(sql.clone(), rows),
        PlanVersion::V3 => v3::parse(sql.clone(), rows),
        PlanVersion::V4 => v4::parse(sql.clone(), rows),
    };

    result.map_err(|err| {
        log::debug!(
            "Failed to parse plan sql={} ver={}: {}\n{}",
            sql,
            version,
            err,
            format_explain_rows(rows)
        );
        err
    })
}

/// Trim the statement and drop a trailing semicolon
pub fn normalize_sql(sql: &str) -> String {
    let sql = sql.trim();
    sql.strip_suffix(';').unwrap_or(sql).trim_end().to_string()
}

fn check_not_empty(rows: &[Vec<String>]) -> PlanResult<()> {
    if rows.is_empty() {
        return Err(PlanError::malformed("no explain rows"));
    }
    Ok(())
}

/// Every row must end up in the tree built from row 0. A row the child
/// discovery never reaches means the nesting glyphs are broken.
fn check_rows_consumed(root: &Operator, rows: &[Vec<String>], id_col: usize) -> PlanResult<()> {
    if let Some(row_no) = first_unreached_row(rows, id_col) {
        let id = rows[row_no]
            .get(id_col)
            .map(|cell| extract_operator_id(cell))
            .unwrap_or_default();
        return Err(PlanError::malformed(format!(
            "explain row {} ({}) is not attached to the operator tree",
            row_no, id
        )));
    }
    if root.size() != rows.len() {
        return Err(PlanError::malformed(format!(
            "{} explain rows produced {} operators",
            rows.len(),
            root.size()
        )));
    }
    Ok(())
}

/// Check that a row carries every column of its layout
fn check_columns(cols: &[String], version: PlanVersion) -> PlanResult<()> {
    if cols.len() < version.column_count() {
        return Err(PlanError::malformed(format!(
            "{} explain row has {} columns, expected {}: {:?}",
            version,
            cols.len(),
            version.column_count(),
            cols
        )));
    }
    Ok(())
}

/// Parse the estimated row count column
fn parse_est_rows(id: &str, count: &str) -> PlanResult<f64> {
    let count = count.trim();
    count.parse::<f64>().map_err(|_| PlanError::InvalidRowCount {
        id: id.to_string(),
        value: count.to_string(),
    })
}
