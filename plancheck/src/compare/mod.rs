// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Structural plan comparison
//!
//! Two plans are the same when their operator trees have the same shape,
//! kinds and task locations, and every scan reads the same table through the
//! same index. Estimated row counts, operator ids and operator info are not
//! compared.

use crate::plan::{OpKind, Operator, Plan};

/// Compare two plans of the same statement.
///
/// Returns `(reason, same)`; `reason` is empty when the plans are the same
/// and otherwise describes the first mismatch found. With
/// `ignore_projection`, a projection opposite a non-projection is treated as
/// transparent and its single child is compared instead.
pub fn compare(p1: &Plan, p2: &Plan, ignore_projection: bool) -> (String, bool) {
    if p1.sql() != p2.sql() {
        return ("differing SQL text".to_string(), false);
    }

    match compare_operators(p1.root(), p2.root(), ignore_projection) {
        Ok(()) => (String::new(), true),
        Err(reason) => {
            log::debug!("Plans differ for {}: {}", p1.sql(), reason);
            (reason, false)
        }
    }
}

fn compare_operators(op1: &Operator, op2: &Operator, ignore_projection: bool) -> Result<(), String> {
    if op1.kind() != op2.kind() {
        if ignore_projection {
            if let Some(inner) = projection_child(op1) {
                return compare_operators(inner, op2, ignore_projection);
            }
            if let Some(inner) = projection_child(op2) {
                return compare_operators(op1, inner, ignore_projection);
            }
        }
        return Err(format!(
            "different operators {} and {}: {} vs {}",
            op1.id(),
            op2.id(),
            op1.kind(),
            op2.kind()
        ));
    }

    if op1.task() != op2.task() {
        return Err(format!(
            "different tasks for {} and {}: {} vs {}",
            op1.id(),
            op2.id(),
            op1.task(),
            op2.task()
        ));
    }

    let (c1, c2) = (op1.children(), op2.children());
    if c1.len() != c2.len() {
        return Err(format!(
            "{} and {} have different children lengths: {} vs {}",
            op1.id(),
            op2.id(),
            c1.len(),
            c2.len()
        ));
    }

    match op1.kind() {
        OpKind::TableScan => {
            if op1.table() != op2.table() {
                return Err(format!(
                    "different table scan {}:{}, {}:{}",
                    op1.id(),
                    op1.table().unwrap_or_default(),
                    op2.id(),
                    op2.table().unwrap_or_default()
                ));
            }
        }
        OpKind::IndexScan => {
            if op1.table() != op2.table() || !same_index(op1, op2) {
                return Err(format!(
                    "different index scan {}:{}.{}, {}:{}.{}",
                    op1.id(),
                    op1.table().unwrap_or_default(),
                    op1.index().unwrap_or_default(),
                    op2.id(),
                    op2.table().unwrap_or_default(),
                    op2.index().unwrap_or_default()
                ));
            }
        }
        _ => {}
    }

    c1.iter()
        .zip(c2)
        .try_for_each(|(child1, child2)| compare_operators(child1, child2, ignore_projection))
}

/// The single child of a projection, if `op` is one
fn projection_child(op: &Operator) -> Option<&Operator> {
    match (op.kind(), op.children()) {
        (OpKind::Projection, [child]) => Some(child),
        _ => None,
    }
}

/// Index names match, or one side prints the indexed columns where the other
/// prints `name(columns)`.
fn same_index(op1: &Operator, op2: &Operator) -> bool {
    if op1.index() == op2.index() {
        return true;
    }

    let (cols1, cols2) = (op1.index_columns(), op2.index_columns());
    match (cols1.is_empty(), cols2.is_empty()) {
        (true, false) => index_text_matches(op1.index().unwrap_or_default(), cols2),
        (false, true) => index_text_matches(op2.index().unwrap_or_default(), cols1),
        _ => false,
    }
}

fn index_text_matches(index: &str, columns: &[String]) -> bool {
    let mut parts = index.split(',').map(str::trim);
    columns.iter().all(|column| parts.next() == Some(column.as_str())) && parts.next().is_none()
}
