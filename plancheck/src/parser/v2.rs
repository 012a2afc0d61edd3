// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Parser for the oldest explain layout
//!
//! ```text
//! +--------------------------+----------+------+--------------------------------------------------------------------+
//! | id                       | count    | task | operator info                                                      |
//! +--------------------------+----------+------+--------------------------------------------------------------------+
//! | HashLeftJoin_13          | 12487.50 | root | inner join, inner:TableReader_17, equal:[eq(test.t1.a, test.t2.b)] |
//! | ├─TableReader_20         | 9990.00  | root | data:Selection_19                                                  |
//! | │ └─TableScan_18         | 10000.00 | cop  | table:t1, range:[-inf,+inf], keep order:false, stats:pseudo        |
//! | └─TableReader_17         | 9990.00  | root | data:TableScan_15                                                  |
//! |   └─TableScan_15         | 10000.00 | cop  | table:t2, range:[-inf,+inf], keep order:false, stats:pseudo        |
//! +--------------------------+----------+------+--------------------------------------------------------------------+
//! ```
//!
//! There is no access object column: tables and indexes are read from the
//! `key:value` pairs of the operator info, and the inner side of a join is
//! named by its `inner:` entry.

use super::{check_columns, check_not_empty, check_rows_consumed, parse_est_rows};
use crate::error::{PlanError, PlanResult};
use crate::explain::{extract_operator_id, find_child_rows};
use crate::plan::{classify, JoinType, OpKind, Operator, OperatorDetail, Plan, PlanVersion, TaskType};
use std::collections::HashMap;

const ID_COL: usize = 0;
const COUNT_COL: usize = 1;
const TASK_COL: usize = 2;
const INFO_COL: usize = 3;

pub(crate) fn parse(sql: String, rows: &[Vec<String>]) -> PlanResult<Plan> {
    check_not_empty(rows)?;
    let root = parse_operator(rows, 0)?;
    check_rows_consumed(&root, rows, ID_COL)?;
    Ok(Plan::new(sql, PlanVersion::V2, root))
}

fn parse_operator(rows: &[Vec<String>], row_no: usize) -> PlanResult<Operator> {
    let children = find_child_rows(rows, row_no, ID_COL)
        .into_iter()
        .map(|child_row| parse_operator(rows, child_row))
        .collect::<PlanResult<Vec<_>>>()?;

    parse_row(&rows[row_no], children)
}

fn parse_row(cols: &[String], mut children: Vec<Operator>) -> PlanResult<Operator> {
    check_columns(cols, PlanVersion::V2)?;

    let id = extract_operator_id(&cols[ID_COL]);
    let est_rows = parse_est_rows(&id, &cols[COUNT_COL])?;
    let kind = classify(&id);
    if kind == OpKind::Unknown {
        return Err(PlanError::UnknownOperatorKind(id));
    }

    let info = cols[INFO_COL].as_str();
    if kind.is_join() {
        adjust_join_children(&id, info, &mut children)?;
    }

    let detail = match kind {
        OpKind::HashJoin | OpKind::MergeJoin | OpKind::IndexJoin => OperatorDetail::Join {
            join_type: JoinType::from_operator_info(info),
        },
        OpKind::TableScan => {
            let kvs = split_key_values(info);
            OperatorDetail::TableScan {
                table: kvs.get("table").cloned().unwrap_or_default(),
            }
        }
        OpKind::IndexScan => {
            let kvs = split_key_values(info);
            OperatorDetail::IndexScan {
                table: kvs.get("table").cloned().unwrap_or_default(),
                index: kvs.get("index").cloned().unwrap_or_default(),
                columns: Vec::new(),
            }
        }
        OpKind::PointGet => {
            let kvs = split_key_values(info);
            OperatorDetail::PointGet {
                table: kvs.get("table").cloned().unwrap_or_default(),
            }
        }
        _ => OperatorDetail::None,
    };

    let task = TaskType::parse(&cols[TASK_COL]);
    Ok(Operator::new(id, kind, est_rows, task, children).with_detail(detail))
}

/// Move the outer side of a join to child 0. The inner side is the child
/// named by `inner:<id>` in the operator info.
fn adjust_join_children(id: &str, info: &str, children: &mut [Operator]) -> PlanResult<()> {
    if children.len() != 2 {
        return Err(PlanError::malformed(format!(
            "join {} has {} children, expected 2",
            id,
            children.len()
        )));
    }

    let inner = inner_side(info)
        .ok_or_else(|| PlanError::MissingInnerJoinAnnotation(id.to_string()))?;
    if children[0].id() == inner {
        children.swap(0, 1);
    }
    Ok(())
}

fn inner_side(info: &str) -> Option<&str> {
    const INNER_MARKER: &str = "inner:";
    let start = info.find(INNER_MARKER)? + INNER_MARKER.len();
    let rest = &info[start..];
    let end = rest.find(',').unwrap_or(rest.len());
    Some(rest[..end].trim())
}

/// Collect the comma separated `key:value` pairs of an operator info.
///
/// A token without a colon continues the previous value, so
/// `index:a, b, range:[1,1]` keeps `a, b` as the index. Tokens with more than
/// one colon carry no usable attribute and are skipped along with their
/// continuations.
fn split_key_values(info: &str) -> HashMap<String, String> {
    let mut kvs: HashMap<String, String> = HashMap::new();
    let mut last_key: Option<String> = None;
    for token in info.split(',') {
        match token.split_once(':') {
            None => {
                if let Some(value) = last_key.as_ref().and_then(|key| kvs.get_mut(key)) {
                    value.push(',');
                    value.push_str(token.trim_end());
                }
            }
            Some((key, value)) if !value.contains(':') => {
                let key = key.trim().to_string();
                kvs.insert(key.clone(), value.trim().to_string());
                last_key = Some(key);
            }
            Some(_) => last_key = None,
        }
    }
    kvs
}
