// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Parser for the five column explain layout with an access object
//!
//! ```text
//! +---------------------------+----------+-----------+----------------------------+--------------------------------------------+
//! | id                        | estRows  | task      | access object              | operator info                              |
//! +---------------------------+----------+-----------+----------------------------+--------------------------------------------+
//! | HashRightJoin_22          | 12487.50 | root      |                            | inner join, inner:TableReader_26, ...      |
//! | ├─TableReader_26(Build)   | 9990.00  | root      |                            | data:Selection_25                          |
//! | │ └─TableFullScan_24      | 10000.00 | cop[tikv] | table:t2                   | keep order:false, stats:pseudo             |
//! | └─IndexLookUp_12(Probe)   | 10.00    | root      |                            |                                            |
//! |   ├─IndexRangeScan_10     | 10.00    | cop[tikv] | table:t1, index:idx(a, b)  | range:[1,1], keep order:false              |
//! |   └─TableRowIDScan_11     | 10.00    | cop[tikv] | table:t1                   | keep order:false, stats:pseudo             |
//! +---------------------------+----------+-----------+----------------------------+--------------------------------------------+
//! ```
//!
//! Tables and indexes come from the access object column. The inner side of
//! a join is still named by `inner:` in the operator info.

use super::{check_columns, check_not_empty, check_rows_consumed, parse_est_rows};
use crate::error::{PlanError, PlanResult};
use crate::explain::{extract_operator_id, find_child_rows};
use crate::plan::{classify, JoinType, OpKind, Operator, OperatorDetail, Plan, PlanVersion, TaskType};

const ID_COL: usize = 0;
const EST_ROWS_COL: usize = 1;
const TASK_COL: usize = 2;
const ACCESS_OBJECT_COL: usize = 3;
const INFO_COL: usize = 4;

const TABLE_KEY: &str = "table:";
const INDEX_KEY: &str = "index:";
const RANGE_SEPARATOR: &str = ", range:";

pub(crate) fn parse(sql: String, rows: &[Vec<String>]) -> PlanResult<Plan> {
    check_not_empty(rows)?;
    let root = parse_operator(rows, 0)?;
    check_rows_consumed(&root, rows, ID_COL)?;
    Ok(Plan::new(sql, PlanVersion::V3, root))
}

fn parse_operator(rows: &[Vec<String>], row_no: usize) -> PlanResult<Operator> {
    let mut children = Vec::with_capacity(2);
    for child_row in find_child_rows(rows, row_no, ID_COL) {
        children.push(parse_operator(rows, child_row)?);
    }
    parse_row(&rows[row_no], children)
}

fn parse_row(cols: &[String], mut children: Vec<Operator>) -> PlanResult<Operator> {
    check_columns(cols, PlanVersion::V3)?;

    let id = extract_operator_id(&cols[ID_COL]);
    let est_rows = parse_est_rows(&id, &cols[EST_ROWS_COL])?;
    let kind = classify(&id);
    if kind == OpKind::Unknown {
        return Err(PlanError::UnknownOperatorKind(id));
    }

    let access_object = cols[ACCESS_OBJECT_COL].as_str();
    let info = cols[INFO_COL].as_str();
    if kind.is_join() {
        adjust_join_children(&id, info, &mut children)?;
    }

    let detail = match kind {
        OpKind::HashJoin | OpKind::MergeJoin | OpKind::IndexJoin => OperatorDetail::Join {
            join_type: JoinType::from_operator_info(info),
        },
        OpKind::TableScan => OperatorDetail::TableScan {
            table: table_name(access_object),
        },
        OpKind::IndexScan => {
            let (index, columns) = index_name(access_object);
            OperatorDetail::IndexScan {
                table: table_name(access_object),
                index,
                columns,
            }
        }
        OpKind::PointGet => OperatorDetail::PointGet {
            table: table_name(access_object),
        },
        _ => OperatorDetail::None,
    };

    let task = TaskType::parse(&cols[TASK_COL]);
    Ok(Operator::new(id, kind, est_rows, task, children).with_detail(detail))
}

fn adjust_join_children(id: &str, info: &str, children: &mut [Operator]) -> PlanResult<()> {
    if children.len() != 2 {
        return Err(PlanError::malformed(format!(
            "join {} has {} children, expected 2",
            id,
            children.len()
        )));
    }

    let start = info
        .find("inner:")
        .map(|pos| pos + "inner:".len())
        .ok_or_else(|| PlanError::MissingInnerJoinAnnotation(id.to_string()))?;
    let rest = &info[start..];
    let inner = rest[..rest.find(',').unwrap_or(rest.len())].trim();

    // Build/Probe suffixes are printed on child ids but not in `inner:`
    if extract_plain_id(children[0].id()) == inner {
        children.swap(0, 1);
    }
    Ok(())
}

/// Drop a `(Build)` / `(Probe)` annotation from an operator id
fn extract_plain_id(id: &str) -> &str {
    id.find('(').map_or(id, |pos| &id[..pos])
}

/// Table named in the access object, up to the next comma
fn table_name(access_object: &str) -> String {
    match access_object.find(TABLE_KEY) {
        Some(pos) => {
            let rest = &access_object[pos + TABLE_KEY.len()..];
            rest[..rest.find(',').unwrap_or(rest.len())].trim().to_string()
        }
        None => String::new(),
    }
}

/// Index named in the access object, as `(name, columns)`.
///
/// The index entry ends at the next top-level `, key:` token. When that token
/// is `range:` the whole entry is the value, so a bare column list such as
/// `a, b` survives; otherwise the value stops at the first comma outside
/// parentheses. `idx(a, b)` yields `idx` with columns `[a, b]`; a bare name
/// yields no columns.
fn index_name(access_object: &str) -> (String, Vec<String>) {
    let Some(pos) = access_object.find(INDEX_KEY) else {
        return (String::new(), Vec::new());
    };
    let rest = &access_object[pos + INDEX_KEY.len()..];
    let entry_end = top_level_comma(rest, starts_with_key).unwrap_or(rest.len());
    let entry = &rest[..entry_end];
    let value = if rest[entry_end..].starts_with(RANGE_SEPARATOR) {
        entry
    } else {
        &entry[..top_level_comma(entry, |_| true).unwrap_or(entry.len())]
    };
    split_index_value(value.trim())
}

/// First comma outside parentheses whose following text satisfies `accept`
fn top_level_comma(text: &str, accept: impl Fn(&str) -> bool) -> Option<usize> {
    let mut depth = 0usize;
    for (pos, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 && accept(&text[pos + 1..]) => return Some(pos),
            _ => {}
        }
    }
    None
}

/// Whether `text` opens a new `key:value` entry
fn starts_with_key(text: &str) -> bool {
    match text.split_once(':') {
        Some((key, _)) => {
            let key = key.trim();
            !key.is_empty()
                && key
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ' ')
        }
        None => false,
    }
}

fn split_index_value(value: &str) -> (String, Vec<String>) {
    match (value.find('('), value.rfind(')')) {
        (Some(open), Some(close)) if open < close => {
            let columns = value[open + 1..close]
                .split(',')
                .map(|column| column.trim().to_string())
                .filter(|column| !column.is_empty())
                .collect();
            (value[..open].trim().to_string(), columns)
        }
        _ => (value.to_string(), Vec::new()),
    }
}
