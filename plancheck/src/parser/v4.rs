// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Parser for the current explain layout
//!
//! ```text
//! +------------------------------+----------+-----------+---------------------------+--------------------------------+
//! | id                           | estRows  | task      | access object             | operator info                  |
//! +------------------------------+----------+-----------+---------------------------+--------------------------------+
//! | HashJoin_22                  | 12487.50 | root      |                           | inner join, equal:[eq(a, b)]   |
//! | ├─TableReader_29(Build)      | 9990.00  | root      |                           | data:Selection_28              |
//! | │ └─TableFullScan_27         | 10000.00 | cop[tikv] | table:t1                  | keep order:false               |
//! | └─IndexLookUp_12(Probe)      | 10.00    | root      |                           |                                |
//! |   ├─IndexRangeScan_10(Build) | 10.00    | cop[tikv] | table:t2, index:idx(a, b) | range:[1,1], keep order:false  |
//! |   └─TableRowIDScan_11(Probe) | 10.00    | cop[tikv] | table:t2                  | keep order:false               |
//! +------------------------------+----------+-----------+---------------------------+--------------------------------+
//! ```
//!
//! Join sides are marked on the child ids themselves, so the operator info
//! no longer names the inner side.

use super::{check_columns, check_not_empty, check_rows_consumed, parse_est_rows};
use crate::error::{PlanError, PlanResult};
use crate::explain::{extract_operator_id, find_child_rows};
use crate::plan::{classify, JoinType, OpKind, Operator, OperatorDetail, Plan, PlanVersion, TaskType};

const ID_COL: usize = 0;
const EST_ROWS_COL: usize = 1;
const TASK_COL: usize = 2;
const ACCESS_OBJECT_COL: usize = 3;
const INFO_COL: usize = 4;

const PROBE_MARKER: &str = "probe";

pub(crate) fn parse(sql: String, rows: &[Vec<String>]) -> PlanResult<Plan> {
    check_not_empty(rows)?;
    let root = parse_operator(rows, 0)?;
    check_rows_consumed(&root, rows, ID_COL)?;
    Ok(Plan::new(sql, PlanVersion::V4, root))
}

fn parse_operator(rows: &[Vec<String>], row_no: usize) -> PlanResult<Operator> {
    let children = find_child_rows(rows, row_no, ID_COL)
        .into_iter()
        .map(|child_row| parse_operator(rows, child_row))
        .collect::<PlanResult<Vec<_>>>()?;

    parse_row(&rows[row_no], children)
}

fn parse_row(cols: &[String], mut children: Vec<Operator>) -> PlanResult<Operator> {
    check_columns(cols, PlanVersion::V4)?;

    let id = extract_operator_id(&cols[ID_COL]);
    let est_rows = parse_est_rows(&id, &cols[EST_ROWS_COL])?;
    let kind = classify(&id);
    if kind == OpKind::Unknown {
        return Err(PlanError::UnknownOperatorKind(id));
    }

    if kind.is_join() {
        if children.len() != 2 {
            return Err(PlanError::malformed(format!(
                "join {} has {} children, expected 2",
                id,
                children.len()
            )));
        }
        if children[0].id().to_lowercase().contains(PROBE_MARKER) {
            children.swap(0, 1);
        }
    }

    let access = AccessObject::parse(&cols[ACCESS_OBJECT_COL]);
    let detail = match kind {
        OpKind::HashJoin | OpKind::MergeJoin | OpKind::IndexJoin => OperatorDetail::Join {
            join_type: JoinType::from_operator_info(&cols[INFO_COL]),
        },
        OpKind::TableScan => OperatorDetail::TableScan {
            table: access.table().to_string(),
        },
        OpKind::IndexScan => {
            let (index, columns) = access.index();
            OperatorDetail::IndexScan {
                table: access.table().to_string(),
                index,
                columns,
            }
        }
        OpKind::PointGet => OperatorDetail::PointGet {
            table: access.table().to_string(),
        },
        _ => OperatorDetail::None,
    };

    let task = TaskType::parse(&cols[TASK_COL]);
    Ok(Operator::new(id, kind, est_rows, task, children).with_detail(detail))
}

/// `key:value` entries of an access object such as
/// `table:t, partition:p0, index:idx(a, b)`
struct AccessObject<'a> {
    entries: Vec<(&'a str, &'a str)>,
}

impl<'a> AccessObject<'a> {
    /// Tokens are separated by commas outside parentheses and split at their
    /// first colon.
    fn parse(access_object: &'a str) -> Self {
        let mut entries = Vec::new();
        let mut depth = 0usize;
        let mut start = 0;
        for (pos, c) in access_object.char_indices() {
            match c {
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    Self::push_entry(&mut entries, &access_object[start..pos]);
                    start = pos + 1;
                }
                _ => {}
            }
        }
        Self::push_entry(&mut entries, &access_object[start..]);
        Self { entries }
    }

    fn push_entry(entries: &mut Vec<(&'a str, &'a str)>, token: &'a str) {
        if let Some((key, value)) = token.split_once(':') {
            entries.push((key.trim(), value.trim()));
        }
    }

    fn get(&self, key: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(entry_key, _)| *entry_key == key)
            .map(|(_, value)| *value)
    }

    fn table(&self) -> &'a str {
        self.get("table").unwrap_or_default()
    }

    /// Index name and its column list: `idx(a, b)` gives `idx` and `[a, b]`
    fn index(&self) -> (String, Vec<String>) {
        let value = self.get("index").unwrap_or_default();
        match value.split_once('(') {
            Some((name, rest)) => {
                let columns = rest
                    .trim_end_matches(')')
                    .split(',')
                    .map(str::trim)
                    .filter(|column| !column.is_empty())
                    .map(str::to_string)
                    .collect();
                (name.trim().to_string(), columns)
            }
            None => (value.to_string(), Vec::new()),
        }
    }
}
