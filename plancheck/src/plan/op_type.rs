// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Operator kinds, task locations and join types
//!
//! Operator ids differ between engine versions (`TableScan_9` became
//! `TableRowIDScan_9`, `HashLeftJoin_13` became `HashJoin_22`), so kinds are
//! recovered with ordered substring matching over the lower-cased id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of operator kinds understood by the comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpKind {
    Unknown,
    HashJoin,
    IndexJoin,
    MergeJoin,
    HashAgg,
    StreamAgg,
    Selection,
    Projection,
    TableReader,
    TableScan,
    IndexReader,
    IndexScan,
    IndexLookup,
    PointGet,
    MaxOneRow,
    Apply,
    Limit,
    Sort,
    TopN,
    TableDual,
    SelectLock,
}

impl OpKind {
    /// Join operators have their children canonicalized to build/probe order
    pub fn is_join(self) -> bool {
        matches!(self, OpKind::HashJoin | OpKind::IndexJoin | OpKind::MergeJoin)
    }

    /// Operators that read data from storage on behalf of the root task
    pub fn is_data_source(self) -> bool {
        matches!(
            self,
            OpKind::TableReader | OpKind::IndexReader | OpKind::IndexLookup | OpKind::PointGet
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            OpKind::Unknown => "Unknown",
            OpKind::HashJoin => "HashJoin",
            OpKind::IndexJoin => "IndexJoin",
            OpKind::MergeJoin => "MergeJoin",
            OpKind::HashAgg => "HashAgg",
            OpKind::StreamAgg => "StreamAgg",
            OpKind::Selection => "Selection",
            OpKind::Projection => "Projection",
            OpKind::TableReader => "TableReader",
            OpKind::TableScan => "TableScan",
            OpKind::IndexReader => "IndexReader",
            OpKind::IndexScan => "IndexScan",
            OpKind::IndexLookup => "IndexLookup",
            OpKind::PointGet => "PointGet",
            OpKind::MaxOneRow => "MaxOneRow",
            OpKind::Apply => "Apply",
            OpKind::Limit => "Limit",
            OpKind::Sort => "Sort",
            OpKind::TopN => "TopN",
            OpKind::TableDual => "TableDual",
            OpKind::SelectLock => "SelectLock",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a raw operator id such as `HashJoin_24` or
/// `IndexRangeScan_8(Build)`.
///
/// The checks run in a fixed order because ids may contain several candidate
/// substrings: aggregations first, then joins, then table and index
/// operators, then the single-word kinds. `IndexHashJoin_12` is therefore a
/// hash join, not an index operator.
pub fn classify(op_id: &str) -> OpKind {
    let id = op_id.to_lowercase();

    if id.contains("agg") {
        return if id.contains("hash") {
            OpKind::HashAgg
        } else if id.contains("stream") {
            OpKind::StreamAgg
        } else {
            OpKind::Unknown
        };
    }

    if id.contains("join") {
        return if id.contains("hash") {
            OpKind::HashJoin
        } else if id.contains("merge") {
            OpKind::MergeJoin
        } else if id.contains("index") {
            OpKind::IndexJoin
        } else {
            OpKind::Unknown
        };
    }

    if id.contains("table") {
        return if id.contains("reader") {
            OpKind::TableReader
        } else if id.contains("scan") {
            OpKind::TableScan
        } else if id.contains("dual") {
            OpKind::TableDual
        } else {
            OpKind::Unknown
        };
    }

    if id.contains("index") {
        return if id.contains("reader") {
            OpKind::IndexReader
        } else if id.contains("scan") {
            OpKind::IndexScan
        } else if id.contains("lookup") {
            OpKind::IndexLookup
        } else {
            OpKind::Unknown
        };
    }

    const SINGLE_KINDS: [(&str, OpKind); 9] = [
        ("selection", OpKind::Selection),
        ("projection", OpKind::Projection),
        ("point", OpKind::PointGet),
        ("maxonerow", OpKind::MaxOneRow),
        ("apply", OpKind::Apply),
        ("limit", OpKind::Limit),
        ("sort", OpKind::Sort),
        ("topn", OpKind::TopN),
        ("lock", OpKind::SelectLock),
    ];

    SINGLE_KINDS
        .iter()
        .find(|(pattern, _)| id.contains(pattern))
        .map(|(_, kind)| *kind)
        .unwrap_or(OpKind::Unknown)
}

/// Where an operator executes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskType {
    /// Coordinator (SQL layer)
    Root,
    /// Row-oriented storage engine (`cop`, `cop[tikv]`)
    TiKV,
    /// Columnar storage engine (`cop[tiflash]`, `batchCop[tiflash]`, `mpp[tiflash]`)
    TiFlash,
}

impl TaskType {
    /// Infer the task location from the free-text task column
    pub fn parse(task: &str) -> Self {
        let task = task.trim().to_lowercase();
        if task == "root" {
            TaskType::Root
        } else if task.contains("tiflash") {
            TaskType::TiFlash
        } else {
            TaskType::TiKV
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TaskType::Root => "root",
            TaskType::TiKV => "tikv",
            TaskType::TiFlash => "tiflash",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Logical join type printed in a join's operator info
///
/// Informational only: the comparator matches joins on kind, task and
/// children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinType {
    Unknown,
    Inner,
    LeftOuter,
    RightOuter,
    Semi,
    AntiSemi,
    LeftOuterSemi,
    AntiLeftOuterSemi,
}

impl JoinType {
    /// Recover the join type from operator info such as
    /// `inner join, inner:TableReader_17, equal:[...]`.
    pub fn from_operator_info(info: &str) -> Self {
        // Longer names first: "semi join" is a suffix of the outer-semi variants.
        const JOIN_TYPES: [(&str, JoinType); 7] = [
            ("anti left outer semi join", JoinType::AntiLeftOuterSemi),
            ("left outer semi join", JoinType::LeftOuterSemi),
            ("anti semi join", JoinType::AntiSemi),
            ("semi join", JoinType::Semi),
            ("left outer join", JoinType::LeftOuter),
            ("right outer join", JoinType::RightOuter),
            ("inner join", JoinType::Inner),
        ];

        let info = info.to_lowercase();
        JOIN_TYPES
            .iter()
            .find(|(pattern, _)| info.contains(pattern))
            .map(|(_, join_type)| *join_type)
            .unwrap_or(JoinType::Unknown)
    }
}
