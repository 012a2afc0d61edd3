// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Plan and operator tree
//!
//! Operators are built bottom-up by the row parsers and never mutated
//! afterwards. For join kinds, child 0 is always the build (outer) side.

use crate::plan::op_type::{JoinType, OpKind, TaskType};
use crate::plan::version::PlanVersion;
use serde::{Deserialize, Serialize};

/// Kind-specific operator attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OperatorDetail {
    None,
    Join {
        join_type: JoinType,
    },
    TableScan {
        table: String,
    },
    /// `index` is the index as printed by the engine; `columns` is only
    /// filled when the layout prints the indexed columns separately
    IndexScan {
        table: String,
        index: String,
        columns: Vec<String>,
    },
    PointGet {
        table: String,
    },
}

/// One node of a parsed plan tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    id: String,
    kind: OpKind,
    est_rows: f64,
    task: TaskType,
    detail: OperatorDetail,
    children: Vec<Operator>,
}

impl Operator {
    pub fn new(
        id: impl Into<String>,
        kind: OpKind,
        est_rows: f64,
        task: TaskType,
        children: Vec<Operator>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            est_rows,
            task,
            detail: OperatorDetail::None,
            children,
        }
    }

    pub fn with_detail(mut self, detail: OperatorDetail) -> Self {
        self.detail = detail;
        self
    }

    /// Operator id including any `(Build)` / `(Probe)` annotation
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> OpKind {
        self.kind
    }

    pub fn est_rows(&self) -> f64 {
        self.est_rows
    }

    pub fn task(&self) -> TaskType {
        self.task
    }

    pub fn detail(&self) -> &OperatorDetail {
        &self.detail
    }

    pub fn children(&self) -> &[Operator] {
        &self.children
    }

    /// Table accessed by a scan or point get
    pub fn table(&self) -> Option<&str> {
        match &self.detail {
            OperatorDetail::TableScan { table }
            | OperatorDetail::IndexScan { table, .. }
            | OperatorDetail::PointGet { table } => Some(table),
            _ => None,
        }
    }

    pub fn index(&self) -> Option<&str> {
        match &self.detail {
            OperatorDetail::IndexScan { index, .. } => Some(index),
            _ => None,
        }
    }

    pub fn index_columns(&self) -> &[String] {
        match &self.detail {
            OperatorDetail::IndexScan { columns, .. } => columns,
            _ => &[],
        }
    }

    pub fn join_type(&self) -> Option<JoinType> {
        match self.detail {
            OperatorDetail::Join { join_type } => Some(join_type),
            _ => None,
        }
    }

    /// Build (outer) side of a join
    pub fn build_child(&self) -> Option<&Operator> {
        if self.kind.is_join() {
            self.children.first()
        } else {
            None
        }
    }

    /// Number of operators in this subtree, including `self`
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Operator::size).sum::<usize>()
    }

    /// Render this subtree, one operator per line, children indented by four
    /// spaces
    pub fn format(&self, indent: usize) -> String {
        let mut output = String::new();
        self.format_into(&mut output, indent);
        output
    }

    fn format_into(&self, output: &mut String, indent: usize) {
        output.push_str(&" ".repeat(indent));
        output.push_str(&self.id);

        match &self.detail {
            OperatorDetail::TableScan { table } => {
                output.push_str(&format!("\ttable:{}", table));
            }
            OperatorDetail::IndexScan { table, index, .. } => {
                output.push_str(&format!("\ttable:{}, index:{}", table, index));
            }
            _ => {
                if let Some(build) = self.build_child() {
                    output.push_str(&format!(" build: {}", build.id()));
                }
            }
        }
        output.push('\n');

        for child in &self.children {
            child.format_into(output, indent + 4);
        }
    }
}

/// One parsed explain invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    sql: String,
    version: PlanVersion,
    root: Operator,
    schema: String,
    plan_text: String,
}

impl Plan {
    pub fn new(sql: impl Into<String>, version: PlanVersion, root: Operator) -> Self {
        Self {
            sql: sql.into(),
            version,
            root,
            schema: String::new(),
            plan_text: String::new(),
        }
    }

    /// Attach the database the statement was explained in
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    /// Attach the unparsed explain text for diagnostics
    pub fn with_plan_text(mut self, plan_text: impl Into<String>) -> Self {
        self.plan_text = plan_text.into();
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn version(&self) -> PlanVersion {
        self.version
    }

    pub fn root(&self) -> &Operator {
        &self.root
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn plan_text(&self) -> &str {
        &self.plan_text
    }

    pub fn format(&self) -> String {
        self.root.format(0)
    }
}
