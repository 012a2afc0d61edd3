// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Check file reader
//!
//! A check file is a capture of terminal sessions: each statement is a SQL
//! line followed by the explain table from the base engine and the explain
//! table from the target engine.
//!
//! A `use <database>;` line switches the database for the statements that
//! follow it.
//!
//! ```text
//! mysql> use test;
//! Database changed
//! select * from t where b = 10;
//! +-------------------+-------+------+----------------------------+
//! | id                | count | task | operator info              |
//! +-------------------+-------+------+----------------------------+
//! | IndexLookUp_10    | 10.00 | root |                            |
//! ...
//! +-------------------+-------+------+----------------------------+
//! 3 rows in set (0.00 sec)
//!
//! +---------------------------+---------+-----------+-----------------------+-------------+
//! | id                        | estRows | task      | access object         | operator info |
//! ...
//! ```

use crate::error::PlanResult;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ROWS_IN_SET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+ rows? in set").expect("valid rows-in-set pattern"));
static CLIENT_PROMPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^mysql>\s*").expect("valid client prompt pattern"));
static USE_DATABASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^use\s+`?([^`;\s]+)`?\s*;?$").expect("valid use statement pattern")
});
static DATABASE_CHANGED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Database changed").expect("valid database changed pattern"));

const BOUNDARIES_PER_TABLE: usize = 3;

/// One statement with the raw explain text captured from both engines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckCase {
    pub sql: String,
    pub base_plan: String,
    pub target_plan: String,
    /// Database the statement was explained in; empty when unknown
    #[serde(default)]
    pub schema: String,
}

impl CheckCase {
    pub fn new(
        sql: impl Into<String>,
        base_plan: impl Into<String>,
        target_plan: impl Into<String>,
    ) -> Self {
        Self {
            sql: sql.into(),
            base_plan: base_plan.into(),
            target_plan: target_plan.into(),
            schema: String::new(),
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }
}

/// Table boundaries are made of `+`, `-` and spaces only
fn is_boundary(line: &str) -> bool {
    line.chars().all(|c| matches!(c, '+' | '-' | ' '))
}

/// Split check file content into cases.
///
/// Every third boundary line closes a table and every second table closes a
/// case. Lines outside a table are SQL; the last one seen before a case's
/// first table is its statement.
pub fn read_check_file(content: &str) -> Vec<CheckCase> {
    let lines: Vec<&str> = content.lines().collect();
    let mut cases = Vec::new();
    let mut sql = String::new();
    let mut schema = String::new();
    let mut base_plan: Option<String> = None;
    let mut table_start = 0;
    let mut boundaries = 0;

    for (line_no, raw_line) in lines.iter().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || ROWS_IN_SET.is_match(line) || DATABASE_CHANGED.is_match(line) {
            continue;
        }

        if !is_boundary(line) {
            if boundaries == 0 {
                let statement = CLIENT_PROMPT.replace(line, "").into_owned();
                let database = USE_DATABASE
                    .captures(&statement)
                    .map(|captures| captures[1].to_string());
                match database {
                    Some(database) => schema = database,
                    None => sql = statement,
                }
            }
            continue;
        }

        boundaries += 1;
        if boundaries == 1 {
            table_start = line_no;
        }
        if boundaries < BOUNDARIES_PER_TABLE {
            continue;
        }

        boundaries = 0;
        let table = lines[table_start..=line_no].join("\n");
        match base_plan.take() {
            None => base_plan = Some(table),
            Some(base) => {
                cases.push(
                    CheckCase::new(std::mem::take(&mut sql), base, table).with_schema(schema.as_str()),
                );
            }
        }
    }

    if base_plan.is_some() || boundaries > 0 {
        log::warn!("Check file ends with an incomplete case for SQL {:?}", sql);
    }
    log::debug!("Read {} cases from check file", cases.len());
    cases
}

/// Read and split a check file from disk
pub fn read_check_path<P: AsRef<Path>>(path: P) -> PlanResult<Vec<CheckCase>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(read_check_file(&content))
}
