// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Tabular explain output
//!
//! Explain results arrive either as rows already split by a SQL driver or as
//! a bordered ASCII table captured from a terminal. [`reader`] turns both
//! into a row matrix and discovers the operator nesting encoded by the
//! tree-drawing glyphs in the id column; [`format`] renders row matrices back
//! to text for diagnostics.

pub mod format;
pub mod reader;

pub use format::{format_explain_rows, render_explain_table};
pub use reader::{
    extract_operator_id, find_child_rows, first_unreached_row, is_border_line, split_explain_rows,
    split_explain_text, ExplainTable,
};
