// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Explain table reader
//!
//! ```text
//! +-------------------+-------+------+---------------------------------------+
//! | id                | count | task | operator info                         |
//! +-------------------+-------+------+---------------------------------------+
//! | IndexLookUp_10    | 10.00 | root |                                       |
//! | ├─IndexScan_8     | 10.00 | cop  | table:t, index:a, range:[1,1]         |
//! | └─TableScan_9     | 10.00 | cop  | table:t, keep order:false             |
//! +-------------------+-------+------+---------------------------------------+
//! ```

use crate::error::{PlanError, PlanResult};

const BRANCH_GLYPHS: [char; 2] = ['├', '└'];
const CONTINUATION_GLYPH: char = '│';
const TREE_GLYPHS: [char; 5] = ['└', '─', '│', '├', ' '];
const BORDER_COUNT: usize = 3;

/// Header and data rows of one bordered explain table
#[derive(Debug, Clone, PartialEq)]
pub struct ExplainTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A border line consists solely of `+` and `-` once trimmed
pub fn is_border_line(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && line.chars().all(|c| c == '+' || c == '-')
}

/// Split bordered explain text into its header and data rows.
///
/// Anything before the first border (an echoed SQL line, a client prompt)
/// and after the third border (`3 rows in set`) is ignored.
pub fn split_explain_rows(explain_text: &str) -> PlanResult<ExplainTable> {
    let lines: Vec<&str> = explain_text.lines().collect();
    let borders: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_border_line(line))
        .map(|(line_no, _)| line_no)
        .take(BORDER_COUNT)
        .collect();

    if borders.len() != BORDER_COUNT {
        return Err(PlanError::malformed(format!(
            "expected {} border lines, found {}",
            BORDER_COUNT,
            borders.len()
        )));
    }

    let header_lines = &lines[borders[0] + 1..borders[1]];
    let header: Vec<String> = match header_lines {
        [line] => split_row(line)?
            .into_iter()
            .map(|cell| cell.trim().to_string())
            .collect(),
        _ => {
            return Err(PlanError::malformed(format!(
                "expected one header line, found {}",
                header_lines.len()
            )))
        }
    };

    let rows = lines[borders[1] + 1..borders[2]]
        .iter()
        .map(|line| split_row(line))
        .collect::<PlanResult<Vec<_>>>()?;

    if rows.is_empty() {
        return Err(PlanError::malformed("explain table has no data rows"));
    }

    log::debug!(
        "Read explain table with {} columns and {} rows",
        header.len(),
        rows.len()
    );

    Ok(ExplainTable { header, rows })
}

/// Split bordered explain text into a row matrix; row 0 is the plan root
pub fn split_explain_text(explain_text: &str) -> PlanResult<Vec<Vec<String>>> {
    split_explain_rows(explain_text).map(|table| table.rows)
}

/// Split one table line on `|`, dropping the border artifacts before the
/// first and after the last delimiter.
///
/// The id cell keeps its indentation since it encodes nesting depth; only
/// the padding space after the delimiter and trailing blanks are removed.
fn split_row(line: &str) -> PlanResult<Vec<String>> {
    let cells: Vec<&str> = line.split('|').collect();
    if cells.len() < 3 {
        return Err(PlanError::malformed(format!(
            "row without column delimiters: {:?}",
            line.trim()
        )));
    }

    Ok(cells[1..cells.len() - 1]
        .iter()
        .enumerate()
        .map(|(col, cell)| {
            if col == 0 {
                let cell = cell.trim_end();
                cell.strip_prefix(' ').unwrap_or(cell).to_string()
            } else {
                cell.trim().to_string()
            }
        })
        .collect())
}

/// Row numbers of the direct children of `parent`.
///
/// The column of the first uppercase letter in the parent's id cell is where
/// its children draw their branch glyph (`├` or `└`). Rows showing the
/// continuation glyph `│` in that column belong to a deeper subtree and are
/// skipped; anything else ends the parent's subtree.
pub fn find_child_rows(rows: &[Vec<String>], parent: usize, id_col: usize) -> Vec<usize> {
    let Some(parent_cell) = rows.get(parent).and_then(|row| row.get(id_col)) else {
        return Vec::new();
    };
    let Some(col) = parent_cell.chars().position(|c| c.is_ascii_uppercase()) else {
        return Vec::new();
    };

    let mut children = Vec::with_capacity(2);
    for (row_no, row) in rows.iter().enumerate().skip(parent + 1) {
        match row.get(id_col).and_then(|cell| cell.chars().nth(col)) {
            Some(glyph) if BRANCH_GLYPHS.contains(&glyph) => children.push(row_no),
            Some(CONTINUATION_GLYPH) => {}
            _ => break,
        }
    }
    children
}

/// First row that cannot be reached from the root through
/// [`find_child_rows`], if any.
///
/// A row without a branch glyph at its parent's indent column ends the
/// parent's subtree, so it and everything below it would otherwise be lost.
pub fn first_unreached_row(rows: &[Vec<String>], id_col: usize) -> Option<usize> {
    let mut reached = vec![false; rows.len()];
    let mut pending = vec![0];
    while let Some(row_no) = pending.pop() {
        match reached.get_mut(row_no) {
            Some(seen) if !*seen => *seen = true,
            _ => continue,
        }
        pending.extend(find_child_rows(rows, row_no, id_col));
    }
    reached.iter().position(|seen| !seen)
}

/// Strip tree-drawing glyphs and spaces around an operator id
pub fn extract_operator_id(cell: &str) -> String {
    cell.trim_matches(|c: char| TREE_GLYPHS.contains(&c))
        .to_string()
}
