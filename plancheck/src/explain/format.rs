// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Row matrix rendering for diagnostics

use comfy_table::Table;

/// Border layout of the engine's command line client: `+---+` rules above and
/// below the header and after the last row, `|` between cells, no rules
/// between data rows
const CLIENT_TABLE_PRESET: &str = "||--+-++|    ++++++";

/// Align the columns of a row matrix, separated by `  |  `, one line per row.
///
/// Used to print a failing explain result next to the statement it belongs
/// to. The last column is left unpadded.
pub fn format_explain_rows(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    rows.iter()
        .map(|row| {
            let last = row.len().saturating_sub(1);
            row.iter()
                .enumerate()
                .map(|(col, cell)| {
                    if col == last {
                        cell.clone()
                    } else {
                        format!("{:<width$}", cell, width = widths[col])
                    }
                })
                .collect::<Vec<_>>()
                .join("  |  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a bordered explain table in the layout the engine's client prints.
///
/// The output is accepted by [`crate::explain::split_explain_text`], which
/// reads back the same rows.
pub fn render_explain_table(header: &[String], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table.load_preset(CLIENT_TABLE_PRESET);
    table.set_header(header);
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}
