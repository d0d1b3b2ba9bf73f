// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Compact textual rendering of rows for scenario assertions.

use asynczip_core::{Outcome, Row};

/// One character per outcome: the value itself, `~` pending, `.` exhausted,
/// `?` failed.
pub fn render_outcome(outcome: &Outcome<char>) -> char {
    match outcome {
        Outcome::Value(c) => *c,
        Outcome::Pending => '~',
        Outcome::Exhausted => '.',
        Outcome::Failed(_) => '?',
    }
}

/// Render a row as one character per source, in input order.
pub fn render_row(row: &Row<char>) -> String {
    row.iter().map(render_outcome).collect()
}

/// Render a full run, rounds joined with `", "`.
pub fn render_rows(rows: &[Row<char>]) -> String {
    rows.iter()
        .map(render_row)
        .collect::<Vec<_>>()
        .join(", ")
}
