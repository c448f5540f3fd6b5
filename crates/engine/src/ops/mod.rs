//! Operation handlers.
//!
//! Each handler is a pure function from (query, rows, resolved columns,
//! locale) to a `QueryResult`. Handlers never fail: ambiguous input and
//! degenerate data come back as valid results at reduced confidence.

mod aggregate;
mod correlate;
mod describe;
mod extrema;
mod search;

pub use aggregate::{average, count, sum};
pub use correlate::correlation;
pub use describe::{overview, unique};
pub use extrema::{max, min};
pub use search::search;

use crate::dataset::Row;
use crate::lexicon::Intent;
use crate::locale::Locale;
use crate::messages;
use crate::result::QueryResult;

/// The numeric cells of one column, non-numeric cells silently dropped.
pub(crate) fn numeric_cells(rows: &[Row], column: &str) -> Vec<f64> {
    rows.iter()
        .filter_map(|row| row.cell(column).as_number())
        .collect()
}

/// Shared missing-column policy: a confidence-0.5 prompt asking the user to
/// name a column, with no data and no follow-ups.
pub(crate) fn ask_for_column(locale: Locale, operation: Intent) -> QueryResult {
    QueryResult {
        answer: messages::ask_for_column(locale),
        explanation: messages::ask_for_column_explanation(locale),
        data: None,
        follow_up_questions: Vec::new(),
        confidence: 0.5,
        used_columns: Vec::new(),
        operation,
    }
}
