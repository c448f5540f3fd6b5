use crate::dataset::Row;
use crate::followups;
use crate::lexicon::Intent;
use crate::locale::Locale;
use crate::messages;
use crate::result::{QueryResult, DISPLAY_LIMIT};

use super::{ask_for_column, numeric_cells};

pub fn min(query: &str, rows: &[Row], resolved: &[String], locale: Locale) -> QueryResult {
    extremum(query, rows, resolved, locale, Intent::Min)
}

pub fn max(query: &str, rows: &[Row], resolved: &[String], locale: Locale) -> QueryResult {
    extremum(query, rows, resolved, locale, Intent::Max)
}

/// Minimum or maximum of the numeric cells of the first resolved column.
/// The returned data rows are all rows whose parsed value equals the
/// extremum, capped at the display limit.
fn extremum(
    _query: &str,
    rows: &[Row],
    resolved: &[String],
    locale: Locale,
    operation: Intent,
) -> QueryResult {
    let Some(column) = resolved.first() else {
        return ask_for_column(locale, operation);
    };

    let values = numeric_cells(rows, column);
    if values.is_empty() {
        return QueryResult {
            answer: messages::no_numeric_values(locale, column),
            explanation: messages::no_numeric_explanation(locale, column),
            data: None,
            follow_up_questions: followups::generic_prompts(locale),
            confidence: 0.7,
            used_columns: vec![column.clone()],
            operation,
        };
    }

    let extreme = match operation {
        Intent::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        _ => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    };

    let matching: Vec<Row> = rows
        .iter()
        .filter(|row| row.cell(column).as_number() == Some(extreme))
        .take(DISPLAY_LIMIT)
        .cloned()
        .collect();
    let matches = matching.len();

    let (answer, follow_ups) = match operation {
        Intent::Min => (
            messages::min_answer(locale, column, extreme),
            followups::for_min(locale, column),
        ),
        _ => (
            messages::max_answer(locale, column, extreme),
            followups::for_max(locale, column),
        ),
    };

    QueryResult {
        answer,
        explanation: messages::extremum_explanation(locale, values.len(), column, matches),
        data: Some(matching),
        follow_up_questions: follow_ups,
        confidence: 0.9,
        used_columns: vec![column.clone()],
        operation,
    }
}
