use crate::dataset::Row;
use crate::followups;
use crate::lexicon::Intent;
use crate::locale::Locale;
use crate::messages;
use crate::result::QueryResult;

use super::{ask_for_column, numeric_cells};

/// Arithmetic mean of the numeric cells of the first resolved column.
pub fn average(_query: &str, rows: &[Row], resolved: &[String], locale: Locale) -> QueryResult {
    let Some(column) = resolved.first() else {
        return ask_for_column(locale, Intent::Average);
    };

    let values = numeric_cells(rows, column);
    if values.is_empty() {
        return no_numeric(locale, column, Intent::Average);
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    QueryResult {
        answer: messages::average_answer(locale, column, mean),
        explanation: messages::average_explanation(locale, values.len(), column),
        data: None,
        follow_up_questions: followups::for_average(locale, column),
        confidence: 0.9,
        used_columns: vec![column.clone()],
        operation: Intent::Average,
    }
}

/// Sum of the numeric cells of the first resolved column.
pub fn sum(_query: &str, rows: &[Row], resolved: &[String], locale: Locale) -> QueryResult {
    let Some(column) = resolved.first() else {
        return ask_for_column(locale, Intent::Sum);
    };

    let values = numeric_cells(rows, column);
    if values.is_empty() {
        return no_numeric(locale, column, Intent::Sum);
    }

    let total = values.iter().sum::<f64>();
    QueryResult {
        answer: messages::sum_answer(locale, column, total),
        explanation: messages::sum_explanation(locale, values.len(), column),
        data: None,
        follow_up_questions: followups::for_sum(locale, column),
        confidence: 0.9,
        used_columns: vec![column.clone()],
        operation: Intent::Sum,
    }
}

/// Row count when no column was named, otherwise the number of rows whose
/// cell in that column is neither missing nor empty.
pub fn count(_query: &str, rows: &[Row], resolved: &[String], locale: Locale) -> QueryResult {
    match resolved.first() {
        None => QueryResult {
            answer: messages::count_rows_answer(locale, rows.len()),
            explanation: messages::count_rows_explanation(locale),
            data: None,
            follow_up_questions: followups::for_count(locale, None),
            confidence: 0.9,
            used_columns: Vec::new(),
            operation: Intent::Count,
        },
        Some(column) => {
            let filled = rows
                .iter()
                .filter(|row| !row.cell(column).is_empty())
                .count();
            QueryResult {
                answer: messages::count_cells_answer(locale, filled, column),
                explanation: messages::count_cells_explanation(locale, column),
                data: None,
                follow_up_questions: followups::for_count(locale, Some(column)),
                confidence: 0.9,
                used_columns: vec![column.clone()],
                operation: Intent::Count,
            }
        }
    }
}

/// Zero numeric values after coercion: not an error, confidence 0.7.
fn no_numeric(locale: Locale, column: &str, operation: Intent) -> QueryResult {
    QueryResult {
        answer: messages::no_numeric_values(locale, column),
        explanation: messages::no_numeric_explanation(locale, column),
        data: None,
        follow_up_questions: followups::generic_prompts(locale),
        confidence: 0.7,
        used_columns: vec![column.to_string()],
        operation,
    }
}
