use rustc_hash::FxHashSet;

use crate::dataset::Row;
use crate::followups;
use crate::lexicon::Intent;
use crate::locale::Locale;
use crate::messages;
use crate::result::{QueryResult, DISPLAY_LIMIT};

use super::ask_for_column;

/// Distinct non-empty values of the first resolved column, in order of
/// first occurrence. The answer lists at most `DISPLAY_LIMIT` of them.
pub fn unique(_query: &str, rows: &[Row], resolved: &[String], locale: Locale) -> QueryResult {
    let Some(column) = resolved.first() else {
        return ask_for_column(locale, Intent::Unique);
    };

    let mut seen = FxHashSet::default();
    let mut values: Vec<String> = Vec::new();
    for row in rows {
        let cell = row.cell(column);
        if cell.is_empty() {
            continue;
        }
        let text = cell.display();
        if seen.insert(text.clone()) {
            values.push(text);
        }
    }

    if values.is_empty() {
        return QueryResult {
            answer: messages::column_empty(locale, column),
            explanation: messages::unique_explanation(locale, column),
            data: None,
            follow_up_questions: followups::generic_prompts(locale),
            confidence: 0.7,
            used_columns: vec![column.clone()],
            operation: Intent::Unique,
        };
    }

    let shown = &values[..values.len().min(DISPLAY_LIMIT)];
    let hidden = values.len() - shown.len();

    QueryResult {
        answer: messages::unique_answer(locale, column, values.len(), shown, hidden),
        explanation: messages::unique_explanation(locale, column),
        data: None,
        follow_up_questions: followups::for_unique(locale, column),
        confidence: 0.9,
        used_columns: vec![column.clone()],
        operation: Intent::Unique,
    }
}

/// Row count, column count, and a heuristic numeric-column count for the
/// active sheet. A column counts as numeric when it has at least one sampled
/// cell and all of its first `DISPLAY_LIMIT` sampled cells parse as numbers.
pub fn overview(_query: &str, rows: &[Row], columns: &[String], locale: Locale) -> QueryResult {
    let numeric_columns: Vec<&String> = columns
        .iter()
        .filter(|column| {
            let mut sampled = 0;
            for row in rows.iter().take(DISPLAY_LIMIT) {
                if row.cell(column).as_number().is_none() {
                    return false;
                }
                sampled += 1;
            }
            sampled > 0
        })
        .collect();

    QueryResult {
        answer: messages::overview_answer(locale, rows.len(), columns.len(), numeric_columns.len()),
        explanation: messages::overview_explanation(locale),
        data: None,
        follow_up_questions: followups::for_overview(
            locale,
            columns,
            numeric_columns.first().map(|s| s.as_str()),
        ),
        confidence: 0.9,
        used_columns: Vec::new(),
        operation: Intent::Overview,
    }
}
