use crate::columns::keyword_target_column;
use crate::dataset::Row;
use crate::extract::extract_search_values;
use crate::followups;
use crate::lexicon::Intent;
use crate::locale::Locale;
use crate::messages;
use crate::result::{QueryResult, DISPLAY_LIMIT};

/// Exact-match search across the sheet.
///
/// The target column, when the keyword heuristic finds one, narrows the
/// comparison; otherwise every column is checked. Matching is exact,
/// case-insensitive string equality against the first extracted search
/// value. `used_columns` records the columns where matches occurred.
pub fn search(query: &str, rows: &[Row], columns: &[String], locale: Locale) -> QueryResult {
    let target = keyword_target_column(query, columns);
    let values = extract_search_values(query);

    let Some(value) = values.first() else {
        return QueryResult {
            answer: messages::ask_for_search_value(locale),
            explanation: messages::ask_for_column_explanation(locale),
            data: None,
            follow_up_questions: Vec::new(),
            confidence: 0.5,
            used_columns: Vec::new(),
            operation: Intent::Search,
        };
    };

    let needle = value.to_lowercase();
    let mut matching: Vec<Row> = Vec::new();
    let mut matched_columns: Vec<String> = Vec::new();
    let mut total = 0;

    for row in rows {
        let hit = match &target {
            Some(column) => row
                .cell(column)
                .display()
                .eq_ignore_ascii_case(&needle)
                .then(|| column.as_str()),
            None => row
                .iter()
                .find(|(_, cell)| cell.display().eq_ignore_ascii_case(&needle))
                .map(|(name, _)| name),
        };

        if let Some(column) = hit {
            total += 1;
            if !matched_columns.iter().any(|c| c == column) {
                matched_columns.push(column.to_string());
            }
            if matching.len() < DISPLAY_LIMIT {
                matching.push(row.clone());
            }
        }
    }

    if total == 0 {
        // A valid search that found nothing is still a confident answer.
        return QueryResult {
            answer: messages::search_not_found(locale, value),
            explanation: messages::search_found_explanation(locale, value, target.as_deref()),
            data: None,
            follow_up_questions: followups::generic_prompts(locale),
            confidence: 0.9,
            used_columns: target.map(|c| vec![c]).unwrap_or_default(),
            operation: Intent::Search,
        };
    }

    let first_match = matched_columns.first().map(|s| s.to_string());
    QueryResult {
        answer: messages::search_found(locale, total, value),
        explanation: messages::search_found_explanation(locale, value, target.as_deref()),
        data: Some(matching),
        follow_up_questions: followups::for_search(locale, first_match.as_deref()),
        confidence: 0.9,
        used_columns: matched_columns,
        operation: Intent::Search,
    }
}
