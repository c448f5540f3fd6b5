//! Follow-up question generation.
//!
//! Every successful handler appends two or three locale-specific questions
//! referencing the columns involved; degenerate paths get generic prompts.
//! Only the generic fallback picker is pseudo-random, and only through the
//! injected `Sampler`.

use crate::locale::Locale;
use crate::messages;
use crate::sampler::Sampler;

pub fn for_average(locale: Locale, column: &str) -> Vec<String> {
    vec![
        messages::followup_max(locale, column),
        messages::followup_sum(locale, column),
        messages::followup_count_rows(locale),
    ]
}

pub fn for_sum(locale: Locale, column: &str) -> Vec<String> {
    vec![
        messages::followup_average(locale, column),
        messages::followup_min(locale, column),
        messages::followup_count_rows(locale),
    ]
}

pub fn for_count(locale: Locale, column: Option<&str>) -> Vec<String> {
    match column {
        Some(column) => vec![
            messages::followup_unique(locale, column),
            messages::followup_overview(locale),
        ],
        None => vec![
            messages::followup_overview(locale),
            messages::followup_count_rows(locale),
        ],
    }
}

pub fn for_min(locale: Locale, column: &str) -> Vec<String> {
    vec![
        messages::followup_max(locale, column),
        messages::followup_average(locale, column),
    ]
}

pub fn for_max(locale: Locale, column: &str) -> Vec<String> {
    vec![
        messages::followup_min(locale, column),
        messages::followup_average(locale, column),
    ]
}

pub fn for_correlation(locale: Locale, first: &str, second: &str) -> Vec<String> {
    vec![
        messages::followup_average(locale, first),
        messages::followup_average(locale, second),
        messages::followup_overview(locale),
    ]
}

pub fn for_unique(locale: Locale, column: &str) -> Vec<String> {
    vec![
        messages::followup_count_rows(locale),
        messages::followup_average(locale, column),
    ]
}

pub fn for_overview(locale: Locale, columns: &[String], numeric: Option<&str>) -> Vec<String> {
    let mut questions = Vec::new();
    if let Some(column) = numeric {
        questions.push(messages::followup_average(locale, column));
    }
    if let Some(column) = columns.first() {
        questions.push(messages::followup_unique(locale, column));
    }
    questions.push(messages::followup_count_rows(locale));
    questions
}

pub fn for_search(locale: Locale, column: Option<&str>) -> Vec<String> {
    let mut questions = Vec::new();
    if let Some(column) = column {
        questions.push(messages::followup_unique(locale, column));
    }
    questions.push(messages::followup_count_rows(locale));
    questions.push(messages::followup_overview(locale));
    questions
}

/// Generic prompts for zero-match and degenerate-data paths.
pub fn generic_prompts(locale: Locale) -> Vec<String> {
    vec![
        messages::followup_overview(locale),
        messages::followup_count_rows(locale),
    ]
}

/// The fallback generator: up to three pseudo-randomly picked columns turned
/// into suggestions, plus two generic questions, capped at five total.
pub fn fallback(locale: Locale, columns: &[String], sampler: &mut dyn Sampler) -> Vec<String> {
    let mut questions = Vec::new();

    let mut remaining: Vec<&String> = columns.iter().collect();
    while questions.len() < 3 && !remaining.is_empty() {
        let column = remaining.remove(sampler.next_index(remaining.len()));
        let question = match questions.len() {
            0 => messages::followup_average(locale, column),
            1 => messages::followup_unique(locale, column),
            _ => messages::followup_max(locale, column),
        };
        questions.push(question);
    }

    questions.push(messages::followup_overview(locale));
    questions.push(messages::followup_count_rows(locale));
    questions.truncate(5);
    questions
}
