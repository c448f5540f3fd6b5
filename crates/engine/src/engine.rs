//! Query dispatch.
//!
//! `execute` is the one entry point hosts call: classify the query, resolve
//! the columns it mentions, run the matching handler, and apply the
//! low-confidence fallback policy. Synchronous, non-mutating, and total:
//! malformed input degrades to low-confidence results instead of errors.

use crate::classify::classify;
use crate::columns::resolve_columns;
use crate::dataset::{Dataset, Row};
use crate::followups;
use crate::lexicon::Intent;
use crate::locale::Locale;
use crate::messages;
use crate::ops;
use crate::result::QueryResult;
use crate::sampler::{ClockSampler, Sampler};

/// Execute a query against the dataset's active sheet.
pub fn execute(query: &str, dataset: &Dataset, locale: Locale) -> QueryResult {
    execute_with(query, dataset, locale, &mut ClockSampler::new())
}

/// Like `execute`, with an injected sampler for the fallback follow-up
/// picks. Given a deterministic sampler the whole call is deterministic.
pub fn execute_with(
    query: &str,
    dataset: &Dataset,
    locale: Locale,
    sampler: &mut dyn Sampler,
) -> QueryResult {
    let columns = dataset.columns();
    let rows = dataset.active_rows();
    let intent = classify(query);
    let resolved = resolve_columns(query, &columns);

    match intent {
        Intent::Average => ops::average(query, rows, &resolved, locale),
        Intent::Sum => ops::sum(query, rows, &resolved, locale),
        Intent::Count => ops::count(query, rows, &resolved, locale),
        Intent::Min => ops::min(query, rows, &resolved, locale),
        Intent::Max => ops::max(query, rows, &resolved, locale),
        Intent::Correlation => ops::correlation(query, rows, &resolved, locale),
        Intent::Unique => ops::unique(query, rows, &resolved, locale),
        Intent::Overview => ops::overview(query, rows, &columns, locale),
        Intent::Search => ops::search(query, rows, &columns, locale),
        // No dedicated handler: try a search, then the generic fallback.
        Intent::Filter | Intent::Trend | Intent::Unknown => {
            fallback(query, rows, &columns, locale, sampler)
        }
    }
}

/// Delegate to search; when the search could not even identify a value to
/// look for (confidence at or below 0.5), answer with the generic
/// clarification at confidence 0.3 instead.
fn fallback(
    query: &str,
    rows: &[Row],
    columns: &[String],
    locale: Locale,
    sampler: &mut dyn Sampler,
) -> QueryResult {
    let searched = ops::search(query, rows, columns, locale);
    if searched.confidence > 0.5 {
        return searched;
    }

    QueryResult {
        answer: messages::dont_understand(locale),
        explanation: messages::dont_understand_explanation(locale),
        data: None,
        follow_up_questions: followups::fallback(locale, columns, sampler),
        confidence: 0.3,
        used_columns: Vec::new(),
        operation: Intent::Unknown,
    }
}
