use crate::dataset::Row;
use crate::followups;
use crate::lexicon::Intent;
use crate::locale::Locale;
use crate::messages;
use crate::result::QueryResult;

use super::numeric_cells;

const MIN_SAMPLES: usize = 5;

/// Pearson correlation between the first two resolved columns.
///
/// Each column's numeric values are filtered independently and then paired
/// by index over the first `min(n1, n2)` entries. When the two columns have
/// non-numeric cells in different rows the pairs are therefore not aligned
/// to the same source row; this matches the contracted behavior (see
/// DESIGN.md) rather than row-joint filtering.
pub fn correlation(_query: &str, rows: &[Row], resolved: &[String], locale: Locale) -> QueryResult {
    if resolved.len() < 2 {
        return QueryResult {
            answer: messages::ask_for_two_columns(locale),
            explanation: messages::ask_for_column_explanation(locale),
            data: None,
            follow_up_questions: Vec::new(),
            confidence: 0.5,
            used_columns: resolved.to_vec(),
            operation: Intent::Correlation,
        };
    }

    let first = &resolved[0];
    let second = &resolved[1];
    let xs = numeric_cells(rows, first);
    let ys = numeric_cells(rows, second);
    let pairs = xs.len().min(ys.len());

    if pairs < MIN_SAMPLES {
        return QueryResult {
            answer: messages::insufficient_data(locale, pairs),
            explanation: messages::insufficient_data_explanation(locale),
            data: None,
            follow_up_questions: followups::generic_prompts(locale),
            confidence: 0.7,
            used_columns: vec![first.clone(), second.clone()],
            operation: Intent::Correlation,
        };
    }

    let r = pearson(&xs[..pairs], &ys[..pairs]);

    QueryResult {
        answer: messages::correlation_answer(locale, first, second, r),
        explanation: messages::correlation_explanation(locale, pairs, first, second),
        data: None,
        follow_up_questions: followups::for_correlation(locale, first, second),
        confidence: 0.9,
        used_columns: vec![first.clone(), second.clone()],
        operation: Intent::Correlation,
    }
}

/// Pearson coefficient over equal-length slices. A zero denominator (a
/// constant series) yields 0.0, keeping the result inside [-1, 1].
fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        covariance += (x - mean_x) * (y - mean_y);
        var_x += (x - mean_x) * (x - mean_x);
        var_y += (y - mean_y) * (y - mean_y);
    }

    let denominator = var_x.sqrt() * var_y.sqrt();
    if denominator == 0.0 {
        return 0.0;
    }
    (covariance / denominator).clamp(-1.0, 1.0)
}
