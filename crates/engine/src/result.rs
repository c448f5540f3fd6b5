use serde::Serialize;

use crate::dataset::Row;
use crate::lexicon::Intent;
use crate::locale::Locale;
use crate::messages;

/// Cap on returned data rows and on values listed in a unique answer.
pub const DISPLAY_LIMIT: usize = 10;

/// The immutable outcome of one query execution.
///
/// `confidence` is a self-reported score in [0, 1], not a calibrated
/// probability. `data`, when present, is capped at `DISPLAY_LIMIT` rows.
/// A remote fallback producer must emit this same record shape so hosts can
/// render and store results without caring who computed them.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub answer: String,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Row>>,
    pub follow_up_questions: Vec<String>,
    pub confidence: f64,
    pub used_columns: Vec<String>,
    pub operation: Intent,
}

impl QueryResult {
    /// The generic confidence-zero failure record. The engine itself never
    /// produces this; hosts use it when a surrounding collaborator fails so
    /// the rendering contract still holds.
    pub fn processing_error(locale: Locale) -> Self {
        QueryResult {
            answer: messages::processing_error(locale),
            explanation: messages::processing_error_explanation(locale),
            data: None,
            follow_up_questions: Vec::new(),
            confidence: 0.0,
            used_columns: Vec::new(),
            operation: Intent::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processing_error_is_confidence_zero() {
        let result = QueryResult::processing_error(Locale::EnUs);
        assert_eq!(result.confidence, 0.0);
        assert!(result.data.is_none());
        assert_eq!(result.operation, Intent::Unknown);
    }

    #[test]
    fn serializes_with_snake_case_operation_tag() {
        let result = QueryResult::processing_error(Locale::EnUs);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["operation"], "unknown");
        assert!(json.get("data").is_none());
        assert!(json["follow_up_questions"].as_array().unwrap().is_empty());
    }
}
