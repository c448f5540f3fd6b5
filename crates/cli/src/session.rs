use std::path::Path;

use sheetsage_engine::QueryResult;

/// One answered question, as stored in the in-memory history.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub asked_at: String,
    pub query: String,
    pub operation: String,
    pub confidence: f64,
    pub answer: String,
}

/// Per-run query history. The engine never stores anything; history and its
/// CSV export are host concerns.
#[derive(Debug, Default)]
pub struct Session {
    entries: Vec<HistoryEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, query: &str, result: &QueryResult) {
        self.entries.push(HistoryEntry {
            asked_at: chrono::Utc::now().to_rfc3339(),
            query: query.to_string(),
            operation: result.operation.to_string(),
            confidence: result.confidence,
            answer: result.answer.clone(),
        });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the history as CSV.
    pub fn export_csv(&self, path: &Path) -> Result<(), String> {
        let mut writer = csv::Writer::from_path(path)
            .map_err(|e| format!("failed to create {}: {e}", path.display()))?;

        writer
            .write_record(["asked_at", "query", "operation", "confidence", "answer"])
            .map_err(|e| e.to_string())?;
        for entry in &self.entries {
            writer
                .write_record([
                    entry.asked_at.as_str(),
                    entry.query.as_str(),
                    entry.operation.as_str(),
                    &format!("{:.2}", entry.confidence),
                    entry.answer.as_str(),
                ])
                .map_err(|e| e.to_string())?;
        }
        writer.flush().map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetsage_engine::{execute, Dataset, Locale, Row, Value};

    fn sample_result() -> QueryResult {
        let mut row = Row::new();
        row.insert("score", Value::Number(3.0));
        let dataset = Dataset::single("data", vec![row]);
        execute("what is the average of score", &dataset, Locale::EnUs)
    }

    #[test]
    fn records_in_order() {
        let mut session = Session::new();
        let result = sample_result();
        session.record("first", &result);
        session.record("second", &result);
        assert_eq!(session.len(), 2);
        assert_eq!(session.entries()[0].query, "first");
        assert_eq!(session.entries()[1].query, "second");
    }

    #[test]
    fn exports_csv_with_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");

        let mut session = Session::new();
        session.record("what is the average of score", &sample_result());
        session.export_csv(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert!(lines.next().unwrap().starts_with("asked_at,query"));
        let row = lines.next().unwrap();
        assert!(row.contains("average"));
        assert!(row.contains("0.90"));
    }
}
