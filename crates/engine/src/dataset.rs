use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::value::Value;

const NULL: Value = Value::Null;

/// One data row: an insertion-ordered column -> value mapping.
///
/// Rows are sparse; columns present in one row may be absent in another.
/// Order is preserved because the first row's key order defines the sheet's
/// column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row(Vec<(String, Value)>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column. Replaces the value in place if the column exists.
    pub fn insert(&mut self, column: impl Into<String>, value: Value) {
        let column = column.into();
        match self.0.iter_mut().find(|(name, _)| *name == column) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Like `get`, but an absent column reads as `Null`.
    pub fn cell(&self, column: &str) -> &Value {
        self.get(column).unwrap_or(&NULL)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// A named, ordered sequence of rows.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Column order is defined by the first row's keys. Empty sheet -> empty.
    pub fn columns(&self) -> Vec<String> {
        match self.rows.first() {
            Some(row) => row.columns().map(str::to_string).collect(),
            None => Vec::new(),
        }
    }
}

/// A full in-memory dataset snapshot: all sheets plus the active one.
///
/// Read-only to the engine; the loader replaces it wholesale on re-load.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    sheets: Vec<Sheet>,
    active_sheet: usize,
}

impl Dataset {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self {
            sheets,
            active_sheet: 0,
        }
    }

    /// Convenience for a single-sheet dataset.
    pub fn single(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self::new(vec![Sheet {
            name: name.into(),
            rows,
        }])
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn active(&self) -> Option<&Sheet> {
        self.sheets.get(self.active_sheet)
    }

    /// Rows of the active sheet. A missing or out-of-range active sheet
    /// yields an empty slice, never a panic.
    pub fn active_rows(&self) -> &[Row] {
        self.active().map(|s| s.rows.as_slice()).unwrap_or(&[])
    }

    /// Column order of the active sheet (first row's keys).
    pub fn columns(&self) -> Vec<String> {
        self.active().map(|s| s.columns()).unwrap_or_default()
    }

    /// Switch the active sheet by name. Returns false if no sheet matches.
    pub fn set_active(&mut self, name: &str) -> bool {
        match self.sheets.iter().position(|s| s.name == name) {
            Some(index) => {
                self.active_sheet = index;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, Value)]) -> Row {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn row_preserves_insertion_order() {
        let r = row(&[
            ("b", Value::Number(1.0)),
            ("a", Value::Number(2.0)),
            ("c", Value::Number(3.0)),
        ]);
        let order: Vec<&str> = r.columns().collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn row_insert_replaces_in_place() {
        let mut r = row(&[("a", Value::Number(1.0)), ("b", Value::Number(2.0))]);
        r.insert("a", Value::Number(9.0));
        assert_eq!(r.get("a"), Some(&Value::Number(9.0)));
        let order: Vec<&str> = r.columns().collect();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn missing_cell_reads_as_null() {
        let r = row(&[("a", Value::Number(1.0))]);
        assert_eq!(r.cell("nope"), &Value::Null);
    }

    #[test]
    fn sheet_columns_come_from_first_row() {
        let sheet = Sheet {
            name: "data".into(),
            rows: vec![
                row(&[("id", Value::Number(1.0)), ("name", Value::Text("A".into()))]),
                row(&[("extra", Value::Null)]),
            ],
        };
        assert_eq!(sheet.columns(), vec!["id", "name"]);
    }

    #[test]
    fn empty_dataset_has_no_columns() {
        let dataset = Dataset::default();
        assert!(dataset.columns().is_empty());
        assert!(dataset.active_rows().is_empty());
    }

    #[test]
    fn set_active_switches_by_name() {
        let mut dataset = Dataset::new(vec![Sheet::new("one"), Sheet::new("two")]);
        assert!(dataset.set_active("two"));
        assert_eq!(dataset.active().unwrap().name, "two");
        assert!(!dataset.set_active("three"));
        assert_eq!(dataset.active().unwrap().name, "two");
    }

    #[test]
    fn row_serializes_as_ordered_map() {
        let r = row(&[
            ("id", Value::Text("48".into())),
            ("score", Value::Number(3.0)),
        ]);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"id":"48","score":3.0}"#);
    }
}
