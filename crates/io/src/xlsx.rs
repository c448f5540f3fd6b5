// Excel import (xlsx, xls, xlsb, ods) via calamine

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::{Duration, NaiveDate};
use sheetsage_engine::{Dataset, Row, Sheet, Value};

/// Import an Excel workbook. Every worksheet becomes a dataset sheet; the
/// first row of each sheet is its header row. The first sheet is active.
pub fn import(path: &Path) -> Result<Dataset, String> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| format!("failed to open Excel file: {e}"))?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    if sheet_names.is_empty() {
        return Err("Excel file contains no sheets".to_string());
    }

    let mut sheets = Vec::new();
    for sheet_name in &sheet_names {
        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e| format!("failed to read sheet '{sheet_name}': {e}"))?;

        let mut sheet = Sheet::new(sheet_name.clone());
        let mut rows_iter = range.rows();

        let headers: Vec<String> = match rows_iter.next() {
            Some(header_row) => header_row
                .iter()
                .enumerate()
                .map(|(index, cell)| header_name(cell, index))
                .collect(),
            None => {
                sheets.push(sheet);
                continue;
            }
        };

        for cells in rows_iter {
            let mut row = Row::new();
            let mut filled = false;
            for (index, header) in headers.iter().enumerate() {
                let value = cells.get(index).map(cell_value).unwrap_or(Value::Null);
                filled = filled || value != Value::Null;
                row.insert(header.clone(), value);
            }
            // Skip trailing all-empty rows from the used range.
            if filled {
                sheet.rows.push(row);
            }
        }
        sheets.push(sheet);
    }

    Ok(Dataset::new(sheets))
}

fn header_name(cell: &Data, index: usize) -> String {
    let text = match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => cell_value(other).display(),
    };
    if text.is_empty() {
        format!("Column{}", index + 1)
    } else {
        text
    }
}

fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) => Value::from_input(s),
        Data::Float(n) => Value::Number(*n),
        Data::Int(n) => Value::Number(*n as f64),
        Data::Bool(b) => Value::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::Error(e) => Value::Text(format!("#{e:?}")),
        // Serial date in the 1900 system; the time-of-day fraction is
        // dropped.
        Data::DateTime(dt) => serial_to_date(dt.as_f64()),
        Data::DateTimeIso(s) => Value::from_input(s),
        Data::DurationIso(s) => Value::Text(s.clone()),
    }
}

fn serial_to_date(serial: f64) -> Value {
    let epoch = match NaiveDate::from_ymd_opt(1899, 12, 30) {
        Some(date) => date,
        None => return Value::Number(serial),
    };
    match epoch.checked_add_signed(Duration::days(serial.floor() as i64)) {
        Some(date) => Value::Date(date),
        None => Value::Number(serial),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_values_map_to_tagged_scalars() {
        assert_eq!(cell_value(&Data::Empty), Value::Null);
        assert_eq!(cell_value(&Data::Float(2.5)), Value::Number(2.5));
        assert_eq!(cell_value(&Data::Int(3)), Value::Number(3.0));
        assert_eq!(
            cell_value(&Data::String("hello".into())),
            Value::Text("hello".into())
        );
        // Numeric strings are typed on import like typed-in cells.
        assert_eq!(cell_value(&Data::String("42".into())), Value::Number(42.0));
        assert_eq!(
            cell_value(&Data::Bool(true)),
            Value::Text("TRUE".into())
        );
    }

    #[test]
    fn serial_dates_land_in_the_1900_system() {
        // Serial 45658 = 2025-01-01.
        assert_eq!(
            serial_to_date(45658.0),
            Value::Date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        );
        // Time-of-day fraction is dropped.
        assert_eq!(
            serial_to_date(45658.75),
            Value::Date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        );
    }

    #[test]
    fn empty_headers_get_positional_names() {
        assert_eq!(header_name(&Data::Empty, 2), "Column3");
        assert_eq!(header_name(&Data::String(" score ".into()), 0), "score");
        assert_eq!(header_name(&Data::Float(2024.0), 1), "2024");
    }
}
