// CSV/TSV import into a dataset

use std::io::Read;
use std::path::Path;

use sheetsage_engine::{Dataset, Row, Value};

/// Import a delimited text file. The delimiter is sniffed from the first
/// few lines; the first record is the header row.
pub fn import(path: &Path) -> Result<Dataset, String> {
    let content = read_file_as_utf8(path)?;
    let delimiter = sniff_delimiter(&content);
    let sheet_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Sheet1".to_string());
    import_from_string(&content, delimiter, &sheet_name)
}

/// Import tab-separated data without sniffing.
pub fn import_tsv(path: &Path) -> Result<Dataset, String> {
    let content = read_file_as_utf8(path)?;
    let sheet_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Sheet1".to_string());
    import_from_string(&content, b'\t', &sheet_name)
}

/// Parse delimited text into a single-sheet dataset.
///
/// The header row names the columns; each following record becomes one row
/// with cells typed via `Value::from_input`. Records shorter than the header
/// fill their trailing columns with `Null` so the sheet's column order stays
/// intact; extra fields beyond the header are dropped.
pub fn import_from_string(content: &str, delimiter: u8, sheet_name: &str) -> Result<Dataset, String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = reader.records();

    let headers: Vec<String> = match records.next() {
        Some(record) => record
            .map_err(|e| format!("failed to read header row: {e}"))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect(),
        None => return Err("input contains no header row".to_string()),
    };

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|e| format!("failed to read record: {e}"))?;
        let mut row = Row::new();
        for (index, header) in headers.iter().enumerate() {
            let value = record
                .get(index)
                .map(Value::from_input)
                .unwrap_or(Value::Null);
            row.insert(header.clone(), value);
        }
        rows.push(row);
    }

    Ok(Dataset::single(sheet_name, rows))
}

/// Detect the most likely field delimiter by checking consistency across the
/// first few lines: the candidate producing the most consistent field count
/// above one wins, higher field counts breaking ties.
fn sniff_delimiter(content: &str) -> u8 {
    let candidates: &[u8] = &[b'\t', b';', b',', b'|'];
    let sample: Vec<&str> = content.lines().take(10).collect();

    if sample.is_empty() {
        return b',';
    }

    let mut best = b',';
    let mut best_score = 0u64;

    for &delimiter in candidates {
        let counts: Vec<usize> = sample.iter().map(|line| field_count(line, delimiter)).collect();

        // Must split the first line into more than one field to be viable.
        let target = counts[0];
        if target <= 1 {
            continue;
        }

        let consistent = counts.iter().filter(|&&c| c == target).count() as u64;
        let score = consistent * target as u64;
        if score > best_score {
            best_score = score;
            best = delimiter;
        }
    }

    best
}

fn field_count(line: &str, delimiter: u8) -> usize {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes())
        .records()
        .next()
        .and_then(|r| r.ok())
        .map(|r| r.len())
        .unwrap_or(1)
}

/// Read a file and convert to UTF-8 if needed. Non-UTF-8 input falls back to
/// Windows-1252, the usual encoding of Excel-exported CSVs.
pub fn read_file_as_utf8(path: &Path) -> Result<String, String> {
    let mut file = std::fs::File::open(path)
        .map_err(|e| format!("failed to open {}: {e}", path.display()))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}
