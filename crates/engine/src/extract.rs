use regex::Regex;

/// Pull literal search tokens out of free text.
///
/// Three independent scans over the raw query, concatenated in fixed order:
/// maximal digit runs, the contents of quoted spans, then identifier-plus-
/// digit tokens (letters, optional hyphen, digits). Duplicates across scans
/// are preserved; callers use only the first element as the active search
/// value.
pub fn extract_search_values(query: &str) -> Vec<String> {
    let mut values = Vec::new();

    let digits = Regex::new(r"\d+").unwrap();
    for m in digits.find_iter(query) {
        values.push(m.as_str().to_string());
    }

    let quoted = Regex::new(r#""([^"]+)"|'([^']+)'"#).unwrap();
    for captures in quoted.captures_iter(query) {
        if let Some(m) = captures.get(1).or_else(|| captures.get(2)) {
            values.push(m.as_str().to_string());
        }
    }

    let identifier = Regex::new(r"[A-Za-z]+-?\d+").unwrap();
    for m in identifier.find_iter(query) {
        values.push(m.as_str().to_string());
    }

    values
}
