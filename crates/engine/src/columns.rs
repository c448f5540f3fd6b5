use crate::lexicon::COLUMN_KEYWORDS;

/// Find the known columns a query mentions.
///
/// Each column name is matched case-insensitively as a substring of the
/// query. The result keeps the order of `column_names` (the sheet's column
/// order), not the order of appearance in the query, and is deduplicated.
pub fn resolve_columns(query: &str, column_names: &[String]) -> Vec<String> {
    let query = query.to_lowercase();

    let mut resolved = Vec::new();
    for name in column_names {
        if name.is_empty() {
            continue;
        }
        if query.contains(&name.to_lowercase()) && !resolved.contains(name) {
            resolved.push(name.clone());
        }
    }
    resolved
}

/// Scan the generic keyword vocabulary for words occurring in the query,
/// independent of the actual column names.
pub fn extract_column_keywords(query: &str) -> Vec<&'static str> {
    let query = query.to_lowercase();
    COLUMN_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| query.contains(keyword))
        .collect()
}

/// Guess a target column from the keyword vocabulary: the first keyword
/// found in the query that is a substring of a column name wins, columns
/// checked in sheet order. A heuristic, not a guarantee.
pub fn keyword_target_column(query: &str, column_names: &[String]) -> Option<String> {
    for keyword in extract_column_keywords(query) {
        for name in column_names {
            if name.to_lowercase().contains(keyword) {
                return Some(name.clone());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_mentioned_columns_in_sheet_order() {
        let columns = cols(&["price", "city", "score"]);
        let resolved = resolve_columns("compare score and price", &columns);
        assert_eq!(resolved, vec!["price", "score"]);
    }

    #[test]
    fn resolution_is_case_insensitive() {
        let columns = cols(&["Price"]);
        assert_eq!(resolve_columns("average price", &columns), vec!["Price"]);
    }

    #[test]
    fn no_mention_resolves_nothing() {
        let columns = cols(&["price", "city"]);
        assert!(resolve_columns("how many rows", &columns).is_empty());
    }

    #[test]
    fn keywords_found_by_substring() {
        let keywords = extract_column_keywords("find the customer id in the list");
        assert!(keywords.contains(&"id"));
    }

    #[test]
    fn first_keyword_first_column_wins() {
        // "id" precedes "name" in the vocabulary; "customer_id" is the
        // first column containing it.
        let columns = cols(&["customer_id", "order_id", "name"]);
        let target = keyword_target_column("what name goes with this id", &columns);
        assert_eq!(target.as_deref(), Some("customer_id"));
    }

    #[test]
    fn no_keyword_match_yields_none() {
        let columns = cols(&["alpha", "beta"]);
        assert_eq!(keyword_target_column("is 48 in the data", &columns), None);
    }
}
