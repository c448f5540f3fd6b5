use crate::lexicon::{Intent, INTENT_PATTERNS};

/// Classify a query into an intent.
///
/// For each intent, in declaration order, count how many of its patterns
/// occur in the lowercased query. The intent score is the match count times
/// 1.5 when the intent's pattern set contains a multi-word phrase, times 1.0
/// otherwise. The first intent with the strictly highest score wins; a top
/// score of zero yields `Unknown`. Pure and infallible.
pub fn classify(query: &str) -> Intent {
    let query = query.to_lowercase();

    let mut best = Intent::Unknown;
    let mut best_score = 0.0_f64;

    for entry in INTENT_PATTERNS {
        let matches = entry
            .patterns
            .iter()
            .filter(|pattern| pattern_matches(pattern, &query))
            .count();
        if matches == 0 {
            continue;
        }

        let weight = if entry.patterns.iter().any(|p| p.contains(' ')) {
            1.5
        } else {
            1.0
        };
        let score = matches as f64 * weight;

        // Strictly greater: ties keep the earlier-declared intent.
        if score > best_score {
            best_score = score;
            best = entry.intent;
        }
    }

    best
}

/// Literal patterns match as substrings. Wildcard patterns match when every
/// non-empty `*`-segment occurs somewhere in the query, in any order.
fn pattern_matches(pattern: &str, query: &str) -> bool {
    if pattern.contains('*') {
        pattern
            .split('*')
            .filter(|segment| !segment.is_empty())
            .all(|segment| query.contains(segment))
    } else {
        query.contains(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_average_query() {
        assert_eq!(classify("what is the average of score"), Intent::Average);
    }

    #[test]
    fn german_queries_classify() {
        assert_eq!(classify("was ist der durchschnitt von preis"), Intent::Average);
        assert_eq!(classify("wie viele zeilen gibt es"), Intent::Count);
        assert_eq!(classify("zeig mir einen überblick"), Intent::Overview);
    }

    #[test]
    fn gibberish_is_unknown() {
        assert_eq!(classify("asdkjasdk"), Intent::Unknown);
        assert_eq!(classify(""), Intent::Unknown);
    }

    #[test]
    fn tie_breaks_to_earlier_declared_intent() {
        // One single-word hit each for average and sum; both intent sets
        // carry multi-word patterns, so the scores tie at 1.5.
        assert_eq!(classify("average sum"), Intent::Average);
        // Same construction for correlation vs unique.
        assert_eq!(classify("correlate unique"), Intent::Correlation);
    }

    #[test]
    fn more_matches_beat_fewer() {
        // "sum" scores one literal; the average intent scores three
        // patterns ("average", "average of *", "what is the average *").
        assert_eq!(classify("what is the average of sum"), Intent::Average);
    }

    #[test]
    fn wildcard_segments_match_in_any_order() {
        assert!(pattern_matches(
            "correlation between * and *",
            "is there a correlation between price and amount"
        ));
        // Segments must each occur; " and " is missing here.
        assert!(!pattern_matches(
            "correlation between * and *",
            "correlation between price, amount"
        ));
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("What Is The AVERAGE of score"), Intent::Average);
    }

    #[test]
    fn classify_is_deterministic() {
        let query = "find the highest price";
        let first = classify(query);
        for _ in 0..10 {
            assert_eq!(classify(query), first);
        }
    }
}
