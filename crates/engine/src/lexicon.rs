//! Static intent lexicon.
//!
//! Each intent owns a set of trigger patterns in English and German. A
//! pattern is either a literal phrase (substring match) or a wildcard
//! template: every non-empty `*`-segment must occur somewhere in the query,
//! order-independent.
//!
//! Declaration order matters: the classifier breaks score ties in favor of
//! the earlier-declared intent, so the order of `INTENT_PATTERNS` (and of
//! the `Intent` variants) is a contract, not a styling choice.

use std::fmt;

use serde::Serialize;

/// The classified purpose of a query. `Filter`, `Trend`, and `Unknown` have
/// no dedicated handler and fall through to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Average,
    Sum,
    Count,
    Min,
    Max,
    Correlation,
    Unique,
    Overview,
    Search,
    Filter,
    Trend,
    Unknown,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Average => "average",
            Intent::Sum => "sum",
            Intent::Count => "count",
            Intent::Min => "min",
            Intent::Max => "max",
            Intent::Correlation => "correlation",
            Intent::Unique => "unique",
            Intent::Overview => "overview",
            Intent::Search => "search",
            Intent::Filter => "filter",
            Intent::Trend => "trend",
            Intent::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub struct IntentPatterns {
    pub intent: Intent,
    pub patterns: &'static [&'static str],
}

/// Trigger phrases per intent, all lowercase. `*` marks wildcard segments.
pub const INTENT_PATTERNS: &[IntentPatterns] = &[
    IntentPatterns {
        intent: Intent::Average,
        patterns: &[
            "average",
            "mean",
            "avg",
            "durchschnitt",
            "mittelwert",
            "average of *",
            "what is the average *",
            "durchschnitt von *",
        ],
    },
    IntentPatterns {
        intent: Intent::Sum,
        patterns: &[
            "sum",
            "total",
            "add up",
            "summe",
            "gesamtsumme",
            "sum of *",
            "total of *",
            "summe von *",
        ],
    },
    IntentPatterns {
        intent: Intent::Count,
        patterns: &[
            "count",
            "how many",
            "number of",
            "anzahl",
            "wie viele",
            "count of *",
        ],
    },
    IntentPatterns {
        intent: Intent::Min,
        patterns: &[
            "minimum",
            "smallest",
            "lowest",
            "kleinste",
            "niedrigste",
            "smallest value",
            "lowest *",
            "minimum von *",
        ],
    },
    IntentPatterns {
        intent: Intent::Max,
        patterns: &[
            "maximum",
            "largest",
            "highest",
            "biggest",
            "größte",
            "höchste",
            "highest *",
            "maximum von *",
        ],
    },
    IntentPatterns {
        intent: Intent::Correlation,
        patterns: &[
            "correlation",
            "correlate",
            "korrelation",
            "zusammenhang",
            "correlation between * and *",
            "relationship between *",
            "zusammenhang zwischen *",
        ],
    },
    IntentPatterns {
        intent: Intent::Unique,
        patterns: &[
            "unique",
            "distinct",
            "einzigartig",
            "unique values",
            "different values",
            "eindeutige werte",
            "verschiedene werte",
        ],
    },
    IntentPatterns {
        intent: Intent::Overview,
        patterns: &[
            "overview",
            "summary",
            "summarize",
            "describe",
            "überblick",
            "zusammenfassung",
            "tell me about *",
            "beschreibe die daten",
        ],
    },
    IntentPatterns {
        intent: Intent::Search,
        patterns: &[
            "search",
            "find",
            "suche",
            "finde",
            "look for",
            "show me",
            "where is",
            "zeig mir",
            "wo ist",
        ],
    },
    IntentPatterns {
        intent: Intent::Filter,
        patterns: &[
            "filter",
            "filtern",
            "only show",
            "rows where *",
            "nur zeilen mit *",
        ],
    },
    IntentPatterns {
        intent: Intent::Trend,
        patterns: &[
            "trend",
            "entwicklung",
            "verlauf",
            "over time",
            "im zeitverlauf",
        ],
    },
];

/// Generic field-identifier vocabulary for the search handler's target-column
/// guess. Scanned in this order; the first keyword whose text occurs in the
/// query and matches a column name wins.
pub const COLUMN_KEYWORDS: &[&str] = &[
    "id", "name", "date", "time", "price", "amount", "cost", "total", "value",
    "count", "number", "city", "country", "email", "phone", "status",
    "category", "type", "code", "year",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_intent_with_patterns_has_a_multi_word_phrase() {
        // The 1.5x score boost applies per intent; the lexicon is tuned so
        // every declared intent carries at least one multi-word pattern.
        for entry in INTENT_PATTERNS {
            assert!(
                entry.patterns.iter().any(|p| p.contains(' ')),
                "intent {} has no multi-word pattern",
                entry.intent
            );
        }
    }

    #[test]
    fn patterns_are_lowercase() {
        for entry in INTENT_PATTERNS {
            for pattern in entry.patterns {
                assert_eq!(*pattern, pattern.to_lowercase().as_str());
            }
        }
    }

    #[test]
    fn no_pattern_is_all_wildcard() {
        for entry in INTENT_PATTERNS {
            for pattern in entry.patterns {
                if pattern.contains('*') {
                    assert!(
                        pattern.split('*').any(|s| !s.is_empty()),
                        "pattern {pattern:?} would match every query"
                    );
                }
            }
        }
    }

    #[test]
    fn unknown_declares_no_patterns() {
        assert!(INTENT_PATTERNS.iter().all(|e| e.intent != Intent::Unknown));
    }
}
