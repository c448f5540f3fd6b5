//! Word-list locale detection for the "auto" setting.
//!
//! The engine never guesses a language; this host-side heuristic resolves
//! "auto" to a concrete locale before the engine is called.

use sheetsage_engine::Locale;

const GERMAN_HINTS: &[&str] = &[
    "der", "die", "das", "und", "ist", "was", "wie", "von", "mit", "für",
    "welche", "zeig", "gib", "viele", "durchschnitt", "summe", "anzahl",
    "spalte", "zeilen", "über", "finde", "suche",
];

const ENGLISH_HINTS: &[&str] = &[
    "the", "is", "what", "of", "how", "and", "for", "with", "which", "show",
    "give", "many", "average", "sum", "count", "column", "rows", "about",
    "find", "search", "in",
];

/// German wins with at least two hits and a strict majority over English;
/// everything else, including ties and empty input, resolves to English.
pub fn detect_locale(query: &str) -> Locale {
    let lowered = query.to_lowercase();

    let mut german = 0;
    let mut english = 0;
    for word in lowered.split(|c: char| !c.is_alphanumeric()) {
        if word.is_empty() {
            continue;
        }
        if GERMAN_HINTS.contains(&word) {
            german += 1;
        }
        if ENGLISH_HINTS.contains(&word) {
            english += 1;
        }
    }

    if german >= 2 && german > english {
        Locale::DeDe
    } else {
        Locale::EnUs
    }
}
