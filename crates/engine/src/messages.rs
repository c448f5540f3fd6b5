//! Localized response templates.
//!
//! Every user-facing string the engine produces comes from here, keyed by
//! `Locale`. Templates are deterministic: same inputs, same text.

use crate::locale::Locale;

// ---------------------------------------------------------------------------
// Prompts (low-confidence clarification paths)
// ---------------------------------------------------------------------------

pub fn ask_for_column(locale: Locale) -> String {
    match locale {
        Locale::EnUs => "Which column should I use? Please name one of the columns in your sheet.".into(),
        Locale::DeDe => "Welche Spalte soll ich verwenden? Bitte nennen Sie eine Spalte aus Ihrer Tabelle.".into(),
    }
}

pub fn ask_for_column_explanation(locale: Locale) -> String {
    match locale {
        Locale::EnUs => "The question did not mention any known column name.".into(),
        Locale::DeDe => "Die Frage hat keinen bekannten Spaltennamen erwähnt.".into(),
    }
}

pub fn ask_for_two_columns(locale: Locale) -> String {
    match locale {
        Locale::EnUs => "I need two columns to compute a correlation. Please name both columns.".into(),
        Locale::DeDe => "Für eine Korrelation brauche ich zwei Spalten. Bitte nennen Sie beide Spalten.".into(),
    }
}

pub fn ask_for_search_value(locale: Locale) -> String {
    match locale {
        Locale::EnUs => "What should I search for? Try a number or a quoted term.".into(),
        Locale::DeDe => "Wonach soll ich suchen? Versuchen Sie eine Zahl oder einen Begriff in Anführungszeichen.".into(),
    }
}

pub fn dont_understand(locale: Locale) -> String {
    match locale {
        Locale::EnUs => "I don't understand that question yet. Try asking for an average, a sum, a count, or a search.".into(),
        Locale::DeDe => "Diese Frage verstehe ich noch nicht. Fragen Sie nach einem Durchschnitt, einer Summe, einer Anzahl oder einer Suche.".into(),
    }
}

pub fn dont_understand_explanation(locale: Locale) -> String {
    match locale {
        Locale::EnUs => "No supported operation matched the question and a search found nothing.".into(),
        Locale::DeDe => "Keine unterstützte Operation passte zur Frage und eine Suche ergab nichts.".into(),
    }
}

pub fn processing_error(locale: Locale) -> String {
    match locale {
        Locale::EnUs => "Something went wrong while processing your query. Please try again.".into(),
        Locale::DeDe => "Bei der Verarbeitung Ihrer Anfrage ist etwas schiefgelaufen. Bitte versuchen Sie es erneut.".into(),
    }
}

pub fn processing_error_explanation(locale: Locale) -> String {
    match locale {
        Locale::EnUs => "An internal error prevented the query from completing.".into(),
        Locale::DeDe => "Ein interner Fehler hat die Verarbeitung der Anfrage verhindert.".into(),
    }
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

pub fn average_answer(locale: Locale, column: &str, mean: f64) -> String {
    match locale {
        Locale::EnUs => format!("The average of {column} is {mean:.2}."),
        Locale::DeDe => format!("Der Durchschnitt von {column} ist {mean:.2}."),
    }
}

pub fn average_explanation(locale: Locale, count: usize, column: &str) -> String {
    match locale {
        Locale::EnUs => format!("Computed the arithmetic mean over {count} numeric values in column {column}."),
        Locale::DeDe => format!("Arithmetisches Mittel über {count} numerische Werte in Spalte {column} berechnet."),
    }
}

pub fn sum_answer(locale: Locale, column: &str, total: f64) -> String {
    match locale {
        Locale::EnUs => format!("The sum of {column} is {total:.2}."),
        Locale::DeDe => format!("Die Summe von {column} ist {total:.2}."),
    }
}

pub fn sum_explanation(locale: Locale, count: usize, column: &str) -> String {
    match locale {
        Locale::EnUs => format!("Added up {count} numeric values in column {column}."),
        Locale::DeDe => format!("{count} numerische Werte in Spalte {column} addiert."),
    }
}

pub fn no_numeric_values(locale: Locale, column: &str) -> String {
    match locale {
        Locale::EnUs => format!("I found no numeric values in column {column}."),
        Locale::DeDe => format!("In Spalte {column} habe ich keine numerischen Werte gefunden."),
    }
}

pub fn no_numeric_explanation(locale: Locale, column: &str) -> String {
    match locale {
        Locale::EnUs => format!("None of the cells in column {column} parse as a number."),
        Locale::DeDe => format!("Keine Zelle in Spalte {column} lässt sich als Zahl lesen."),
    }
}

// ---------------------------------------------------------------------------
// Count
// ---------------------------------------------------------------------------

pub fn count_rows_answer(locale: Locale, rows: usize) -> String {
    match locale {
        Locale::EnUs => format!("The sheet contains {rows} rows."),
        Locale::DeDe => format!("Die Tabelle enthält {rows} Zeilen."),
    }
}

pub fn count_rows_explanation(locale: Locale) -> String {
    match locale {
        Locale::EnUs => "Counted every row of the active sheet.".into(),
        Locale::DeDe => "Alle Zeilen der aktiven Tabelle gezählt.".into(),
    }
}

pub fn count_cells_answer(locale: Locale, count: usize, column: &str) -> String {
    match locale {
        Locale::EnUs => format!("Column {column} has {count} filled entries."),
        Locale::DeDe => format!("Spalte {column} hat {count} ausgefüllte Einträge."),
    }
}

pub fn count_cells_explanation(locale: Locale, column: &str) -> String {
    match locale {
        Locale::EnUs => format!("Counted the rows where column {column} is neither missing nor empty."),
        Locale::DeDe => format!("Zeilen gezählt, in denen Spalte {column} weder fehlt noch leer ist."),
    }
}

// ---------------------------------------------------------------------------
// Extrema
// ---------------------------------------------------------------------------

pub fn min_answer(locale: Locale, column: &str, value: f64) -> String {
    match locale {
        Locale::EnUs => format!("The minimum of {column} is {}.", trim_number(value)),
        Locale::DeDe => format!("Das Minimum von {column} ist {}.", trim_number(value)),
    }
}

pub fn max_answer(locale: Locale, column: &str, value: f64) -> String {
    match locale {
        Locale::EnUs => format!("The maximum of {column} is {}.", trim_number(value)),
        Locale::DeDe => format!("Das Maximum von {column} ist {}.", trim_number(value)),
    }
}

pub fn extremum_explanation(locale: Locale, count: usize, column: &str, matches: usize) -> String {
    match locale {
        Locale::EnUs => format!("Compared {count} numeric values in column {column}; {matches} rows hold the extreme value."),
        Locale::DeDe => format!("{count} numerische Werte in Spalte {column} verglichen; {matches} Zeilen enthalten den Extremwert."),
    }
}

// ---------------------------------------------------------------------------
// Correlation
// ---------------------------------------------------------------------------

pub fn correlation_answer(locale: Locale, a: &str, b: &str, r: f64) -> String {
    let description = correlation_strength(locale, r);
    match locale {
        Locale::EnUs => format!("The correlation between {a} and {b} is {r:.2} ({description})."),
        Locale::DeDe => format!("Die Korrelation zwischen {a} und {b} beträgt {r:.2} ({description})."),
    }
}

pub fn correlation_explanation(locale: Locale, pairs: usize, a: &str, b: &str) -> String {
    match locale {
        Locale::EnUs => format!("Pearson coefficient over {pairs} numeric value pairs from columns {a} and {b}."),
        Locale::DeDe => format!("Pearson-Koeffizient über {pairs} numerische Wertepaare aus den Spalten {a} und {b}."),
    }
}

/// Strength wording: magnitude below 0.3 is weak, below 0.7 moderate,
/// otherwise strong; the sign gives the direction.
pub fn correlation_strength(locale: Locale, r: f64) -> String {
    let strength = match locale {
        Locale::EnUs => {
            if r.abs() < 0.3 {
                "weak"
            } else if r.abs() < 0.7 {
                "moderate"
            } else {
                "strong"
            }
        }
        Locale::DeDe => {
            if r.abs() < 0.3 {
                "schwach"
            } else if r.abs() < 0.7 {
                "moderat"
            } else {
                "stark"
            }
        }
    };
    let direction = match locale {
        Locale::EnUs => {
            if r < 0.0 {
                "negative"
            } else {
                "positive"
            }
        }
        Locale::DeDe => {
            if r < 0.0 {
                "negativ"
            } else {
                "positiv"
            }
        }
    };
    match locale {
        Locale::EnUs => format!("{strength} and {direction}"),
        Locale::DeDe => format!("{strength} und {direction}"),
    }
}

pub fn insufficient_data(locale: Locale, pairs: usize) -> String {
    match locale {
        Locale::EnUs => format!("Only {pairs} numeric value pairs are available; I need at least 5 for a correlation."),
        Locale::DeDe => format!("Es sind nur {pairs} numerische Wertepaare vorhanden; für eine Korrelation brauche ich mindestens 5."),
    }
}

pub fn insufficient_data_explanation(locale: Locale) -> String {
    match locale {
        Locale::EnUs => "Too few numeric samples for a meaningful coefficient.".into(),
        Locale::DeDe => "Zu wenige numerische Werte für einen aussagekräftigen Koeffizienten.".into(),
    }
}

// ---------------------------------------------------------------------------
// Unique / overview
// ---------------------------------------------------------------------------

pub fn unique_answer(locale: Locale, column: &str, total: usize, shown: &[String], hidden: usize) -> String {
    let list = shown.join(", ");
    match locale {
        Locale::EnUs => {
            if hidden > 0 {
                format!("Column {column} has {total} distinct values: {list} and {hidden} more.")
            } else {
                format!("Column {column} has {total} distinct values: {list}.")
            }
        }
        Locale::DeDe => {
            if hidden > 0 {
                format!("Spalte {column} hat {total} verschiedene Werte: {list} und {hidden} weitere.")
            } else {
                format!("Spalte {column} hat {total} verschiedene Werte: {list}.")
            }
        }
    }
}

pub fn unique_explanation(locale: Locale, column: &str) -> String {
    match locale {
        Locale::EnUs => format!("Collected distinct non-empty values of column {column} in order of first occurrence."),
        Locale::DeDe => format!("Verschiedene nicht-leere Werte der Spalte {column} in der Reihenfolge ihres ersten Auftretens gesammelt."),
    }
}

pub fn column_empty(locale: Locale, column: &str) -> String {
    match locale {
        Locale::EnUs => format!("Column {column} contains no values."),
        Locale::DeDe => format!("Spalte {column} enthält keine Werte."),
    }
}

pub fn overview_answer(locale: Locale, rows: usize, columns: usize, numeric: usize) -> String {
    match locale {
        Locale::EnUs => format!("The sheet has {rows} rows and {columns} columns, {numeric} of them numeric."),
        Locale::DeDe => format!("Die Tabelle hat {rows} Zeilen und {columns} Spalten, davon {numeric} numerisch."),
    }
}

pub fn overview_explanation(locale: Locale) -> String {
    match locale {
        Locale::EnUs => "A column counts as numeric when its first sampled values all parse as numbers.".into(),
        Locale::DeDe => "Eine Spalte gilt als numerisch, wenn alle zuerst geprüften Werte Zahlen sind.".into(),
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

pub fn search_found(locale: Locale, matches: usize, value: &str) -> String {
    match locale {
        Locale::EnUs => format!("Found {matches} rows matching \"{value}\"."),
        Locale::DeDe => format!("{matches} Zeilen gefunden, die \"{value}\" entsprechen."),
    }
}

pub fn search_found_explanation(locale: Locale, value: &str, column: Option<&str>) -> String {
    match (locale, column) {
        (Locale::EnUs, Some(column)) => format!("Compared \"{value}\" against column {column}."),
        (Locale::EnUs, None) => format!("Compared \"{value}\" against every column."),
        (Locale::DeDe, Some(column)) => format!("\"{value}\" mit Spalte {column} verglichen."),
        (Locale::DeDe, None) => format!("\"{value}\" mit allen Spalten verglichen."),
    }
}

pub fn search_not_found(locale: Locale, value: &str) -> String {
    match locale {
        Locale::EnUs => format!("No rows match \"{value}\"."),
        Locale::DeDe => format!("Keine Zeilen entsprechen \"{value}\"."),
    }
}

// ---------------------------------------------------------------------------
// Follow-up questions
// ---------------------------------------------------------------------------

pub fn followup_average(locale: Locale, column: &str) -> String {
    match locale {
        Locale::EnUs => format!("What is the average of {column}?"),
        Locale::DeDe => format!("Was ist der Durchschnitt von {column}?"),
    }
}

pub fn followup_sum(locale: Locale, column: &str) -> String {
    match locale {
        Locale::EnUs => format!("What is the sum of {column}?"),
        Locale::DeDe => format!("Was ist die Summe von {column}?"),
    }
}

pub fn followup_min(locale: Locale, column: &str) -> String {
    match locale {
        Locale::EnUs => format!("What is the smallest value of {column}?"),
        Locale::DeDe => format!("Was ist der kleinste Wert von {column}?"),
    }
}

pub fn followup_max(locale: Locale, column: &str) -> String {
    match locale {
        Locale::EnUs => format!("What is the highest value of {column}?"),
        Locale::DeDe => format!("Was ist der höchste Wert von {column}?"),
    }
}

pub fn followup_unique(locale: Locale, column: &str) -> String {
    match locale {
        Locale::EnUs => format!("What are the unique values of {column}?"),
        Locale::DeDe => format!("Welche verschiedenen Werte hat {column}?"),
    }
}

pub fn followup_count_rows(locale: Locale) -> String {
    match locale {
        Locale::EnUs => "How many rows are there?".into(),
        Locale::DeDe => "Wie viele Zeilen gibt es?".into(),
    }
}

pub fn followup_overview(locale: Locale) -> String {
    match locale {
        Locale::EnUs => "Give me an overview of the data.".into(),
        Locale::DeDe => "Gib mir einen Überblick über die Daten.".into(),
    }
}

fn trim_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
