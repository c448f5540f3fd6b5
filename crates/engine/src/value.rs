use chrono::NaiveDate;
use serde::ser::Serializer;
use serde::Serialize;

/// A single cell value. Sheets are sparse; a missing cell reads as `Null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl Value {
    /// Type a raw text token the way cells are typed on entry: empty input
    /// becomes `Null`, a full numeric token becomes `Number`, a recognizable
    /// date becomes `Date`, everything else stays `Text`.
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Value::Null;
        }

        if let Ok(num) = trimmed.parse::<f64>() {
            if !num.is_nan() {
                return Value::Number(num);
            }
        }

        for format in ["%Y-%m-%d", "%d.%m.%Y", "%m/%d/%Y"] {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Value::Date(date);
            }
        }

        Value::Text(trimmed.to_string())
    }

    /// Numeric coercion shared by every handler: a cell is "numeric" iff this
    /// returns `Some`. Text must parse as a whole token; dates never coerce.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) if !n.is_nan() => Some(*n),
            Value::Text(s) => s.trim().parse::<f64>().ok().filter(|n| !n.is_nan()),
            _ => None,
        }
    }

    /// Null or empty text. Whitespace-only text is not empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Null) || matches!(self, Value::Text(s) if s.is_empty())
    }

    /// Display form used for answers and search comparison.
    /// Whole numbers render without decimals.
    pub fn display(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Text(s) => s.clone(),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Date(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_input_types_numbers_dates_text() {
        assert_eq!(Value::from_input("42"), Value::Number(42.0));
        assert_eq!(Value::from_input(" -3.5 "), Value::Number(-3.5));
        assert_eq!(
            Value::from_input("2026-01-15"),
            Value::Date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap())
        );
        assert_eq!(
            Value::from_input("15.01.2026"),
            Value::Date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap())
        );
        assert_eq!(Value::from_input("hello"), Value::Text("hello".into()));
        assert_eq!(Value::from_input("   "), Value::Null);
    }

    #[test]
    fn as_number_coerces_text_but_not_dates() {
        assert_eq!(Value::Number(2.5).as_number(), Some(2.5));
        assert_eq!(Value::Text("17".into()).as_number(), Some(17.0));
        assert_eq!(Value::Text(" 17 ".into()).as_number(), Some(17.0));
        assert_eq!(Value::Text("abc".into()).as_number(), None);
        assert_eq!(Value::Text("12abc".into()).as_number(), None);
        assert_eq!(Value::Null.as_number(), None);
        let date = Value::Date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
        assert_eq!(date.as_number(), None);
    }

    #[test]
    fn nan_text_is_not_numeric() {
        assert_eq!(Value::Text("NaN".into()).as_number(), None);
    }

    #[test]
    fn is_empty_covers_null_and_empty_text() {
        assert!(Value::Null.is_empty());
        assert!(Value::Text(String::new()).is_empty());
        assert!(!Value::Text(" ".into()).is_empty());
        assert!(!Value::Number(0.0).is_empty());
    }

    #[test]
    fn display_drops_trailing_zeros_on_whole_numbers() {
        assert_eq!(Value::Number(48.0).display(), "48");
        assert_eq!(Value::Number(2.25).display(), "2.25");
        assert_eq!(Value::Null.display(), "");
    }
}
