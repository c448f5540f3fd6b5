use std::fmt;

/// Output language for answers, explanations, and follow-up questions.
///
/// The engine never guesses: hosts resolve any "auto" setting to a concrete
/// locale before calling in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    EnUs,
    DeDe,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::EnUs, Locale::DeDe];

    /// Parse a BCP 47-ish tag. Accepts "en-US", "en_us", "en", case-insensitive.
    pub fn parse(tag: &str) -> Option<Locale> {
        let normalized = tag.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "en-us" | "en" => Some(Locale::EnUs),
            "de-de" | "de" => Some(Locale::DeDe),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::DeDe => "de-DE",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_tag_variants() {
        assert_eq!(Locale::parse("en-US"), Some(Locale::EnUs));
        assert_eq!(Locale::parse("EN_us"), Some(Locale::EnUs));
        assert_eq!(Locale::parse("de"), Some(Locale::DeDe));
        assert_eq!(Locale::parse("fr-FR"), None);
    }

    #[test]
    fn tag_round_trips() {
        for locale in Locale::ALL {
            assert_eq!(Locale::parse(locale.tag()), Some(locale));
        }
    }
}
