use std::path::PathBuf;

use serde::Deserialize;

/// Optional user settings from `<config_dir>/sheetsage/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    /// Locale used when `--locale auto` is given, before detection runs.
    pub default_locale: Option<String>,
    /// How many data rows to print in text output.
    pub display_rows: Option<usize>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sheetsage").join("config.toml"))
}

/// Load settings, falling back to defaults on a missing or malformed file.
/// A malformed file is noted on stderr, never an abort.
pub fn load() -> CliConfig {
    let Some(path) = config_path() else {
        return CliConfig::default();
    };
    let Ok(content) = std::fs::read_to_string(&path) else {
        return CliConfig::default();
    };
    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("note: ignoring malformed config at {}: {e}", path.display());
            CliConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_fields() {
        let config: CliConfig =
            toml::from_str("default_locale = \"de-DE\"\ndisplay_rows = 5\n").unwrap();
        assert_eq!(config.default_locale.as_deref(), Some("de-DE"));
        assert_eq!(config.display_rows, Some(5));
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert!(config.default_locale.is_none());
        assert!(config.display_rows.is_none());
    }
}
