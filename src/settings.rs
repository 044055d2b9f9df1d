//! Settings loaded from TOML.
//!
//! Defaults are embedded via `include_str!("default_settings.toml")`;
//! `Settings::from_file` replaces them with a user-supplied file.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::puzzle::PuzzleConfig;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub search: SearchSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    pub verbose: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub not_found: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Settings {
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        parse_settings_toml(&fs::read_to_string(path)?)
    }

    pub fn puzzle_config(&self) -> PuzzleConfig {
        PuzzleConfig {
            verbose: self.search.verbose,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("embedded settings TOML must be valid")
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.output.not_found.trim().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "output.not_found".to_string(),
            reason: "must not be blank".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert!(!s.search.verbose);
        assert_eq!(s.output.format, OutputFormat::Text);
        assert_eq!(s.output.not_found, "False");
        assert_eq!(s.puzzle_config(), PuzzleConfig::default());
    }

    #[test]
    fn default_reads_embedded_toml() {
        let d = Settings::default();
        let embedded = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(d.search.verbose, embedded.search.verbose);
        assert_eq!(d.output.format, embedded.output.format);
        assert_eq!(d.output.not_found, embedded.output.not_found);
        assert!(DEFAULT_SETTINGS_TOML.contains(&format!("not_found = \"{}\"", d.output.not_found)));
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[search]
verbose = true

[output]
format = "json"
not_found = "-"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!(s.puzzle_config().verbose);
        assert_eq!(s.output.format, OutputFormat::Json);
        assert_eq!(s.output.not_found, "-");
    }

    #[test]
    fn error_blank_not_found() {
        let toml = r#"
[search]
verbose = false

[output]
format = "text"
not_found = "  "
"#;
        match parse_settings_toml(toml) {
            Err(SettingsError::InvalidValue { field, .. }) => {
                assert_eq!(field, "output.not_found");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn error_unknown_format() {
        let toml = r#"
[search]
verbose = false

[output]
format = "xml"
not_found = "False"
"#;
        assert!(matches!(
            parse_settings_toml(toml),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn error_missing_section() {
        assert!(matches!(
            parse_settings_toml("[search]\nverbose = true\n"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordgrid.toml");
        fs::write(&path, DEFAULT_SETTINGS_TOML.replace("\"False\"", "\"no\"")).unwrap();
        let s = Settings::from_file(&path).unwrap();
        assert_eq!(s.output.not_found, "no");
    }

    #[test]
    fn from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Settings::from_file(&dir.path().join("absent.toml")),
            Err(SettingsError::Io(_))
        ));
    }
}
