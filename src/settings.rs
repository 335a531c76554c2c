//! Generator settings loaded from an optional TOML file
//!
//! Only the driver is configurable: where files go, how they are named and
//! how write failures are handled. Icon geometry and colors are fixed.
//!
//! ```toml
//! [output]
//! directory = "AppIcon.appiconset"
//! prefix = "icon"
//!
//! [svg]
//! pretty_print = true
//! comments = true
//!
//! [run]
//! keep_going = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::SvgConfig;

/// Errors that can occur when loading or parsing settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// What to do when one icon cannot be written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failed write and return its error
    #[default]
    Abort,
    /// Record the failure, write the remaining sizes, report at the end
    Continue,
}

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    /// Directory the icon files are written to
    pub output_dir: PathBuf,
    /// File name prefix, `icon` gives `icon-<size>.svg`
    pub prefix: String,
    pub failure_policy: FailurePolicy,
    pub svg: SvgConfig,
}

/// TOML structure for deserializing settings
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlSettings {
    output: Option<TomlOutput>,
    svg: Option<TomlSvg>,
    run: Option<TomlRun>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlOutput {
    directory: Option<PathBuf>,
    prefix: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlSvg {
    standalone: Option<bool>,
    pretty_print: Option<bool>,
    comments: Option<bool>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlRun {
    keep_going: Option<bool>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            prefix: "icon".to_string(),
            failure_policy: FailurePolicy::Abort,
            svg: SvgConfig::default(),
        }
    }
}

impl GeneratorSettings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string; missing keys keep their defaults
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        let parsed: TomlSettings = toml::from_str(content)?;
        let mut settings = Self::default();

        if let Some(output) = parsed.output {
            if let Some(dir) = output.directory {
                settings.output_dir = dir;
            }
            if let Some(prefix) = output.prefix {
                settings.prefix = prefix;
            }
        }

        if let Some(svg) = parsed.svg {
            if let Some(standalone) = svg.standalone {
                settings.svg.standalone = standalone;
            }
            if let Some(pretty) = svg.pretty_print {
                settings.svg.pretty_print = pretty;
            }
            if let Some(comments) = svg.comments {
                settings.svg.comments = comments;
            }
        }

        if let Some(run) = parsed.run {
            if run.keep_going == Some(true) {
                settings.failure_policy = FailurePolicy::Continue;
            }
        }

        Ok(settings)
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the file name prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the failure policy
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Set the SVG output configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = GeneratorSettings::default();
        assert_eq!(settings.output_dir, PathBuf::from("."));
        assert_eq!(settings.prefix, "icon");
        assert_eq!(settings.failure_policy, FailurePolicy::Abort);
        assert_eq!(settings.svg, SvgConfig::default());
    }

    #[test]
    fn test_empty_toml_keeps_defaults() {
        let settings = GeneratorSettings::from_str("").expect("Should parse");
        assert_eq!(settings, GeneratorSettings::default());
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[output]
directory = "AppIcon.appiconset"
prefix = "todo"

[svg]
standalone = false
pretty_print = false
comments = false

[run]
keep_going = true
"#;
        let settings = GeneratorSettings::from_str(toml_str).expect("Should parse");
        assert_eq!(settings.output_dir, PathBuf::from("AppIcon.appiconset"));
        assert_eq!(settings.prefix, "todo");
        assert_eq!(settings.failure_policy, FailurePolicy::Continue);
        assert!(!settings.svg.standalone);
        assert!(!settings.svg.pretty_print);
        assert!(!settings.svg.comments);
    }

    #[test]
    fn test_partial_toml() {
        let toml_str = r#"
[output]
prefix = "checklist"
"#;
        let settings = GeneratorSettings::from_str(toml_str).expect("Should parse");
        assert_eq!(settings.prefix, "checklist");
        assert_eq!(settings.output_dir, PathBuf::from("."));
        assert!(settings.svg.pretty_print);
    }

    #[test]
    fn test_colors_are_not_settings() {
        let toml_str = r##"
[colors]
accent = "#ff0000"
"##;
        assert!(matches!(
            GeneratorSettings::from_str(toml_str),
            Err(SettingsError::ParseError(_))
        ));
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        assert!(GeneratorSettings::from_str(invalid).is_err());
    }
}
