//! Shared configuration loader for md2html.
//!
//! `defaults/md2html.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`Md2HtmlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use md2html_babel::formats::html::HtmlOptions;
use md2html_babel::formats::markdown::{InlineOptions, ParseOptions, SyntaxOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/md2html.default.toml");

/// Name of the project-local configuration file picked up when present.
pub const LOCAL_CONFIG_FILE: &str = "md2html.toml";

/// Top-level configuration consumed by md2html applications.
#[derive(Debug, Clone, Deserialize)]
pub struct Md2HtmlConfig {
    pub syntax: SyntaxConfig,
    pub inline: InlineConfig,
    pub html: HtmlConfig,
}

impl Md2HtmlConfig {
    /// Options for the markdown parser.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            syntax: (&self.syntax).into(),
            inline: (&self.inline).into(),
        }
    }

    /// Options for the HTML serializer.
    pub fn html_options(&self) -> HtmlOptions {
        (&self.html).into()
    }
}

/// Line classification knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct SyntaxConfig {
    pub require_marker_space: bool,
}

impl From<&SyntaxConfig> for SyntaxOptions {
    fn from(config: &SyntaxConfig) -> Self {
        SyntaxOptions {
            require_marker_space: config.require_marker_space,
        }
    }
}

/// Mirrors the inline transform options.
#[derive(Debug, Clone, Deserialize)]
pub struct InlineConfig {
    pub hash_brackets: bool,
    pub strip_brackets: bool,
    pub bold_tag: String,
    pub emphasis_tag: String,
}

impl From<&InlineConfig> for InlineOptions {
    fn from(config: &InlineConfig) -> Self {
        InlineOptions {
            hash_brackets: config.hash_brackets,
            strip_brackets: config.strip_brackets,
            bold_tag: config.bold_tag.clone(),
            emphasis_tag: config.emphasis_tag.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub line_break: String,
    pub trailing_newline: bool,
}

impl From<&HtmlConfig> for HtmlOptions {
    fn from(config: &HtmlConfig) -> Self {
        HtmlOptions::default()
            .with_line_break(config.line_break.clone())
            .with_trailing_newline(config.trailing_newline)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<Md2HtmlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Md2HtmlConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(!config.syntax.require_marker_space);
        assert!(config.inline.hash_brackets);
        assert!(config.inline.strip_brackets);
        assert_eq!(config.inline.bold_tag, "b");
        assert_eq!(config.inline.emphasis_tag, "em");
        assert_eq!(config.html.line_break, "<br/>");
        assert!(!config.html.trailing_newline);
    }

    #[test]
    fn defaults_match_library_defaults() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.parse_options(), ParseOptions::default());
        assert_eq!(config.html_options(), HtmlOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("inline.bold_tag", "strong")
            .expect("override to apply")
            .set_override("html.trailing_newline", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.inline.bold_tag, "strong");
        assert!(config.html_options().trailing_newline);
    }

    #[test]
    fn file_layers_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("md2html.toml");
        fs::write(&path, "[syntax]\nrequire_marker_space = true\n").unwrap();

        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert!(config.syntax.require_marker_space);
        // Untouched keys keep their defaults.
        assert_eq!(config.inline.emphasis_tag, "em");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Loader::new().with_file(dir.path().join("absent.toml")).build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let config = Loader::new()
            .with_optional_file(dir.path().join("absent.toml"))
            .build()
            .expect("config to build");
        assert_eq!(config.html.line_break, "<br/>");
    }

    #[test]
    fn inline_config_converts_to_inline_options() {
        let config = load_defaults().expect("defaults to deserialize");
        let options: InlineOptions = (&config.inline).into();
        assert_eq!(options, InlineOptions::default());
    }
}
