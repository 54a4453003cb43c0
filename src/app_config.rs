use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::file_utils::FileManager;
use crate::normalizer::{NormalizeOptions, RuleSpec, RuleTable};
use crate::subtitle_processor::DEFAULT_STYLE;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Normalization settings
    #[serde(default)]
    pub normalization: NormalizationConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings passed to the normalizer
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NormalizationConfig {
    // @field: Style given to every dialogue line
    #[serde(default = "default_target_style")]
    pub target_style: String,

    // @field: Ruby/furigana style to drop
    #[serde(default = "default_annotation_style")]
    pub annotation_style: String,

    // @field: Actor value on split lines
    #[serde(default = "default_split_marker")]
    pub split_marker: String,

    // @field: Separator for co-timed lines
    #[serde(default = "default_merge_separator")]
    pub merge_separator: String,

    // @field: Extra rules run after the built-in final table
    #[serde(default)]
    pub extra_rules: Vec<RuleSpec>,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            target_style: default_target_style(),
            annotation_style: default_annotation_style(),
            split_marker: default_split_marker(),
            merge_separator: default_merge_separator(),
            extra_rules: Vec::new(),
        }
    }
}

impl NormalizationConfig {
    // @returns: Pipeline options from this config
    pub fn to_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            target_style: self.target_style.clone(),
            annotation_style: self.annotation_style.clone(),
            split_marker: self.split_marker.clone(),
            merge_separator: self.merge_separator.clone(),
        }
    }
}

/// Output file settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Inserted before the extension: `episode.<suffix>.ass`
    #[serde(default = "default_output_suffix")]
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: default_output_suffix(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_target_style() -> String {
    DEFAULT_STYLE.to_string()
}

fn default_annotation_style() -> String {
    "Rubi".to_string()
}

fn default_split_marker() -> String {
    "split".to_string()
}

fn default_merge_separator() -> String {
    "\u{3000}".to_string()
}

fn default_output_suffix() -> String {
    "normalized".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let normalization = &self.normalization;

        if normalization.target_style.trim().is_empty() {
            return Err(anyhow!("Target style must not be empty"));
        }

        if normalization.annotation_style == normalization.target_style {
            return Err(anyhow!(
                "Annotation style '{}' cannot also be the target style",
                normalization.annotation_style
            ));
        }

        if self.output.suffix.contains(['/', '\\']) {
            return Err(anyhow!("Output suffix must not contain path separators: {}", self.output.suffix));
        }

        // Surface a bad rule before any file is touched
        RuleTable::from_specs("extra", &normalization.extra_rules)
            .context("Invalid extra rule in configuration")?;

        Ok(())
    }

    /// Load a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        FileManager::write_to_file(path, &json)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            normalization: NormalizationConfig::default(),
            output: OutputConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
