//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Record checked when no path is given on the command line
pub const DEFAULT_RECORD: &str = "SampleCar.yaml";

/// cardiag configuration with layered hierarchy
///
/// Only presentation and input selection are configurable. Part quotas and
/// the working-condition whitelist are fixed.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format (text, json, yaml)
    pub default_format: Option<String>,

    /// Record file to check when no path is given
    pub record: Option<PathBuf>,

    /// Keep checking remaining records after a failing one
    pub keep_going: Option<bool>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/cardiag/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::read_file(&global_path) {
                config.merge(global);
            }
        }

        // 3. Working-directory config (.cardiag/config.yaml)
        if let Some(local) = Self::read_file(&Self::local_config_path()) {
            config.merge(local);
        }

        // 4. Environment variables
        config.apply_env(|key| std::env::var(key).ok());

        config
    }

    /// Read one config file, ignoring missing or malformed files
    pub fn read_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                None
            }
        }
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "cardiag")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    fn local_config_path() -> PathBuf {
        PathBuf::from(".cardiag").join("config.yaml")
    }

    /// Apply `CARDIAG_*` environment overrides through a lookup function
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(format) = lookup("CARDIAG_FORMAT") {
            self.default_format = Some(format);
        }
        if let Some(record) = lookup("CARDIAG_RECORD") {
            self.record = Some(PathBuf::from(record));
        }
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
        if other.record.is_some() {
            self.record = other.record;
        }
        if other.keep_going.is_some() {
            self.keep_going = other.keep_going;
        }
    }

    /// Record path to check when none is given
    pub fn record(&self) -> PathBuf {
        self.record
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RECORD))
    }

    pub fn keep_going(&self) -> bool {
        self.keep_going.unwrap_or(false)
    }
}
