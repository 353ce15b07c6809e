//! File-based format configuration (YAML or JSON)
//!
//! Supports a user-level file (~/.config/preformat/formats.yaml) and
//! explicit paths. Files ending in `.json` are read as JSON, everything
//! else as YAML.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::debug_log;
use crate::error::{PreformatError, PreformatResult};
use crate::format::FormatTable;
use crate::logger::Preformat;
use crate::render::UtilRenderer;
use crate::types::{FormatRule, Value};

/// Format configuration file structure
///
/// ```yaml
/// colors: false
/// formats:
///   default: "[app]"
///   error: ["[app]", "ERROR"]
///   success: "<DONE>"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FormatConfig {
    /// Rule per mode: a scalar or a list of scalars
    #[serde(default)]
    pub formats: BTreeMap<String, JsonValue>,

    /// Whether inspected values carry ANSI colors (default: true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<bool>,
}

impl FormatConfig {
    /// Create an empty config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rule for a mode
    pub fn with_format(mut self, mode: impl Into<String>, rule: impl Into<JsonValue>) -> Self {
        self.formats.insert(mode.into(), rule.into());
        self
    }

    /// Set whether inspected values are colored
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Parse a YAML document
    pub fn from_yaml_str(content: &str) -> PreformatResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(content: &str) -> PreformatResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_yaml_string(&self) -> PreformatResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json_string(&self) -> PreformatResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Path of the user-level config file (~/.config/preformat/formats.yaml)
    pub fn user_path() -> PathBuf {
        // XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("preformat").join("formats.yaml")
    }

    /// Load the user-level config file
    pub fn load_user() -> PreformatResult<Self> {
        Self::load(Self::user_path())
    }

    /// Load config from a file; a missing file yields an empty config
    pub fn load(path: impl AsRef<Path>) -> PreformatResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug_log!("no format config at {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = if is_json(path) {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };
        debug_log!(
            "loaded {} format rule(s) from {}",
            config.formats.len(),
            path.display()
        );
        Ok(config)
    }

    /// Save config to a file, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> PreformatResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = if is_json(path) {
            self.to_json_string()?
        } else {
            self.to_yaml_string()?
        };
        fs::write(path, content)?;
        Ok(())
    }

    /// Convert the configured rules into a format table
    ///
    /// Lists become sequence rules. Objects, and lists containing lists or
    /// objects, are rejected.
    pub fn to_table(&self) -> PreformatResult<FormatTable> {
        let mut table = FormatTable::new();
        for (mode, rule) in &self.formats {
            table.insert(mode.clone(), parse_rule(mode, rule)?);
        }
        Ok(table)
    }

    /// Build a logger from this config
    pub fn build(&self) -> PreformatResult<Preformat> {
        let renderer = UtilRenderer::new(self.colors.unwrap_or(true));
        Ok(Preformat::new(self.to_table()?).with_renderer(renderer))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn parse_rule(mode: &str, rule: &JsonValue) -> PreformatResult<FormatRule> {
    match rule {
        JsonValue::Object(_) => Err(PreformatError::invalid_rule(
            mode,
            "expected a scalar or a list of scalars, found an object",
        )),
        JsonValue::Array(items) => {
            if items
                .iter()
                .any(|item| matches!(item, JsonValue::Array(_) | JsonValue::Object(_)))
            {
                return Err(PreformatError::invalid_rule(
                    mode,
                    "list rules may only contain scalars",
                ));
            }
            Ok(FormatRule::Sequence(items.iter().cloned().map(Value::from).collect()))
        }
        scalar => Ok(FormatRule::Literal(Value::from(scalar.clone()))),
    }
}
