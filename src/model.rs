use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::demos::DemoKind;

/// Render configuration, loaded from JSON and overridden by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PageConfig {
    /// Title of the generated page.
    #[serde(default = "default_page_title")]
    pub page_title: String,
    /// Id of the element that receives the sections.
    #[serde(default = "default_container_id")]
    pub container_id: String,
    /// Whether the page carries the container element at all.
    #[serde(default = "default_container")]
    pub container: bool,
    /// Insert section content as escaped text instead of trusted markup.
    #[serde(default)]
    pub escape_content: bool,
    /// Seed for the random demonstrations; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Fixed clock value (RFC 3339); the local clock when absent.
    #[serde(default)]
    pub now: Option<String>,
    /// Blocks to run; all of them when absent.
    #[serde(default)]
    pub sections: Option<Vec<DemoKind>>,
}

fn default_page_title() -> String {
    "Language Feature Primer".to_string()
}

fn default_container_id() -> String {
    "app".to_string()
}

fn default_container() -> bool {
    true
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_title: default_page_title(),
            container_id: default_container_id(),
            container: default_container(),
            escape_content: false,
            seed: None,
            now: None,
            sections: None,
        }
    }
}

/// Reasons a configuration is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("container id must not be empty")]
    EmptyContainerId,
    #[error("container id must not contain whitespace: {0:?}")]
    WhitespaceInContainerId(String),
    #[error("invalid clock value {value:?}: {reason}")]
    InvalidNow { value: String, reason: String },
    #[error("section list must not be empty")]
    EmptySections,
}

impl PageConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.container_id.is_empty() {
            return Err(ConfigError::EmptyContainerId);
        }
        if self.container_id.chars().any(char::is_whitespace) {
            return Err(ConfigError::WhitespaceInContainerId(
                self.container_id.clone(),
            ));
        }
        self.fixed_now()?;
        if matches!(&self.sections, Some(s) if s.is_empty()) {
            return Err(ConfigError::EmptySections);
        }
        Ok(())
    }

    /// Parsed `now`, if one was configured.
    pub fn fixed_now(&self) -> Result<Option<DateTime<FixedOffset>>, ConfigError> {
        self.now
            .as_deref()
            .map(|value| {
                DateTime::parse_from_rfc3339(value).map_err(|e| ConfigError::InvalidNow {
                    value: value.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    }

    /// Blocks to run, in run order regardless of how they were listed.
    pub fn selected_demos(&self) -> Vec<DemoKind> {
        match &self.sections {
            Some(selected) => DemoKind::ALL
                .into_iter()
                .filter(|kind| selected.contains(kind))
                .collect(),
            None => DemoKind::ALL.to_vec(),
        }
    }
}

/// Generate JSON Schema for the configuration file.
pub fn generate_schema() -> Result<String> {
    let schema = schemars::schema_for!(PageConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}

/// Load a configuration from a JSON file.
pub fn load_config(path: &std::path::Path) -> Result<PageConfig> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

/// Create a configuration from a JSON string.
pub fn from_json(json: &str) -> Result<PageConfig> {
    let config = serde_json::from_str(json)?;
    Ok(config)
}
