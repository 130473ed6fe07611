//! Configuration loading and management
//!
//! The exposure config carries per-resource overrides for page size and the
//! default sparse fieldset. Anything not configured falls back to the
//! [`Resource`](crate::core::Resource) trait defaults.

use crate::core::error::{ConfigError, VitrineError};
use serde::{Deserialize, Serialize};

/// Exposure overrides for one resource type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceExposure {
    /// Singular resource name this entry applies to (e.g., "person")
    pub name: String,

    /// Page size for list responses
    #[serde(default)]
    pub per_page: Option<usize>,

    /// Field paths selected when a request names none
    #[serde(default)]
    pub default_fields: Option<Vec<String>>,
}

/// Complete exposure configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExposureConfig {
    /// Per-resource overrides
    #[serde(default)]
    pub resources: Vec<ResourceExposure>,
}

impl ExposureConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, VitrineError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, VitrineError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        Ok(config)
    }

    /// Look up the overrides for a resource by its singular name
    pub fn resource(&self, name: &str) -> Option<&ResourceExposure> {
        self.resources.iter().find(|r| r.name == name)
    }
}
