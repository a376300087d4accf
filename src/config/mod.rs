//! Configuration with YAML schema and validation.
//!
//! The only tunable is the switch count. It lives here as an explicit value
//! handed to the orchestrator rather than as module state, so a run can be
//! driven from code, from a YAML file, or from the command line.
//!
//! Mistake-proofing happens in three layers:
//! - serde rejects unknown fields and wrong types
//! - `validator` checks schema constraints
//! - semantic validation rejects negative switch counts

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::engine::SwitchCount;
use crate::error::{SwitchError, SwitchResult};

/// Switch count used when none is configured.
pub const DEFAULT_SWITCHES: i64 = 1000;

/// Top-level puzzle configuration.
///
/// ```yaml
/// schema_version: "1.0"
/// switches: 1000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PuzzleConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Number of switches (and passes). Signed so that negative input is
    /// reported as invalid input instead of a type error.
    #[serde(default = "default_switches")]
    pub switches: i64,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

const fn default_switches() -> i64 {
    DEFAULT_SWITCHES
}

impl PuzzleConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> SwitchResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> SwitchResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> PuzzleConfigBuilder {
        PuzzleConfigBuilder::default()
    }

    fn validate_semantic(&self) -> SwitchResult<()> {
        self.switch_count().map(|_| ())
    }

    /// Validated switch count.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::InvalidInput`] if the configured count is negative.
    pub fn switch_count(&self) -> SwitchResult<SwitchCount> {
        SwitchCount::try_from(self.switches)
    }

    /// Serialize back to YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> SwitchResult<String> {
        serde_yaml::to_string(self).map_err(|e| SwitchError::serialization(e.to_string()))
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            switches: DEFAULT_SWITCHES,
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct PuzzleConfigBuilder {
    switches: Option<i64>,
}

impl PuzzleConfigBuilder {
    /// Set the switch count.
    #[must_use]
    pub const fn switches(mut self, switches: i64) -> Self {
        self.switches = Some(switches);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> PuzzleConfig {
        let mut config = PuzzleConfig::default();
        if let Some(switches) = self.switches {
            config.switches = switches;
        }
        config
    }
}
