//! Scaffold configuration file (`demogen.toml`)
//!
//! ```toml
//! template_dir = "templates/saas-landing"
//! output_dir = "out"
//! skip_install = false
//!
//! [generator]
//! endpoint = "https://content.example.com/v1/generate"
//! model = "demo-writer"
//! timeout_secs = 30
//! ```
//!
//! Every value can be overridden on the command line.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::application::ApplicationError;
use crate::infrastructure::GeneratorConfig;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "demogen.toml";

/// Environment variable holding the content service API key
pub const API_KEY_ENV: &str = "DEMOGEN_API_KEY";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaffoldConfig {
    #[serde(default)]
    pub template_dir: Option<PathBuf>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub skip_install: bool,
    /// Content service; built-in content is used when absent
    #[serde(default)]
    pub generator: Option<GeneratorConfig>,
}

impl ScaffoldConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ApplicationError> {
        toml::from_str(content).map_err(|e| ApplicationError::ConfigError(e.to_string()))
    }

    /// Load configuration from a file
    pub async fn load(path: &Path) -> Result<Self, ApplicationError> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            ApplicationError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Load `explicit` if given, else `demogen.toml` in `working_dir` if it
    /// exists, else defaults
    pub async fn discover(
        explicit: Option<&Path>,
        working_dir: &Path,
    ) -> Result<Self, ApplicationError> {
        if let Some(path) = explicit {
            return Self::load(path).await;
        }

        let default_path = working_dir.join(DEFAULT_CONFIG_FILE);
        if tokio::fs::try_exists(&default_path).await? {
            tracing::debug!(path = %default_path.display(), "Using config file");
            Self::load(&default_path).await
        } else {
            Ok(Self::default())
        }
    }
}
