//! Manifest parsing for template sets
//!
//! A manifest (`manifest.yml` or `manifest.yaml`) lists the files of a
//! template set, where each one goes, default variables, and the commands
//! that install the generated app's dependencies.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value as JsonValue};
use serde_value::Value as SerdeValue;
use std::path::{Component, Path};

use crate::infrastructure::templates::{
    ManifestFile, TemplateError, TemplateFileType, TemplateManifest, default_destination,
};

/// File names probed, in order, for a manifest
pub const MANIFEST_FILE_NAMES: [&str; 2] = ["manifest.yml", "manifest.yaml"];

/// Internal representation matching the manifest YAML structure
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ManifestData {
    /// The name of the template set
    #[serde(default)]
    pub name: Option<String>,
    /// A short description of what the template set generates
    #[serde(default)]
    pub description: Option<String>,
    /// Files to process
    #[serde(default)]
    pub files: Vec<ManifestFileData>,
    /// Default data context values
    #[serde(default)]
    pub variables: Map<String, JsonValue>,
    #[serde(default)]
    pub hooks: ManifestHooks,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ManifestFileData {
    /// Path to the file, relative to the template directory
    pub source: String,
    /// Output path relative to the output directory (defaults to source minus `.tmpl`)
    #[serde(default)]
    pub destination: Option<String>,
    /// Explicit `template` or `static` (defaults by extension)
    #[serde(default)]
    pub kind: Option<TemplateFileType>,
}

/// Hooks that run at specific points during scaffolding
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ManifestHooks {
    /// Commands to run after files are written
    #[serde(default, deserialize_with = "deserialize_commands")]
    pub post_generate: Vec<String>,
}

impl ManifestData {
    /// Convert the raw manifest data into the domain model
    pub fn into_domain_model(self, fallback_name: &str) -> Result<TemplateManifest, TemplateError> {
        let files = self
            .files
            .into_iter()
            .map(|f| {
                if !is_contained(&f.source) {
                    return Err(TemplateError::invalid_manifest(format!(
                        "source escapes the template directory: {}",
                        f.source
                    )));
                }
                Ok(ManifestFile {
                    destination: f
                        .destination
                        .unwrap_or_else(|| default_destination(&f.source)),
                    file_type: f
                        .kind
                        .unwrap_or_else(|| TemplateFileType::from_source(&f.source)),
                    source: f.source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TemplateManifest {
            name: self.name.unwrap_or_else(|| fallback_name.to_string()),
            description: self.description,
            files,
            variables: self.variables,
            post_generate: self.hooks.post_generate,
        })
    }
}

/// Parse manifest YAML content into the domain model
pub fn parse_manifest_yaml(
    content: &str,
    fallback_name: &str,
) -> Result<TemplateManifest, TemplateError> {
    let manifest_data: ManifestData = serde_yaml::from_str(content).map_err(|e| {
        TemplateError::InvalidManifest(format!("Failed to parse manifest YAML: {}", e))
    })?;

    manifest_data.into_domain_model(fallback_name)
}

fn is_contained(source: &str) -> bool {
    let path = Path::new(source);
    path.components().next().is_some()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Helper function to deserialize either a single command or a list of commands
fn deserialize_commands<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = SerdeValue::deserialize(deserializer)?;

    match value {
        SerdeValue::String(s) => Ok(vec![s]),
        SerdeValue::Seq(seq) => {
            let mut result = Vec::new();
            for item in seq {
                if let SerdeValue::String(s) = item {
                    result.push(s);
                } else {
                    return Err(serde::de::Error::custom(
                        "Expected string or array of strings",
                    ));
                }
            }
            Ok(result)
        }
        _ => Err(serde::de::Error::custom(
            "Expected string or array of strings",
        )),
    }
}
