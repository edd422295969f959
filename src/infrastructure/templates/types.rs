//! Core template types for the infrastructure layer

use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use std::path::PathBuf;

/// Extension marking a file as a template to be rendered
pub const TEMPLATE_EXTENSION: &str = ".tmpl";

/// A loaded template set: manifest plus every file's contents
#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub manifest: TemplateManifest,
    pub files: Vec<TemplateFile>,
    /// Directory the set was loaded from
    pub source: PathBuf,
}

/// Template manifest
#[derive(Debug, Clone, Default)]
pub struct TemplateManifest {
    pub name: String,
    pub description: Option<String>,
    pub files: Vec<ManifestFile>,
    /// Default data context values, overridden by profile and generated content
    pub variables: Map<String, JsonValue>,
    /// Commands run in the output directory after writing (dependency install)
    pub post_generate: Vec<String>,
}

/// File entry in manifest
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestFile {
    pub source: String,
    pub destination: String,
    pub file_type: TemplateFileType,
}

/// How a file is turned into output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateFileType {
    /// Rendered through the template engine
    Template,
    /// Copied byte for byte
    Static,
}

impl TemplateFileType {
    /// `.tmpl` files are templates, everything else is static
    pub fn from_source(source: &str) -> Self {
        if source.ends_with(TEMPLATE_EXTENSION) {
            Self::Template
        } else {
            Self::Static
        }
    }
}

/// A single file of a template set
#[derive(Debug, Clone)]
pub struct TemplateFile {
    /// Path relative to the template directory
    pub source: PathBuf,
    /// Output path relative to the output directory; may contain placeholders
    pub destination: String,
    /// Raw bytes; static files need not be text
    pub contents: Vec<u8>,
    pub file_type: TemplateFileType,
}

/// Default destination for a source path: the source minus `.tmpl`
pub fn default_destination(source: &str) -> String {
    source
        .strip_suffix(TEMPLATE_EXTENSION)
        .unwrap_or(source)
        .to_string()
}
