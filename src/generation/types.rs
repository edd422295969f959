//! Core types for the generation domain

use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};
use std::path::PathBuf;

use crate::generation::DataContext;
use crate::generation::utils::{to_camel_case, to_kebab_case, to_snake_case};

/// A generated file ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    /// Path relative to the output directory until the use case joins it
    pub path: PathBuf,
    pub content: Vec<u8>,
    /// Unix mode bits to apply after writing
    pub permissions: Option<u32>,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            permissions: None,
        }
    }

    /// Content as text, if it is valid UTF-8
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }
}

/// Output of a generation run
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub artifacts: Vec<Artifact>,
    pub post_generate: Vec<String>,
}

/// The user-supplied description of the demo being scaffolded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemoProfile {
    pub project_name: String,
    pub company_name: String,
    pub industry: String,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub traits: Vec<String>,
}

impl DemoProfile {
    /// Base data context for rendering.
    ///
    /// Besides the raw fields this adds `project_slug`, `company_slug`, and
    /// `event_defs` / `trait_defs`: one mapping per name with `name`, `key`
    /// (snake_case) and `method` (camelCase) for use in section bodies.
    pub fn to_context(&self) -> DataContext {
        let mut context = DataContext::new();
        context.add_variable("project_name", json!(self.project_name));
        context.add_variable("project_slug", json!(to_kebab_case(&self.project_name)));
        context.add_variable("company_name", json!(self.company_name));
        context.add_variable("company_slug", json!(to_kebab_case(&self.company_name)));
        context.add_variable("industry", json!(self.industry));
        context.add_variable("events", json!(self.events));
        context.add_variable("traits", json!(self.traits));
        context.add_variable("event_defs", name_defs(&self.events));
        context.add_variable("trait_defs", name_defs(&self.traits));
        context
    }
}

fn name_defs(names: &[String]) -> JsonValue {
    JsonValue::Array(
        names
            .iter()
            .map(|name| {
                json!({
                    "name": name,
                    "key": to_snake_case(name),
                    "method": to_camel_case(name),
                })
            })
            .collect(),
    )
}
